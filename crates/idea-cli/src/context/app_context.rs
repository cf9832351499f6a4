use anyhow::Context;
use idea_config::IdeaConfig;
use idea_store::IdeaService;

/// Resources shared by every command handler.
pub struct AppContext {
    pub service: IdeaService,
    pub config: IdeaConfig,
}

impl AppContext {
    /// Open the ideas file named by the configuration.
    pub fn init(config: IdeaConfig) -> anyhow::Result<Self> {
        let path = config.store.path_buf();
        let service = IdeaService::open(&path)
            .with_context(|| format!("failed to open ideas file {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = service.len(), "store opened");
        Ok(Self { service, config })
    }
}
