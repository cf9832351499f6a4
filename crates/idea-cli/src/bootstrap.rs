use anyhow::Context;
use idea_config::IdeaConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<IdeaConfig> {
    let mut config = IdeaConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(store) = &flags.store {
        config.store.path.clone_from(store);
        config
            .validate()
            .context("invalid --store path")?;
    }

    tracing::debug!(
        store = %config.store.path,
        model = %config.gemini.model,
        "configuration loaded"
    );
    Ok(config)
}
