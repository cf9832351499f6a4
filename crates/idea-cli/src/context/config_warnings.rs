use std::path::Path;

use idea_config::{IdeaConfig, PROJECT_CONFIG_PATH};

/// Emit warnings for likely mistyped env var keys that silently fell back to
/// defaults, and for a credential sitting in the project config file.
pub fn warn_unconfigured(config: &IdeaConfig) {
    let project_key = IdeaConfig::file_sets_api_key(Path::new(PROJECT_CONFIG_PATH));
    for warning in collect_unconfigured_warnings(config, std::env::vars(), project_key) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &IdeaConfig, env: I, project_key: bool) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if project_key {
        warnings.push(format!(
            "{PROJECT_CONFIG_PATH} sets gemini.api_key. Keep the key out of version control: \
             move it to GEMINI_API_KEY or IDEAFLOW_GEMINI__API_KEY."
        ));
    }

    if !config.gemini.is_configured() {
        if let Some(key) = keys
            .iter()
            .find(|key| key.starts_with("IDEAFLOW_GEMINI") && !key.starts_with("IDEAFLOW_GEMINI__"))
        {
            warnings.push(format!(
                "{key} is set but Gemini is not configured. \
                 Use double underscores (example: IDEAFLOW_GEMINI__API_KEY)."
            ));
        }
    }

    if let Some(key) = keys
        .iter()
        .find(|key| key.starts_with("IDEAFLOW_STORE") && !key.starts_with("IDEAFLOW_STORE__"))
    {
        warnings.push(format!(
            "{key} is ignored. Use double underscores (example: IDEAFLOW_STORE__PATH)."
        ));
    }

    warnings
}
