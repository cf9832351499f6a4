//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use std::path::Path;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use idea_config::{ConfigError, IdeaConfig, PROJECT_CONFIG_PATH};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "data/ideas.json"

[gemini]
api_key = "toml-key"
base_url = "http://localhost:9999/v1beta"
model = "gemini-test"
timeout_secs = 30

[general]
default_limit = 5
"#,
        )?;

        let config: IdeaConfig = Figment::from(Serialized::defaults(IdeaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.path, "data/ideas.json");
        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.base_url, "http://localhost:9999/v1beta");
        assert_eq!(config.gemini.model, "gemini-test");
        assert_eq!(config.gemini.timeout_secs, 30);
        assert_eq!(config.general.default_limit, 5);
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
model = "gemini-other"
"#,
        )?;

        let config: IdeaConfig = Figment::from(Serialized::defaults(IdeaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.model, "gemini-other");
        assert_eq!(config.gemini.timeout_secs, 15);
        assert_eq!(config.store.path, "ideas_db.json");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ideaflow")?;
        jail.create_file(
            ".ideaflow/config.toml",
            r#"
[store]
path = "project-ideas.json"
"#,
        )?;

        let config = IdeaConfig::load().expect("config loads");
        assert_eq!(config.store.path, "project-ideas.json");
        Ok(())
    });
}

#[test]
fn invalid_timeout_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[gemini]
timeout_secs = 0
",
        )?;

        let figment = Figment::from(Serialized::defaults(IdeaConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = IdeaConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "gemini.timeout_secs"
        ));
        Ok(())
    });
}

#[test]
fn api_key_in_project_file_is_detected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ideaflow")?;
        jail.create_file(
            PROJECT_CONFIG_PATH,
            r#"
[gemini]
api_key = "committed-key"
"#,
        )?;
        jail.create_file(
            "clean.toml",
            r#"
[gemini]
model = "gemini-other"
"#,
        )?;

        assert!(IdeaConfig::file_sets_api_key(Path::new(PROJECT_CONFIG_PATH)));
        assert!(!IdeaConfig::file_sets_api_key(Path::new("clean.toml")));
        assert!(!IdeaConfig::file_sets_api_key(Path::new("missing.toml")));
        Ok(())
    });
}
