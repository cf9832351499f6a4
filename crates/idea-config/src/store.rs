//! Idea store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("ideas_db.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the JSON ideas file, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
