//! Site configuration management

use crate::error::{CardmetaError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Handle rendered into `twitter:creator` on topic pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
    /// Fallback image URL the host substitutes when a page has no image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Locale used to pick the label catalog
    #[serde(default = "default_locale")]
    pub locale: String,
    pub created: DateTime<Utc>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl SiteConfig {
    /// Create a new config with default values
    pub fn new(social_handle: Option<String>, base_url: Option<String>) -> Self {
        SiteConfig {
            social_handle,
            base_url,
            locale: default_locale(),
            created: Utc::now(),
        }
    }

    /// Load config from .cardmeta/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".cardmeta").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CardmetaError::NotSiteDirectory(path.to_path_buf())
            } else {
                CardmetaError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| CardmetaError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .cardmeta/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(".cardmeta");
        let config_path = meta_dir.join("config.toml");

        // Ensure .cardmeta directory exists
        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CardmetaError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
