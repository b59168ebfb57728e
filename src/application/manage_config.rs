//! Config management use case

use crate::domain::handle;
use crate::error::{CardmetaError, Result};
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};

/// Service for managing site configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "social_handle" => Ok(config.social_handle.unwrap_or_default()),
            "base_url" => Ok(config.base_url.unwrap_or_default()),
            "locale" => Ok(config.locale),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CardmetaError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: social_handle, base_url, locale, created",
                key
            ))),
        }
    }

    /// Set a config value. An empty value clears the optional keys.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "social_handle" => {
                if value.is_empty() {
                    config.social_handle = None;
                } else {
                    if !handle::is_valid(value) {
                        return Err(CardmetaError::Config(format!(
                            "Invalid handle: '{}'",
                            value
                        )));
                    }
                    config.social_handle = Some(value.to_string());
                }
            }
            "base_url" => {
                if value.is_empty() {
                    config.base_url = None;
                } else {
                    config.base_url = Some(value.to_string());
                }
            }
            "locale" => {
                if value.is_empty() {
                    return Err(CardmetaError::Config(
                        "Locale cannot be empty".to_string(),
                    ));
                }
                config.locale = value.to_string();
            }
            "created" => {
                return Err(CardmetaError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(CardmetaError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: social_handle, base_url, locale",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<SiteConfig> {
        self.repository.load_config()
    }
}
