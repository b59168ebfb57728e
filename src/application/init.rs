//! Initialize site use case

use crate::domain::handle;
use crate::error::{CardmetaError, Result};
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new cardmeta site at the specified path.
pub fn init(path: &Path, social_handle: Option<String>, base_url: Option<String>) -> Result<()> {
    if let Some(raw) = &social_handle {
        if !handle::is_valid(raw) {
            return Err(CardmetaError::Config(format!("Invalid handle: '{}'", raw)));
        }
    }

    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .cardmeta directory
    repo.initialize()?;

    // Create and save default config
    let config = SiteConfig::new(social_handle, base_url);
    repo.save_config(&config)?;

    println!("Initialized cardmeta site at {}", path.display());
    if let Some(handle) = &config.social_handle {
        println!("Handle: {}", handle);
    }

    Ok(())
}
