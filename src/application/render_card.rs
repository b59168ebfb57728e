//! Render one context file use case

use crate::domain::{load_labels, TwitterCardBuilder};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::path::Path;

/// Service for rendering the tag block of a single page context
pub struct RenderCardService {
    repository: FileSystemRepository,
}

impl RenderCardService {
    /// Create a new render service
    pub fn new(repository: FileSystemRepository) -> Self {
        RenderCardService { repository }
    }

    /// Render the meta tags for one context file.
    /// `handle_override` replaces the configured handle for this render.
    pub fn execute(&self, context_path: &Path, handle_override: Option<&str>) -> Result<String> {
        let config = self.repository.load_config()?;
        let context = FileSystemRepository::read_context(context_path)?;
        let labels = load_labels(self.repository.root(), &config.locale)?;

        let handle = handle_override.or(config.social_handle.as_deref());
        let builder = TwitterCardBuilder::new(&labels, handle, config.base_url.as_deref());

        Ok(builder.build(&context))
    }
}
