//! Render all context files use case

use crate::domain::{load_labels, PageKind, TwitterCardBuilder};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::fs;
use std::path::Path;

/// What happened to one context file during a batch render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub source: String,
    pub output: String,
    pub kind: PageKind,
    pub tag_count: usize,
}

/// Service for rendering every context file under the site root
pub struct RenderBatchService {
    repository: FileSystemRepository,
}

impl RenderBatchService {
    /// Create a new batch render service
    pub fn new(repository: FileSystemRepository) -> Self {
        RenderBatchService { repository }
    }

    /// Render every discovered context file into a `.meta.html` fragment.
    /// Fragments land next to their sources, or under `out_dir` (with the
    /// same relative layout) when given.
    pub fn execute(&self, out_dir: Option<&Path>) -> Result<Vec<BatchOutcome>> {
        let config = self.repository.load_config()?;
        let labels = load_labels(self.repository.root(), &config.locale)?;
        let builder = TwitterCardBuilder::new(
            &labels,
            config.social_handle.as_deref(),
            config.base_url.as_deref(),
        );

        let mut outcomes = Vec::new();

        for entry in self.repository.list_contexts()? {
            let source_path = self.repository.root().join(&entry.filename);
            let context = FileSystemRepository::read_context(&source_path)?;

            let rendered = builder.build_for(entry.kind, &context);
            let tag_count = rendered.lines().count();

            let fragment = fragment_filename(&entry.filename);
            let output = match out_dir {
                Some(dir) => {
                    let path = dir.join(&fragment);
                    if let Some(parent) = path.parent() {
                        if !parent.exists() {
                            fs::create_dir_all(parent)?;
                        }
                    }
                    fs::write(&path, &rendered)?;
                    path.display().to_string()
                }
                None => {
                    self.repository.write_fragment(&fragment, &rendered)?;
                    fragment
                }
            };

            outcomes.push(BatchOutcome {
                source: entry.filename,
                output,
                kind: entry.kind,
                tag_count,
            });
        }

        Ok(outcomes)
    }
}

/// Fragment name for a context file: extension swapped for `.meta.html`,
/// relative layout preserved.
fn fragment_filename(source: &str) -> String {
    let stem = source
        .strip_suffix(".json")
        .or_else(|| source.strip_suffix(".toml"))
        .unwrap_or(source);
    format!("{}.meta.html", stem)
}
