//! File system site repository

use crate::domain::context::PageContext;
use crate::domain::kind::PageKind;
use crate::error::{CardmetaError, Result};
use crate::infrastructure::SiteConfig;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A context file discovered under the site root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    pub filename: String,
    pub kind: PageKind,
}

impl ContextEntry {
    pub fn new(filename: String, kind: PageKind) -> Self {
        ContextEntry { filename, kind }
    }
}

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from .cardmeta/config.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to .cardmeta/config.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Check if .cardmeta directory exists
    fn is_initialized(&self) -> bool;

    /// Create .cardmeta directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the site root by walking up from the current directory.
    /// First checks the CARDMETA_ROOT environment variable, then falls
    /// back to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check CARDMETA_ROOT environment variable first
        if let Ok(root_path) = std::env::var("CARDMETA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(CardmetaError::Config(format!(
                    "CARDMETA_ROOT is set to '{}' but no .cardmeta directory found. \
                    Run 'cardmeta init' in that directory or unset CARDMETA_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .cardmeta
                    return Err(CardmetaError::NotSiteDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .cardmeta directory
    fn has_meta_dir(path: &Path) -> bool {
        path.join(".cardmeta").is_dir()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(".cardmeta");

        if meta_dir.exists() {
            return Err(CardmetaError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        Ok(())
    }
}

// Context file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Read and parse a context file; the format is chosen by extension.
    pub fn read_context(path: &Path) -> Result<PageContext> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CardmetaError::Context(format!("Context file not found: {}", path.display()))
            } else {
                CardmetaError::Io(e)
            }
        })?;

        parse_context(path, &contents)
    }

    /// Write a rendered fragment (relative path) under the site root
    pub fn write_fragment(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(CardmetaError::Io)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// List context files under the root, skipping dotted directories.
    /// Files that are not parseable context bags are ignored, the same
    /// way stray files in a content tree are.
    pub fn list_contexts(&self) -> Result<Vec<ContextEntry>> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let extension = entry.path().extension().and_then(|e| e.to_str());
            if !matches!(extension, Some("json") | Some("toml")) {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(filename) = Self::normalize_relative_path(rel) else {
                continue;
            };

            let Ok(context) = Self::read_context(entry.path()) else {
                continue;
            };

            entries.push(ContextEntry::new(filename, PageKind::detect(&context)));
        }

        entries.sort_by(|a, b| a.filename.cmp(&b.filename));

        Ok(entries)
    }
}

fn parse_context(path: &Path, contents: &str) -> Result<PageContext> {
    let extension = path.extension().and_then(|e| e.to_str());

    let parsed = match extension {
        Some("json") => PageContext::from_json(contents),
        Some("toml") => PageContext::from_toml(contents),
        _ => {
            return Err(CardmetaError::Context(format!(
                "Unsupported context format: {}",
                path.display()
            )))
        }
    };

    parsed.map_err(|e| {
        CardmetaError::Context(format!("Failed to parse {}: {}", path.display(), e))
    })
}
