//! Infrastructure layer - Configuration and file system access

pub mod config;
pub mod repository;

pub use config::SiteConfig;
pub use repository::{ContextEntry, FileSystemRepository, SiteRepository};
