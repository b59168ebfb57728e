//! Label catalog for card annotation text

use crate::error::{CardmetaError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// Built-in English labels for the twitter_card namespace
const BUILTIN_LABELS: [(&str, &str); 5] = [
    ("label_replies", "Replies"),
    ("label_author", "Author"),
    ("label_topics", "Topics"),
    ("label_posts", "Posts"),
    ("label_karma", "Karma"),
];

#[derive(Debug, Deserialize)]
struct LabelsFile {
    #[serde(default)]
    twitter_card: HashMap<String, String>,
}

/// Label lookup with per-key fallback to the built-in English set
#[derive(Debug, Default)]
pub struct Labels {
    custom: HashMap<String, String>,
}

impl Labels {
    /// Catalog with only the built-in labels
    pub fn builtin() -> Self {
        Labels::default()
    }

    /// Catalog from an in-memory override map
    pub fn from_entries(custom: HashMap<String, String>) -> Self {
        Labels { custom }
    }

    /// Load overrides from a locale file holding a `[twitter_card]` table
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CardmetaError::Labels(format!("Failed to read locale file: {}", e)))?;

        let file: LabelsFile = toml::from_str(&contents)
            .map_err(|e| CardmetaError::Labels(format!("Failed to parse locale file: {}", e)))?;

        Ok(Labels {
            custom: file.twitter_card,
        })
    }

    /// Look up a label: locale override first, then built-in, then the
    /// key itself so a missing translation never fails a render.
    pub fn get(&self, key: &str) -> String {
        if let Some(value) = self.custom.get(key) {
            return value.clone();
        }

        BUILTIN_LABELS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

/// Load the catalog for a locale from `.cardmeta/locales/`, falling back
/// to the built-in set when no override file exists.
pub fn load_labels(site_root: &Path, locale: &str) -> Result<Labels> {
    let custom_path = site_root
        .join(".cardmeta")
        .join("locales")
        .join(format!("{}.toml", locale));

    if custom_path.exists() {
        Labels::from_file(&custom_path)
    } else {
        Ok(Labels::builtin())
    }
}
