//! Page context data bag supplied by the host pipeline

use crate::error::Result;
use serde::Deserialize;

/// Everything the host's rendering pipeline knows about the page being
/// rendered. Every field is optional: the same bag shape is shared across
/// page kinds, and absent fields simply drop their tags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageContext {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub posts: Option<Vec<Post>>,
    #[serde(default)]
    pub posts_count: Option<i64>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub topic_count: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub post_count: Option<i64>,
    #[serde(default)]
    pub likes_received: Option<i64>,
}

/// One post in a topic's post stream. Only presence matters for
/// classification; the fields are whatever the host export carries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub post_number: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// The topic author as exported by the host
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

impl PageContext {
    /// Parse a context bag from a JSON export
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse a context bag from a TOML export
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
