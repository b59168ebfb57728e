//! Page kind classification

use crate::domain::context::PageContext;

/// Which forum page a context bag describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Topic thread (has a title and a post stream)
    Topic,
    /// Category listing
    Category,
    /// User profile
    User,
    /// Anything unrecognized
    Default,
}

impl PageKind {
    /// Classify a context bag by field presence, first match wins.
    ///
    /// Priority is Topic > Category > User > Default, so a bag that
    /// coincidentally carries fields of several kinds gets the
    /// highest-priority one. Presence means the field exists in the
    /// export; an empty string or empty post list still counts.
    pub fn detect(context: &PageContext) -> Self {
        if context.title.is_some() && context.posts.is_some() {
            return PageKind::Topic;
        }
        if context.topic_count.is_some() {
            return PageKind::Category;
        }
        if context.username.is_some() {
            return PageKind::User;
        }
        PageKind::Default
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Topic => "topic",
            PageKind::Category => "category",
            PageKind::User => "user",
            PageKind::Default => "default",
        }
    }
}
