//! Card layout selection

use crate::domain::context::PageContext;
use crate::domain::kind::PageKind;

/// Twitter card layout attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    /// Compact preview without a large image
    Summary,
    /// Preview with a prominent image
    SummaryLargeImage,
}

impl CardType {
    /// Pick the layout for a page: large image when the page resolves to
    /// a real image, compact summary otherwise.
    ///
    /// An image equal to `base_url` is the host's generic placeholder,
    /// substituted when the page has no image of its own, and does not
    /// upgrade the card.
    pub fn select(kind: PageKind, context: &PageContext, base_url: Option<&str>) -> Self {
        match resolve_image(kind, context) {
            Some(image) if base_url != Some(image) => CardType::SummaryLargeImage,
            _ => CardType::Summary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Summary => "summary",
            CardType::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// The image a page kind contributes to its preview, if any.
/// Topics use the topic image, user profiles their avatar; category and
/// unrecognized pages never carry one. Blank URLs count as absent.
pub fn resolve_image(kind: PageKind, context: &PageContext) -> Option<&str> {
    let image = match kind {
        PageKind::Topic => context.image_url.as_deref(),
        PageKind::User => context.avatar_url.as_deref(),
        PageKind::Category | PageKind::Default => None,
    };
    image.filter(|url| !url.is_empty())
}
