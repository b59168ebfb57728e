//! Twitter card tag assembly and rendering

use crate::domain::card::CardType;
use crate::domain::context::PageContext;
use crate::domain::escape::escape_html;
use crate::domain::handle;
use crate::domain::kind::PageKind;
use crate::domain::labels::Labels;

/// A single `<meta>` name/content pair. Absent or empty content drops
/// the tag at render time; the pair is kept so output order stays fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: &'static str,
    pub content: Option<String>,
}

impl MetaTag {
    fn new(name: &'static str, content: Option<String>) -> Self {
        MetaTag { name, content }
    }
}

/// Builds the card meta tags for one page context.
///
/// The host already generates twitter:title, twitter:description,
/// twitter:image and twitter:url; this builder only contributes the card
/// layout, the creator handle and the per-kind label/data annotations.
pub struct TwitterCardBuilder<'a> {
    labels: &'a Labels,
    social_handle: Option<&'a str>,
    base_url: Option<&'a str>,
}

impl<'a> TwitterCardBuilder<'a> {
    /// Create a builder over the site's label catalog and settings.
    /// `social_handle` is the raw configured value; `base_url` is the
    /// fallback image URL used to spot placeholder images.
    pub fn new(
        labels: &'a Labels,
        social_handle: Option<&'a str>,
        base_url: Option<&'a str>,
    ) -> Self {
        TwitterCardBuilder {
            labels,
            social_handle,
            base_url,
        }
    }

    /// Classify the context and render its full tag block.
    pub fn build(&self, context: &PageContext) -> String {
        self.build_for(PageKind::detect(context), context)
    }

    /// Render for an already-classified page. Hosts that know the page
    /// kind pass it here instead of relying on field sniffing.
    pub fn build_for(&self, kind: PageKind, context: &PageContext) -> String {
        render_tags(&self.tags_for(kind, context))
    }

    /// Assemble the ordered tag list for an already-classified page.
    /// The card-type tag always comes first.
    pub fn tags_for(&self, kind: PageKind, context: &PageContext) -> Vec<MetaTag> {
        let card = CardType::select(kind, context, self.base_url);
        let mut tags = vec![MetaTag::new(
            "twitter:card",
            Some(card.as_str().to_string()),
        )];

        match kind {
            PageKind::Topic => self.push_topic_tags(&mut tags, context),
            PageKind::Category => self.push_category_tags(&mut tags, context),
            PageKind::User => self.push_user_tags(&mut tags, context),
            PageKind::Default => {}
        }

        tags
    }

    fn push_topic_tags(&self, tags: &mut Vec<MetaTag>, context: &PageContext) {
        tags.push(MetaTag::new(
            "twitter:creator",
            self.social_handle.and_then(handle::normalize),
        ));
        tags.push(MetaTag::new(
            "twitter:label1",
            Some(self.labels.get("label_replies")),
        ));
        // Replies = total posts minus the opening post. The host counts
        // the opener in posts_count, so a degenerate export of 0 renders
        // as "-1" rather than being clamped here.
        tags.push(MetaTag::new(
            "twitter:data1",
            context.posts_count.map(|count| (count - 1).to_string()),
        ));
        tags.push(MetaTag::new(
            "twitter:label2",
            Some(self.labels.get("label_author")),
        ));
        tags.push(MetaTag::new(
            "twitter:data2",
            context.author.as_ref().and_then(|author| author.name.clone()),
        ));
    }

    fn push_category_tags(&self, tags: &mut Vec<MetaTag>, context: &PageContext) {
        tags.push(MetaTag::new(
            "twitter:label1",
            Some(self.labels.get("label_topics")),
        ));
        tags.push(MetaTag::new(
            "twitter:data1",
            context.topic_count.map(|count| count.to_string()),
        ));
    }

    fn push_user_tags(&self, tags: &mut Vec<MetaTag>, context: &PageContext) {
        tags.push(MetaTag::new(
            "twitter:label1",
            Some(self.labels.get("label_posts")),
        ));
        tags.push(MetaTag::new(
            "twitter:data1",
            context.post_count.map(|count| count.to_string()),
        ));
        tags.push(MetaTag::new(
            "twitter:label2",
            Some(self.labels.get("label_karma")),
        ));
        tags.push(MetaTag::new(
            "twitter:data2",
            context.likes_received.map(|count| count.to_string()),
        ));
    }
}

/// Render tags in insertion order, skipping absent or empty content.
/// Both names and content are escaped; user-controlled fields must not
/// be able to break out of the attribute.
pub fn render_tags(tags: &[MetaTag]) -> String {
    let mut lines = Vec::new();

    for tag in tags {
        let Some(content) = tag.content.as_deref() else {
            continue;
        };
        if content.is_empty() {
            continue;
        }

        lines.push(format!(
            r#"<meta name="{}" content="{}">"#,
            escape_html(tag.name),
            escape_html(content)
        ));
    }

    lines.join("\n")
}
