//! SEO metadata tags

use maud::{Markup, html};

/// Page metadata passed through to the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

/// Renders title, description, Open Graph and Twitter card tags
///
/// Values are emitted as given. The language is not a tag of its own; the
/// layout puts it on the `html` element.
///
/// # Arguments
///
/// * `meta`: Title, description and language of the page
///
/// # Returns
///
/// Head markup with one tag per metadata entry
pub fn seo_tags(meta: &SeoMeta) -> Markup {
    html! {
        title { (meta.title) }
        meta name="description" content=(meta.description);
        meta property="og:title" content=(meta.title);
        meta property="og:description" content=(meta.description);
        meta property="og:type" content="website";
        meta name="twitter:card" content="summary";
        meta name="twitter:title" content=(meta.title);
        meta name="twitter:description" content=(meta.description);
    }
}
