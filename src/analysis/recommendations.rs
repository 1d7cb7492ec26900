use crate::results::PageData;
use crate::utils::char_len;

pub const ADD_TITLE: &str = "Add a <title> tag to your page. It is critical for search rankings.";
pub const TITLE_TOO_SHORT: &str =
    "Title is too short (under 30 chars). Expand it to include relevant keywords.";
pub const ADD_DESCRIPTION: &str =
    "Add a meta description to summarize page content for users in search results.";
pub const MISSING_H1: &str = "No H1 tag found. Each page should have one main heading.";
pub const MULTIPLE_H1: &str =
    "Multiple H1 tags found. Stick to one H1 per page for better hierarchy.";
pub const MISSING_VIEWPORT: &str =
    "Missing viewport meta tag. This is required for mobile-friendliness.";
pub const ADD_CANONICAL: &str = "Add a canonical link tag to prevent duplicate content indexing.";
pub const NOT_HTTPS: &str = "Your site is not using HTTPS. Security is a ranking factor.";
pub const ADD_OPEN_GRAPH: &str =
    "Add Open Graph tags (og:title/og:description) for better social sharing preview.";

const SHORT_TITLE_CHARS: usize = 30;

/// Builds the recommendation list. Rules run in a fixed order and each fires
/// at most once.
pub fn generate(data: &PageData, url: &str) -> Vec<String> {
    let mut recs = Vec::new();

    if data.title.is_empty() {
        recs.push(ADD_TITLE.to_string());
    } else if char_len(&data.title) < SHORT_TITLE_CHARS {
        recs.push(TITLE_TOO_SHORT.to_string());
    }

    if data.description.is_empty() {
        recs.push(ADD_DESCRIPTION.to_string());
    }

    match data.h1.len() {
        0 => recs.push(MISSING_H1.to_string()),
        1 => {}
        _ => recs.push(MULTIPLE_H1.to_string()),
    }

    let missing_alts = data.images.iter().filter(|img| !img.has_alt()).count();
    if missing_alts > 0 {
        recs.push(missing_alt_message(missing_alts));
    }

    if data.viewport.is_empty() {
        recs.push(MISSING_VIEWPORT.to_string());
    }
    if data.canonical.is_empty() {
        recs.push(ADD_CANONICAL.to_string());
    }
    if !url.is_empty() && !url.starts_with("https://") {
        recs.push(NOT_HTTPS.to_string());
    }

    if data.og_title.is_empty() || data.og_description.is_empty() {
        recs.push(ADD_OPEN_GRAPH.to_string());
    }

    recs
}

/// Accessibility message for `count` images without alt text.
pub fn missing_alt_message(count: usize) -> String {
    format!("{count} images are missing alt attributes (ADA compliance).")
}
