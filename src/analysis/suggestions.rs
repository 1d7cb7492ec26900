//! Title, description and alt-text suggestions.
//!
//! Suggestions sit behind [`TagSuggester`] so a different strategy can be
//! plugged in without touching scoring. [`HeuristicSuggester`] is the
//! deterministic default.

use crate::results::{ImageData, PageData, SuggestedTags};
use crate::utils::{char_len, truncate_chars};

const TITLE_SUFFIX: &str = " | Professional SEO Insight";
const FALLBACK_TITLE_BASE: &str = "My Site";
const FALLBACK_ALT_CONTEXT: &str = "Site Content";
const FALLBACK_IMAGE_NAME: &str = "Image";

const MAX_TITLE_CHARS: usize = 60;
const MAX_DESCRIPTION_CHARS: usize = 160;
const MAX_ALT_CONTEXT_CHARS: usize = 50;

/// Titles shorter than this are replaced by a suggestion.
const WEAK_TITLE_CHARS: usize = 20;
/// Descriptions shorter than this are replaced by a suggestion.
const WEAK_DESCRIPTION_CHARS: usize = 50;

/// Produces [`SuggestedTags`] for a page.
pub trait TagSuggester: Send + Sync {
    fn suggest(&self, data: &PageData, keywords: &[String]) -> SuggestedTags;
}

/// Rule-based suggestions built from headings, keywords and image file names.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSuggester;

impl TagSuggester for HeuristicSuggester {
    fn suggest(&self, data: &PageData, keywords: &[String]) -> SuggestedTags {
        let first_h1 = data.h1.first().map(String::as_str);

        let title = if char_len(&data.title) < WEAK_TITLE_CHARS {
            suggest_title(first_h1, keywords)
        } else {
            data.title.clone()
        };

        let description = if char_len(&data.description) < WEAK_DESCRIPTION_CHARS {
            suggest_description(first_h1, keywords)
        } else {
            data.description.clone()
        };

        let context = first_h1.unwrap_or(FALLBACK_ALT_CONTEXT);
        let image_alts = data
            .images
            .iter()
            .map(|img| image_alt(img, context))
            .collect();

        SuggestedTags {
            title,
            description,
            keywords: keywords.join(", "),
            image_alts,
        }
    }
}

fn suggest_title(first_h1: Option<&str>, keywords: &[String]) -> String {
    let base = first_h1
        .or(keywords.first().map(String::as_str))
        .unwrap_or(FALLBACK_TITLE_BASE);
    truncate_chars(&format!("{base}{TITLE_SUFFIX}"), MAX_TITLE_CHARS)
}

fn suggest_description(first_h1: Option<&str>, keywords: &[String]) -> String {
    let topic = match first_h1 {
        Some(h1) => h1.to_string(),
        None => keywords.iter().take(2).cloned().collect::<Vec<_>>().join(" and "),
    };
    let insights = keywords.iter().skip(2).take(3).cloned().collect::<Vec<_>>().join(", ");
    truncate_chars(
        &format!(
            "Discover comprehensive details about {topic}. Featuring insights on {insights}. \
             Optimize your static site effectively."
        ),
        MAX_DESCRIPTION_CHARS,
    )
}

fn image_alt(img: &ImageData, context: &str) -> String {
    match img.alt.as_deref() {
        Some(alt) if !alt.is_empty() => alt.to_string(),
        _ => generate_alt(&img.src, context),
    }
}

/// Alt text derived from an image's file name and the page topic.
pub fn generate_alt(src: &str, context: &str) -> String {
    let file_name = src.rsplit('/').next().unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { FALLBACK_IMAGE_NAME } else { stem };

    let context = if char_len(context) > MAX_ALT_CONTEXT_CHARS {
        format!("{}...", truncate_chars(context, MAX_ALT_CONTEXT_CHARS))
    } else {
        context.to_string()
    };

    format!("{} showing {}", stem.replace(['-', '_'], " "), context)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_keeps_strong_title_and_description() {
        let data = PageData {
            title: "A title comfortably over twenty".into(),
            description: "A description that is long enough to pass the fifty char bar.".into(),
            ..Default::default()
        };
        let tags = HeuristicSuggester.suggest(&data, &keywords(&["alpha", "beta"]));
        assert_eq!(tags.title, data.title);
        assert_eq!(tags.description, data.description);
        assert_eq!(tags.keywords, "alpha, beta");
    }

    #[test]
    fn test_title_from_h1() {
        let data = PageData {
            title: "Short".into(),
            h1: vec!["Handmade Ceramics".into()],
            ..Default::default()
        };
        let tags = HeuristicSuggester.suggest(&data, &[]);
        assert_eq!(tags.title, "Handmade Ceramics | Professional SEO Insight");
    }

    #[test]
    fn test_title_from_keyword_then_fallback() {
        let data = PageData::default();
        let tags = HeuristicSuggester.suggest(&data, &keywords(&["pottery"]));
        assert_eq!(tags.title, "pottery | Professional SEO Insight");

        let tags = HeuristicSuggester.suggest(&data, &[]);
        assert_eq!(tags.title, "My Site | Professional SEO Insight");
    }

    #[test]
    fn test_title_truncated_to_sixty_chars() {
        let data = PageData {
            h1: vec!["An extremely long primary heading for this page".into()],
            ..Default::default()
        };
        let tags = HeuristicSuggester.suggest(&data, &[]);
        assert_eq!(tags.title.chars().count(), 60);
        assert!(tags.title.starts_with("An extremely long primary heading for this page | "));
    }

    #[test]
    fn test_description_from_keywords() {
        let data = PageData::default();
        let kws = keywords(&["clay", "kiln", "glaze", "wheel", "studio", "extra"]);
        let tags = HeuristicSuggester.suggest(&data, &kws);
        assert_eq!(
            tags.description,
            "Discover comprehensive details about clay and kiln. Featuring insights on \
             glaze, wheel, studio. Optimize your static site effectively."
        );
    }

    #[test]
    fn test_description_truncated() {
        let data = PageData {
            h1: vec!["x".repeat(150)],
            ..Default::default()
        };
        let tags = HeuristicSuggester.suggest(&data, &[]);
        assert_eq!(tags.description.chars().count(), 160);
    }

    #[test]
    fn test_image_alts() {
        let data = PageData {
            h1: vec!["Our Studio".into()],
            images: vec![
                ImageData {
                    src: "/img/blue-bowl_large.jpg".into(),
                    alt: None,
                    loading: String::new(),
                },
                ImageData {
                    src: "/img/mug.png".into(),
                    alt: Some("A mug".into()),
                    loading: String::new(),
                },
                ImageData {
                    src: "".into(),
                    alt: Some(String::new()),
                    loading: String::new(),
                },
            ],
            ..Default::default()
        };
        let tags = HeuristicSuggester.suggest(&data, &[]);
        assert_eq!(
            tags.image_alts,
            vec!["blue bowl large showing Our Studio", "A mug", "Image showing Our Studio"]
        );
    }

    #[test]
    fn test_generate_alt_long_context() {
        let context = "c".repeat(60);
        let alt = generate_alt("photo.jpg", &context);
        assert_eq!(alt, format!("photo showing {}...", "c".repeat(50)));
    }

    #[test]
    fn test_generate_alt_default_context() {
        let data = PageData {
            images: vec![ImageData {
                src: "hero.webp".into(),
                alt: None,
                loading: String::new(),
            }],
            ..Default::default()
        };
        let tags = HeuristicSuggester.suggest(&data, &[]);
        assert_eq!(tags.image_alts, vec!["hero showing Site Content"]);
    }
}
