use crate::analysis::keywords;
use crate::analysis::suggestions::TagSuggester;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// SEO-relevant fields extracted from one HTML document.
///
/// Missing tags and attributes are represented as empty strings, never `None`,
/// except for `ImageData::alt` where absence is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub viewport: String,
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub images: Vec<ImageData>,
    pub links: Vec<LinkData>,
    pub lang: String,
}

/// An `<img>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub src: String,
    /// `None` when the `alt` attribute is missing, `Some("")` for `alt=""`.
    pub alt: Option<String>,
    pub loading: String,
}

impl ImageData {
    /// True when the image has a non-empty alt text.
    pub fn has_alt(&self) -> bool {
        self.alt.as_deref().is_some_and(|alt| !alt.is_empty())
    }
}

/// An `<a>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    pub href: String,
    pub text: String,
}

/// The five weighted facets of a page audit.
///
/// `accessibility` keeps its fractional value (image alt ratio); the other
/// facets are sums of integer weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub meta: u32,
    pub structure: u32,
    pub accessibility: f64,
    pub technical: u32,
    pub best_practices: u32,
}

/// Title/description/keyword suggestions attached to a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image_alts: Vec<String>,
}

/// Audit result for a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub url: String,
    /// Set by the site crawler; absent for direct `analyze` calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub timestamp: String,
    pub data: PageData,
    pub scores: Scores,
    pub overall_score: u32,
    pub recommendations: Vec<String>,
    pub readability_score: u32,
    pub broken_links: Vec<String>,
    pub suggested_tags: SuggestedTags,
}

impl AuditReport {
    /// Recompute `suggested_tags` for a stored report.
    ///
    /// Keywords are ranked over the title and first heading only, since the
    /// original markup is no longer available.
    pub fn refresh_suggested_tags(&mut self, suggester: &dyn TagSuggester) -> &SuggestedTags {
        let seed = format!(
            "{} {}",
            self.data.title,
            self.data.h1.first().map(String::as_str).unwrap_or("")
        );
        let keywords = keywords::extract_keywords_from_text(&seed);
        self.suggested_tags = suggester.suggest(&self.data, &keywords);
        &self.suggested_tags
    }
}

/// Aggregation of page reports for a whole site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub site_id: String,
    pub timestamp: String,
    pub overall_score: u32,
    pub pages: Vec<AuditReport>,
}

impl SiteReport {
    /// Build a site report; the overall score is the rounded mean of the page
    /// scores, or 0 for a site without pages.
    pub fn from_pages(site_id: impl Into<String>, pages: Vec<AuditReport>) -> Self {
        let overall_score = average_score(&pages);
        Self {
            site_id: site_id.into(),
            timestamp: now_timestamp(),
            overall_score,
            pages,
        }
    }
}

fn average_score(pages: &[AuditReport]) -> u32 {
    if pages.is_empty() {
        return 0;
    }
    let total: u64 = pages.iter().map(|p| u64::from(p.overall_score)).sum();
    (total as f64 / pages.len() as f64).round() as u32
}

/// Current time as an RFC 3339 UTC timestamp with millisecond precision.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
