//! Page scoring and recommendations.
//!
//! [`analyze`] is a pure function of the markup and the logical URL: nothing
//! is cached or shared between calls, so pages can be analysed concurrently.

pub mod keywords;
pub mod links;
pub mod readability;
pub mod recommendations;
pub mod scores;
pub mod suggestions;

#[cfg(test)]
mod tests;

use crate::error::AuditError;
use crate::parsers::html;
use crate::results::{AuditReport, now_timestamp};
use suggestions::{HeuristicSuggester, TagSuggester};

/// Audits one HTML document with the default suggestion strategy.
///
/// `url` is only inspected for the HTTPS and internal-link checks; pass `""`
/// when the page has no known address.
pub fn analyze(html: &str, url: &str) -> AuditReport {
    analyze_with(html, url, &HeuristicSuggester)
}

/// Audits one HTML document, delegating `suggested_tags` to `suggester`.
pub fn analyze_with(html: &str, url: &str, suggester: &dyn TagSuggester) -> AuditReport {
    let data = html::extract(html);
    let scores = scores::calculate(&data, url);
    let overall_score = scores::overall(&scores);
    let recommendations = recommendations::generate(&data, url);
    let readability_score = readability::score(html);
    let broken_links = links::detect_broken(&data.links);
    let keywords = keywords::extract_keywords(html);
    let suggested_tags = suggester.suggest(&data, &keywords);

    ::log::debug!(
        "Analyzed {}: overall {}, {} recommendations, {} broken links",
        if url.is_empty() { "<no url>" } else { url },
        overall_score,
        recommendations.len(),
        broken_links.len()
    );

    AuditReport {
        url: url.to_string(),
        file_path: None,
        timestamp: now_timestamp(),
        data,
        scores,
        overall_score,
        recommendations,
        readability_score,
        broken_links,
        suggested_tags,
    }
}

/// Audits raw bytes, which must be UTF-8 encoded HTML.
///
/// # Errors
///
/// Returns [`AuditError::InvalidInput`] if `bytes` is not valid UTF-8.
pub fn analyze_bytes(bytes: &[u8], url: &str) -> Result<AuditReport, AuditError> {
    let html = std::str::from_utf8(bytes)
        .map_err(|e| AuditError::InvalidInput(format!("HTML is not valid UTF-8: {e}")))?;
    Ok(analyze(html, url))
}
