//! Single-document TF-IDF keyword ranking.
//!
//! Every call builds its own term table; nothing is shared between analyses.

use crate::parsers::text;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Maximum number of keywords returned by [`extract_keywords`].
pub const MAX_KEYWORDS: usize = 10;

/// Terms must be longer than this many characters to be reported.
const MIN_TERM_CHARS: usize = 3;

/// Character references left behind by tag stripping (`&nbsp;`, `&#8217;`).
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);")
        .expect("entity pattern should be valid")
});

const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "came", "can", "cannot", "come", "could", "did", "do", "does", "doing", "during", "each", "few",
    "for", "from", "further", "get", "got", "has", "had", "he", "have", "her", "here", "him",
    "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "like", "make",
    "many", "me", "might", "more", "most", "much", "must", "my", "myself", "never", "now", "of",
    "on", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "said", "same",
    "see", "should", "since", "so", "some", "still", "such", "take", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "way", "we", "well", "were",
    "what", "where", "when", "which", "while", "who", "whom", "with", "would", "why", "you",
    "your", "yours", "yourself",
];

/// A term with its TF-IDF weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTerm {
    pub term: String,
    pub score: f64,
}

/// Top keywords of an HTML document's visible text.
pub fn extract_keywords(html: &str) -> Vec<String> {
    extract_keywords_from_text(&text::visible_text(html))
}

/// Top keywords of plain text: terms longer than three characters, best first,
/// at most [`MAX_KEYWORDS`]. Character references are not terms.
pub fn extract_keywords_from_text(text: &str) -> Vec<String> {
    rank_terms(&ENTITY.replace_all(text, " "))
        .into_iter()
        .filter(|ranked| ranked.term.chars().count() > MIN_TERM_CHARS)
        .take(MAX_KEYWORDS)
        .map(|ranked| ranked.term)
        .collect()
}

/// Ranks every non stop-word term of `text` by descending TF-IDF.
///
/// The text is treated as a corpus of one document, so the IDF factor is the
/// same for every term and the order follows term frequency. Equal scores keep
/// the order in which terms first appear.
pub fn rank_terms(text: &str) -> Vec<RankedTerm> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        if STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        match counts.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.clone(), 1);
                order.push(token);
            }
        }
    }

    let idf = inverse_document_frequency(1, 1);
    let mut ranked = order
        .into_iter()
        .map(|term| {
            let tf = counts.get(&term).copied().unwrap_or_default() as f64;
            RankedTerm { term, score: tf * idf }
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn inverse_document_frequency(documents: usize, documents_with_term: usize) -> f64 {
    1.0 + (documents as f64 / (1 + documents_with_term) as f64).ln()
}

/// Lowercased word tokens; anything that is not alphanumeric or `_` separates.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_terms_by_frequency() {
        let ranked = rank_terms("pottery kiln pottery glaze pottery kiln");
        let terms: Vec<_> = ranked.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["pottery", "kiln", "glaze"]);
        assert!(ranked[0].score > ranked[1].score);
        assert!(ranked[2].score > 0.0);
    }

    #[test]
    fn test_rank_terms_ties_keep_first_occurrence() {
        let ranked = rank_terms("zebra apple mango");
        let terms: Vec<_> = ranked.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_rank_terms_drops_stop_words_and_lowercases() {
        let ranked = rank_terms("The Studio and THE studio");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].term, "studio");
    }

    #[test]
    fn test_extract_keywords_filters_short_terms() {
        let keywords = extract_keywords_from_text("art art art pots pots clay");
        assert_eq!(keywords, vec!["pots", "clay"]);
    }

    #[test]
    fn test_extract_keywords_limit() {
        let text = (0..15)
            .map(|i| format!("keyword{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords_from_text(&text).len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_extract_keywords_from_html() {
        let html = "<html><head><style>.glaze { color: blue }</style></head>\
                    <body><h1>Stoneware glaze</h1><p>Stoneware firing, stoneware kilns.</p>\
                    <script>var hidden = 'hidden hidden hidden';</script></body></html>";
        let keywords = extract_keywords(html);
        assert_eq!(keywords[0], "stoneware");
        assert!(!keywords.contains(&"hidden".to_string()));
    }

    #[test]
    fn test_extract_keywords_ignores_entities() {
        let html = "<p>Handmade&nbsp;bowls &amp; mugs. Handmade caf&eacute; plates&#8217; glaze \
                    &nbsp;&nbsp;&nbsp;&#x2014;&copy;</p>";
        let keywords = extract_keywords(html);
        assert_eq!(keywords[0], "handmade");
        for entity in ["nbsp", "amp", "eacute", "8217", "x2014", "copy"] {
            assert!(!keywords.contains(&entity.to_string()), "{entity} in {keywords:?}");
        }
        assert!(keywords.contains(&"bowls".to_string()));
        assert!(keywords.contains(&"glaze".to_string()));
    }

    #[test]
    fn test_extract_keywords_empty() {
        assert!(extract_keywords("").is_empty());
    }
}
