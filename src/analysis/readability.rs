//! Flesch Reading Ease over the visible text of a page.

use crate::parsers::text;
use regex::Regex;
use std::sync::LazyLock;

static SILENT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("suffix pattern should be valid")
});

static LEADING_Y: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^y").expect("leading y pattern should be valid"));

static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel pattern should be valid"));

/// Readability of `html`, rounded and clamped to `0..=100`.
pub fn score(html: &str) -> u32 {
    score_text(&text::visible_text(html))
}

/// Readability of already extracted plain text.
pub fn score_text(text: &str) -> u32 {
    let tokens = text::words(text);
    let sentences = text::sentence_count(text).max(1) as f64;
    let words = tokens.len().max(1) as f64;
    let syllables: usize = tokens.iter().map(|word| count_syllables(word)).sum();

    flesch(words, sentences, syllables as f64)
        .round()
        .clamp(0.0, 100.0) as u32
}

fn flesch(words: f64, sentences: f64, syllables: f64) -> f64 {
    206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
}

/// Heuristic syllable estimate for a single token.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let word = SILENT_SUFFIX.replace(&word, "");
    let word = LEADING_Y.replace(&word, "");
    match VOWEL_GROUP.find_iter(&word).count() {
        0 => 1,
        groups => groups,
    }
}
