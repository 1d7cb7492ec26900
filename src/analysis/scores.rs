//! Weighted sub-scores of a page.
//!
//! The thresholds and weights are product heuristics and are kept as literal
//! constants; reports are compared across runs, so they must not drift.

use crate::results::{PageData, Scores};
use crate::utils::char_len;

const TITLE_IDEAL: std::ops::RangeInclusive<usize> = 30..=60;
const DESCRIPTION_IDEAL: std::ops::RangeInclusive<usize> = 120..=160;

const META_WEIGHT: f64 = 0.25;
const STRUCTURE_WEIGHT: f64 = 0.20;
const ACCESSIBILITY_WEIGHT: f64 = 0.20;
const TECHNICAL_WEIGHT: f64 = 0.20;
const BEST_PRACTICES_WEIGHT: f64 = 0.15;

/// Links above this count earn the link-density bonus.
const LINK_DENSITY_MIN: usize = 5;

/// Computes all five sub-scores, each clamped to 100.
pub fn calculate(data: &PageData, url: &str) -> Scores {
    Scores {
        meta: meta_score(data).min(100),
        structure: structure_score(data).min(100),
        accessibility: accessibility_score(data).min(100.0),
        technical: technical_score(data, url).min(100),
        best_practices: best_practices_score(data, url).min(100),
    }
}

/// Weighted sum of the sub-scores, rounded half away from zero.
pub fn overall(scores: &Scores) -> u32 {
    let weighted = f64::from(scores.meta) * META_WEIGHT
        + f64::from(scores.structure) * STRUCTURE_WEIGHT
        + scores.accessibility * ACCESSIBILITY_WEIGHT
        + f64::from(scores.technical) * TECHNICAL_WEIGHT
        + f64::from(scores.best_practices) * BEST_PRACTICES_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u32
}

fn meta_score(data: &PageData) -> u32 {
    let mut score = 0;
    if !data.title.is_empty() {
        score += 30;
    }
    if TITLE_IDEAL.contains(&char_len(&data.title)) {
        score += 20;
    }
    if !data.description.is_empty() {
        score += 30;
    }
    if DESCRIPTION_IDEAL.contains(&char_len(&data.description)) {
        score += 20;
    }
    score
}

fn structure_score(data: &PageData) -> u32 {
    let mut score = 0;
    match data.h1.len() {
        0 => {}
        1 => score += 50,
        _ => score += 20,
    }
    if !data.h2.is_empty() {
        score += 30;
    }
    if !data.h1.is_empty() && !data.h2.is_empty() {
        score += 20;
    }
    score
}

fn accessibility_score(data: &PageData) -> f64 {
    let total = data.images.len();
    if total == 0 {
        return 100.0;
    }

    let with_alt = data.images.iter().filter(|img| img.has_alt()).count();
    let mut score = with_alt as f64 / total as f64 * 80.0;

    if data.images.iter().any(|img| img.loading == "lazy") {
        score += 20.0;
    }
    score
}

fn technical_score(data: &PageData, url: &str) -> u32 {
    let mut score = 0;
    if !data.canonical.is_empty() {
        score += 30;
    }
    if !data.lang.is_empty() {
        score += 20;
    }
    if !data.viewport.is_empty() {
        score += 30;
    }
    if url.starts_with("https://") {
        score += 20;
    }
    score
}

fn best_practices_score(data: &PageData, url: &str) -> u32 {
    let mut score = 0;
    if !data.og_title.is_empty() {
        score += 25;
    }
    if !data.og_description.is_empty() {
        score += 25;
    }
    // An empty url is contained in every href, so any link counts as internal.
    if data
        .links
        .iter()
        .any(|link| link.href.starts_with('/') || link.href.contains(url))
    {
        score += 25;
    }
    if data.links.len() > LINK_DENSITY_MIN {
        score += 25;
    }
    score
}
