// File: src/fuzzy/similarity.rs
use crate::config::GameConfig;

/// Pairwise "too similar to be useful together" predicate for clue words.
///
/// Two words are similar when any of these hold (all case-insensitive):
/// they are equal, their first `prefix_len` characters match, their fuzzy
/// score exceeds `fuzzy_threshold`, or one contains the other. This is a
/// deliberately loose heuristic, meant to keep "run" and "runs" apart,
/// not an edit-distance bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityFilter {
    prefix_len: usize,
    fuzzy_threshold: u8,
}

impl SimilarityFilter {
    pub fn new(prefix_len: usize, fuzzy_threshold: u8) -> Self {
        Self {
            prefix_len,
            fuzzy_threshold,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.prefix_len, config.fuzzy_threshold)
    }

    pub fn are_similar(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();

        a == b
            || self.same_prefix(&a, &b)
            || fuzzy_score(&a, &b) > self.fuzzy_threshold
            || a.contains(b.as_str())
            || b.contains(a.as_str())
    }

    /// Compares leading characters, not bytes, so accented words are safe.
    fn same_prefix(&self, a: &str, b: &str) -> bool {
        a.chars().take(self.prefix_len).eq(b.chars().take(self.prefix_len))
    }
}

impl Default for SimilarityFilter {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Normalized Levenshtein similarity on a 0..=100 scale.
pub fn fuzzy_score(a: &str, b: &str) -> u8 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8
}
