// File: src/core/lemma.rs
use crate::config::GameConfig;
use crate::core::types::{Combination, Pos};
use crate::dictionary::{LookupError, Synset, SynsetProvider};
use crate::fuzzy::similarity::SimilarityFilter;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::ops::ControlFlow;

/// A target word with its synsets. The dictionary is queried once, at
/// construction, and the result is kept for the lemma's lifetime.
#[derive(Debug, Clone)]
pub struct Lemma {
    word: String,
    pos: Pos,
    lang: String,
    synsets: Vec<Synset>,
}

impl Lemma {
    pub fn new<P: SynsetProvider + ?Sized>(
        word: &str,
        pos: Pos,
        lang: &str,
        provider: &P,
    ) -> Result<Self, LookupError> {
        let synsets = provider.lookup(word, pos, lang)?;
        Ok(Self {
            word: word.to_string(),
            pos,
            lang: lang.to_string(),
            synsets,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }
}

/// Builds clue combinations for a lemma.
///
/// Results are random when more than `max_synsets` distinct synsets survive
/// filtering: a uniform sample of them is taken before the Cartesian
/// product, so two calls may return different sets. Pass a seeded `Rng` for
/// reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct CombinationGenerator {
    filter: SimilarityFilter,
    max_synsets: usize,
}

impl CombinationGenerator {
    pub fn new(filter: SimilarityFilter, max_synsets: usize) -> Self {
        Self { filter, max_synsets }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(SimilarityFilter::from_config(config), config.max_synsets)
    }

    pub fn filter(&self) -> &SimilarityFilter {
        &self.filter
    }

    /// Member sets of the lemma's synsets with the target and anything
    /// similar to it removed, deduplicated, empties dropped.
    pub fn cleared_synsets(&self, lemma: &Lemma) -> Vec<Vec<String>> {
        let mut seen: BTreeSet<BTreeSet<String>> = BTreeSet::new();
        let mut cleared_sets = Vec::new();
        let target = lemma.word.to_lowercase();

        for synset in &lemma.synsets {
            let members = synset.member_names(&lemma.lang);
            // Skip senses where the word is only an inflected form.
            if !members.iter().any(|m| m.to_lowercase() == target) {
                continue;
            }

            let cleared: Vec<String> = members
                .iter()
                .filter(|m| !self.filter.are_similar(m, &lemma.word))
                .cloned()
                .collect();
            if cleared.is_empty() {
                continue;
            }

            if seen.insert(cleared.iter().cloned().collect()) {
                cleared_sets.push(cleared);
            }
        }
        cleared_sets
    }

    /// The cleared synsets that take part in the product: at most
    /// `max_synsets` of them, sampled uniformly when there are more.
    pub fn candidate_sets<R: Rng + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> Vec<Vec<String>> {
        let cleared_sets = self.cleared_synsets(lemma);
        if cleared_sets.len() <= self.max_synsets {
            return cleared_sets;
        }
        debug!(
            "{}: sampling {} of {} synsets",
            lemma.word,
            self.max_synsets,
            cleared_sets.len()
        );
        cleared_sets
            .choose_multiple(rng, self.max_synsets)
            .cloned()
            .collect()
    }

    /// Every combination of one word per candidate set that keeps at least
    /// two mutually dissimilar words. May be empty.
    pub fn valid_combinations<R: Rng + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> Vec<Combination> {
        let sets = self.candidate_sets(lemma, rng);
        let mut valid = Vec::new();

        for_each_product(&sets, |tuple| {
            let reduced = self.reduce(tuple);
            if reduced.len() > 1 {
                valid.push(reduced);
            }
            ControlFlow::Continue(())
        });

        debug!(
            "{} ({}, {}): {} valid combinations from {} synsets",
            lemma.word,
            lemma.pos,
            lemma.lang,
            valid.len(),
            sets.len()
        );
        valid
    }

    /// Picks one valid combination at random, with `_` rendered as spaces.
    ///
    /// Reservoir-samples over the product instead of collecting every
    /// combination, so memory stays flat for large products.
    pub fn choose_combination<R: Rng + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> Option<Combination> {
        let sets = self.candidate_sets(lemma, rng);
        let mut chosen: Option<Combination> = None;
        let mut seen = 0usize;

        for_each_product(&sets, |tuple| {
            let reduced = self.reduce(tuple);
            if reduced.len() > 1 {
                seen += 1;
                if rng.gen_range(0..seen) == 0 {
                    chosen = Some(reduced);
                }
            }
            ControlFlow::Continue(())
        });

        chosen.map(|combination| combination.iter().map(|w| w.replace('_', " ")).collect())
    }

    /// Stops at the first valid combination.
    pub fn is_playable<R: Rng + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> bool {
        let sets = self.candidate_sets(lemma, rng);
        let mut playable = false;
        for_each_product(&sets, |tuple| {
            if self.reduce(tuple).len() > 1 {
                playable = true;
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });
        playable
    }

    /// Drops repeated words, then any word similar to one already kept.
    fn reduce(&self, tuple: &[&String]) -> Combination {
        let mut kept: Combination = Vec::with_capacity(tuple.len());
        for &word in tuple {
            if kept.iter().any(|k| self.filter.are_similar(k, word)) {
                continue;
            }
            kept.push(word.clone());
        }
        kept
    }
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Calls `visit` once per element of the Cartesian product of `sets`,
/// until it returns `Break`.
fn for_each_product<F: FnMut(&[&String]) -> ControlFlow<()>>(sets: &[Vec<String>], mut visit: F) {
    if sets.is_empty() || sets.iter().any(Vec::is_empty) {
        return;
    }

    let mut indices = vec![0usize; sets.len()];
    let mut tuple: Vec<&String> = sets.iter().map(|set| &set[0]).collect();
    loop {
        if visit(&tuple).is_break() {
            return;
        }

        // Advance the rightmost index that still has room, resetting the rest.
        let mut pos = sets.len();
        loop {
            if pos == 0 {
                return;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < sets[pos].len() {
                tuple[pos] = &sets[pos][indices[pos]];
                break;
            }
            indices[pos] = 0;
            tuple[pos] = &sets[pos][0];
        }
    }
}
