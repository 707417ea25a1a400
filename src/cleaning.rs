// File: src/cleaning.rs
use crate::core::lemma::{CombinationGenerator, Lemma};
use crate::core::types::BucketKey;
use crate::dictionary::SynsetProvider;
use crate::error::Result;
use crate::pool::WordPool;
use log::{debug, info};
use rand::Rng;

/// What a cleaning pass kept and dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleaningReport {
    pub kept: usize,
    pub removed: Vec<(BucketKey, String)>,
}

/// Batch pass that removes unplayable words from a pool ahead of time, so
/// sessions rarely have to re-pick.
pub struct PoolCleaner<'a, P: SynsetProvider + ?Sized> {
    provider: &'a P,
    generator: CombinationGenerator,
}

impl<'a, P: SynsetProvider + ?Sized> PoolCleaner<'a, P> {
    pub fn new(provider: &'a P, generator: CombinationGenerator) -> Self {
        Self { provider, generator }
    }

    /// Returns a pool holding only the words with at least one valid
    /// combination. A failed lookup aborts the pass instead of dropping the
    /// word, since the word may well be playable.
    pub fn clean<R: Rng + ?Sized>(&self, pool: &WordPool, rng: &mut R) -> Result<(WordPool, CleaningReport)> {
        let mut cleaned = WordPool::new();
        let mut report = CleaningReport::default();

        for (key, words) in pool.buckets() {
            for word in words {
                let lemma = Lemma::new(word, key.pos, &key.lang, self.provider)?;
                if self.generator.is_playable(&lemma, rng) {
                    debug!("{} not removed", word);
                    cleaned.insert(&key.lang, key.pos, word.clone());
                    report.kept += 1;
                } else {
                    info!("{} has been removed ({}, {})", word, key.lang, key.pos);
                    report.removed.push((key.clone(), word.clone()));
                }
            }
        }

        info!(
            "Cleaning kept {} words and removed {}",
            report.kept,
            report.removed.len()
        );
        Ok((cleaned, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pos;
    use crate::dictionary::{LookupError, Synset, SynsetStore};
    use crate::error::GameError;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn drops_words_without_combinations() {
        let store = SynsetStore::from_synsets([
            Synset::new("chair.n.01", Pos::Noun).with_members("eng", ["chair", "seat"]),
            Synset::new("chair.n.03", Pos::Noun).with_members("eng", ["chair", "professorship"]),
            Synset::new("run.v.01", Pos::Verb).with_members("eng", ["run", "running"]),
        ]);
        let pool = WordPool::from_json(r#"{"eng": {"n": ["chair", "bow"], "v": ["run"]}}"#).unwrap();

        let cleaner = PoolCleaner::new(&store, CombinationGenerator::default());
        let (cleaned, report) = cleaner.clean(&pool, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(cleaned, WordPool::from_json(r#"{"eng": {"n": ["chair"]}}"#).unwrap());
        assert_eq!(report.kept, 1);
        assert_eq!(
            report.removed,
            vec![
                (BucketKey::new("eng", Pos::Noun), "bow".to_string()),
                (BucketKey::new("eng", Pos::Verb), "run".to_string()),
            ]
        );
    }

    struct Flaky;

    impl SynsetProvider for Flaky {
        fn lookup(&self, _: &str, _: Pos, _: &str) -> std::result::Result<Vec<Synset>, LookupError> {
            Err(LookupError::new("wordnet service", "timed out"))
        }
    }

    #[test]
    fn lookup_failure_aborts_instead_of_removing() {
        let pool = WordPool::from_json(r#"{"eng": {"n": ["chair"]}}"#).unwrap();
        let cleaner = PoolCleaner::new(&Flaky, CombinationGenerator::default());
        let err = cleaner.clean(&pool, &mut StdRng::seed_from_u64(9)).unwrap_err();
        assert!(matches!(err, GameError::Lookup(_)));
    }
}
