// File: src/core/rotator.rs
use crate::core::types::BucketKey;
use crate::error::Result;
use crate::pool::WordPool;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out target words per bucket without repeats until the bucket is
/// exhausted (pop-and-refill).
///
/// Each bucket keeps a working copy of its words. A draw removes a uniformly
/// random entry from it; once it is empty the next draw refills it from the
/// full pool, starting a new cycle. Within one cycle every word is drawn
/// exactly once.
#[derive(Debug, Clone)]
pub struct LemmaRotator {
    pool: Arc<WordPool>,
    unused: HashMap<BucketKey, Vec<String>>,
}

impl LemmaRotator {
    pub fn new(pool: Arc<WordPool>) -> Self {
        Self {
            pool,
            unused: HashMap::new(),
        }
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Draws the next word of the bucket. Fails only if the bucket is
    /// missing or empty in the pool.
    pub fn next_word<R: Rng + ?Sized>(&mut self, key: &BucketKey, rng: &mut R) -> Result<String> {
        let bucket = self.pool.bucket(key)?;
        let unused = self
            .unused
            .entry(key.clone())
            .or_insert_with(|| bucket.to_vec());
        if unused.is_empty() {
            unused.extend_from_slice(bucket);
        }

        let idx = rng.gen_range(0..unused.len());
        Ok(unused.swap_remove(idx))
    }

    /// Puts a drawn word back into the bucket's current cycle, for draws
    /// that could not be served.
    pub fn restore(&mut self, key: &BucketKey, word: String) {
        self.unused.entry(key.clone()).or_default().push(word);
    }

    /// Words still to be drawn before the bucket's current cycle ends.
    pub fn remaining_in_cycle(&self, key: &BucketKey) -> Result<usize> {
        let bucket_len = self.pool.bucket(key)?.len();
        Ok(match self.unused.get(key) {
            Some(unused) if !unused.is_empty() => unused.len(),
            _ => bucket_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pos;
    use crate::error::GameError;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rotator() -> LemmaRotator {
        let pool = WordPool::from_json(
            r#"{"eng": {"n": ["chair", "bow", "bank", "seat", "arc"], "v": ["run"]},
                "spa": {"n": ["silla", "arco"]}}"#,
        )
        .unwrap();
        LemmaRotator::new(Arc::new(pool))
    }

    #[test]
    fn every_word_before_any_repeat() {
        let mut rotator = rotator();
        let mut rng = StdRng::seed_from_u64(3);
        let key = BucketKey::new("eng", Pos::Noun);

        for _cycle in 0..4 {
            let drawn: Vec<String> = (0..5)
                .map(|_| rotator.next_word(&key, &mut rng).unwrap())
                .collect();
            let distinct: HashSet<&String> = drawn.iter().collect();
            assert_eq!(distinct.len(), 5);
        }
    }

    #[test]
    fn buckets_rotate_independently() {
        let mut rotator = rotator();
        let mut rng = StdRng::seed_from_u64(11);
        let nouns = BucketKey::new("eng", Pos::Noun);
        let spanish = BucketKey::new("spa", Pos::Noun);

        rotator.next_word(&nouns, &mut rng).unwrap();
        rotator.next_word(&nouns, &mut rng).unwrap();
        assert_eq!(rotator.remaining_in_cycle(&nouns).unwrap(), 3);
        assert_eq!(rotator.remaining_in_cycle(&spanish).unwrap(), 2);

        let a = rotator.next_word(&spanish, &mut rng).unwrap();
        let b = rotator.next_word(&spanish, &mut rng).unwrap();
        assert_ne!(a, b);
        assert_eq!(rotator.remaining_in_cycle(&spanish).unwrap(), 2);
        assert_eq!(rotator.remaining_in_cycle(&nouns).unwrap(), 3);
    }

    #[test]
    fn single_word_bucket_repeats() {
        let mut rotator = rotator();
        let mut rng = StdRng::seed_from_u64(0);
        let verbs = BucketKey::new("eng", Pos::Verb);
        for _ in 0..3 {
            assert_eq!(rotator.next_word(&verbs, &mut rng).unwrap(), "run");
        }
    }

    #[test]
    fn restored_word_is_drawn_again_in_the_same_cycle() {
        let mut rotator = rotator();
        let mut rng = StdRng::seed_from_u64(8);
        let key = BucketKey::new("eng", Pos::Noun);

        let word = rotator.next_word(&key, &mut rng).unwrap();
        rotator.restore(&key, word.clone());
        assert_eq!(rotator.remaining_in_cycle(&key).unwrap(), 5);

        let drawn: HashSet<String> = (0..5)
            .map(|_| rotator.next_word(&key, &mut rng).unwrap())
            .collect();
        assert!(drawn.contains(&word));
        assert_eq!(drawn.len(), 5);
    }

    #[test]
    fn missing_bucket_is_fatal() {
        let mut rotator = rotator();
        let mut rng = StdRng::seed_from_u64(0);
        let err = rotator
            .next_word(&BucketKey::new("spa", Pos::Adverb), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::EmptyBucket { .. }));
        assert!(!err.is_retryable());
    }
}
