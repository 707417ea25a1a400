use crate::config::GameConfig;
use crate::core::lemma::{CombinationGenerator, Lemma};
use crate::core::rotator::LemmaRotator;
use crate::core::types::{BucketKey, Combination, Pos};
use crate::dictionary::SynsetProvider;
use crate::error::{GameError, Result};
use crate::pool::WordPool;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Shared, read-only dictionary handle. One provider serves many sessions.
pub type SharedProvider = Arc<dyn SynsetProvider + Send + Sync>;

/// The state of one player's game: current bucket, current target, and
/// which words of each bucket are still unused.
///
/// Create one per player or connection. Nothing in it is shared between
/// sessions except the read-only pool and provider.
pub struct Session<R = StdRng> {
    provider: SharedProvider,
    generator: CombinationGenerator,
    rotator: LemmaRotator,
    lang: String,
    pos: Pos,
    current: Option<Lemma>,
    clues: Option<Combination>,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(pool: Arc<WordPool>, provider: SharedProvider, pos: Pos, lang: &str) -> Self {
        Self::with_rng(pool, provider, pos, lang, StdRng::from_entropy())
    }

    /// A session using the config's thresholds, language and part of speech.
    pub fn from_config(pool: Arc<WordPool>, provider: SharedProvider, config: &GameConfig) -> Self {
        Self::new(pool, provider, config.default_pos, &config.default_lang)
            .with_generator(CombinationGenerator::from_config(config))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(pool: Arc<WordPool>, provider: SharedProvider, pos: Pos, lang: &str, rng: R) -> Self {
        Self {
            provider,
            generator: CombinationGenerator::default(),
            rotator: LemmaRotator::new(pool),
            lang: lang.to_string(),
            pos,
            current: None,
            clues: None,
            rng,
        }
    }

    pub fn with_generator(mut self, generator: CombinationGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Takes effect on the next pick.
    pub fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    /// Takes effect on the next pick.
    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn bucket_key(&self) -> BucketKey {
        BucketKey::new(self.lang.clone(), self.pos)
    }

    pub fn current(&self) -> Option<&Lemma> {
        self.current.as_ref()
    }

    /// The clue set shown for the current target, if one was chosen.
    pub fn clues(&self) -> Option<&[String]> {
        self.clues.as_deref()
    }

    /// Draws the next unused word of the current bucket and makes it the
    /// target. Does not check that the word is playable.
    pub fn pick_lemma(&mut self) -> Result<&Lemma> {
        self.current = None;
        self.clues = None;

        let key = self.bucket_key();
        let word = self.rotator.next_word(&key, &mut self.rng)?;
        let lemma = match Lemma::new(&word, key.pos, &key.lang, &*self.provider) {
            Ok(lemma) => lemma,
            Err(e) => {
                // The word was never played; keep it in this cycle.
                self.rotator.restore(&key, word);
                return Err(e.into());
            }
        };
        let lemma: &Lemma = self.current.insert(lemma);
        Ok(lemma)
    }

    /// A random clue set for the current target, `None` if it has none.
    pub fn choose_combination(&mut self) -> Result<Option<Combination>> {
        let lemma = self.current.as_ref().ok_or(GameError::NoTarget)?;
        let clues = self.generator.choose_combination(lemma, &mut self.rng);
        self.clues = clues.clone();
        Ok(clues)
    }

    /// Picks targets until one has a clue set and returns both.
    ///
    /// Unplayable picks are skipped silently. Every word of the bucket is
    /// tried at least once before giving up with `NoPlayableWord`.
    pub fn next_round(&mut self) -> Result<(String, Combination)> {
        let key = self.bucket_key();
        let attempts = self.rotator.remaining_in_cycle(&key)? + self.rotator.pool().bucket(&key)?.len();

        for _ in 0..attempts {
            let word = self.pick_lemma()?.word().to_string();
            if let Some(clues) = self.choose_combination()? {
                debug!("Round target '{}' with clues {:?}", word, clues);
                return Ok((word, clues));
            }
            warn!("'{}' ({}, {}) has no valid combination, picking again", word, key.lang, key.pos);
        }

        self.current = None;
        Err(GameError::NoPlayableWord {
            lang: key.lang,
            pos: key.pos,
        })
    }

    /// True if `text` names the current target, ignoring case and
    /// surrounding whitespace. Phrases match with spaces or underscores.
    pub fn check_guess(&self, text: &str) -> Result<bool> {
        let lemma = self.current.as_ref().ok_or(GameError::NoTarget)?;
        Ok(normalize(text) == normalize(lemma.word()))
    }

    /// The answer, rendered for display.
    pub fn reveal(&self) -> Result<String> {
        let lemma = self.current.as_ref().ok_or(GameError::NoTarget)?;
        Ok(lemma.word().replace('_', " "))
    }
}

fn normalize(word: &str) -> String {
    word.trim().replace('_', " ").to_lowercase()
}
