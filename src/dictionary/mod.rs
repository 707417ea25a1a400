// File: src/dictionary/mod.rs
pub mod morphy;
pub mod store;

use crate::core::types::Pos;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub use store::SynsetStore;

/// The dictionary could not answer. An unknown word is NOT an error: it is
/// an empty lookup result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{provider} unavailable: {reason}")]
pub struct LookupError {
    pub provider: String,
    pub reason: String,
}

impl LookupError {
    pub fn new(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

/// A group of word forms sharing one sense, with member names per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    pub id: String,
    pub pos: Pos,
    /// language code -> lemma names, in the provider's native order.
    pub lemmas: BTreeMap<String, Vec<String>>,
}

impl Synset {
    pub fn new(id: impl Into<String>, pos: Pos) -> Self {
        Self {
            id: id.into(),
            pos,
            lemmas: BTreeMap::new(),
        }
    }

    /// Builder-style helper, mostly for fixtures.
    pub fn with_members<I, S>(mut self, lang: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for member in members {
            self.add_member(lang, member);
        }
        self
    }

    /// Appends a member unless already present for that language.
    pub fn add_member(&mut self, lang: &str, member: impl Into<String>) {
        let member = member.into();
        let names = self.lemmas.entry(lang.to_string()).or_default();
        if !names.contains(&member) {
            names.push(member);
        }
    }

    pub fn member_names(&self, lang: &str) -> &[String] {
        self.lemmas.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Read-only source of synsets. Implementations may be an embedded corpus,
/// a cache, or a remote service.
pub trait SynsetProvider {
    /// All synsets `word` belongs to for `pos` in `lang`. Returns `Ok(vec![])`
    /// for unknown words and `Err` only when the provider itself failed.
    fn lookup(&self, word: &str, pos: Pos, lang: &str) -> Result<Vec<Synset>, LookupError>;
}

impl<P: SynsetProvider + ?Sized> SynsetProvider for &P {
    fn lookup(&self, word: &str, pos: Pos, lang: &str) -> Result<Vec<Synset>, LookupError> {
        (**self).lookup(word, pos, lang)
    }
}

impl<P: SynsetProvider + ?Sized> SynsetProvider for std::sync::Arc<P> {
    fn lookup(&self, word: &str, pos: Pos, lang: &str) -> Result<Vec<Synset>, LookupError> {
        (**self).lookup(word, pos, lang)
    }
}
