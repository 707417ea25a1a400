use crate::core::types::{BucketKey, Pos};
use crate::error::{GameError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Candidate target words: language code -> part of speech -> words.
///
/// Serialized exactly as the word list document, e.g.
/// `{"eng": {"n": ["chair", "bow"]}, "spa": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordPool {
    buckets: BTreeMap<String, BTreeMap<Pos, Vec<String>>>,
}

impl WordPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let pool: WordPool = serde_json::from_reader(reader)?;
        info!("Loaded {} words from {}", pool.len(), path.display());
        Ok(pool)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the pool as indented JSON, the format `load` reads.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn insert(&mut self, lang: &str, pos: Pos, word: impl Into<String>) {
        self.buckets
            .entry(lang.to_string())
            .or_default()
            .entry(pos)
            .or_default()
            .push(word.into());
    }

    /// The words of a bucket, or an error if it is missing or empty.
    pub fn bucket(&self, key: &BucketKey) -> Result<&[String]> {
        self.buckets
            .get(&key.lang)
            .and_then(|by_pos| by_pos.get(&key.pos))
            .filter(|words| !words.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| GameError::EmptyBucket {
                lang: key.lang.clone(),
                pos: key.pos,
            })
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// True if the pool has at least one non-empty bucket for `lang`.
    pub fn has_language(&self, lang: &str) -> bool {
        self.buckets
            .get(lang)
            .is_some_and(|by_pos| by_pos.values().any(|words| !words.is_empty()))
    }

    /// Every bucket with its words, in language then part-of-speech order.
    pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &[String])> {
        self.buckets.iter().flat_map(|(lang, by_pos)| {
            by_pos
                .iter()
                .map(move |(pos, words)| (BucketKey::new(lang.clone(), *pos), words.as_slice()))
        })
    }

    /// Total number of words across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().flat_map(|by_pos| by_pos.values()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
