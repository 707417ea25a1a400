// File: src/error.rs
use crate::core::types::Pos;
use crate::dictionary::LookupError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    /// The word pool has no words for the requested bucket. Not retryable.
    #[error("no words configured for language '{lang}', part of speech '{pos}'")]
    EmptyBucket { lang: String, pos: Pos },

    /// Every word of the bucket was tried once and none yielded a combination.
    #[error("no playable word in bucket language '{lang}', part of speech '{pos}'")]
    NoPlayableWord { lang: String, pos: Pos },

    /// The dictionary could not be queried. Distinct from an unknown word.
    #[error("dictionary lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// A guess or combination was requested before any target was picked.
    #[error("no target word has been picked yet")]
    NoTarget,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl GameError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures worth retrying later (the dictionary being unreachable).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}
