// src/lib.rs

pub mod cleaning;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod fuzzy;
pub mod persistence;
pub mod pool;

pub use crate::config::GameConfig;
pub use crate::core::lemma::{CombinationGenerator, Lemma};
pub use crate::core::session::{Session, SharedProvider};
pub use crate::core::types::{Combination, Pos};
pub use crate::dictionary::{LookupError, Synset, SynsetProvider, SynsetStore};
pub use crate::error::{GameError, Result};
pub use crate::pool::WordPool;
