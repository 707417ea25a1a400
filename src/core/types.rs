// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playable clue set: two or more words sharing a synonym with the target.
pub type Combination = Vec<String>;

/// WordNet part-of-speech. Serialized with the single-letter WordNet codes,
/// which is also how the word pool document keys its buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pos {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a", alias = "s")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    pub fn code(self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adjective => 'a',
            Pos::Adverb => 'r',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pos::Noun => "Noun",
            Pos::Verb => "Verb",
            Pos::Adjective => "Adjective",
            Pos::Adverb => "Adverb",
        }
    }

    /// Parses a WordNet code. Adjective satellites (`s`) fold into adjectives.
    pub fn from_code(code: char) -> Option<Pos> {
        match code {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' | 's' => Some(Pos::Adjective),
            'r' => Some(Pos::Adverb),
            _ => None,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Pos {
    type Err = String;

    /// Accepts either the code ("n") or the menu label ("Noun"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(pos) = Pos::from_code(c.to_ascii_lowercase()) {
                return Ok(pos);
            }
        }
        Pos::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown part of speech: {}", s))
    }
}

/// Menu labels for the languages the game ships word lists for.
const LANGUAGE_LABELS: [(&str, &str); 2] = [("English", "eng"), ("Spanish", "spa")];

/// Normalizes a language given as a code ("spa") or a label ("Spanish").
/// Unknown labels are passed through lowercased so any corpus language works.
pub fn language_code(input: &str) -> String {
    let trimmed = input.trim();
    LANGUAGE_LABELS
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(trimmed))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| trimmed.to_lowercase())
}

pub fn language_label(code: &str) -> &str {
    LANGUAGE_LABELS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(label, _)| *label)
        .unwrap_or(code)
}

/// A (language, part-of-speech) partition of the word pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub lang: String,
    pub pos: Pos,
}

impl BucketKey {
    pub fn new(lang: impl Into<String>, pos: Pos) -> Self {
        Self { lang: lang.into(), pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_parses_codes_and_labels() {
        assert_eq!("n".parse::<Pos>(), Ok(Pos::Noun));
        assert_eq!("Verb".parse::<Pos>(), Ok(Pos::Verb));
        assert_eq!("adjective".parse::<Pos>(), Ok(Pos::Adjective));
        assert_eq!("s".parse::<Pos>(), Ok(Pos::Adjective));
        assert_eq!(" R ".parse::<Pos>(), Ok(Pos::Adverb));
        assert!("pronoun".parse::<Pos>().is_err());
    }

    #[test]
    fn pos_serializes_as_wordnet_code() {
        let json = serde_json::to_string(&Pos::Adverb).unwrap();
        assert_eq!(json, "\"r\"");
        let satellite: Pos = serde_json::from_str("\"s\"").unwrap();
        assert_eq!(satellite, Pos::Adjective);
    }

    #[test]
    fn languages_map_between_labels_and_codes() {
        assert_eq!(language_code("Spanish"), "spa");
        assert_eq!(language_code("eng"), "eng");
        assert_eq!(language_code("FRA"), "fra");
        assert_eq!(language_label("eng"), "English");
        assert_eq!(language_label("jpn"), "jpn");
    }
}
