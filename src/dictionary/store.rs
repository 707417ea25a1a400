// File: src/dictionary/store.rs
use super::{morphy, LookupError, Synset, SynsetProvider};
use crate::core::types::Pos;
use crate::error::{GameError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// The on-disk JSON shape of a synset corpus.
#[derive(Serialize, Deserialize)]
struct SynsetDocument {
    synsets: Vec<Synset>,
}

/// An embedded, in-memory lexical corpus.
///
/// Member names are indexed lowercased per language, so lookups are
/// case-insensitive. English lookups also try WordNet base forms, which
/// means an inflected string ("runs") can reach synsets it is not itself a
/// member of.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynsetStore {
    synsets: Vec<Synset>,
    ids: HashMap<String, usize>,
    /// (language, lowercased member) -> synset indices, in insertion order.
    index: HashMap<(String, String), Vec<usize>>,
}

impl SynsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_synsets(synsets: impl IntoIterator<Item = Synset>) -> Self {
        let mut store = Self::new();
        for synset in synsets {
            store.insert(synset);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Synset> {
        self.ids.get(id).map(|&idx| &self.synsets[idx])
    }

    /// Inserts a synset, merging members into an existing one with the same id.
    pub fn insert(&mut self, synset: Synset) {
        let idx = match self.ids.get(&synset.id) {
            Some(&idx) => idx,
            None => {
                let idx = self.synsets.len();
                self.ids.insert(synset.id.clone(), idx);
                self.synsets.push(Synset::new(synset.id.clone(), synset.pos));
                idx
            }
        };
        for (lang, members) in synset.lemmas {
            for member in members {
                self.add_member(idx, &lang, member);
            }
        }
    }

    fn add_member(&mut self, idx: usize, lang: &str, member: String) {
        let postings = self
            .index
            .entry((lang.to_string(), member.to_lowercase()))
            .or_default();
        if !postings.contains(&idx) {
            postings.push(idx);
        }
        self.synsets[idx].add_member(lang, member);
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let document: SynsetDocument = serde_json::from_reader(reader)?;
        let store = Self::from_synsets(document.synsets);
        info!("Loaded {} synsets from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        let document = SynsetDocument {
            synsets: self.synsets.clone(),
        };
        serde_json::to_writer_pretty(writer, &document)?;
        Ok(())
    }

    /// Merges an Open Multilingual Wordnet `.tab` file
    /// (`offset-pos<TAB>lang:lemma<TAB>word`). Lines with other relations and
    /// comments are skipped; a bare `lemma` relation is read as `default_lang`.
    /// Returns the number of members merged.
    pub fn merge_omw_tab<R: BufRead>(&mut self, reader: R, default_lang: &str) -> Result<usize> {
        let mut merged = 0;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(id), Some(relation), Some(word)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(GameError::config(format!(
                    "malformed OMW line {}: {:?}",
                    line_no + 1,
                    line
                )));
            };

            let lang = match relation.split_once(':') {
                Some((lang, "lemma")) => lang,
                None if relation == "lemma" => default_lang,
                _ => continue,
            };
            let pos = id
                .rsplit('-')
                .next()
                .and_then(|code| code.chars().next())
                .and_then(Pos::from_code)
                .ok_or_else(|| {
                    GameError::config(format!("bad synset id {:?} on line {}", id, line_no + 1))
                })?;

            let mut synset = Synset::new(id, pos);
            synset.add_member(lang, word.trim().replace(' ', "_"));
            self.insert(synset);
            merged += 1;
        }
        Ok(merged)
    }

    /// `merge_omw_tab` over a file on disk.
    pub fn merge_omw_file(&mut self, path: &Path, default_lang: &str) -> Result<usize> {
        let reader = BufReader::new(File::open(path)?);
        let merged = self.merge_omw_tab(reader, default_lang)?;
        info!("Merged {} OMW members from {}", merged, path.display());
        Ok(merged)
    }

    fn candidate_forms(word: &str, pos: Pos, lang: &str) -> Vec<String> {
        let word = word.to_lowercase();
        if lang == "eng" {
            morphy::candidate_forms(&word, pos)
        } else {
            vec![word]
        }
    }
}

impl SynsetProvider for SynsetStore {
    fn lookup(&self, word: &str, pos: Pos, lang: &str) -> std::result::Result<Vec<Synset>, LookupError> {
        let mut hits: Vec<usize> = Vec::new();
        for form in Self::candidate_forms(word, pos, lang) {
            if let Some(postings) = self.index.get(&(lang.to_string(), form)) {
                for &idx in postings {
                    if self.synsets[idx].pos == pos && !hits.contains(&idx) {
                        hits.push(idx);
                    }
                }
            }
        }
        Ok(hits.into_iter().map(|idx| self.synsets[idx].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> SynsetStore {
        SynsetStore::from_synsets([
            Synset::new("chair.n.01", Pos::Noun)
                .with_members("eng", ["chair", "seat"])
                .with_members("spa", ["silla"]),
            Synset::new("chair.n.03", Pos::Noun).with_members("eng", ["chair", "professorship"]),
            Synset::new("chair.v.01", Pos::Verb).with_members("eng", ["chair", "lead"]),
            Synset::new("run.v.01", Pos::Verb).with_members("eng", ["run", "go"]),
        ])
    }

    #[test]
    fn lookup_filters_by_pos_and_language() {
        let store = store();
        let nouns = store.lookup("chair", Pos::Noun, "eng").unwrap();
        let ids: Vec<&str> = nouns.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["chair.n.01", "chair.n.03"]);

        let spanish = store.lookup("Silla", Pos::Noun, "spa").unwrap();
        assert_eq!(spanish.len(), 1);
        assert_eq!(spanish[0].member_names("spa"), ["silla".to_string()]);
    }

    #[test]
    fn unknown_word_is_empty_not_error() {
        assert_eq!(store().lookup("zyzzyva", Pos::Noun, "eng"), Ok(vec![]));
    }

    #[test]
    fn english_inflections_reach_base_form() {
        let hits = store().lookup("runs", Pos::Verb, "eng").unwrap();
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].member_names("eng").contains(&"runs".to_string()));
    }

    #[test]
    fn insert_merges_same_id() {
        let mut store = store();
        store.insert(Synset::new("chair.n.01", Pos::Noun).with_members("eng", ["seat", "bench"]));
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.get("chair.n.01").unwrap().member_names("eng"),
            ["chair".to_string(), "seat".to_string(), "bench".to_string()]
        );
    }

    #[test]
    fn merges_omw_tab_lines() {
        let tab = "# Spanish wordnet\n\
                   03001627-n\tspa:lemma\tsilla\n\
                   03001627-n\tspa:def\tasiento con respaldo\n\
                   03001627-n\tspa:lemma\tasiento de madera\n\
                   01926311-v\tlemma\tcorrer\n";
        let mut store = SynsetStore::new();
        let merged = store.merge_omw_tab(tab.as_bytes(), "spa").unwrap();
        assert_eq!(merged, 3);

        let chair = store.get("03001627-n").unwrap();
        assert_eq!(chair.pos, Pos::Noun);
        assert_eq!(
            chair.member_names("spa"),
            ["silla".to_string(), "asiento_de_madera".to_string()]
        );
        assert_eq!(store.lookup("correr", Pos::Verb, "spa").unwrap().len(), 1);
    }

    #[test]
    fn rejects_truncated_omw_line() {
        let mut store = SynsetStore::new();
        assert!(store.merge_omw_tab("03001627-n\tspa:lemma\n".as_bytes(), "spa").is_err());
    }

    #[test]
    fn omw_file_extends_loaded_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wn-data-spa.tab");
        std::fs::write(
            &path,
            "08511970-n\tspa:lemma\tsilla\n08511970-n\tspa:lemma\tcátedra\n",
        )
        .unwrap();

        let mut store = store();
        assert_eq!(store.merge_omw_file(&path, "spa").unwrap(), 2);
        assert_eq!(store.len(), 5);
        assert_eq!(store.lookup("silla", Pos::Noun, "spa").unwrap().len(), 2);
        assert!(store.merge_omw_file(&dir.path().join("missing.tab"), "spa").is_err());
    }

    #[test]
    fn json_document_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synsets.json");
        store().save_json(&path).unwrap();

        let loaded = SynsetStore::load_json(&path).unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(
            loaded.lookup("chair", Pos::Verb, "eng").unwrap()[0].member_names("eng"),
            ["chair".to_string(), "lead".to_string()]
        );
    }
}
