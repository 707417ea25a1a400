// File: src/persistence.rs
use crate::dictionary::SynsetStore;
use crate::error::Result;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the corpus, index included, as a bincode snapshot.
/// The file is written next to the target and renamed into place.
pub fn save_snapshot(store: &SynsetStore, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, store)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| e.error)?;
    info!("Wrote synset snapshot ({} synsets) to {}", store.len(), path.display());
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<SynsetStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let store: SynsetStore = bincode::deserialize_from(reader)?;
    info!("Loaded synset snapshot ({} synsets) from {}", store.len(), path.display());
    Ok(store)
}

/// Loads a corpus by extension: `.bin` is a snapshot, anything else JSON.
pub fn load_corpus(path: &Path) -> Result<SynsetStore> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("bin") => load_snapshot(path),
        _ => SynsetStore::load_json(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pos;
    use crate::dictionary::{Synset, SynsetProvider};

    #[test]
    fn snapshot_keeps_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("corpus.bin");
        let store = SynsetStore::from_synsets([
            Synset::new("bow.n.01", Pos::Noun).with_members("eng", ["bow", "knot"]),
            Synset::new("bow.n.02", Pos::Noun).with_members("eng", ["bow", "arc"]),
        ]);

        save_snapshot(&store, &path).unwrap();
        let loaded = load_corpus(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.lookup("BOW", Pos::Noun, "eng").unwrap().len(), 2);
    }

    #[test]
    fn missing_snapshot_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, crate::error::GameError::Io(_)));
    }
}
