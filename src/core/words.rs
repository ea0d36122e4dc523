//! Word store: the flat list of (word, category) records kept in a JSON file
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WordStoreError {
    #[error("failed to read word file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse word file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write word file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode words for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected user input while adding words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("entry boxes cannot be empty")]
    Blank,
}

/// One record of the word file.
///
/// Both fields are optional on disk so that a file with a missing key still
/// loads; the reveal engine rejects such an entry only if it gets picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "text", default, skip_serializing_if = "Option::is_none")]
    word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            category: Some(category.into()),
        }
    }

    /// Builds an entry from user input, trimming both fields
    pub fn from_input(word: &str, category: &str) -> Result<Self, EntryError> {
        let (word, category) = (word.trim(), category.trim());
        if word.is_empty() || category.is_empty() {
            return Err(EntryError::Blank);
        }
        Ok(Self::new(word, category))
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// `(word, category)` if both are present
    pub fn fields(&self) -> Option<(&str, &str)> {
        Some((self.word()?, self.category()?))
    }

    pub fn is_well_formed(&self) -> bool {
        self.fields().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSet {
    entries: Vec<WordEntry>,
}

impl WordSet {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordStoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| WordStoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let words: Self = serde_json::from_slice(&bytes).map_err(|source| WordStoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = words.len(), "loaded word file");
        Ok(words)
    }

    /// Writes the whole set back as a JSON array, replacing the file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WordStoreError> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec_pretty(self).map_err(|source| WordStoreError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, bytes).map_err(|source| WordStoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = self.len(), "saved word file");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    pub fn push(&mut self, entry: WordEntry) {
        debug!(?entry, "adding word entry");
        self.entries.push(entry);
    }

    /// Distinct categories, sorted. Entries without a category are skipped.
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(WordEntry::category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Removes the first entry matching `word` and `category`.
    /// Returns whether anything was removed.
    pub fn retire(&mut self, word: &str, category: &str) -> bool {
        let position = self
            .entries
            .iter()
            .position(|e| e.fields() == Some((word, category)));
        match position {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<WordEntry> for WordSet {
    fn from_iter<T: IntoIterator<Item = WordEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
