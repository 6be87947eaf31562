use crate::domain::ports::WordList;
use crate::utils::error::{Result, SentimentError};
use std::collections::HashSet;
use std::path::Path;

/// In-memory reference word list, stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads a newline-separated word list such as `/usr/share/dict/words`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SentimentError::ConfigError {
            message: format!("cannot read word list '{}': {}", path.display(), e),
        })?;

        let set = Self::from_words(content.lines());
        if set.is_empty() {
            return Err(SentimentError::ConfigError {
                message: format!("word list '{}' is empty", path.display()),
            });
        }

        tracing::debug!("Loaded {} words from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
