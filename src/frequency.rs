//! Word-frequency aggregation over line-oriented text input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{Result, TagCloudError};
use crate::separators::SeparatorSet;
use crate::tokenizer::words;

/// Mapping from lowercased word to its number of occurrences.
///
/// Every line is lowercased and tokenized on its own, so a separator run is never
/// coalesced across a line break. A line ends at `\n`, `\r\n` or a bare `\r`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: FxHashMap<String, usize>,
    total_words: usize,
}

impl FrequencyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the words of an in-memory text with the canonical separators.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, SeparatorSet::canonical())
    }

    /// Counts the words of an in-memory text with a custom separator set.
    #[must_use]
    pub fn from_text_with(text: &str, separators: &SeparatorSet) -> Self {
        let mut map = Self::new();
        map.record_lines(text, separators);
        map
    }

    /// Counts the words read from `reader` with the canonical separators.
    ///
    /// A read failure (including invalid UTF-8) discards everything counted so far.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, SeparatorSet::canonical())
    }

    /// Counts the words read from `reader` with a custom separator set.
    pub fn from_reader_with<R: BufRead>(mut reader: R, separators: &SeparatorSet) -> Result<Self> {
        let mut map = Self::new();
        let mut buf = String::new();
        let mut bytes = 0usize;
        loop {
            buf.clear();
            let read = reader
                .read_line(&mut buf)
                .map_err(|err| TagCloudError::io(err, None))?;
            if read == 0 {
                break;
            }
            bytes += read;
            map.record_lines(&buf, separators);
        }
        debug!(
            "counted {} words ({} distinct) in {bytes} bytes",
            map.total_words,
            map.len()
        );
        Ok(map)
    }

    /// Opens `path` and counts its words with the canonical separators.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| TagCloudError::io(err, Some(path.to_path_buf())))?;
        Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            TagCloudError::Io { source, path: None } => {
                TagCloudError::io(source, Some(path.to_path_buf()))
            }
            other => other,
        })
    }

    fn record_lines(&mut self, text: &str, separators: &SeparatorSet) {
        for line in text.split(['\n', '\r']) {
            let lowered = line.to_lowercase();
            for word in words(&lowered, separators) {
                self.record(word);
            }
        }
    }

    /// Adds one occurrence of `word`; the word is stored as given.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
        self.total_words += 1;
    }

    /// Returns the count recorded for `word`, if any.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` when no word has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word tokens encountered, duplicates included.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Iterates over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    pub(crate) fn into_counts(self) -> FxHashMap<String, usize> {
        self.counts
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = Self::new();
        for word in iter {
            map.record(word);
        }
        map
    }
}
