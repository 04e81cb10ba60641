//! Ranking of counted words and top-N selection.

use std::cmp::Ordering;
use std::convert::TryFrom;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TagCloudError};
use crate::frequency::FrequencyMap;

/// A distinct word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Lowercased word text.
    pub word: String,
    /// Number of occurrences in the source text.
    pub count: usize,
}

impl RankedEntry {
    /// Creates a new entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Selection order: descending count, ties broken by ascending word.
#[must_use]
pub fn by_count_desc(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Display order: ascending word.
///
/// Words are already lowercased, so this is the case-insensitive order.
#[must_use]
pub fn alphabetical(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    a.word.cmp(&b.word).then_with(|| b.count.cmp(&a.count))
}

/// Smallest and largest count of a non-empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBounds {
    /// Lowest count among the selected entries.
    pub min: usize,
    /// Highest count among the selected entries.
    pub max: usize,
}

impl CountBounds {
    /// Returns `true` when every selected entry shares one count.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Whether the input held enough distinct words for the requested cloud size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Vocabulary {
    /// At least as many distinct words as requested were available.
    Sufficient,
    /// Fewer distinct words than requested; every available word was selected.
    Insufficient {
        /// Number of words asked for.
        requested: usize,
        /// Number of distinct words in the input.
        available: usize,
    },
}

impl Vocabulary {
    /// Returns `true` for [`Vocabulary::Insufficient`].
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Insufficient { .. })
    }
}

/// Every counted word, sorted once with [`by_count_desc`].
///
/// The ranking is immutable; iterate it as often as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Consumes a frequency map and sorts its entries.
    #[must_use]
    pub fn from_frequencies(map: FrequencyMap) -> Self {
        let mut entries: Vec<RankedEntry> = map
            .into_counts()
            .into_iter()
            .map(|(word, count)| RankedEntry { word, count })
            .collect();
        entries.sort_unstable_by(by_count_desc);
        Self { entries }
    }

    /// Number of ranked (distinct) words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ranking, most frequent first.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    /// Selects the `requested` most frequent entries.
    ///
    /// A negative request is rejected. Requesting more words than are available
    /// selects all of them and flags [`Vocabulary::Insufficient`].
    pub fn select(&self, requested: i64) -> Result<Selection> {
        let requested =
            usize::try_from(requested).map_err(|_| TagCloudError::NegativeWordCount(requested))?;
        let available = self.entries.len();
        let vocabulary = if requested > available {
            warn!("requested {requested} words but only {available} distinct words are available");
            Vocabulary::Insufficient {
                requested,
                available,
            }
        } else {
            Vocabulary::Sufficient
        };
        let entries = self.entries[..requested.min(available)].to_vec();
        let bounds = match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => Some(CountBounds {
                min: last.count,
                max: first.count,
            }),
            _ => None,
        };
        debug!(
            "selected {} of {available} words, bounds {bounds:?}",
            entries.len()
        );
        Ok(Selection {
            entries,
            requested,
            vocabulary,
            bounds,
        })
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-N subset of a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<RankedEntry>,
    requested: usize,
    vocabulary: Vocabulary,
    bounds: Option<CountBounds>,
}

impl Selection {
    /// Selected entries in [`by_count_desc`] order.
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Number of words that were asked for.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Whether the request could be satisfied in full.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Count range of the selection; `None` when nothing was selected.
    #[must_use]
    pub fn bounds(&self) -> Option<CountBounds> {
        self.bounds
    }

    /// Consumes the selection and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

/// Ranks `map` and selects its `requested` most frequent words.
pub fn select_top(map: FrequencyMap, requested: i64) -> Result<Selection> {
    Ranking::from_frequencies(map).select(requested)
}
