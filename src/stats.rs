//! Statistics describing a single cloud generation run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rank::{CountBounds, Vocabulary};

/// Aggregate figures captured while generating a cloud.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudStats {
    /// Word tokens read from the source, duplicates included.
    pub total_words: usize,
    /// Distinct words in the source.
    pub distinct_words: usize,
    /// Number of words asked for.
    pub requested: usize,
    /// Number of words placed in the cloud.
    pub selected: usize,
    /// Occurrences of the selected words summed over the source.
    pub selected_occurrences: usize,
    /// Count range of the selected words; `None` for an empty cloud.
    pub bounds: Option<CountBounds>,
    /// Whether the source held enough distinct words.
    pub vocabulary: Vocabulary,
    /// Time spent ranking, scaling and ordering the words.
    pub elapsed: Duration,
}

impl CloudStats {
    /// Fraction of all word tokens accounted for by the selected words.
    ///
    /// Returns `0.0` for an empty source.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.selected_occurrences as f64 / self.total_words as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_handles_empty_sources() {
        let stats = CloudStats {
            total_words: 0,
            distinct_words: 0,
            requested: 3,
            selected: 0,
            selected_occurrences: 0,
            bounds: None,
            vocabulary: Vocabulary::Insufficient {
                requested: 3,
                available: 0,
            },
            elapsed: Duration::ZERO,
        };
        assert_eq!(stats.coverage(), 0.0);
        let stats = CloudStats {
            total_words: 8,
            selected_occurrences: 6,
            ..stats
        };
        assert!((stats.coverage() - 0.75).abs() < f64::EPSILON);
    }
}
