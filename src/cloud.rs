//! High-level pipeline turning text into a scaled, alphabetised tag cloud.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::CloudConfig;
use crate::error::{Result, TagCloudError};
use crate::frequency::FrequencyMap;
use crate::rank::{alphabetical, Ranking, Selection, Vocabulary};
use crate::scale::FontScale;
use crate::stats::CloudStats;

/// A selected word with its count and computed font size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderEntry {
    /// Lowercased word text.
    pub word: String,
    /// Exact number of occurrences, shown on hover.
    pub count: usize,
    /// Font size within the configured range.
    pub font_size: u32,
}

/// Words of a cloud in alphabetical order, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCloud {
    /// Name of the source document shown in the title and heading.
    pub source_name: String,
    /// Number of words that were asked for.
    pub requested: usize,
    /// Render entries sorted alphabetically.
    pub entries: Vec<RenderEntry>,
}

impl TagCloud {
    /// Scales a selection into `[min_size, max_size]` and sorts it alphabetically.
    #[must_use]
    pub fn from_selection(
        selection: Selection,
        source_name: impl Into<String>,
        min_size: u32,
        max_size: u32,
    ) -> Self {
        let requested = selection.requested();
        let scale = selection
            .bounds()
            .map(|bounds| FontScale::new(min_size, max_size, bounds));
        let mut ranked = selection.into_entries();
        ranked.sort_by(alphabetical);
        let entries = ranked
            .into_iter()
            .map(|entry| RenderEntry {
                font_size: scale.map_or(min_size, |scale| scale.size_for(entry.count)),
                word: entry.word,
                count: entry.count,
            })
            .collect();
        Self {
            source_name: source_name.into(),
            requested,
            entries,
        }
    }

    /// Returns `true` when the cloud holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Name shown for a document read from `path`: its file name without directories.
#[must_use]
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// High-level façade running the full counting, ranking and scaling pipeline.
#[derive(Debug, Clone, Default)]
pub struct CloudGenerator {
    cfg: CloudConfig,
}

/// Artifacts returned after a generation run completes.
#[must_use]
#[derive(Debug, Clone)]
pub struct CloudArtifacts {
    /// The cloud ready for rendering.
    pub cloud: TagCloud,
    /// Figures describing the run.
    pub stats: CloudStats,
}

impl CloudGenerator {
    /// Creates a new generator for the supplied configuration.
    #[must_use]
    pub fn new(cfg: CloudConfig) -> Self {
        Self { cfg }
    }

    /// Returns an immutable reference to the underlying configuration.
    #[must_use]
    pub fn config(&self) -> &CloudConfig {
        &self.cfg
    }

    /// Reads `path` and builds a cloud of its `requested` most frequent words.
    ///
    /// The file name (without directories) becomes the cloud's source name.
    pub fn generate_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        requested: i64,
    ) -> Result<CloudArtifacts> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|err| TagCloudError::io(err, Some(path.to_path_buf())))?;
        self.generate_from_reader(BufReader::new(file), &source_name(path), requested)
            .map_err(|err| match err {
                TagCloudError::Io { source, path: None } => {
                    TagCloudError::io(source, Some(path.to_path_buf()))
                }
                other => other,
            })
    }

    /// Reads text from `reader` and builds a cloud of its `requested` most frequent words.
    pub fn generate_from_reader<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
        requested: i64,
    ) -> Result<CloudArtifacts> {
        if requested < 0 {
            return Err(TagCloudError::NegativeWordCount(requested));
        }
        let frequencies = FrequencyMap::from_reader(reader)?;
        self.generate_from_frequencies(frequencies, source_name, requested)
    }

    /// Builds a cloud from already counted words.
    pub fn generate_from_frequencies(
        &self,
        frequencies: FrequencyMap,
        source_name: &str,
        requested: i64,
    ) -> Result<CloudArtifacts> {
        self.cfg.validate()?;
        let start = Instant::now();
        let total_words = frequencies.total_words();
        let distinct_words = frequencies.len();

        let ranking = Ranking::from_frequencies(frequencies);
        let selection = ranking.select(requested)?;
        let vocabulary = selection.vocabulary();
        if let Vocabulary::Insufficient {
            requested,
            available,
        } = vocabulary
        {
            if self.cfg.strict_vocabulary {
                return Err(TagCloudError::InsufficientVocabulary {
                    requested,
                    available,
                });
            }
        }
        let bounds = selection.bounds();
        let cloud = TagCloud::from_selection(
            selection,
            source_name,
            self.cfg.min_font_size,
            self.cfg.max_font_size,
        );
        debug!("scaled {} words with bounds {bounds:?}", cloud.entries.len());

        let stats = CloudStats {
            total_words,
            distinct_words,
            requested: cloud.requested,
            selected: cloud.entries.len(),
            selected_occurrences: cloud.entries.iter().map(|entry| entry.count).sum(),
            bounds,
            vocabulary,
            elapsed: start.elapsed(),
        };
        info!(
            "cloud for {source_name}: {} of {distinct_words} distinct words ({total_words} total)",
            stats.selected
        );
        Ok(CloudArtifacts { cloud, stats })
    }
}

impl fmt::Display for CloudArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tag cloud of {} words from {}",
            self.stats.selected, self.cloud.source_name
        )?;
        writeln!(
            f,
            "Words: {} total, {} distinct",
            self.stats.total_words, self.stats.distinct_words
        )?;
        if let Vocabulary::Insufficient {
            requested,
            available,
        } = self.stats.vocabulary
        {
            writeln!(f, "Warning: requested {requested} words, only {available} available")?;
        }
        Ok(())
    }
}
