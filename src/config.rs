//! Configuration builders controlling cloud scaling and rendering.

use std::fs;
use std::path::Path;

use crate::error::{Result, TagCloudError};
use crate::scale::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use serde::{Deserialize, Serialize};

/// Stylesheet linked from generated documents unless overridden.
pub const DEFAULT_STYLESHEET: &str =
    "http://cse.osu.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Configuration for tag cloud generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CloudConfig {
    /// Font size assigned to the least frequent selected word.
    pub min_font_size: u32,
    /// Font size assigned to the most frequent selected word.
    pub max_font_size: u32,
    /// Stylesheet URL referenced by the generated HTML; `None` omits the link.
    pub stylesheet: Option<String>,
    /// Emits an embedded `<style>` block defining every size class.
    pub inline_styles: bool,
    /// HTML-escapes word text and the source name.
    pub escape_words: bool,
    /// Treats an insufficient vocabulary as an error instead of a warning.
    pub strict_vocabulary: bool,
}

impl CloudConfig {
    /// Returns a builder initialised with [`CloudConfig::default`].
    #[must_use]
    pub fn builder() -> CloudConfigBuilder {
        CloudConfigBuilder::default()
    }

    /// Reads a JSON configuration file; missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|err| TagCloudError::io(err, Some(path.to_path_buf())))?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates the invariants required for rendering.
    pub fn validate(&self) -> Result<()> {
        if self.min_font_size == 0 {
            return Err(TagCloudError::InvalidConfig(
                "min_font_size must be greater than zero".into(),
            ));
        }
        if self.min_font_size > self.max_font_size {
            return Err(TagCloudError::InvalidConfig(format!(
                "min_font_size ({}) must not exceed max_font_size ({})",
                self.min_font_size, self.max_font_size
            )));
        }
        if let Some(href) = &self.stylesheet {
            if href.trim().is_empty() {
                return Err(TagCloudError::InvalidConfig(
                    "stylesheet must not be blank; omit it instead".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
            stylesheet: Some(DEFAULT_STYLESHEET.to_owned()),
            inline_styles: false,
            escape_words: true,
            strict_vocabulary: false,
        }
    }
}

/// Builder for [`CloudConfig`].
#[derive(Debug, Default, Clone)]
pub struct CloudConfigBuilder {
    cfg: CloudConfig,
}

impl CloudConfigBuilder {
    /// Starts from an existing configuration, e.g. one loaded from disk.
    #[must_use]
    pub fn from_config(cfg: CloudConfig) -> Self {
        Self { cfg }
    }

    /// Sets the font size range.
    #[must_use]
    pub fn font_sizes(mut self, min: u32, max: u32) -> Self {
        self.cfg.min_font_size = min;
        self.cfg.max_font_size = max;
        self
    }

    /// Sets the smallest font size.
    #[must_use]
    pub fn min_font_size(mut self, value: u32) -> Self {
        self.cfg.min_font_size = value;
        self
    }

    /// Sets the largest font size.
    #[must_use]
    pub fn max_font_size(mut self, value: u32) -> Self {
        self.cfg.max_font_size = value;
        self
    }

    /// Overrides the linked stylesheet.
    #[must_use]
    pub fn stylesheet(mut self, href: Option<String>) -> Self {
        self.cfg.stylesheet = href;
        self
    }

    /// Enables or disables the embedded `<style>` block.
    #[must_use]
    pub fn inline_styles(mut self, enabled: bool) -> Self {
        self.cfg.inline_styles = enabled;
        self
    }

    /// Enables or disables HTML escaping of words.
    #[must_use]
    pub fn escape_words(mut self, enabled: bool) -> Self {
        self.cfg.escape_words = enabled;
        self
    }

    /// Makes an insufficient vocabulary fatal.
    #[must_use]
    pub fn strict_vocabulary(mut self, enabled: bool) -> Self {
        self.cfg.strict_vocabulary = enabled;
        self
    }

    /// Finalises the builder, returning a validated [`CloudConfig`].
    pub fn build(self) -> Result<CloudConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
