//! Word-frequency tag cloud generation library and CLI.
//!
//! The crate reads plain text, counts case-normalised words, keeps the N most
//! frequent ones and renders them alphabetically as an HTML tag cloud whose font
//! sizes scale linearly with each word's count.  Typical usage builds a
//! [`CloudGenerator`], generates a [`TagCloud`] from a file and writes the HTML.
//!
//! ```no_run
//! use tagcloud::{render, CloudConfig, CloudGenerator};
//!
//! # fn main() -> tagcloud::Result<()> {
//! let cfg = CloudConfig::builder().inline_styles(true).build()?;
//! let generator = CloudGenerator::new(cfg);
//! let artifacts = generator.generate_from_path("/path/to/book.txt", 100)?;
//! if artifacts.stats.vocabulary.is_insufficient() {
//!     eprintln!("book.txt has fewer than 100 distinct words");
//! }
//! render::save_html(&artifacts.cloud, generator.config(), "cloud.html")?;
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature.  Users targeting the
//! library portion only can disable default features to avoid the CLI
//! dependencies: `tagcloud = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

pub mod cloud;
pub mod config;
pub mod error;
pub mod frequency;
pub mod rank;
pub mod render;
pub mod scale;
pub mod separators;
pub mod stats;
pub mod tokenizer;

pub use cloud::{CloudArtifacts, CloudGenerator, RenderEntry, TagCloud};
pub use config::{CloudConfig, CloudConfigBuilder};
pub use error::{Result, TagCloudError};
pub use frequency::FrequencyMap;
pub use rank::{CountBounds, RankedEntry, Ranking, Selection, Vocabulary};
pub use scale::FontScale;
pub use separators::SeparatorSet;
pub use stats::CloudStats;
