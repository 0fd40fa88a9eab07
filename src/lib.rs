//! Rank the most distinctive terms of each document in a small corpus by TF-IDF.
//!
//! The scoring core lives in [`tokenizer`] and [`tfidf`] as plain functions.
//! [`pipeline`] drives them over a list of sources, and [`source`] and
//! [`output`] are the I/O edges used by the command-line tool.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod tfidf;
pub mod tokenizer;

pub use config::Settings;
pub use error::TfidfError;
pub use output::OutputFormat;
pub use pipeline::{run, CorpusReport, DocumentReport, PipelineOptions, RankedTerm, SkippedSource};
pub use source::{FileSource, SourceReader};
