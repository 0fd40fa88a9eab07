use std::io;

/// Errors produced while loading sources or scoring a corpus.
#[derive(thiserror::Error, Debug)]
pub enum TfidfError {
    /// A source could not be read. The run continues without it.
    #[error("source unavailable: {label}")]
    SourceUnavailable {
        label: String,
        #[source]
        source: io::Error,
    },
    /// Anything else that goes wrong while scoring. Fatal for the run.
    #[error("unexpected computation failure: {0}")]
    Computation(String),
}

impl TfidfError {
    pub fn unavailable(label: impl Into<String>, source: io::Error) -> Self {
        TfidfError::SourceUnavailable {
            label: label.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TfidfError>;
