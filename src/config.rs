use crate::output::OutputFormat;

/// Runtime settings resolved from the environment (and `.env`, if loaded).
///
/// - `TFIDF_TOP_K`: terms kept per document, 0 keeps all (default 0)
/// - `TFIDF_FORMAT`: `text` or `json` (default `text`)
/// - `TFIDF_THREADS`: worker threads, 0 lets rayon decide (default 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub top_k: usize,
    pub format: OutputFormat,
    pub threads: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            top_k: 0,
            format: OutputFormat::Text,
            threads: 0,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup. Bad values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let top_k = lookup("TFIDF_TOP_K")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.top_k);
        let format = lookup("TFIDF_FORMAT")
            .and_then(|v| OutputFormat::parse(&v))
            .unwrap_or(defaults.format);
        let threads = lookup("TFIDF_THREADS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.threads);

        Settings {
            top_k,
            format,
            threads,
        }
    }

    /// `top_k` as a truncation limit; 0 means unlimited.
    pub fn top_k_limit(&self) -> Option<usize> {
        (self.top_k > 0).then_some(self.top_k)
    }
}
