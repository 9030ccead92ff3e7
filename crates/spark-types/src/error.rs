// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all SparkScore engine failures.
///
/// The scoring path itself is total — every well-typed input produces
/// a result. Errors only arise while building an engine (invalid
/// configuration or lexicon) or at the binding boundary.
#[derive(Error, Debug)]
pub enum SparkError {
    /// Configuration error (weights, thresholds).
    #[error("config error: {0}")]
    Config(String),

    /// Keyword lexicon error (empty factor set, bad JSON).
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// Numerical error (NaN/Inf in computation).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type SparkResult<T> = Result<T, SparkError>;
