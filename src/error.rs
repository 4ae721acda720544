//! Errors of the search.

/// Errors raised while searching a pattern in a text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Cost model cannot be used, e.g. non-positive gap cost, negative threshold or substitution cost.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Sentinel symbol also occurs in one of the input sequences.
    #[error("sentinel {sentinel:?} occurs in the {sequence}")]
    EncodingConflict {
        /// Sentinel prefixed to both sequences.
        sentinel: char,
        /// Which input contains it: `"pattern"` or `"text"`.
        sequence: &'static str,
    },
    /// Backtrace reached a cell without any recorded predecessor.
    #[error("no predecessor recorded for cell ({row}, {column})")]
    UndefinedPredecessor {
        /// Pattern row.
        row: usize,
        /// Text column.
        column: usize,
    },
}
