//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, deadline or budget exceeded) are
//! expressed via [`crate::report::TerminationReason`] and always come with a
//! `SearchReport`.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No report is
/// produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy cannot drive any search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
