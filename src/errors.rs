//! Unified error handling for duration humanization.
//!
//! This module defines `HumanizeError`, the central error type used by the
//! accumulation setters and the rendering pipeline. It groups together
//! domain-specific failures (negative deltas, unknown language codes,
//! empty renders) with catch-all and fallback variants. An alias
//! `HumanizeResult<T>` standardizes the return type across the crate.

use crate::core::units::Unit;

/// Unified error type for duration humanization.
///
/// Covers accumulation failures, language lookup failures at render time,
/// and renders that produce no phrases. Designed to integrate seamlessly
/// with `anyhow::Error` via `From`, and to provide readable diagnostics
/// through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanizeError {
    // ---- Accumulation ----
    /// A setter was given a negative delta; state is left unchanged.
    NegativeValue { unit: Unit, value: i64 },

    // ---- Rendering ----
    /// The active language code has no dictionary entry. Surfaces only at
    /// render time; selecting the code is always accepted.
    UnknownLanguage { code: String },

    /// Truncation and suppression left no unit to render.
    NothingToRender { minimum_unit: Unit },

    // ---- Anyhow catchall ----
    Anyhow(String),

    // ---- Fallback ----
    UnknownError,
}

/// Crate-wide result alias for operations that may produce
/// [`HumanizeError`].
pub type HumanizeResult<T> = Result<T, HumanizeError>;

impl From<anyhow::Error> for HumanizeError {
    fn from(err: anyhow::Error) -> Self {
        HumanizeError::Anyhow(err.to_string())
    }
}

impl std::fmt::Display for HumanizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Accumulation ----
            HumanizeError::NegativeValue { unit, value } => {
                write!(f, "Humanize Error: {unit} delta must be non-negative; got: {value}")
            }
            // ---- Rendering ----
            HumanizeError::UnknownLanguage { code } => {
                write!(f, "Humanize Error: No dictionary for language code '{code}'")
            }
            HumanizeError::NothingToRender { minimum_unit } => {
                write!(
                    f,
                    "Humanize Error: Nothing to render down to '{minimum_unit}' (all units zero or suppressed)"
                )
            }
            // ---- Anyhow catchall ----
            HumanizeError::Anyhow(msg) => {
                write!(f, "Humanize Error: {msg}")
            }
            // ---- Fallback ----
            HumanizeError::UnknownError => {
                write!(f, "Humanize Error: Unknown error")
            }
        }
    }
}

impl std::error::Error for HumanizeError {}
