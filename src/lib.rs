//! humanize_duration — localized, pluralization-aware duration phrases.
//!
//! Purpose
//! -------
//! Accumulate raw time components (seconds through years) and render them
//! as a grammatically correct phrase in Kazakh (`kk`), Russian (`ru`), or
//! English (`en`), truncated to a caller-chosen minimum unit.
//!
//! Key behaviors
//! -------------
//! - Validated additive setters feed six unit counters; negative deltas
//!   are rejected with typed errors and leave state untouched.
//! - Rendering runs a fixed single-pass carry cascade (60 s/min,
//!   60 min/h, 24 h/day, 365 days/year then 30 days/month,
//!   12 months/year), selects one of three noun columns per unit and
//!   language, and joins the phrases with a language-specific conjunction.
//! - Minimum-unit truncation and unit suppression shape the output only;
//!   the stored counters always keep their full normalized values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counters are non-negative by construction and, after a render,
//!   normalized: seconds/minutes ∈ 0–59, hours ∈ 0–23, days ∈ 0–29,
//!   months ∈ 0–11; years unbounded.
//! - Months are fixed at 30 days and years at 365 days; there is no
//!   calendar awareness.
//! - Dictionaries are immutable statics; their noun bytes are never
//!   adjusted for grammar at runtime.
//!
//! Conventions
//! -----------
//! - [`Humanizer`] is an explicit caller-owned value; confine one
//!   instance per logical caller or session. There is no global state.
//! - This crate performs no I/O and no logging; callers orchestrate
//!   logging. Failures are surfaced as [`HumanizeResult`] values.
//!
//! Downstream usage
//! ----------------
//! ```
//! use humanize_duration::prelude::*;
//!
//! let mut humanizer = Humanizer::new();
//! humanizer.set_language("en").add_seconds(3661)?;
//! assert_eq!(humanizer.humanize(Unit::Seconds, &[])?, "1 hour, 1 minutes and 1 seconds");
//! # Ok::<(), HumanizeError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live alongside each core module; the end-to-end pipeline
//!   is covered by `tests/integration_humanize_pipeline.rs`.

pub mod core;
pub mod errors;
pub mod models;

pub use crate::core::{DurationCounters, LanguageSpec, NounForms, PluralForm, Unit};
pub use crate::errors::{HumanizeError, HumanizeResult};
pub use crate::models::Humanizer;

/// Convenience re-exports for downstream crates.
pub mod prelude {
    pub use crate::core::{plural_form, DurationCounters, PluralForm, Unit};
    pub use crate::errors::{HumanizeError, HumanizeResult};
    pub use crate::models::Humanizer;
}
