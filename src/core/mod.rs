//! core — building blocks for duration humanization.
//!
//! Purpose
//! -------
//! Collect the core building blocks behind the humanizer: the unit
//! vocabulary and its canonical ordering, the validated counter container,
//! the single-pass carry cascade, plural form selection, and the static
//! language dictionaries. The user-facing facade in [`crate::models`]
//! composes these primitives; nothing here performs I/O or logging.
//!
//! Key behaviors
//! -------------
//! - Define the fixed unit set and largest→smallest ordering ([`Unit`],
//!   [`Unit::DESCENDING`]).
//! - Accumulate validated, non-negative unit counters
//!   ([`DurationCounters`]) and redistribute overflow into canonical
//!   ranges ([`normalize`]).
//! - Select one of three noun columns per unit and count
//!   ([`PluralForm`], [`plural_form`]) and resolve the concrete noun from
//!   the built-in dictionaries ([`LanguageSpec`], [`lookup`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Counters are non-negative by construction; after the cascade they sit
//!   in canonical ranges (seconds/minutes 0–59, hours 0–23, days 0–29,
//!   months 0–11, years unbounded).
//! - Dictionaries are immutable statics whose noun bytes are preserved
//!   exactly; plural rules never rewrite them.
//! - Months are fixed at 30 days and years at 365 days; the cascade is a
//!   single pass in descending-unit order.
//!
//! Downstream usage
//! ----------------
//! - Most callers should use [`crate::models::Humanizer`] rather than
//!   driving these primitives directly; the re-exports below exist for
//!   tests and for callers composing custom rendering.

pub mod counters;
pub mod dictionary;
pub mod normalize;
pub mod plural;
pub mod units;

// Flat re-exports of the everyday core types.
pub use self::counters::DurationCounters;
pub use self::dictionary::{lookup, LanguageSpec, NounForms};
pub use self::normalize::normalize;
pub use self::plural::{plural_form, PluralForm};
pub use self::units::Unit;
