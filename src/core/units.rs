//! Units and canonical ordering for duration rendering.
//!
//! - [`Unit`] names the six supported time components.
//! - [`Unit::DESCENDING`] fixes the largest→smallest order shared by the
//!   carry cascade, output ordering, and minimum-unit truncation.
//!
//! Notes
//! -----
//! - `Unit` is metadata only; exchange rates live in the normalization
//!   cascade.

use std::fmt;

/// Time components supported by the humanizer.
///
/// The set is fixed: months are treated as 30 days and years as 365 days
/// throughout the crate, with no calendar awareness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// Canonical largest→smallest ordering shared by normalization,
    /// rendering, and truncation.
    pub const DESCENDING: [Unit; 6] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Lowercase unit name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
