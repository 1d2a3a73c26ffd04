//! Validated additive accumulation of duration components.
//!
//! Purpose
//! -------
//! Provide the mutable container behind the humanizer: six unit counters
//! that only ever grow through validated additive updates. This module
//! centralizes input validation for deltas so downstream code (the carry
//! cascade, rendering) can assume non-negative, well-formed counters.
//!
//! Key behaviors
//! -------------
//! - [`DurationCounters`] stores one `u64` counter per [`Unit`], so
//!   non-negativity is carried by the type.
//! - [`DurationCounters::add`] accepts signed deltas and rejects negative
//!   ones with a typed error, leaving the container untouched.
//! - Accumulation saturates at `u64::MAX` rather than wrapping.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counters are always ≥ 0 and only move upward outside the carry
//!   cascade; the cascade in [`crate::core::normalize`] is the only code
//!   that redistributes counter mass.
//! - Counters are not normalized here: a freshly accumulated container may
//!   hold overflowed values (e.g. 3661 seconds) until a render runs the
//!   cascade.
//!
//! Conventions
//! -----------
//! - Deltas are `i64` so that the rejection contract for negative input is
//!   observable at the API boundary rather than erased by an unsigned
//!   parameter type.
//! - Invalid deltas return [`HumanizeError::NegativeValue`] rather than
//!   panicking.
//!
//! Testing notes
//! -------------
//! - Unit tests cover accumulation across units, rejection of negative
//!   deltas (including the untouched-state guarantee), and saturation.

use crate::core::units::Unit;
use crate::errors::{HumanizeError, HumanizeResult};

/// Six non-negative unit counters backing the humanizer.
///
/// Counters accumulate through [`DurationCounters::add`] and are
/// redistributed into canonical ranges by the carry cascade when a phrase
/// is rendered. Fields are public for inspection; the `u64` type keeps the
/// non-negativity invariant regardless of how they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationCounters {
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
    pub months: u64,
    pub years: u64,
}

impl DurationCounters {
    /// Fresh container with every counter at zero.
    pub fn new() -> DurationCounters {
        DurationCounters::default()
    }

    /// Add `delta` to the counter for `unit`.
    ///
    /// # Arguments
    /// - `unit`: counter to update.
    /// - `delta`: amount to add; must be ≥ 0.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; no counter is
    ///   modified in that case.
    pub fn add(&mut self, unit: Unit, delta: i64) -> HumanizeResult<()> {
        if delta < 0 {
            return Err(HumanizeError::NegativeValue { unit, value: delta });
        }
        let slot = self.slot_mut(unit);
        *slot = slot.saturating_add(delta as u64);
        Ok(())
    }

    /// Current value of the counter for `unit`.
    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    fn slot_mut(&mut self, unit: Unit) -> &mut u64 {
        match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accumulation behavior of `DurationCounters::add` across all units.
    // - Rejection of negative deltas with the exact error payload and an
    //   untouched container.
    // - Saturation at `u64::MAX`.
    //
    // These tests intentionally DO NOT cover:
    // - The carry cascade (see `core::normalize`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `add` routes deltas to the counter named by `unit` and
    // that repeated calls accumulate additively.
    //
    // Given
    // -----
    // - A fresh container.
    // - Two positive deltas per unit.
    //
    // Expect
    // ------
    // - `get(unit)` returns the sum of the deltas for every unit.
    fn add_accumulates_deltas_per_unit() {
        let mut counters = DurationCounters::new();

        for unit in Unit::DESCENDING {
            counters.add(unit, 7).unwrap();
            counters.add(unit, 5).unwrap();
        }

        for unit in Unit::DESCENDING {
            assert_eq!(counters.get(unit), 12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure `add` rejects a negative delta and reports the unit and the
    // offending value.
    //
    // Given
    // -----
    // - A container pre-loaded with known values.
    // - `delta = -1` for each unit in turn.
    //
    // Expect
    // ------
    // - `add` returns `Err(HumanizeError::NegativeValue { unit, value: -1 })`.
    // - The container is byte-identical to its state before the call.
    fn add_returns_error_for_negative_delta() {
        let mut counters = DurationCounters::new();
        counters.add(Unit::Seconds, 30).unwrap();
        counters.add(Unit::Hours, 2).unwrap();
        let before = counters;

        for unit in Unit::DESCENDING {
            let result = counters.add(unit, -1);
            assert_eq!(result.unwrap_err(), HumanizeError::NegativeValue { unit, value: -1 });
            assert_eq!(counters, before);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that accumulation saturates instead of wrapping when a
    // counter approaches `u64::MAX`.
    //
    // Given
    // -----
    // - A container with `seconds` preset to `u64::MAX - 1`.
    // - A delta of `i64::MAX`.
    //
    // Expect
    // ------
    // - `add` succeeds and `seconds` is pinned at `u64::MAX`.
    fn add_saturates_at_u64_max() {
        let mut counters = DurationCounters { seconds: u64::MAX - 1, ..DurationCounters::new() };

        counters.add(Unit::Seconds, i64::MAX).unwrap();

        assert_eq!(counters.seconds, u64::MAX);
    }
}
