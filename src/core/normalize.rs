//! Carry cascade — redistribute overflowed counters into canonical ranges.
//!
//! This module implements the single fixed normalization pass run before
//! every render. Overflow is carried upward through the unit chain with
//! integer (floor) division and exact subtraction, so no quantity is ever
//! lost or rounded.
//!
//! ## Exchange rates and order
//! - seconds → minutes at 60, when seconds > 59
//! - minutes → hours at 60, when minutes > 59
//! - hours → days at 24, when hours > 23
//! - days → years at 365 and **then** months at 30 from the remaining
//!   days, when days > 29
//! - months → years at 12, when months > 11
//!
//! The days step is two-staged on purpose: 400 days must become
//! 1 year + 35 days first, and only then 1 month + 5 days. A single
//! `days / 30` would misplace the year boundary.
//!
//! ## Single pass
//! The cascade runs once, in the order above. Each carry lands in a unit
//! whose own overflow check comes later in the sequence, so one pass is
//! sufficient: a seconds overflow can ripple all the way into years
//! within the same call.
//!
//! ## Post-conditions
//! seconds ∈ 0–59, minutes ∈ 0–59, hours ∈ 0–23, days ∈ 0–29,
//! months ∈ 0–11; years unbounded.

use crate::core::counters::DurationCounters;

/// Run the carry cascade over `counters` in place.
pub fn normalize(counters: &mut DurationCounters) {
    if counters.seconds > 59 {
        let minutes = counters.seconds / 60;
        counters.minutes = counters.minutes.saturating_add(minutes);
        counters.seconds -= minutes * 60;
    }

    if counters.minutes > 59 {
        let hours = counters.minutes / 60;
        counters.hours = counters.hours.saturating_add(hours);
        counters.minutes -= hours * 60;
    }

    if counters.hours > 23 {
        let days = counters.hours / 24;
        counters.days = counters.days.saturating_add(days);
        counters.hours -= days * 24;
    }

    if counters.days > 29 {
        if counters.days >= 365 {
            let years = counters.days / 365;
            counters.years = counters.years.saturating_add(years);
            counters.days -= years * 365;
        }
        let months = counters.days / 30;
        counters.months = counters.months.saturating_add(months);
        counters.days -= months * 30;
    }

    if counters.months > 11 {
        let years = counters.months / 12;
        counters.years = counters.years.saturating_add(years);
        counters.months -= years * 12;
    }
}
