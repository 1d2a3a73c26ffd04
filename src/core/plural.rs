//! Plural form selection for normalized unit counts.
//!
//! This module maps a (unit, count) pair to one of the three noun columns
//! every language dictionary carries. The rules are unit-specific and are
//! kept as pure functions so the whole grammar lives in one place.
//!
//! ## Rule shapes
//! - **seconds, minutes**: trailing-digit rule — counts ending in 1 take
//!   the alternate column except exactly 11; counts ending in 2–4 take the
//!   plural column except when the tens quotient is exactly 1 (12–14);
//!   everything else stays on the base column.
//! - **hours**: literal case sets over the clamped 0–23 range: {1, 21}
//!   base, {2, 3, 4, 22, 23} alternate, otherwise plural.
//! - **days**: counts whose last two digits fall in 11–14 take the plural
//!   column; otherwise the last digit decides (1 base, 2–4 alternate,
//!   rest plural).
//! - **months, years**: same 11–14 band first, then the last digit; the
//!   band column doubles as the catch-all for digits without a rule of
//!   their own (3, 4, 6–9).
//!
//! Counts of zero never reach these functions in practice — zero-valued
//! units are dropped before rendering — but every function is total.

use crate::core::units::Unit;

/// The three noun columns carried per unit by every language dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// Base column ("year", "день", …).
    Singular,
    /// General plural column ("years", "дней", …).
    Plural,
    /// Third column used for Slavic few-counts and teen handling
    /// ("year_", "дня", …).
    Alternate,
}

/// Select the noun column for a normalized `count` of `unit`.
pub fn plural_form(unit: Unit, count: u64) -> PluralForm {
    match unit {
        Unit::Seconds | Unit::Minutes => clock_form(count),
        Unit::Hours => hour_form(count),
        Unit::Days => day_form(count),
        Unit::Months => month_form(count),
        Unit::Years => year_form(count),
    }
}

// Seconds and minutes share one rule. Note the tens check is on the whole
// quotient, not its last digit; within the clamped 0–59 range the two are
// equivalent.
fn clock_form(count: u64) -> PluralForm {
    if count % 10 == 1 && count != 11 {
        PluralForm::Alternate
    } else if (2..=4).contains(&(count % 10)) && count / 10 != 1 {
        PluralForm::Plural
    } else {
        PluralForm::Singular
    }
}

// Hours are clamped to 0–23 when rendered, so the rule is a literal case
// set rather than a modulo rule.
fn hour_form(count: u64) -> PluralForm {
    match count {
        1 | 21 => PluralForm::Singular,
        2 | 3 | 4 | 22 | 23 => PluralForm::Alternate,
        _ => PluralForm::Plural,
    }
}

fn day_form(count: u64) -> PluralForm {
    if (11..=14).contains(&(count % 100)) {
        return PluralForm::Plural;
    }
    match count % 10 {
        1 => PluralForm::Singular,
        2 | 3 | 4 => PluralForm::Alternate,
        _ => PluralForm::Plural,
    }
}

fn month_form(count: u64) -> PluralForm {
    if (11..=14).contains(&(count % 100)) {
        return PluralForm::Plural;
    }
    match count % 10 {
        1 => PluralForm::Singular,
        2 => PluralForm::Alternate,
        0 | 5 => PluralForm::Plural,
        // 3, 4 and 6–9 take the teen-band column.
        _ => PluralForm::Plural,
    }
}

fn year_form(count: u64) -> PluralForm {
    if (11..=14).contains(&(count % 100)) {
        return PluralForm::Alternate;
    }
    match count % 10 {
        1 => PluralForm::Singular,
        2 => PluralForm::Plural,
        0 | 5 => PluralForm::Alternate,
        // 3, 4 and 6–9 take the teen-band column.
        _ => PluralForm::Alternate,
    }
}
