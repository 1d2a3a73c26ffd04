//! Duration humanizer: accumulate components, render a localized phrase.
//!
//! This module wires the core building blocks into the user-facing
//! [`Humanizer`]: validated additive setters feed a [`DurationCounters`],
//! and [`Humanizer::humanize`] runs the carry cascade, selects a noun
//! column per unit, and joins the phrases with the active language's
//! conjunction.
//!
//! Key ideas:
//! - The humanizer is an explicit, caller-owned value: confine one
//!   instance per logical caller or session. There is no shared global
//!   state and no lock.
//! - Rendering normalizes the stored counters in place and leaves them in
//!   their post-cascade form; there is no reset operation.
//! - Minimum-unit truncation and suppression shape the output only; they
//!   never touch the stored counters.
//! - Language codes are accepted unchecked and resolve against the
//!   dictionaries only when rendering.

use std::time::Duration;

use crate::{
    core::{
        counters::DurationCounters,
        dictionary::{self, LanguageSpec},
        normalize::normalize,
        plural::plural_form,
        units::Unit,
    },
    errors::{HumanizeError, HumanizeResult},
};

/// Accumulating duration formatter with a selectable language.
///
/// Holds six unit counters and the active language code. Setters add to
/// the counters, rejecting negative deltas; [`Humanizer::humanize`]
/// normalizes the counters and renders every surviving unit from years
/// down to a caller-chosen minimum unit.
///
/// # Notes
/// - Fresh instances start zeroed with language `"kk"`.
/// - After a render the counters keep their normalized values, so further
///   accumulation continues from the normalized state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Humanizer {
    /// Accumulated unit counters.
    pub counters: DurationCounters,
    /// Active language code; resolved against the dictionaries at render
    /// time only.
    pub language: String,
}

impl Humanizer {
    /// Fresh humanizer: zero counters, language `"kk"`.
    pub fn new() -> Humanizer {
        Humanizer { counters: DurationCounters::new(), language: String::from("kk") }
    }

    /// Fresh humanizer with `code` preselected.
    pub fn with_language(code: &str) -> Humanizer {
        let mut humanizer = Humanizer::new();
        humanizer.set_language(code);
        humanizer
    }

    /// Switch the active language for subsequent renders.
    ///
    /// The code is stored unchecked; an unknown code surfaces as
    /// [`HumanizeError::UnknownLanguage`] at render time, not here.
    pub fn set_language(&mut self, code: &str) -> &mut Humanizer {
        self.language = code.to_string();
        self
    }

    /// Add `delta` seconds.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; state unchanged.
    pub fn add_seconds(&mut self, delta: i64) -> HumanizeResult<&mut Humanizer> {
        self.counters.add(Unit::Seconds, delta)?;
        Ok(self)
    }

    /// Add `delta` minutes.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; state unchanged.
    pub fn add_minutes(&mut self, delta: i64) -> HumanizeResult<&mut Humanizer> {
        self.counters.add(Unit::Minutes, delta)?;
        Ok(self)
    }

    /// Add `delta` hours.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; state unchanged.
    pub fn add_hours(&mut self, delta: i64) -> HumanizeResult<&mut Humanizer> {
        self.counters.add(Unit::Hours, delta)?;
        Ok(self)
    }

    /// Add `delta` days.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; state unchanged.
    pub fn add_days(&mut self, delta: i64) -> HumanizeResult<&mut Humanizer> {
        self.counters.add(Unit::Days, delta)?;
        Ok(self)
    }

    /// Add `delta` months.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; state unchanged.
    pub fn add_months(&mut self, delta: i64) -> HumanizeResult<&mut Humanizer> {
        self.counters.add(Unit::Months, delta)?;
        Ok(self)
    }

    /// Add `delta` years.
    ///
    /// # Errors
    /// - [`HumanizeError::NegativeValue`] if `delta < 0`; state unchanged.
    pub fn add_years(&mut self, delta: i64) -> HumanizeResult<&mut Humanizer> {
        self.counters.add(Unit::Years, delta)?;
        Ok(self)
    }

    /// Add the whole seconds of `duration`. Infallible; sub-second
    /// precision is dropped.
    pub fn add_duration(&mut self, duration: Duration) -> &mut Humanizer {
        self.counters.seconds = self.counters.seconds.saturating_add(duration.as_secs());
        self
    }

    /// Render every nonzero unit down to seconds.
    ///
    /// Equivalent to `humanize(Unit::Seconds, &[])`.
    pub fn humanize_all(&mut self) -> HumanizeResult<String> {
        self.humanize(Unit::Seconds, &[])
    }

    /// Normalize the counters and render them as a localized phrase.
    ///
    /// ## Steps
    /// 1. Run the carry cascade over the stored counters (in place; the
    ///    normalized values persist after this call, even on failure).
    /// 2. Resolve the active language against the built-in dictionaries.
    /// 3. Slice the descending unit order at `minimum_unit` (inclusive),
    ///    drop suppressed and zero-valued units, and render the survivors
    ///    as `"<count> <noun>"`.
    /// 4. Join with the language's conjunction before the final phrase.
    ///
    /// ## Arguments
    /// - `minimum_unit`: smallest unit that may appear in the output;
    ///   smaller units are never considered, even when nonzero.
    /// - `suppress`: units removed from the output after truncation.
    ///
    /// ## Errors
    /// - [`HumanizeError::UnknownLanguage`] when the active code has no
    ///   dictionary (the cascade has already run at that point).
    /// - [`HumanizeError::NothingToRender`] when no unit survives
    ///   truncation and suppression.
    pub fn humanize(&mut self, minimum_unit: Unit, suppress: &[Unit]) -> HumanizeResult<String> {
        normalize(&mut self.counters);

        let language = dictionary::lookup(&self.language)
            .ok_or_else(|| HumanizeError::UnknownLanguage { code: self.language.clone() })?;

        let phrases = self.render_phrases(language, minimum_unit, suppress);
        match phrases.as_slice() {
            [] => Err(HumanizeError::NothingToRender { minimum_unit }),
            [only] => Ok(only.clone()),
            [head @ .., tail] => {
                Ok(format!("{} {} {}", head.join(", "), language.conjunction, tail))
            }
        }
    }

    // Truncate the descending unit order at the minimum unit, then filter
    // suppressed and zero-valued units into rendered phrases.
    fn render_phrases(
        &self, language: &LanguageSpec, minimum_unit: Unit, suppress: &[Unit],
    ) -> Vec<String> {
        let stop = Unit::DESCENDING
            .iter()
            .position(|unit| *unit == minimum_unit)
            .unwrap_or(Unit::DESCENDING.len() - 1);

        Unit::DESCENDING[..=stop]
            .iter()
            .copied()
            .filter(|unit| !suppress.contains(unit))
            .filter_map(|unit| {
                let count = self.counters.get(unit);
                (count > 0)
                    .then(|| format!("{count} {}", language.noun(unit, plural_form(unit, count))))
            })
            .collect()
    }
}

impl Default for Humanizer {
    fn default() -> Humanizer {
        Humanizer::new()
    }
}
