//! Static language dictionaries for duration rendering.
//!
//! Purpose
//! -------
//! Hold the three built-in rendering vocabularies — Kazakh (`kk`), Russian
//! (`ru`), English (`en`) — as immutable static tables: three noun columns
//! per unit plus the conjunction word placed before the final phrase.
//!
//! Key behaviors
//! -------------
//! - [`lookup`] resolves a language code to its [`LanguageSpec`], returning
//!   `None` for unknown codes so the caller decides when the miss surfaces.
//! - [`LanguageSpec::noun`] picks the exact noun for a unit and
//!   [`PluralForm`] column.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tables are read-only and never adjusted at runtime; the noun bytes
//!   are the compatibility surface and are preserved exactly, including
//!   irregularities in the English columns (e.g. the alternate minute
//!   column reads "minutes").
//! - Kazakh nouns do not inflect for count, so all three columns per unit
//!   hold the same word.
//!
//! Conventions
//! -----------
//! - Column names follow [`PluralForm`]: base singular, general plural,
//!   and the alternate column used by Slavic few-counts and teen handling.
//! - The join template for every language is
//!   `"<comma-joined head> <conjunction> <tail>"`.

use crate::core::plural::PluralForm;
use crate::core::units::Unit;

/// The three noun columns for one unit in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForms {
    pub singular: &'static str,
    pub plural: &'static str,
    pub alternate: &'static str,
}

impl NounForms {
    /// Column accessor keyed by [`PluralForm`].
    pub fn select(&self, form: PluralForm) -> &'static str {
        match form {
            PluralForm::Singular => self.singular,
            PluralForm::Plural => self.plural,
            PluralForm::Alternate => self.alternate,
        }
    }
}

/// One language's complete rendering vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Code used for lookup (`"kk"`, `"ru"`, `"en"`).
    pub code: &'static str,
    /// Word placed between the head phrases and the final phrase.
    pub conjunction: &'static str,
    pub years: NounForms,
    pub months: NounForms,
    pub days: NounForms,
    pub hours: NounForms,
    pub minutes: NounForms,
    pub seconds: NounForms,
}

impl LanguageSpec {
    /// Noun columns for `unit`.
    pub fn forms(&self, unit: Unit) -> &NounForms {
        match unit {
            Unit::Years => &self.years,
            Unit::Months => &self.months,
            Unit::Days => &self.days,
            Unit::Hours => &self.hours,
            Unit::Minutes => &self.minutes,
            Unit::Seconds => &self.seconds,
        }
    }

    /// The noun for `unit` in `form`.
    pub fn noun(&self, unit: Unit, form: PluralForm) -> &'static str {
        self.forms(unit).select(form)
    }
}

/// Built-in dictionaries; resolved through [`lookup`].
static LANGUAGES: [LanguageSpec; 3] = [
    LanguageSpec {
        code: "kk",
        conjunction: "және",
        years: NounForms { singular: "жыл", plural: "жыл", alternate: "жыл" },
        months: NounForms { singular: "ай", plural: "ай", alternate: "ай" },
        days: NounForms { singular: "күн", plural: "күн", alternate: "күн" },
        hours: NounForms { singular: "сағат", plural: "сағат", alternate: "сағат" },
        minutes: NounForms { singular: "минут", plural: "минут", alternate: "минут" },
        seconds: NounForms { singular: "секунд", plural: "секунд", alternate: "секунд" },
    },
    LanguageSpec {
        code: "ru",
        conjunction: "и",
        years: NounForms { singular: "год", plural: "года", alternate: "лет" },
        months: NounForms { singular: "месяц", plural: "месяцев", alternate: "месяца" },
        days: NounForms { singular: "день", plural: "дней", alternate: "дня" },
        hours: NounForms { singular: "час", plural: "часов", alternate: "часа" },
        minutes: NounForms { singular: "минут", plural: "минуты", alternate: "минута" },
        seconds: NounForms { singular: "секунд", plural: "секунды", alternate: "секунда" },
    },
    LanguageSpec {
        code: "en",
        conjunction: "and",
        years: NounForms { singular: "year", plural: "years", alternate: "years" },
        months: NounForms { singular: "month", plural: "months", alternate: "months" },
        days: NounForms { singular: "day", plural: "days", alternate: "days" },
        hours: NounForms { singular: "hour", plural: "hours", alternate: "hours" },
        minutes: NounForms { singular: "minute", plural: "minutes", alternate: "minutes" },
        seconds: NounForms { singular: "second", plural: "seconds", alternate: "seconds" },
    },
];

/// Find the dictionary for `code`; `None` when the code is unknown.
pub fn lookup(code: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES.iter().find(|language| language.code == code)
}
