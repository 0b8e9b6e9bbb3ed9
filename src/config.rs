//! Runtime settings: display language, display format and interval widths.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ABOUT_YEARS, DEFAULT_AFTER_YEARS, DEFAULT_BEFORE_YEARS, DEFAULT_LANGUAGE,
    LOCALE_ENV_VARS,
};
use crate::locale::{self, DateLocale};
use crate::prelude::*;

/// How a date component is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `1789-02-05`
    #[display(fmt = "YYYY-MM-DD (ISO)")]
    Iso,
    /// Digits in the locale's order and separator, `2/5/1789` in English
    #[display(fmt = "Numerical")]
    Numerical,
    /// `February 5, 1789`
    #[display(fmt = "Month Day, Year")]
    MonthDayYear,
    /// `Feb 5, 1789`
    #[display(fmt = "MON DAY, YEAR")]
    MonAbbrDayYear,
    /// `5 February 1789`
    #[display(fmt = "Day Month Year")]
    DayMonthYear,
    /// `5 Feb 1789`
    #[display(fmt = "DAY MON YEAR")]
    DayMonAbbrYear,
}

impl DateFormat {
    pub const ALL: [Self; 6] = [
        Self::Iso,
        Self::Numerical,
        Self::MonthDayYear,
        Self::MonAbbrDayYear,
        Self::DayMonthYear,
        Self::DayMonAbbrYear,
    ];

    /// Uses abbreviated month names.
    pub const fn abbreviated(self) -> bool {
        matches!(self, Self::MonAbbrDayYear | Self::DayMonAbbrYear)
    }
}

/// Widths, in years, of the open ends of approximate dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalSettings {
    pub about_years:  u16,
    pub before_years: u16,
    pub after_years:  u16,
}

impl Default for IntervalSettings {
    fn default() -> Self {
        Self {
            about_years:  DEFAULT_ABOUT_YEARS,
            before_years: DEFAULT_BEFORE_YEARS,
            after_years:  DEFAULT_AFTER_YEARS,
        }
    }
}

/// Date handling preferences.
///
/// Unset fields fall back to the environment's locale and that locale's
/// preferred format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Option<String>,
    pub format:   Option<DateFormat>,
    pub interval: IntervalSettings,
}

impl Settings {
    /// Defaults, with the language taken from the process environment.
    pub fn from_env() -> Self {
        Self {
            language: Some(Self::language_from_env()),
            ..Self::default()
        }
    }

    /// First non-empty locale variable among `LC_ALL`, `LC_TIME` and `LANG`,
    /// or the default language.
    pub fn language_from_env() -> String {
        language_from(|key| std::env::var(key).ok()).unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
    }

    /// The configured language, or the default one.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Parser and displayer for these settings.
    pub fn locale(&self) -> DateLocale {
        let locale = locale::locale_for(self.language());
        match self.format {
            Some(format) => locale.with_format(format),
            None => locale,
        }
    }
}

fn language_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
}
