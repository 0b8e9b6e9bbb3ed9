//! Localized date parsing and display.
//!
//! Each supported language is described by a [`Grammar`]: its month names,
//! quality and modifier words, calendar names and numeric conventions. A
//! [`DateParser`] compiles a grammar into matchers once; a [`DateDisplayer`]
//! renders dates with it. For every registered language, displaying a date
//! and parsing the result yields an equal date.

mod de;
mod displayer;
mod en;
mod fr;
mod nl;
mod parser;
mod sv;


use std::sync::LazyLock;

pub use displayer::DateDisplayer;
pub use parser::DateParser;

use crate::Date;
use crate::config::DateFormat;
use crate::consts::DEFAULT_LANGUAGE;
use crate::types::Calendar;

/// Turns text into a date. Never fails: unrecognized text becomes a
/// text-only date.
pub trait ParseDate {
    fn parse(&self, text: &str) -> Date;
}

/// Renders a date as text that the matching [`ParseDate`] reads back.
pub trait DisplayDate {
    fn display(&self, date: &Date) -> String;
}

/// Where quality words go relative to the rest of the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPosition {
    Prefix,
    Suffix,
}

/// Field order of purely numeric dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Word lists and conventions of one language.
///
/// The first entry of each word list is what gets displayed; the rest are
/// accepted when parsing.
#[derive(Debug)]
pub struct Grammar {
    /// Lowercase language code, e.g. `"de"`
    pub language:          &'static str,
    /// Other codes resolving to this grammar
    pub aliases:           &'static [&'static str],
    pub month_names:       [&'static str; 12],
    pub month_abbrevs:     [&'static str; 12],
    /// Extra spellings accepted for civil months
    pub month_variants:    &'static [(&'static str, u8)],
    pub estimated:         &'static [&'static str],
    pub calculated:        &'static [&'static str],
    pub quality_position:  QualityPosition,
    pub before:            &'static [&'static str],
    pub after:             &'static [&'static str],
    pub about:             &'static [&'static str],
    /// Opens FROM dates and spans
    pub from:              &'static [&'static str],
    /// Opens TO dates and closes spans
    pub to:                &'static [&'static str],
    pub between:           &'static [&'static str],
    pub and:               &'static [&'static str],
    /// Era marker for years before year 1
    pub bce:               &'static [&'static str],
    /// Indexed by [`Calendar::index`]
    pub calendar_names:    [&'static str; 7],
    pub numeric_order:     NumericOrder,
    pub numeric_separator: char,
    /// Written after the day in day-first formats, `"."` in German
    pub day_suffix:        &'static str,
    /// Format used when none is configured
    pub format:            DateFormat,
}

impl Grammar {
    /// Displayed word: the first of a list.
    pub(crate) fn word(words: &'static [&'static str]) -> &'static str {
        words.first().copied().unwrap_or_default()
    }
}

/// A language's parser and displayer together.
#[derive(Debug, Clone, Copy)]
pub struct DateLocale {
    parser:    &'static DateParser,
    displayer: DateDisplayer,
}

impl DateLocale {
    pub const fn new(parser: &'static DateParser, displayer: DateDisplayer) -> Self {
        Self { parser, displayer }
    }

    /// Same language, different display format.
    #[must_use]
    pub const fn with_format(self, format: DateFormat) -> Self {
        Self {
            displayer: self.displayer.with_format(format),
            ..self
        }
    }

    pub const fn parser(&self) -> &'static DateParser {
        self.parser
    }

    pub const fn displayer(&self) -> &DateDisplayer {
        &self.displayer
    }
}

impl ParseDate for DateLocale {
    fn parse(&self, text: &str) -> Date {
        self.parser.parse(text)
    }
}

impl DisplayDate for DateLocale {
    fn display(&self, date: &Date) -> String {
        self.displayer.display(date)
    }
}

/// Registered grammars; the first is the fallback language.
static GRAMMARS: [&Grammar; 5] = [
    &en::GRAMMAR,
    &de::GRAMMAR,
    &fr::GRAMMAR,
    &nl::GRAMMAR,
    &sv::GRAMMAR,
];

// Built-in word lists are escaped before compiling.
#[allow(clippy::expect_used)]
static PARSERS: LazyLock<Vec<DateParser>> = LazyLock::new(|| {
    GRAMMARS
        .iter()
        .map(|grammar| DateParser::new(grammar).expect("built-in date grammar compiles"))
        .collect()
});

/// Codes of every registered language.
pub fn languages() -> impl Iterator<Item = &'static str> {
    GRAMMARS.iter().map(|grammar| grammar.language)
}

/// Grammar for a language or POSIX locale name, falling back to English.
pub fn grammar_for(language: &str) -> &'static Grammar {
    GRAMMARS[position(language)]
}

/// Parser for a language or POSIX locale name, falling back to English.
pub fn parser_for(language: &str) -> &'static DateParser {
    &PARSERS[position(language)]
}

/// Displayer for a language in its preferred format.
pub fn displayer_for(language: &str) -> DateDisplayer {
    DateDisplayer::new(grammar_for(language))
}

pub fn locale_for(language: &str) -> DateLocale {
    let index = position(language);
    DateLocale::new(&PARSERS[index], DateDisplayer::new(GRAMMARS[index]))
}

/// Resolves `de_DE.UTF-8@euro` → `de_de` → `de`.
fn position(language: &str) -> usize {
    let code = language.trim().to_lowercase().replace('-', "_");
    let code = code.split(['.', '@']).next().unwrap_or_default();
    let base = code.split('_').next().unwrap_or_default();

    [code, base]
        .into_iter()
        .find_map(|candidate| {
            GRAMMARS.iter().position(|g| {
                g.language == candidate || g.aliases.iter().any(|alias| *alias == candidate)
            })
        })
        .unwrap_or_else(|| {
            debug!("no date grammar for {language:?}, using {DEFAULT_LANGUAGE}");
            0
        })
}

const HEBREW_MONTHS: [&str; 13] = [
    "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "AdarI", "AdarII", "Nisan", "Iyyar", "Sivan",
    "Tammuz", "Av", "Elul",
];

const FRENCH_MONTHS: [&str; 13] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Extra",
];

const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi I",
    "Rabi II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

const PERSIAN_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Month names that belong to the calendar rather than the language.
pub(crate) const fn calendar_months(calendar: Calendar) -> Option<&'static [&'static str]> {
    match calendar {
        Calendar::Hebrew => Some(&HEBREW_MONTHS),
        Calendar::French => Some(&FRENCH_MONTHS),
        Calendar::Islamic => Some(&ISLAMIC_MONTHS),
        Calendar::Persian => Some(&PERSIAN_MONTHS),
        Calendar::Gregorian | Calendar::Julian | Calendar::Swedish => None,
    }
}
