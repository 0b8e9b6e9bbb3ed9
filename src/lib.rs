//! Genealogical dates.
//!
//! A [`Date`] records what a source says about when something happened: an
//! exact day, a partial date, an approximation, a range or span, or just the
//! source's own words. Values carry a quality, a modifier, a calendar and a
//! new-year convention, and derive a sort value that orders dates across
//! calendars. Localized parsers and displayers live in [`locale`].

#[macro_use]
mod logging;

pub mod calendar;
pub mod config;
mod consts;
pub mod interval;
pub mod locale;
mod prelude;
pub mod timeline;
mod tuple;
mod types;
mod validate;

#[cfg(test)]
mod test_utils;

pub use config::{DateFormat, IntervalSettings, Settings};
pub use consts::*;
pub use interval::DateInterval;
pub use tuple::LegacyField;
pub use types::{Calendar, CalendarDate, Modifier, NewYear, Quality};

use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::component_sort_value;
use crate::locale::{DisplayDate, ParseDate};
use crate::prelude::*;

/// Which part of a date a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DatePart {
    #[display(fmt = "start date")]
    Start,
    #[display(fmt = "stop date")]
    Stop,
    #[display(fmt = "new year")]
    NewYear,
}

/// Error returned when a candidate date value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Wrong number or kind of components for the modifier.
    #[error("Malformed date value: {0}")]
    Malformed(String),

    /// Day outside the month it belongs to.
    #[error("Invalid day {day} in month {month} of year {year} ({part})")]
    InvalidDayOfMonth {
        part:  DatePart,
        day:   i32,
        month: i32,
        year:  i32,
    },

    /// Month the calendar does not have.
    #[error("Invalid month {month} ({part})")]
    InvalidMonth { part: DatePart, month: i32 },
}

/// The structured part of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateValue {
    /// One component, for every non-compound modifier
    Regular(CalendarDate),
    /// Start and stop, for ranges and spans
    Compound { start: CalendarDate, stop: CalendarDate },
    /// No components; the date is its text
    TextOnly,
}

impl Default for DateValue {
    fn default() -> Self {
        Self::Regular(CalendarDate::EMPTY)
    }
}

/// A genealogical date.
///
/// Values only change through [`Date::new`] and [`Date::set`], which validate
/// the whole value and keep the sort value in step with it.
///
/// Equality follows what the date says rather than how it was written down:
/// two text-only dates are equal when their texts are; any other pair compares
/// quality, modifier, calendar, new year and components, ignoring the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "DateRecord", into = "DateRecord")]
pub struct Date {
    quality:  Quality,
    modifier: Modifier,
    calendar: Calendar,
    newyear:  NewYear,
    value:    DateValue,
    text:     String,
    sortval:  i64,
}

impl Date {
    /// Builds a validated date.
    ///
    /// # Errors
    /// Returns a [`DateError`] if the value does not fit the modifier or the
    /// calendar, or the new year is not a real month/day.
    pub fn new(
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        value: DateValue,
        text: impl Into<String>,
        newyear: NewYear,
    ) -> Result<Self, DateError> {
        let text = text.into();
        validate::validate(modifier, calendar, &value, &text, newyear)?;
        let sortval = match value {
            DateValue::Regular(start) | DateValue::Compound { start, .. } => {
                component_sort_value(calendar, &start, newyear)
            },
            DateValue::TextOnly => 0,
        };
        trace!("built {modifier} {calendar} date with sort value {sortval}");
        Ok(Self {
            quality,
            modifier,
            calendar,
            newyear,
            value,
            text,
            sortval,
        })
    }

    /// A Gregorian date with no qualifiers.
    ///
    /// # Errors
    /// See [`Date::new`].
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(
            Quality::None,
            Modifier::None,
            Calendar::Gregorian,
            DateValue::Regular(CalendarDate::ymd(year, month, day)),
            String::new(),
            NewYear::Jan1,
        )
    }

    /// A date that is nothing but its text. Blank text gives the empty date.
    pub fn text_only(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            return Self::default();
        }
        Self {
            modifier: Modifier::TextOnly,
            value: DateValue::TextOnly,
            text,
            ..Self::default()
        }
    }

    /// Replaces the whole value. On error `self` is left untouched.
    ///
    /// # Errors
    /// See [`Date::new`].
    pub fn set(
        &mut self,
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        value: DateValue,
        text: impl Into<String>,
        newyear: NewYear,
    ) -> Result<(), DateError> {
        *self = Self::new(quality, modifier, calendar, value, text, newyear)?;
        Ok(())
    }

    /// Replaces only the text; structured dates keep their value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub const fn quality(&self) -> Quality {
        self.quality
    }

    #[inline]
    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    #[inline]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    #[inline]
    pub const fn newyear(&self) -> NewYear {
        self.newyear
    }

    #[inline]
    pub const fn value(&self) -> &DateValue {
        &self.value
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Serial day number used for ordering; 0 for text-only and empty dates.
    #[inline]
    pub const fn sort_value(&self) -> i64 {
        self.sortval
    }

    /// The primary component; empty for text-only dates.
    pub const fn start(&self) -> CalendarDate {
        match self.value {
            DateValue::Regular(start) | DateValue::Compound { start, .. } => start,
            DateValue::TextOnly => CalendarDate::EMPTY,
        }
    }

    /// The secondary component of a range or span.
    pub const fn stop(&self) -> Option<CalendarDate> {
        match self.value {
            DateValue::Compound { stop, .. } => Some(stop),
            _ => None,
        }
    }

    pub const fn year(&self) -> i32 {
        self.start().year()
    }

    pub const fn month(&self) -> u8 {
        self.start().month()
    }

    pub const fn day(&self) -> u8 {
        self.start().day()
    }

    pub const fn slash(&self) -> bool {
        self.start().slash()
    }

    pub const fn stop_year(&self) -> Option<i32> {
        match self.stop() {
            Some(stop) => Some(stop.year()),
            None => None,
        }
    }

    /// Neither components nor text.
    pub fn is_empty(&self) -> bool {
        match self.value {
            DateValue::Regular(start) => start.is_empty(),
            DateValue::Compound { start, stop } => start.is_empty() && stop.is_empty(),
            DateValue::TextOnly => self.text.is_empty(),
        }
    }

    /// Has structured content.
    pub fn is_valid(&self) -> bool {
        self.modifier != Modifier::TextOnly && !self.is_empty()
    }

    #[inline]
    pub const fn is_compound(&self) -> bool {
        self.modifier.is_compound()
    }

    /// A plain, fully known date: no quality or modifier and every part present.
    pub const fn is_regular(&self) -> bool {
        matches!(self.quality, Quality::None)
            && matches!(self.modifier, Modifier::None)
            && self.start().is_complete()
    }

    /// Orders by sort value only, across calendars.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        self.sortval.cmp(&other.sortval)
    }

    /// Stricter than `==`: also compares the text.
    pub fn is_identical(&self, other: &Self) -> bool {
        self == other && self.text == other.text && self.quality == other.quality
    }

    /// The same date expressed in another calendar, with a January 1 new year.
    ///
    /// Unknown days and months stay unknown. Text-only dates are returned as is.
    ///
    /// # Errors
    /// [`DateError::Malformed`] when a component has no year to convert from.
    pub fn to_calendar(&self, calendar: Calendar) -> Result<Self, DateError> {
        if self.modifier == Modifier::TextOnly || self.calendar == calendar {
            return Ok(self.clone());
        }
        let convert = |date: &CalendarDate| -> Result<CalendarDate, DateError> {
            if date.is_empty() {
                return Ok(*date);
            }
            if date.year() == 0 {
                return Err(DateError::Malformed(format!(
                    "cannot convert a {} date without a year",
                    self.calendar
                )));
            }
            let sdn = component_sort_value(self.calendar, date, self.newyear);
            let (year, month, day) = calendar::from_sdn(calendar, sdn);
            Ok(CalendarDate::new(
                if date.day() == 0 { 0 } else { day },
                if date.month() == 0 { 0 } else { month },
                year,
                false,
            ))
        };
        let value = match &self.value {
            DateValue::Regular(start) => DateValue::Regular(convert(start)?),
            DateValue::Compound { start, stop } => DateValue::Compound {
                start: convert(start)?,
                stop:  convert(stop)?,
            },
            DateValue::TextOnly => DateValue::TextOnly,
        };
        Self::new(
            self.quality,
            self.modifier,
            calendar,
            value,
            self.text.clone(),
            NewYear::Jan1,
        )
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        if self.modifier == Modifier::TextOnly && other.modifier == Modifier::TextOnly {
            return self.text == other.text;
        }
        self.quality == other.quality
            && self.modifier == other.modifier
            && self.calendar == other.calendar
            && self.newyear == other.newyear
            && self.value == other.value
    }
}

impl Eq for Date {}

impl FromStr for Date {
    type Err = Infallible;

    /// Parses with the default (English) grammar; unrecognized input becomes a
    /// text-only date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(locale::parser_for(DEFAULT_LANGUAGE).parse(s))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&locale::displayer_for(DEFAULT_LANGUAGE).display(self))
    }
}

/// Serialized shape of a [`Date`]; the sort value is derived, not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DateRecord {
    #[serde(default)]
    quality:  Quality,
    #[serde(default)]
    modifier: Modifier,
    #[serde(default)]
    calendar: Calendar,
    #[serde(default)]
    newyear:  NewYear,
    value:    DateValue,
    #[serde(default)]
    text:     String,
}

impl From<Date> for DateRecord {
    fn from(date: Date) -> Self {
        Self {
            quality:  date.quality,
            modifier: date.modifier,
            calendar: date.calendar,
            newyear:  date.newyear,
            value:    date.value,
            text:     date.text,
        }
    }
}

impl TryFrom<DateRecord> for Date {
    type Error = DateError;

    fn try_from(record: DateRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.quality,
            record.modifier,
            record.calendar,
            record.value,
            record.text,
            record.newyear,
        )
    }
}
