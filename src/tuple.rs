//! Positional (legacy tuple) construction of dates.
//!
//! Older records store a date value as a flat sequence: `(day, month, year, slash)`
//! for simple modifiers and two such groups for ranges and spans.

use crate::consts::{MAX_DAY, MAX_MONTH};
use crate::prelude::*;
use crate::types::{Calendar, CalendarDate, Modifier, NewYear, Quality};
use crate::{Date, DateError, DatePart, DateValue};

/// One field of a positional date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum LegacyField {
    Number(i32),
    Flag(bool),
}

/// Number of fields describing one component.
const GROUP: usize = 4;

impl Date {
    /// Builds a date from a positional value.
    ///
    /// A text-only date accepts either no fields or the empty group `(0, 0, 0, false)`.
    ///
    /// # Errors
    /// [`DateError::Malformed`] when the field count or kinds do not fit the
    /// modifier, otherwise whatever [`Date::new`] reports.
    pub fn from_tuple(
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        fields: &[LegacyField],
        text: impl Into<String>,
        newyear: NewYear,
    ) -> Result<Self, DateError> {
        let value = value_from_fields(modifier, fields)?;
        Self::new(quality, modifier, calendar, value, text, newyear)
    }

    /// Positional form of the value, the inverse of [`Date::from_tuple`].
    pub fn to_tuple(&self) -> Vec<LegacyField> {
        let group = |c: &CalendarDate| {
            [
                LegacyField::Number(i32::from(c.day())),
                LegacyField::Number(i32::from(c.month())),
                LegacyField::Number(c.year()),
                LegacyField::Flag(c.slash()),
            ]
        };
        match self.value() {
            DateValue::Regular(start) => group(start).to_vec(),
            DateValue::Compound { start, stop } => {
                group(start).into_iter().chain(group(stop)).collect()
            },
            DateValue::TextOnly => Vec::new(),
        }
    }
}

fn value_from_fields(modifier: Modifier, fields: &[LegacyField]) -> Result<DateValue, DateError> {
    if modifier == Modifier::TextOnly {
        return match fields {
            [] => Ok(DateValue::TextOnly),
            [_, _, _, _] if component(fields, DatePart::Start)? == CalendarDate::EMPTY => {
                Ok(DateValue::TextOnly)
            },
            _ => Err(DateError::Malformed(
                "text-only dates take no components".to_owned(),
            )),
        };
    }

    if fields.len() != modifier.arity() {
        return Err(DateError::Malformed(format!(
            "{modifier} date takes {} fields, got {}",
            modifier.arity(),
            fields.len()
        )));
    }

    let start = component(&fields[..GROUP], DatePart::Start)?;
    if modifier.is_compound() {
        let stop = component(&fields[GROUP..], DatePart::Stop)?;
        Ok(DateValue::Compound { start, stop })
    } else {
        Ok(DateValue::Regular(start))
    }
}

fn component(fields: &[LegacyField], part: DatePart) -> Result<CalendarDate, DateError> {
    let &[day, month, year, slash] = fields else {
        return Err(DateError::Malformed(format!(
            "{part} needs {GROUP} fields, got {}",
            fields.len()
        )));
    };
    let (LegacyField::Number(day), LegacyField::Number(month), LegacyField::Number(year)) =
        (day, month, year)
    else {
        return Err(DateError::Malformed(format!(
            "{part} day, month and year must be numbers"
        )));
    };
    let LegacyField::Flag(slash) = slash else {
        return Err(DateError::Malformed(format!("{part} dual-dating flag must be a boolean")));
    };

    let month = u8::try_from(month)
        .ok()
        .filter(|m| *m <= MAX_MONTH)
        .ok_or(DateError::InvalidMonth { part, month })?;
    let day = u8::try_from(day)
        .ok()
        .filter(|d| *d <= MAX_DAY)
        .ok_or(DateError::InvalidDayOfMonth {
            part,
            day,
            month: i32::from(month),
            year,
        })?;
    Ok(CalendarDate::new(day, month, year, slash))
}
