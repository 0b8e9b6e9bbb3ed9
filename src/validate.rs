use crate::calendar::{component_sort_value, days_in_month, months_in_year};
use crate::consts::{DECEMBER, MAX_DAY};
use crate::types::{Calendar, CalendarDate, Modifier, NewYear};
use crate::{DateError, DatePart, DateValue};

/// Checks a candidate date value before it is stored.
///
/// # Errors
/// - [`DateError::Malformed`] when the value shape does not fit the modifier,
///   a text-only date has no text, a dual-dated component has no year, or a
///   range/span stops before it starts.
/// - [`DateError::InvalidMonth`] / [`DateError::InvalidDayOfMonth`] for
///   components (or an explicit new year) the calendar cannot hold.
pub(crate) fn validate(
    modifier: Modifier,
    calendar: Calendar,
    value: &DateValue,
    text: &str,
    newyear: NewYear,
) -> Result<(), DateError> {
    match (modifier, value) {
        (Modifier::TextOnly, DateValue::TextOnly) if text.trim().is_empty() => {
            return Err(DateError::Malformed("a text-only date needs its text".to_owned()));
        },
        (Modifier::TextOnly, DateValue::TextOnly) => {},
        (Modifier::TextOnly, _) => {
            return Err(DateError::Malformed(
                "a text-only date cannot carry components".to_owned(),
            ));
        },
        (m, DateValue::Compound { start, stop }) if m.is_compound() => {
            component(calendar, start, DatePart::Start)?;
            component(calendar, stop, DatePart::Stop)?;
            ordering(calendar, start, stop, newyear)?;
        },
        (m, DateValue::Regular(start)) if !m.is_compound() => {
            component(calendar, start, DatePart::Start)?;
        },
        (m, _) => {
            return Err(DateError::Malformed(format!(
                "{m} date needs {} components",
                if m.is_compound() { "start and stop" } else { "exactly one set of" }
            )));
        },
    }
    new_year(newyear)
}

fn component(calendar: Calendar, date: &CalendarDate, part: DatePart) -> Result<(), DateError> {
    let (day, month, year) = (date.day(), date.month(), date.year());
    let invalid_day = || DateError::InvalidDayOfMonth {
        part,
        day: i32::from(day),
        month: i32::from(month),
        year,
    };

    if date.slash() && year == 0 {
        return Err(DateError::Malformed(format!("{part} is dual-dated but has no year")));
    }
    if month > months_in_year(calendar) {
        return Err(DateError::InvalidMonth { part, month: i32::from(month) });
    }
    if month == 0 {
        return if day == 0 { Ok(()) } else { Err(invalid_day()) };
    }

    match days_in_month(calendar, year, month) {
        // Adar I outside a Hebrew leap year
        0 => Err(DateError::InvalidMonth { part, month: i32::from(month) }),
        limit if day > limit => Err(invalid_day()),
        _ => Ok(()),
    }
}

fn ordering(
    calendar: Calendar,
    start: &CalendarDate,
    stop: &CalendarDate,
    newyear: NewYear,
) -> Result<(), DateError> {
    if start.year() == 0 || stop.year() == 0 {
        return Ok(());
    }
    let first = component_sort_value(calendar, start, newyear);
    let last = component_sort_value(calendar, stop, newyear);
    if last < first {
        return Err(DateError::Malformed(format!(
            "stop date {}-{}-{} precedes start date {}-{}-{}",
            stop.year(),
            stop.month(),
            stop.day(),
            start.year(),
            start.month(),
            start.day(),
        )));
    }
    Ok(())
}

fn new_year(newyear: NewYear) -> Result<(), DateError> {
    let NewYear::Custom { month, day } = newyear else {
        return Ok(());
    };
    if !(1..=DECEMBER).contains(&month) {
        return Err(DateError::InvalidMonth {
            part:  DatePart::NewYear,
            month: i32::from(month),
        });
    }
    if !(1..=MAX_DAY).contains(&day) {
        return Err(DateError::InvalidDayOfMonth {
            part:  DatePart::NewYear,
            day:   i32::from(day),
            month: i32::from(month),
            year:  0,
        });
    }
    Ok(())
}
