use crate::{CalendarDate, Date, DateValue};

/// A plain Gregorian date; panics on invalid input.
pub(crate) fn gregorian(year: i32, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

/// A range/span value from two `(year, month, day, slash)` tuples.
pub(crate) const fn compound(start: (i32, u8, u8, bool), stop: (i32, u8, u8, bool)) -> DateValue {
    DateValue::Compound {
        start: CalendarDate::new(start.2, start.1, start.0, start.3),
        stop:  CalendarDate::new(stop.2, stop.1, stop.0, stop.3),
    }
}
