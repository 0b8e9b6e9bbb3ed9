use crate::calendar::{component_sort_value, days_in_month, from_sdn};
use crate::config::IntervalSettings;
use crate::consts::{DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE};
use crate::prelude::*;
use crate::types::{Calendar, CalendarDate, Modifier, NewYear};
use crate::{Date, DateError};

/// The span of days a date could refer to, as inclusive serial day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{earliest}..={latest}")]
pub struct DateInterval {
    earliest: i64,
    latest:   i64,
}

impl DateInterval {
    /// Creates an interval.
    ///
    /// # Errors
    /// Returns [`DateError::Malformed`] if `earliest` is after `latest`.
    pub fn new(earliest: i64, latest: i64) -> Result<Self, DateError> {
        if earliest > latest {
            return Err(DateError::Malformed(format!(
                "interval starts ({earliest}) after it ends ({latest})"
            )));
        }
        Ok(Self { earliest, latest })
    }

    pub const fn earliest(&self) -> i64 {
        self.earliest
    }

    pub const fn latest(&self) -> i64 {
        self.latest
    }

    /// Number of days covered.
    pub const fn days(&self) -> i64 {
        self.latest - self.earliest + 1
    }

    pub const fn contains(&self, sdn: i64) -> bool {
        self.earliest <= sdn && sdn <= self.latest
    }

    /// Any day in common.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.earliest <= other.latest && other.earliest <= self.latest
    }

    /// Every day of `self` is also in `other`.
    pub const fn is_within(&self, other: &Self) -> bool {
        other.earliest <= self.earliest && self.latest <= other.latest
    }

    /// First and last day as (year, month, day) in a calendar.
    pub fn bounds_in(&self, calendar: Calendar) -> ((i32, u8, u8), (i32, u8, u8)) {
        (from_sdn(calendar, self.earliest), from_sdn(calendar, self.latest))
    }
}

impl Date {
    /// Days this date could refer to.
    ///
    /// Unknown days widen to the month and unknown months to the year.
    /// BEFORE and TO reach back `before_years`, AFTER and FROM forward
    /// `after_years`, ABOUT both ways by `about_years`. Text-only dates and
    /// dates without a year have no interval.
    pub fn interval(&self, settings: &IntervalSettings) -> Option<DateInterval> {
        let (first, last) = bounds(self.calendar(), &self.start(), self.newyear())?;
        let (earliest, latest) = match self.modifier() {
            Modifier::None => (first, last),
            Modifier::Before | Modifier::To => (first - years(settings.before_years), last),
            Modifier::After | Modifier::From => (first, last + years(settings.after_years)),
            Modifier::About => (
                first - years(settings.about_years),
                last + years(settings.about_years),
            ),
            Modifier::Range | Modifier::Span => {
                let (_, stop) = bounds(self.calendar(), &self.stop()?, self.newyear())?;
                (first, stop)
            },
            Modifier::TextOnly => return None,
        };
        DateInterval::new(earliest, latest).ok()
    }

    /// Whether two dates could refer to the same day.
    pub fn matches(&self, other: &Self, settings: &IntervalSettings) -> bool {
        match (self.interval(settings), other.interval(settings)) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }
}

/// Mean Gregorian year length times `count`, in days.
fn years(count: u16) -> i64 {
    i64::from(count) * DAYS_PER_GREGORIAN_CYCLE / i64::from(GREGORIAN_CYCLE)
}

fn bounds(calendar: Calendar, date: &CalendarDate, newyear: NewYear) -> Option<(i64, i64)> {
    if date.year() == 0 {
        return None;
    }
    let first = component_sort_value(calendar, date, newyear);
    let last = match (date.month(), date.day()) {
        (0, _) => {
            let next = CalendarDate::ymd(date.year().saturating_add(1), 0, 0);
            component_sort_value(calendar, &next, newyear) - 1
        },
        (month, 0) => first + i64::from(days_in_month(calendar, date.year(), month)) - 1,
        _ => first,
    };
    Some((first, last))
}
