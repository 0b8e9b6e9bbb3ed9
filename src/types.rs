use serde::{Deserialize, Serialize};

use crate::consts::{FALLBACK_DAY, FALLBACK_MONTH, JANUARY, MARCH, SEPTEMBER};
use crate::prelude::*;

/// Confidence annotation on a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "estimated")]
    Estimated,
    #[display(fmt = "calculated")]
    Calculated,
}

impl Quality {
    pub const ALL: [Self; 3] = [Self::None, Self::Estimated, Self::Calculated];
}

/// How a date relates to the value it states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// The date itself
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "before")]
    Before,
    #[display(fmt = "after")]
    After,
    #[display(fmt = "about")]
    About,
    /// Somewhere between a start and a stop date
    #[display(fmt = "range")]
    Range,
    /// Continuously from a start to a stop date
    #[display(fmt = "span")]
    Span,
    /// Open-ended, starting at the date
    #[display(fmt = "from")]
    From,
    /// Open-ended, ending at the date
    #[display(fmt = "to")]
    To,
    /// Free text only, no structured components
    #[display(fmt = "textonly")]
    TextOnly,
}

impl Modifier {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Before,
        Self::After,
        Self::About,
        Self::Range,
        Self::Span,
        Self::From,
        Self::To,
        Self::TextOnly,
    ];

    /// Range and span carry both a start and a stop component.
    #[inline]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Range | Self::Span)
    }

    /// Number of positional fields a legacy tuple must supply for this modifier.
    pub const fn arity(self) -> usize {
        match self {
            Self::Range | Self::Span => 8,
            Self::TextOnly => 0,
            _ => 4,
        }
    }
}

/// Calendar systems a date can be expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    #[default]
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Hebrew")]
    Hebrew,
    #[display(fmt = "French Republican")]
    French,
    #[display(fmt = "Persian")]
    Persian,
    #[display(fmt = "Islamic")]
    Islamic,
    #[display(fmt = "Swedish")]
    Swedish,
}

impl Calendar {
    pub const ALL: [Self; 7] = [
        Self::Gregorian,
        Self::Julian,
        Self::Hebrew,
        Self::French,
        Self::Persian,
        Self::Islamic,
        Self::Swedish,
    ];

    /// Position in [`Calendar::ALL`], used to index per-calendar tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether month names come from the locale rather than the calendar itself.
    #[inline]
    pub const fn uses_civil_months(self) -> bool {
        matches!(self, Self::Gregorian | Self::Julian | Self::Swedish)
    }
}

/// The day a year begins on, which decides what year a date near the boundary belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewYear {
    #[default]
    Jan1,
    Mar1,
    /// Lady Day, the English convention until 1752
    Mar25,
    Sep1,
    /// Any other explicit start; validated as a month/day pair
    Custom { month: u8, day: u8 },
}

impl NewYear {
    /// Builds a convention from its starting month and day, folding well-known
    /// starts into their named variants.
    pub const fn from_month_day(month: u8, day: u8) -> Self {
        match (month, day) {
            (JANUARY, 1) => Self::Jan1,
            (MARCH, 1) => Self::Mar1,
            (MARCH, 25) => Self::Mar25,
            (SEPTEMBER, 1) => Self::Sep1,
            _ => Self::Custom { month, day },
        }
    }

    /// Legacy integer codes: 0 = Jan 1, 1 = Mar 1, 2 = Mar 25, 3 = Sep 1.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Jan1),
            1 => Some(Self::Mar1),
            2 => Some(Self::Mar25),
            3 => Some(Self::Sep1),
            _ => None,
        }
    }

    /// First (month, day) of the year under this convention.
    pub const fn month_day(self) -> (u8, u8) {
        match self {
            Self::Jan1 => (JANUARY, 1),
            Self::Mar1 => (MARCH, 1),
            Self::Mar25 => (MARCH, 25),
            Self::Sep1 => (SEPTEMBER, 1),
            Self::Custom { month, day } => (month, day),
        }
    }

    /// Language-neutral annotation token; `None` for the implicit Jan 1.
    pub fn token(self) -> Option<String> {
        match self {
            Self::Jan1 => None,
            Self::Mar1 => Some("Mar1".to_owned()),
            Self::Mar25 => Some("Mar25".to_owned()),
            Self::Sep1 => Some("Sep1".to_owned()),
            Self::Custom { month, day } => Some(format!("{month}-{day}")),
        }
    }

    /// Inverse of [`NewYear::token`], case-insensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "jan1" => return Some(Self::Jan1),
            "mar1" => return Some(Self::Mar1),
            "mar25" => return Some(Self::Mar25),
            "sep1" => return Some(Self::Sep1),
            _ => {},
        }
        let (month, day) = token.split_once('-')?;
        let month = month.parse::<u8>().ok()?;
        let day = day.parse::<u8>().ok()?;
        Some(Self::from_month_day(month, day))
    }
}

/// One positional date component: day, month, year and the dual-dating flag.
///
/// Day and month may be 0 for "unknown"; year 0 means the year is unknown.
/// The values are not checked here; [`crate::Date`] validates them against
/// its calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    day:   u8,
    month: u8,
    year:  i32,
    #[serde(default)]
    slash: bool,
}

impl CalendarDate {
    /// The all-unknown component
    pub const EMPTY: Self = Self::new(0, 0, 0, false);

    pub const fn new(day: u8, month: u8, year: i32, slash: bool) -> Self {
        Self { day, month, year, slash }
    }

    /// Shorthand for a component without dual dating
    pub const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self::new(day, month, year, false)
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn slash(&self) -> bool {
        self.slash
    }

    pub const fn is_empty(&self) -> bool {
        self.day == 0 && self.month == 0 && self.year == 0
    }

    /// Day, month and year are all known.
    pub const fn is_complete(&self) -> bool {
        self.day != 0 && self.month != 0 && self.year != 0
    }

    /// (year, month, day) with unknown month/day replaced for ordering purposes.
    pub const fn with_fallbacks(&self) -> (i32, u8, u8) {
        let month = if self.month == 0 { FALLBACK_MONTH } else { self.month };
        let day = if self.day == 0 { FALLBACK_DAY } else { self.day };
        (self.year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_arity() {
        assert_eq!(Modifier::None.arity(), 4);
        assert_eq!(Modifier::About.arity(), 4);
        assert_eq!(Modifier::From.arity(), 4);
        assert_eq!(Modifier::Range.arity(), 8);
        assert_eq!(Modifier::Span.arity(), 8);
        assert_eq!(Modifier::TextOnly.arity(), 0);
    }

    #[test]
    fn test_modifier_is_compound() {
        let compound: Vec<_> = Modifier::ALL.into_iter().filter(|m| m.is_compound()).collect();
        assert_eq!(compound, vec![Modifier::Range, Modifier::Span]);
    }

    #[test]
    fn test_calendar_index_matches_all() {
        for (i, calendar) in Calendar::ALL.into_iter().enumerate() {
            assert_eq!(calendar.index(), i, "{calendar} out of place");
        }
    }

    #[test]
    fn test_newyear_from_month_day_normalizes() {
        assert_eq!(NewYear::from_month_day(1, 1), NewYear::Jan1);
        assert_eq!(NewYear::from_month_day(3, 1), NewYear::Mar1);
        assert_eq!(NewYear::from_month_day(3, 25), NewYear::Mar25);
        assert_eq!(NewYear::from_month_day(9, 1), NewYear::Sep1);
        assert_eq!(
            NewYear::from_month_day(5, 5),
            NewYear::Custom { month: 5, day: 5 }
        );
    }

    #[test]
    fn test_newyear_codes() {
        assert_eq!(NewYear::from_code(0), Some(NewYear::Jan1));
        assert_eq!(NewYear::from_code(2), Some(NewYear::Mar25));
        assert_eq!(NewYear::from_code(4), None);
    }

    #[test]
    fn test_newyear_tokens() {
        assert_eq!(NewYear::Jan1.token(), None);
        assert_eq!(NewYear::Mar25.token().as_deref(), Some("Mar25"));
        assert_eq!(NewYear::from_month_day(5, 5).token().as_deref(), Some("5-5"));

        assert_eq!(NewYear::from_token("mar25"), Some(NewYear::Mar25));
        assert_eq!(NewYear::from_token(" Sep1 "), Some(NewYear::Sep1));
        assert_eq!(NewYear::from_token("3-25"), Some(NewYear::Mar25));
        assert_eq!(
            NewYear::from_token("5-5"),
            Some(NewYear::Custom { month: 5, day: 5 })
        );
        assert_eq!(NewYear::from_token("Julian"), None);
        assert_eq!(NewYear::from_token("5-x"), None);
    }

    #[test]
    fn test_calendar_date_fallbacks() {
        assert_eq!(CalendarDate::ymd(1789, 0, 0).with_fallbacks(), (1789, 1, 1));
        assert_eq!(CalendarDate::ymd(1789, 6, 0).with_fallbacks(), (1789, 6, 1));
        assert_eq!(CalendarDate::ymd(1789, 6, 27).with_fallbacks(), (1789, 6, 27));
    }

    #[test]
    fn test_calendar_date_emptiness() {
        assert!(CalendarDate::EMPTY.is_empty());
        assert!(!CalendarDate::EMPTY.is_complete());
        assert!(!CalendarDate::ymd(1789, 0, 0).is_empty());
        assert!(CalendarDate::ymd(1789, 2, 5).is_complete());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Quality::Estimated).unwrap();
        assert_eq!(json, r#""estimated""#);
        let parsed: Modifier = serde_json::from_str(r#""text_only""#).unwrap();
        assert_eq!(parsed, Modifier::TextOnly);
        let parsed: NewYear = serde_json::from_str(r#"{"custom":{"month":5,"day":5}}"#).unwrap();
        assert_eq!(parsed, NewYear::Custom { month: 5, day: 5 });

        let date = CalendarDate::new(5, 2, 1789, true);
        let json = serde_json::to_string(&date).unwrap();
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
