use std::collections::HashMap;

use regex::{Captures, Match, Regex};

use super::{Grammar, NumericOrder, ParseDate, calendar_months};
use crate::types::{Calendar, CalendarDate, Modifier, NewYear, Quality};
use crate::{Date, DateError, DateValue};

/// Why a text could not be read as a structured date.
#[derive(Debug, thiserror::Error)]
enum Unrecognized {
    #[error("unknown annotation {0:?}")]
    Annotation(String),
    #[error("no date in {0:?}")]
    Component(String),
    #[error(transparent)]
    Invalid(#[from] DateError),
}

/// Month names of one calendar, compiled into a textual date matcher.
#[derive(Debug)]
struct MonthTable {
    pattern: Regex,
    months:  HashMap<String, u8>,
}

impl MonthTable {
    fn new<'a>(names: impl IntoIterator<Item = (&'a str, u8)>) -> Result<Self, regex::Error> {
        let months: HashMap<String, u8> = names
            .into_iter()
            .map(|(name, month)| (name.to_lowercase(), month))
            .collect();
        let pattern = Regex::new(&format!(
            r"(?i)^(?:(?P<d1>\d{{1,2}})\.?\s+)?(?P<mon>{})\.?(?:\s+(?P<d2>\d{{1,2}}))?(?:,?\s+(?P<y>\d+)(?:/(?P<s>\d+))?)?$",
            alternation(months.keys().map(String::as_str))
        ))?;
        Ok(Self { pattern, months })
    }

    fn numbered(names: &[&str]) -> Result<Self, regex::Error> {
        Self::new(names.iter().copied().zip(1..))
    }

    fn lookup(&self, name: &str) -> Option<u8> {
        self.months.get(&name.to_lowercase()).copied()
    }
}

/// Reads dates written in one language.
///
/// Recognizes, in order: a trailing `(calendar, new year)` annotation, a
/// quality word, span and range phrases, the simple modifiers, and finally the
/// date itself as ISO, numeric, year-only or textual. Anything left over makes
/// the whole input a text-only date.
#[derive(Debug)]
pub struct DateParser {
    grammar:        &'static Grammar,
    annotation:     Regex,
    quality_prefix: Regex,
    quality_suffix: Regex,
    span:           Regex,
    range:          Regex,
    simple:         Regex,
    bce:            Regex,
    iso:            Regex,
    numeric_full:   Regex,
    numeric_month:  Regex,
    year_only:      Regex,
    civil:          MonthTable,
    /// Indexed by [`Calendar::index`]; civil calendars share `civil`
    calendar:       Vec<Option<MonthTable>>,
    calendars:      HashMap<String, Calendar>,
}

impl DateParser {
    /// Compiles a grammar.
    ///
    /// # Errors
    /// Returns the regex error if a compiled pattern exceeds the regex size limits.
    pub fn new(grammar: &'static Grammar) -> Result<Self, regex::Error> {
        let quality = format!(
            "(?:(?P<est>{})|(?P<calc>{}))",
            alternation(grammar.estimated.iter().copied()),
            alternation(grammar.calculated.iter().copied()),
        );
        let between = |open: &[&str], close: &[&str]| {
            Regex::new(&format!(
                r"(?i)^(?:{})\s+(?P<start>.+?)\s+(?:{})\s+(?P<stop>.+)$",
                alternation(open.iter().copied()),
                alternation(close.iter().copied()),
            ))
        };
        let simple = [
            ("before", grammar.before),
            ("after", grammar.after),
            ("about", grammar.about),
            ("from", grammar.from),
            ("to", grammar.to),
        ]
        .iter()
        .map(|(name, words)| format!("(?P<{name}>{})", alternation(words.iter().copied())))
        .collect::<Vec<_>>()
        .join("|");
        let (numeric_full, numeric_month) =
            numeric_patterns(grammar.numeric_order, grammar.numeric_separator);

        let civil = MonthTable::new(
            grammar
                .month_names
                .iter()
                .copied()
                .zip(1..)
                .chain(grammar.month_abbrevs.iter().copied().zip(1..))
                .chain(grammar.month_variants.iter().copied()),
        )?;
        let calendar = Calendar::ALL
            .iter()
            .map(|cal| calendar_months(*cal).map(MonthTable::numbered).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        let mut calendars = HashMap::new();
        for cal in Calendar::ALL {
            calendars.insert(cal.to_string().to_lowercase(), cal);
            calendars.insert(grammar.calendar_names[cal.index()].to_lowercase(), cal);
        }

        debug!("compiled date parser for {:?}", grammar.language);
        Ok(Self {
            grammar,
            annotation: Regex::new(r"^(?P<body>.*?)\s*\((?P<notes>[^()]*)\)$")?,
            quality_prefix: Regex::new(&format!(r"(?i)^{quality}\s+(?P<rest>.+)$"))?,
            quality_suffix: Regex::new(&format!(r"(?i)^(?P<rest>.+?)\s+{quality}$"))?,
            span: between(grammar.from, grammar.to)?,
            range: between(grammar.between, grammar.and)?,
            simple: Regex::new(&format!(r"(?i)^(?:{simple})\s+(?P<rest>.+)$"))?,
            bce: Regex::new(&format!(
                r"(?i)^(?P<rest>.+?)\s*(?:{})$",
                alternation(grammar.bce.iter().copied())
            ))?,
            iso: Regex::new(r"^(?P<y>\d{3,})(?:/(?P<s>\d+))?(?:-(?P<m>\d{1,2})(?:-(?P<d>\d{1,2}))?)?$")?,
            numeric_full: Regex::new(&numeric_full)?,
            numeric_month: Regex::new(&numeric_month)?,
            year_only: Regex::new(r"^(?P<y>\d+)(?:/(?P<s>\d+))?$")?,
            civil,
            calendar,
            calendars,
        })
    }

    /// The grammar this parser was compiled from.
    pub const fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    fn structured(&self, text: &str) -> Result<Date, Unrecognized> {
        let (body, calendar, newyear) = self.annotation(text)?;
        let (quality, body) = self.quality(body);

        let (modifier, value) = if let Some(caps) = self.span.captures(body) {
            (Modifier::Span, self.compound(&caps, calendar)?)
        } else if let Some(caps) = self.range.captures(body) {
            (Modifier::Range, self.compound(&caps, calendar)?)
        } else if let Some((modifier, rest)) = self.simple_modifier(body) {
            (modifier, DateValue::Regular(self.component(rest, calendar)?))
        } else {
            (Modifier::None, DateValue::Regular(self.component(body, calendar)?))
        };

        Ok(Date::new(quality, modifier, calendar, value, String::new(), newyear)?)
    }

    /// Splits off a trailing `(calendar, new year)` annotation.
    fn annotation<'t>(&self, text: &'t str) -> Result<(&'t str, Calendar, NewYear), Unrecognized> {
        let Some(caps) = self.annotation.captures(text) else {
            return Ok((text, Calendar::default(), NewYear::default()));
        };
        let body = caps.name("body").map_or(text, |m| m.as_str());
        let notes = caps.name("notes").map_or("", |m| m.as_str());

        let mut calendar = Calendar::default();
        let mut newyear = NewYear::default();
        for token in notes.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if let Some(found) = self.calendars.get(&token.to_lowercase()) {
                calendar = *found;
            } else if let Some(found) = NewYear::from_token(token) {
                newyear = found;
            } else {
                return Err(Unrecognized::Annotation(token.to_owned()));
            }
        }
        Ok((body, calendar, newyear))
    }

    fn quality<'t>(&self, text: &'t str) -> (Quality, &'t str) {
        for pattern in [&self.quality_prefix, &self.quality_suffix] {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };
            let quality = if caps.name("est").is_some() {
                Quality::Estimated
            } else {
                Quality::Calculated
            };
            if let Some(rest) = caps.name("rest") {
                return (quality, rest.as_str());
            }
        }
        (Quality::None, text)
    }

    fn simple_modifier<'t>(&self, text: &'t str) -> Option<(Modifier, &'t str)> {
        let caps = self.simple.captures(text)?;
        let modifier = [
            ("before", Modifier::Before),
            ("after", Modifier::After),
            ("about", Modifier::About),
            ("from", Modifier::From),
            ("to", Modifier::To),
        ]
        .into_iter()
        .find_map(|(name, modifier)| caps.name(name).map(|_| modifier))?;
        Some((modifier, caps.name("rest")?.as_str()))
    }

    fn compound(&self, caps: &Captures<'_>, calendar: Calendar) -> Result<DateValue, Unrecognized> {
        let part = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        Ok(DateValue::Compound {
            start: self.component(part("start"), calendar)?,
            stop:  self.component(part("stop"), calendar)?,
        })
    }

    fn component(&self, text: &str, calendar: Calendar) -> Result<CalendarDate, Unrecognized> {
        self.subdate(text, calendar)
            .ok_or_else(|| Unrecognized::Component(text.to_owned()))
    }

    fn subdate(&self, text: &str, calendar: Calendar) -> Option<CalendarDate> {
        let (text, bce) = match self.bce.captures(text).and_then(|caps| caps.name("rest")) {
            Some(rest) => (rest.as_str(), true),
            None => (text, false),
        };

        let numeric = [&self.iso, &self.numeric_full, &self.numeric_month, &self.year_only]
            .into_iter()
            .find_map(|pattern| pattern.captures(text));
        let (day, month, year_digits, slash_digits) = match numeric {
            Some(caps) => (
                number(caps.name("d"))?,
                number(caps.name("m"))?,
                caps.name("y"),
                caps.name("s"),
            ),
            None => {
                let table = self.months(calendar);
                let caps = table.pattern.captures(text)?;
                let month = table.lookup(caps.name("mon")?.as_str())?;
                let (day, year_digits) = match (caps.name("d1"), caps.name("d2"), caps.name("y")) {
                    // "15 March 44": a short year after a day-first month
                    (Some(d1), Some(y), None) => (Some(d1), Some(y)),
                    (Some(_), Some(_), Some(_)) => return None,
                    (d1, d2, y) => (d1.or(d2), y),
                };
                (number(day)?, month, year_digits, caps.name("s"))
            },
        };

        let (year, slash) = year(year_digits, slash_digits)?;
        let year = if bce { -year } else { year };
        Some(CalendarDate::new(day, month, year, slash))
    }

    fn months(&self, calendar: Calendar) -> &MonthTable {
        self.calendar
            .get(calendar.index())
            .and_then(Option::as_ref)
            .unwrap_or(&self.civil)
    }
}

impl ParseDate for DateParser {
    fn parse(&self, text: &str) -> Date {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Date::default();
        }
        match self.structured(&normalized) {
            Ok(date) => date,
            #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
            Err(reason) => {
                debug!("keeping {text:?} as text: {reason}");
                Date::text_only(text)
            },
        }
    }
}

/// Collapses runs of whitespace and tightens space before commas.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").replace(" ,", ",")
}

/// Escaped alternation, longest words first so prefixes do not shadow them.
fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().filter(|w| !w.is_empty()).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();
    words.into_iter().map(regex::escape).collect::<Vec<_>>().join("|")
}

/// Full and month/year patterns for all-digit dates.
fn numeric_patterns(order: NumericOrder, separator: char) -> (String, String) {
    let sep = regex::escape(&separator.to_string());
    let year = r"(?P<y>\d+)(?:/(?P<s>\d+))?";
    let (day, month) = (r"(?P<d>\d{1,2})", r"(?P<m>\d{1,2})");
    match order {
        NumericOrder::MonthDayYear => (
            format!("^{month}{sep}{day}{sep}{year}$"),
            format!("^{month}{sep}{year}$"),
        ),
        NumericOrder::DayMonthYear => (
            format!("^{day}{sep}{month}{sep}{year}$"),
            format!("^{month}{sep}{year}$"),
        ),
        NumericOrder::YearMonthDay => (
            format!("^{year}{sep}{month}{sep}{day}$"),
            format!("^{year}{sep}{month}$"),
        ),
    }
}

/// Optional day or month digits; absent means unknown (0).
fn number(digits: Option<Match<'_>>) -> Option<u8> {
    digits.map_or(Some(0), |m| m.as_str().parse().ok())
}

/// Year digits with an optional dual-dating suffix: `1788/9` is 1789.
///
/// The suffix must be the trailing digits of the following year.
fn year(digits: Option<Match<'_>>, slash: Option<Match<'_>>) -> Option<(i32, bool)> {
    let Some(digits) = digits else {
        return Some((0, false));
    };
    let year: i32 = digits.as_str().parse().ok()?;
    match slash {
        Some(suffix) => {
            let next = year.checked_add(1)?;
            next.to_string().ends_with(suffix.as_str()).then_some((next, true))
        },
        None => Some((year, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::parser_for;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  February   5 ,  1789 "), "February 5, 1789");
        assert_eq!(normalize("\t"), "");
    }

    #[test]
    fn test_alternation_prefers_longer_words() {
        assert_eq!(alternation(["c.", "circa", "abt"]), r"circa|abt|c\.");
    }

    #[test]
    fn test_subdate_forms() {
        let parser = parser_for("en");
        let cases = [
            ("1789-02-05", CalendarDate::ymd(1789, 2, 5)),
            ("1789-02", CalendarDate::ymd(1789, 2, 0)),
            ("2/5/1789", CalendarDate::ymd(1789, 2, 5)),
            ("2/1789", CalendarDate::ymd(1789, 2, 0)),
            ("1789", CalendarDate::ymd(1789, 0, 0)),
            ("1788/9", CalendarDate::new(0, 0, 1789, true)),
            ("1788/89", CalendarDate::new(0, 0, 1789, true)),
            ("1799/800", CalendarDate::new(0, 0, 1800, true)),
            ("004/5", CalendarDate::new(0, 0, 5, true)),
            ("2/043/4", CalendarDate::new(0, 2, 44, true)),
            ("099/100-02-05", CalendarDate::new(5, 2, 100, true)),
            ("4/5", CalendarDate::ymd(5, 4, 0)),
            ("February 5, 1789", CalendarDate::ymd(1789, 2, 5)),
            ("Feb 5, 1788/9", CalendarDate::new(5, 2, 1789, true)),
            ("5 Feb. 1789", CalendarDate::ymd(1789, 2, 5)),
            ("sept 1789", CalendarDate::ymd(1789, 9, 0)),
            ("February 5", CalendarDate::ymd(0, 2, 5)),
            ("44 BC", CalendarDate::ymd(-44, 0, 0)),
            ("March 15, 44 B.C.", CalendarDate::ymd(-44, 3, 15)),
            ("15 March 44 BC", CalendarDate::ymd(-44, 3, 15)),
        ];
        for (text, expected) in cases {
            assert_eq!(parser.subdate(text, Calendar::Gregorian), Some(expected), "{text}");
        }
        for text in ["5 February 5 1789", "Febtember 1789", "5/1789/2/3", "1788/5", "Feb 1788/90"] {
            assert_eq!(parser.subdate(text, Calendar::Gregorian), None, "{text}");
        }
    }

    #[test]
    fn test_calendar_month_names() {
        let parser = parser_for("en");
        assert_eq!(
            parser.subdate("Tishri 1, 5785", Calendar::Hebrew),
            Some(CalendarDate::ymd(5785, 1, 1))
        );
        assert_eq!(
            parser.subdate("Rabi II 3, 1445", Calendar::Islamic),
            Some(CalendarDate::ymd(1445, 4, 3))
        );
        assert_eq!(
            parser.subdate("vendémiaire 1, 3", Calendar::French),
            Some(CalendarDate::ymd(3, 1, 1))
        );
        assert_eq!(parser.subdate("February 1789", Calendar::Persian), None);
    }

    #[test]
    fn test_annotation() {
        let parser = parser_for("en");
        assert_eq!(
            parser.annotation("May 1789 (Julian, Mar25)").unwrap(),
            ("May 1789", Calendar::Julian, NewYear::Mar25)
        );
        assert_eq!(
            parser.annotation("1789 (5-5)").unwrap(),
            ("1789", Calendar::Gregorian, NewYear::from_month_day(5, 5))
        );
        assert!(matches!(
            parser.annotation("1789 (in the parish book)"),
            Err(Unrecognized::Annotation(_))
        ));
    }

    #[test]
    fn test_parse_modifiers() {
        let parser = parser_for("en");
        let cases = [
            ("bef. 1789", Quality::None, Modifier::Before),
            ("aft 1789", Quality::None, Modifier::After),
            ("abt 1789", Quality::None, Modifier::About),
            ("circa 1789", Quality::None, Modifier::About),
            ("est. from 1789", Quality::Estimated, Modifier::From),
            ("calc to 1789", Quality::Calculated, Modifier::To),
            ("1789 estimated", Quality::Estimated, Modifier::None),
        ];
        for (text, quality, modifier) in cases {
            let date = parser.parse(text);
            assert_eq!((date.quality(), date.modifier()), (quality, modifier), "{text}");
            assert_eq!(date.year(), 1789, "{text}");
        }

        let date = parser.parse("bet. 1789 and 1876");
        assert_eq!(date.modifier(), Modifier::Range);
        assert_eq!(date.stop_year(), Some(1876));
    }

    #[test]
    fn test_unparsed_text_is_kept_verbatim() {
        let parser = parser_for("en");
        for text in [
            "  in the spring  ",
            "February 30, 1789",
            "between 1876 and 1789",
            "1789 (in the parish book)",
        ] {
            let date = parser.parse(text);
            assert_eq!(date.modifier(), Modifier::TextOnly, "{text}");
            assert_eq!(date.text(), text);
        }
        assert!(parser.parse("   ").is_empty());
    }
}
