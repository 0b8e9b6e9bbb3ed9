use super::{DisplayDate, Grammar, NumericOrder, QualityPosition, calendar_months};
use crate::config::DateFormat;
use crate::types::{Calendar, CalendarDate, Modifier, Quality};
use crate::{Date, DateValue};

/// Renders dates in one language and format.
#[derive(Debug, Clone, Copy)]
pub struct DateDisplayer {
    grammar: &'static Grammar,
    format:  DateFormat,
}

impl DateDisplayer {
    /// Displayer using the grammar's preferred format.
    pub const fn new(grammar: &'static Grammar) -> Self {
        Self { grammar, format: grammar.format }
    }

    #[must_use]
    pub const fn with_format(self, format: DateFormat) -> Self {
        Self { format, ..self }
    }

    pub const fn format(&self) -> DateFormat {
        self.format
    }

    /// One component, without modifier or annotation.
    pub fn component(&self, calendar: Calendar, date: &CalendarDate) -> String {
        if date.is_empty() {
            return String::new();
        }
        let year = year_text(date);
        let body = match self.format {
            DateFormat::Iso => iso(date, &year),
            DateFormat::Numerical => self.numeric(date, &year),
            DateFormat::MonthDayYear | DateFormat::MonAbbrDayYear => {
                let month = self.month_name(calendar, date.month());
                match (date.day(), date.year()) {
                    (0, 0) => month.to_owned(),
                    (0, _) if date.month() == 0 => year,
                    (0, _) => month_year(month, &year),
                    (day, 0) => format!("{month} {day}"),
                    (day, _) => format!("{month} {day}, {year}"),
                }
            },
            DateFormat::DayMonthYear | DateFormat::DayMonAbbrYear => {
                let month = self.month_name(calendar, date.month());
                let suffix = self.grammar.day_suffix;
                match (date.day(), date.year()) {
                    (0, 0) => month.to_owned(),
                    (0, _) if date.month() == 0 => year,
                    (0, _) => month_year(month, &year),
                    (day, 0) => format!("{day}{suffix} {month}"),
                    (day, _) => format!("{day}{suffix} {month} {year}"),
                }
            },
        };
        if date.year() < 0 {
            format!("{body} {}", Grammar::word(self.grammar.bce))
        } else {
            body
        }
    }

    fn month_name(&self, calendar: Calendar, month: u8) -> &'static str {
        let index = usize::from(month.saturating_sub(1));
        let names: &[&str] = match calendar_months(calendar) {
            Some(names) => names,
            None if self.format.abbreviated() => &self.grammar.month_abbrevs,
            None => &self.grammar.month_names,
        };
        names.get(index).copied().unwrap_or_default()
    }

    fn numeric(&self, date: &CalendarDate, year: &str) -> String {
        let sep = self.grammar.numeric_separator;
        let (day, month) = (date.day(), date.month());
        match (self.grammar.numeric_order, day) {
            _ if month == 0 => year.to_owned(),
            (NumericOrder::MonthDayYear | NumericOrder::DayMonthYear, 0) => {
                format!("{month}{sep}{year}")
            },
            (NumericOrder::MonthDayYear, _) => format!("{month}{sep}{day}{sep}{year}"),
            (NumericOrder::DayMonthYear, _) => format!("{day}{sep}{month}{sep}{year}"),
            (NumericOrder::YearMonthDay, 0) => format!("{year}{sep}{month}"),
            (NumericOrder::YearMonthDay, _) => format!("{year}{sep}{month}{sep}{day}"),
        }
    }

    fn annotation(date: &Date, grammar: &Grammar) -> Vec<String> {
        let mut notes = Vec::new();
        if date.calendar() != Calendar::Gregorian {
            notes.push(grammar.calendar_names[date.calendar().index()].to_owned());
        }
        if let Some(token) = date.newyear().token() {
            notes.push(token);
        }
        notes
    }
}

impl DisplayDate for DateDisplayer {
    fn display(&self, date: &Date) -> String {
        let g = self.grammar;
        let calendar = date.calendar();
        let body = match (date.modifier(), date.value()) {
            (Modifier::TextOnly, _) | (_, DateValue::TextOnly) => return date.text().to_owned(),
            _ if date.is_empty() => return String::new(),
            (Modifier::Range, DateValue::Compound { start, stop }) => format!(
                "{} {} {} {}",
                Grammar::word(g.between),
                self.component(calendar, start),
                Grammar::word(g.and),
                self.component(calendar, stop),
            ),
            (Modifier::Span, DateValue::Compound { start, stop }) => format!(
                "{} {} {} {}",
                Grammar::word(g.from),
                self.component(calendar, start),
                Grammar::word(g.to),
                self.component(calendar, stop),
            ),
            (modifier, _) => {
                let start = self.component(calendar, &date.start());
                let word = match modifier {
                    Modifier::Before => g.before,
                    Modifier::After => g.after,
                    Modifier::About => g.about,
                    Modifier::From => g.from,
                    Modifier::To => g.to,
                    _ => &[],
                };
                match Grammar::word(word) {
                    "" => start,
                    word => format!("{word} {start}"),
                }
            },
        };

        let quality = match date.quality() {
            Quality::None => "",
            Quality::Estimated => Grammar::word(g.estimated),
            Quality::Calculated => Grammar::word(g.calculated),
        };
        let text = match (quality, g.quality_position) {
            ("", _) => body,
            (quality, QualityPosition::Prefix) => format!("{quality} {body}"),
            (quality, QualityPosition::Suffix) => format!("{body} {quality}"),
        };

        let notes = Self::annotation(date, g);
        if notes.is_empty() {
            text
        } else {
            format!("{text} ({})", notes.join(", "))
        }
    }
}

/// `1788/9` for a dual-dated 1789: the earlier year, then the digits that change.
///
/// The earlier year has at least three digits (`004/5`, `099/100`) so a dual
/// year never reads as a numeric month and year.
fn year_text(date: &CalendarDate) -> String {
    let year = date.year().unsigned_abs();
    if !date.slash() || year == 0 {
        return year.to_string();
    }
    let previous = (year - 1).to_string();
    let current = year.to_string();
    let common = if previous.len() == current.len() {
        previous
            .bytes()
            .zip(current.bytes())
            .take_while(|(a, b)| a == b)
            .count()
    } else {
        0
    };
    format!("{previous:0>3}/{}", &current[common..])
}

/// `Fructidor, 8` rather than `Fructidor 8`, which would read as a day.
fn month_year(month: &str, year: &str) -> String {
    if year.len() <= 2 {
        format!("{month}, {year}")
    } else {
        format!("{month} {year}")
    }
}

fn iso(date: &CalendarDate, year: &str) -> String {
    let year = if date.slash() { year.to_owned() } else { format!("{year:0>4}") };
    match (date.month(), date.day()) {
        (0, _) => year,
        (month, 0) => format!("{year}-{month:02}"),
        (month, day) => format!("{year}-{month:02}-{day:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::grammar_for;
    use crate::types::NewYear;
    use crate::test_utils::gregorian;

    #[test]
    fn test_year_text() {
        let cases = [
            (CalendarDate::new(0, 0, 1789, false), "1789"),
            (CalendarDate::new(0, 0, 1789, true), "1788/9"),
            (CalendarDate::new(0, 0, 1800, true), "1799/800"),
            (CalendarDate::new(0, 0, 1000, true), "999/1000"),
            (CalendarDate::new(0, 0, -44, false), "44"),
            (CalendarDate::new(0, 0, 5, true), "004/5"),
            (CalendarDate::new(0, 0, 44, true), "043/4"),
            (CalendarDate::new(0, 0, 100, true), "099/100"),
            (CalendarDate::new(0, 0, -1, true), "000/1"),
        ];
        for (date, expected) in cases {
            assert_eq!(year_text(&date), expected);
        }
    }

    #[test]
    fn test_formats() {
        let en = DateDisplayer::new(grammar_for("en"));
        let full = CalendarDate::ymd(1789, 2, 5);
        let month = CalendarDate::ymd(1789, 2, 0);
        let year = CalendarDate::ymd(1789, 0, 0);
        let cases = [
            (DateFormat::Iso, ["1789-02-05", "1789-02", "1789"]),
            (DateFormat::Numerical, ["2/5/1789", "2/1789", "1789"]),
            (DateFormat::MonthDayYear, ["February 5, 1789", "February 1789", "1789"]),
            (DateFormat::MonAbbrDayYear, ["Feb 5, 1789", "Feb 1789", "1789"]),
            (DateFormat::DayMonthYear, ["5 February 1789", "February 1789", "1789"]),
            (DateFormat::DayMonAbbrYear, ["5 Feb 1789", "Feb 1789", "1789"]),
        ];
        for (format, expected) in cases {
            let displayer = en.with_format(format);
            let shown = [full, month, year].map(|c| displayer.component(Calendar::Gregorian, &c));
            assert_eq!(shown, expected, "{format}");
        }
    }

    #[test]
    fn test_german_numeric_and_day_suffix() {
        let de = DateDisplayer::new(grammar_for("de"));
        let date = CalendarDate::ymd(1789, 2, 5);
        assert_eq!(de.component(Calendar::Gregorian, &date), "5. Februar 1789");
        assert_eq!(
            de.with_format(DateFormat::Numerical).component(Calendar::Gregorian, &date),
            "5.2.1789"
        );
    }

    #[test]
    fn test_partial_and_bce() {
        let en = DateDisplayer::new(grammar_for("en"));
        assert_eq!(en.component(Calendar::Gregorian, &CalendarDate::ymd(0, 2, 5)), "February 5");
        assert_eq!(en.component(Calendar::Gregorian, &CalendarDate::ymd(-44, 3, 15)), "March 15, 44 BC");
        assert_eq!(
            en.with_format(DateFormat::Iso).component(Calendar::Gregorian, &CalendarDate::ymd(44, 3, 15)),
            "0044-03-15"
        );
        assert_eq!(en.component(Calendar::Gregorian, &CalendarDate::EMPTY), "");
        assert_eq!(en.component(Calendar::French, &CalendarDate::ymd(8, 12, 0)), "Fructidor, 8");
    }

    #[test]
    fn test_calendar_month_names() {
        let en = DateDisplayer::new(grammar_for("en"));
        let shown = en
            .with_format(DateFormat::MonAbbrDayYear)
            .component(Calendar::Hebrew, &CalendarDate::ymd(5785, 7, 1));
        assert_eq!(shown, "AdarII 1, 5785");
    }

    #[test]
    fn test_display_structure() {
        let en = DateDisplayer::new(grammar_for("en"));
        let date = Date::new(
            Quality::Estimated,
            Modifier::About,
            Calendar::Julian,
            DateValue::Regular(CalendarDate::new(27, 6, 1789, true)),
            "Text comment",
            NewYear::from_month_day(5, 5),
        )
        .unwrap();
        assert_eq!(en.display(&date), "estimated about June 27, 1788/9 (Julian, 5-5)");

        let span = Date::new(
            Quality::Calculated,
            Modifier::Span,
            Calendar::Gregorian,
            DateValue::Compound {
                start: CalendarDate::ymd(1789, 2, 5),
                stop:  CalendarDate::ymd(1876, 12, 27),
            },
            "",
            NewYear::Mar25,
        )
        .unwrap();
        assert_eq!(
            en.display(&span),
            "calculated from February 5, 1789 to December 27, 1876 (Mar25)"
        );

        assert_eq!(en.display(&gregorian(1789, 2, 5)), "February 5, 1789");
        assert_eq!(en.display(&Date::text_only("Easter 1789")), "Easter 1789");
        assert_eq!(en.display(&Date::default()), "");
    }
}
