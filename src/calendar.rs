//! Calendar arithmetic.
//!
//! Every calendar converts to and from a serial day number (SDN), the Julian
//! Day Number of the day at noon. SDNs are the common reference used to order
//! dates recorded in different calendars.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, FRENCH_COMPLEMENTARY_MONTH,
    FRENCH_DAYS_PER_4_YEARS, FRENCH_DAYS_PER_MONTH, FRENCH_SDN_OFFSET, GREGORIAN_CYCLE,
    HEBREW_ADAR_I, HEBREW_EPOCH, HEBREW_MONTH_DAYS, HEBREW_PARTS_PER_DAY, ISLAMIC_EPOCH,
    LEAP_YEAR_CYCLE, MARCH, PERSIAN_DAYS_PER_CYCLE, PERSIAN_EPOCH,
};
use crate::types::{Calendar, CalendarDate, NewYear};

/// Whether `year` is a leap year in `calendar`.
///
/// For the Hebrew calendar this means the year has the extra month Adar I.
pub fn is_leap_year(calendar: Calendar, year: i32) -> bool {
    match calendar {
        Calendar::Gregorian => gregorian_leap(year),
        Calendar::Julian => julian_leap(year),
        Calendar::Swedish => swedish_leap(year),
        Calendar::Hebrew => hebrew_leap(year),
        Calendar::French => french_year_length(year) == 366,
        Calendar::Islamic => islamic_leap(year),
        Calendar::Persian => persian_year_length(year) == 366,
    }
}

/// Number of month slots in a year of `calendar`.
///
/// The Hebrew calendar always numbers 13 slots (Adar I is empty in common
/// years) and the French Republican calendar uses month 13 for its
/// complementary days.
pub const fn months_in_year(calendar: Calendar) -> u8 {
    match calendar {
        Calendar::Hebrew | Calendar::French => 13,
        _ => 12,
    }
}

/// Length of `month` in `year`, or 0 when the month does not exist.
pub fn days_in_month(calendar: Calendar, year: i32, month: u8) -> u8 {
    if month == 0 || month > months_in_year(calendar) {
        return 0;
    }
    match calendar {
        Calendar::Gregorian => civil_days_in_month(month, gregorian_leap(year)),
        Calendar::Julian => civil_days_in_month(month, julian_leap(year)),
        Calendar::Swedish => {
            if month == FEBRUARY && year == 1712 {
                30
            } else {
                civil_days_in_month(month, swedish_leap(year))
            }
        },
        Calendar::Hebrew => hebrew_days_in_month(year, month),
        Calendar::French => {
            if month == FRENCH_COMPLEMENTARY_MONTH {
                if french_year_length(year) == 366 { 6 } else { 5 }
            } else {
                30
            }
        },
        Calendar::Islamic => {
            if month % 2 == 1 || (month == 12 && islamic_leap(year)) {
                30
            } else {
                29
            }
        },
        Calendar::Persian => match month {
            1..=6 => 31,
            7..=11 => 30,
            _ => {
                if persian_year_length(year) == 366 {
                    30
                } else {
                    29
                }
            },
        },
    }
}

/// Serial day number of a (year, month, day) in `calendar`.
///
/// The arithmetic is linear in `day`, so an out-of-range day simply rolls into
/// the following month; callers validate before converting.
pub fn to_sdn(calendar: Calendar, year: i32, month: u8, day: u8) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    match calendar {
        Calendar::Gregorian => gregorian_sdn(y, m, d),
        Calendar::Julian => julian_sdn(y, m, d),
        Calendar::Swedish => swedish_sdn(y, m, d),
        Calendar::Hebrew => hebrew_sdn(y, month, d),
        Calendar::French => french_sdn(y, m, d),
        Calendar::Islamic => islamic_sdn(y, m, d),
        Calendar::Persian => persian_sdn(y, m, d),
    }
}

/// Inverse of [`to_sdn`]: the (year, month, day) of `sdn` in `calendar`.
pub fn from_sdn(calendar: Calendar, sdn: i64) -> (i32, u8, u8) {
    let (year, month, day) = match calendar {
        Calendar::Gregorian => gregorian_ymd(sdn),
        Calendar::Julian => julian_ymd(sdn),
        Calendar::Swedish => swedish_ymd(sdn),
        Calendar::Hebrew => hebrew_ymd(sdn),
        Calendar::French => french_ymd(sdn),
        Calendar::Islamic => islamic_ymd(sdn),
        Calendar::Persian => persian_ymd(sdn),
    };
    (narrow_year(year), narrow(month), narrow(day))
}

/// Re-expresses a (year, month, day) of one calendar in another.
pub fn convert(from: Calendar, to: Calendar, year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    from_sdn(to, to_sdn(from, year, month, day))
}

/// Ordinal used to compare dates chronologically across calendars.
///
/// An unknown month or day (0) is read as the first month or day. Nothing is
/// stored; the caller's values are left as they are.
pub fn to_sort_value(calendar: Calendar, year: i32, month: u8, day: u8) -> i64 {
    let (year, month, day) = CalendarDate::new(day, month, year, false).with_fallbacks();
    to_sdn(calendar, year, month, day)
}

/// Sort value of a stored component under a new-year convention.
///
/// An all-unknown component sorts as 0. Under a convention other than Jan 1,
/// a month/day that precedes the convention's first day belongs to the
/// following Jan 1 year.
pub(crate) fn component_sort_value(calendar: Calendar, date: &CalendarDate, newyear: NewYear) -> i64 {
    if date.is_empty() {
        return 0;
    }
    let (mut year, month, day) = date.with_fallbacks();
    if newyear != NewYear::Jan1 && date.month() != 0 && (month, day) < newyear.month_day() {
        year = year.saturating_add(1);
    }
    to_sort_value(calendar, year, month, day)
}

// --- Julian / Gregorian / Swedish ---

const fn gregorian_leap(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

const fn julian_leap(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// Sweden skipped the 1700 leap day, doubled it in 1712 and went Gregorian in 1753.
const fn swedish_leap(year: i32) -> bool {
    match year {
        1700 => false,
        1712 => true,
        y if y < 1753 => julian_leap(y),
        y => gregorian_leap(y),
    }
}

const fn civil_days_in_month(month: u8, leap: bool) -> u8 {
    if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Shifts the year to start in March so the leap day falls last.
const fn march_based(year: i64, month: i64) -> (i64, i64) {
    let a = (14 - month).div_euclid(12);
    (year + 4800 - a, month + 12 * a - 3)
}

const fn gregorian_sdn(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = march_based(year, month);
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

const fn julian_sdn(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = march_based(year, month);
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

/// Shared tail of the Julian and Gregorian inverses, `c` being days into the
/// March-based 4-year cycle.
const fn march_based_ymd(c: i64, centuries: i64) -> (i64, i64, i64) {
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * centuries + d - 4800 + m.div_euclid(10);
    (year, month, day)
}

const fn gregorian_ymd(sdn: i64) -> (i64, i64, i64) {
    let a = sdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    march_based_ymd(c, b)
}

const fn julian_ymd(sdn: i64) -> (i64, i64, i64) {
    march_based_ymd(sdn + 32082, 0)
}

fn swedish_sdn(year: i64, month: i64, day: i64) -> i64 {
    let ymd = (year, month, day);
    if (1700, 3, 1) <= ymd && ymd <= (1712, 2, 30) {
        julian_sdn(year, month, day) - 1
    } else if ymd >= (1753, 3, 1) {
        gregorian_sdn(year, month, day)
    } else {
        julian_sdn(year, month, day)
    }
}

fn swedish_ymd(sdn: i64) -> (i64, i64, i64) {
    let swedish_start = julian_sdn(1700, i64::from(MARCH), 1) - 1;
    let swedish_end = julian_sdn(1712, i64::from(MARCH), 1);
    if (swedish_start..swedish_end).contains(&sdn) {
        if sdn == swedish_end - 1 {
            return (1712, 2, 30);
        }
        julian_ymd(sdn + 1)
    } else if sdn >= gregorian_sdn(1753, i64::from(MARCH), 1) {
        gregorian_ymd(sdn)
    } else {
        julian_ymd(sdn)
    }
}

// --- Hebrew ---

const fn hebrew_leap(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

/// Days from the epoch to the molad of Tishri of `year`, with the
/// "lo ADU Rosh" postponement applied.
const fn hebrew_elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 12084 + 13753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(HEBREW_PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Further postponements that keep year lengths within their legal bounds.
const fn hebrew_year_length_correction(year: i64) -> i64 {
    let ny0 = hebrew_elapsed_days(year - 1);
    let ny1 = hebrew_elapsed_days(year);
    let ny2 = hebrew_elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

const fn hebrew_new_year(year: i64) -> i64 {
    HEBREW_EPOCH + hebrew_elapsed_days(year) + hebrew_year_length_correction(year)
}

const fn hebrew_year_length(year: i64) -> i64 {
    hebrew_new_year(year + 1) - hebrew_new_year(year)
}

fn hebrew_days_in_month(year: i32, month: u8) -> u8 {
    let length = hebrew_year_length(i64::from(year));
    match month {
        // Heshvan is long in complete years
        2 if length % 10 == 5 => 30,
        // Kislev is short in deficient years
        3 if length % 10 == 3 => 29,
        HEBREW_ADAR_I if !hebrew_leap(year) => 0,
        _ => HEBREW_MONTH_DAYS[usize::from(month)],
    }
}

fn hebrew_sdn(year: i64, month: u8, day: i64) -> i64 {
    let y = narrow_year(year);
    let preceding: i64 = (1..month).map(|m| i64::from(hebrew_days_in_month(y, m))).sum();
    hebrew_new_year(year) + preceding + day - 1
}

fn hebrew_ymd(sdn: i64) -> (i64, i64, i64) {
    // Mean year length is 35975351/98496 days
    let mut year = (sdn - HEBREW_EPOCH).saturating_mul(98_496).div_euclid(35_975_351) + 1;
    while year > i64::from(i32::MIN) && hebrew_new_year(year) > sdn {
        year -= 1;
    }
    while year < i64::from(i32::MAX) && hebrew_new_year(year + 1) <= sdn {
        year += 1;
    }
    let y = narrow_year(year);
    let mut remaining = sdn - hebrew_new_year(year);
    let mut month = 1;
    while month < 13 {
        let length = i64::from(hebrew_days_in_month(y, month));
        if remaining < length {
            break;
        }
        remaining -= length;
        month += 1;
    }
    (year, i64::from(month), remaining + 1)
}

// --- French Republican ---

const fn french_year_length(year: i32) -> i64 {
    let y = year as i64;
    ((y + 1) * FRENCH_DAYS_PER_4_YEARS).div_euclid(4) - (y * FRENCH_DAYS_PER_4_YEARS).div_euclid(4)
}

const fn french_sdn(year: i64, month: i64, day: i64) -> i64 {
    (year * FRENCH_DAYS_PER_4_YEARS).div_euclid(4) + (month - 1) * FRENCH_DAYS_PER_MONTH + day + FRENCH_SDN_OFFSET
}

const fn french_ymd(sdn: i64) -> (i64, i64, i64) {
    let temp = (sdn - FRENCH_SDN_OFFSET) * 4 - 1;
    let year = temp.div_euclid(FRENCH_DAYS_PER_4_YEARS);
    let day_of_year = temp.rem_euclid(FRENCH_DAYS_PER_4_YEARS).div_euclid(4);
    let month = day_of_year.div_euclid(FRENCH_DAYS_PER_MONTH) + 1;
    let day = day_of_year.rem_euclid(FRENCH_DAYS_PER_MONTH) + 1;
    (year, month, day)
}

// --- Islamic (arithmetic) ---

const fn islamic_leap(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

const fn islamic_sdn(year: i64, month: i64, day: i64) -> i64 {
    // ceil(29.5 * (month - 1))
    let month_days = (59 * (month - 1) + 1).div_euclid(2);
    day + month_days + (year - 1) * 354 + (3 + 11 * year).div_euclid(30) + ISLAMIC_EPOCH
}

const fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

fn islamic_ymd(sdn: i64) -> (i64, i64, i64) {
    let year = (30 * (sdn - ISLAMIC_EPOCH - 1) + 10646).div_euclid(10631);
    let into_year = sdn - (29 + islamic_sdn(year, 1, 1));
    let month = (ceil_div(2 * into_year, 59) + 1).clamp(1, 12);
    let day = sdn - islamic_sdn(year, month, 1) + 1;
    (year, month, day)
}

// --- Persian (arithmetic, 2820-year cycle) ---

const fn persian_sdn(year: i64, month: i64, day: i64) -> i64 {
    let epbase = if year >= 0 { year - 474 } else { year - 473 };
    let epyear = 474 + epbase.rem_euclid(2820);
    let month_days = if month <= 7 { (month - 1) * 31 } else { (month - 1) * 30 + 6 };
    month_days
        + (epyear * 682 - 110).div_euclid(2816)
        + (epyear - 1) * 365
        + day
        + epbase.div_euclid(2820) * PERSIAN_DAYS_PER_CYCLE
        + PERSIAN_EPOCH
}

const fn persian_year_length(year: i32) -> i64 {
    let y = year as i64;
    let next = if y == -1 { 1 } else { y + 1 };
    persian_sdn(next, 1, 1) - persian_sdn(y, 1, 1)
}

fn persian_ymd(sdn: i64) -> (i64, i64, i64) {
    let depoch = sdn - persian_sdn(475, 1, 1);
    let cycle = depoch.div_euclid(PERSIAN_DAYS_PER_CYCLE);
    let cyear = depoch.rem_euclid(PERSIAN_DAYS_PER_CYCLE);
    let ycycle = if cyear == PERSIAN_DAYS_PER_CYCLE - 1 {
        2820
    } else {
        let aux1 = cyear / 366;
        let aux2 = cyear % 366;
        (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
    };
    let mut year = ycycle + 2820 * cycle + 474;
    if year <= 0 {
        year -= 1;
    }
    let day_of_year = sdn - persian_sdn(year, 1, 1) + 1;
    let month = if day_of_year <= 186 {
        ceil_div(day_of_year, 31)
    } else {
        ceil_div(day_of_year - 6, 30)
    };
    let day = sdn - persian_sdn(year, month, 1) + 1;
    (year, month, day)
}

// --- narrowing ---

fn narrow_year(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

fn narrow(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_epochs() {
        struct TestCase {
            calendar:    Calendar,
            ymd:         (i32, u8, u8),
            sdn:         i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                calendar:    Calendar::Gregorian,
                ymd:         (2000, 1, 1),
                sdn:         2_451_545,
                description: "J2000",
            },
            TestCase {
                calendar:    Calendar::Gregorian,
                ymd:         (1582, 10, 15),
                sdn:         2_299_161,
                description: "first Gregorian day",
            },
            TestCase {
                calendar:    Calendar::Julian,
                ymd:         (1582, 10, 4),
                sdn:         2_299_160,
                description: "last Julian day",
            },
            TestCase {
                calendar:    Calendar::Hebrew,
                ymd:         (5785, 1, 1),
                sdn:         2_460_587,
                description: "Rosh Hashanah 5785 (2024-10-03)",
            },
            TestCase {
                calendar:    Calendar::French,
                ymd:         (1, 1, 1),
                sdn:         2_375_840,
                description: "1 Vendemiaire I (1792-09-22)",
            },
            TestCase {
                calendar:    Calendar::Islamic,
                ymd:         (1, 1, 1),
                sdn:         1_948_440,
                description: "1 Muharram AH 1",
            },
            TestCase {
                calendar:    Calendar::Persian,
                ymd:         (1, 1, 1),
                sdn:         1_948_321,
                description: "1 Farvardin AP 1",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            assert_eq!(to_sdn(case.calendar, y, m, d), case.sdn, "{}", case.description);
            assert_eq!(from_sdn(case.calendar, case.sdn), case.ymd, "{}", case.description);
        }
    }

    #[test]
    fn test_french_epoch_is_gregorian_1792_09_22() {
        assert_eq!(to_sdn(Calendar::Gregorian, 1792, 9, 22), to_sdn(Calendar::French, 1, 1, 1));
    }

    #[test]
    fn test_sdn_round_trips_every_calendar() {
        for calendar in Calendar::ALL {
            for sdn in (2_300_000..2_480_000).step_by(97) {
                let (y, m, d) = from_sdn(calendar, sdn);
                assert!(d >= 1, "{calendar}: day 0 for sdn {sdn}");
                assert!(
                    d <= days_in_month(calendar, y, m),
                    "{calendar}: {y}-{m}-{d} overflows its month (sdn {sdn})"
                );
                assert_eq!(to_sdn(calendar, y, m, d), sdn, "{calendar}: {y}-{m}-{d}");
            }
        }
    }

    #[test]
    fn test_consecutive_days_are_consecutive() {
        for calendar in Calendar::ALL {
            let mut previous = from_sdn(calendar, 2_400_000);
            for sdn in 2_400_001..2_400_800 {
                let current = from_sdn(calendar, sdn);
                assert!(current > previous, "{calendar}: {current:?} not after {previous:?}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_gregorian_leap_years() {
        assert!(is_leap_year(Calendar::Gregorian, 2000));
        assert!(is_leap_year(Calendar::Gregorian, 2024));
        assert!(!is_leap_year(Calendar::Gregorian, 1900));
        assert!(!is_leap_year(Calendar::Gregorian, 2023));
        assert!(is_leap_year(Calendar::Julian, 1900));
        assert!(is_leap_year(Calendar::Gregorian, -4));
    }

    #[test]
    fn test_days_in_month_civil() {
        assert_eq!(days_in_month(Calendar::Gregorian, 1789, 2), 28);
        assert_eq!(days_in_month(Calendar::Gregorian, 2000, 2), 29);
        assert_eq!(days_in_month(Calendar::Julian, 1700, 2), 29);
        assert_eq!(days_in_month(Calendar::Gregorian, 1789, 12), 31);
        assert_eq!(days_in_month(Calendar::Gregorian, 1789, 6), 30);
        assert_eq!(days_in_month(Calendar::Gregorian, 1789, 13), 0);
        assert_eq!(days_in_month(Calendar::Gregorian, 1789, 0), 0);
    }

    #[test]
    fn test_swedish_calendar() {
        assert_eq!(days_in_month(Calendar::Swedish, 1700, 2), 28);
        assert_eq!(days_in_month(Calendar::Swedish, 1712, 2), 30);
        assert_eq!(
            to_sdn(Calendar::Swedish, 1700, 3, 1),
            to_sdn(Calendar::Julian, 1700, 2, 29)
        );
        assert_eq!(
            to_sdn(Calendar::Swedish, 1712, 2, 30),
            to_sdn(Calendar::Julian, 1712, 2, 29)
        );
        assert_eq!(
            to_sdn(Calendar::Swedish, 1712, 3, 1),
            to_sdn(Calendar::Julian, 1712, 3, 1)
        );
        assert_eq!(
            to_sdn(Calendar::Swedish, 1753, 3, 1),
            to_sdn(Calendar::Gregorian, 1753, 3, 1)
        );
        let sdn = to_sdn(Calendar::Julian, 1712, 2, 29);
        assert_eq!(from_sdn(Calendar::Swedish, sdn), (1712, 2, 30));
    }

    #[test]
    fn test_hebrew_months() {
        // 5784 is a leap year, 5785 is not
        assert!(is_leap_year(Calendar::Hebrew, 5784));
        assert!(!is_leap_year(Calendar::Hebrew, 5785));
        assert_eq!(days_in_month(Calendar::Hebrew, 5784, 6), 30);
        assert_eq!(days_in_month(Calendar::Hebrew, 5785, 6), 0);
        assert_eq!(days_in_month(Calendar::Hebrew, 5785, 1), 30);
        assert_eq!(days_in_month(Calendar::Hebrew, 5785, 13), 29);
        let total: u32 = (1..=13).map(|m| u32::from(days_in_month(Calendar::Hebrew, 5785, m))).sum();
        assert!((353..=355).contains(&total), "common year has {total} days");
    }

    #[test]
    fn test_french_complementary_days() {
        assert_eq!(days_in_month(Calendar::French, 3, 13), 6);
        assert_eq!(days_in_month(Calendar::French, 4, 13), 5);
        assert_eq!(days_in_month(Calendar::French, 4, 1), 30);
    }

    #[test]
    fn test_islamic_and_persian_month_lengths() {
        assert_eq!(days_in_month(Calendar::Islamic, 1445, 1), 30);
        assert_eq!(days_in_month(Calendar::Islamic, 1445, 2), 29);
        assert_eq!(days_in_month(Calendar::Persian, 1403, 1), 31);
        assert_eq!(days_in_month(Calendar::Persian, 1403, 7), 30);
        for calendar in [Calendar::Islamic, Calendar::Persian] {
            for year in 1300..1400 {
                let total: u32 = (1..=12).map(|m| u32::from(days_in_month(calendar, year, m))).sum();
                let expected = to_sdn(calendar, year + 1, 1, 1) - to_sdn(calendar, year, 1, 1);
                assert_eq!(i64::from(total), expected, "{calendar} {year}");
            }
        }
    }

    #[test]
    fn test_convert_julian_to_gregorian() {
        assert_eq!(
            convert(Calendar::Julian, Calendar::Gregorian, 1582, 10, 4),
            (1582, 10, 14)
        );
        assert_eq!(
            convert(Calendar::Gregorian, Calendar::Julian, 1789, 2, 5),
            (1789, 1, 25)
        );
    }

    #[test]
    fn test_sort_value_fallbacks() {
        assert_eq!(
            to_sort_value(Calendar::Gregorian, 1789, 0, 0),
            to_sdn(Calendar::Gregorian, 1789, 1, 1)
        );
        assert_eq!(
            to_sort_value(Calendar::Gregorian, 1789, 6, 0),
            to_sdn(Calendar::Gregorian, 1789, 6, 1)
        );
    }

    #[test]
    fn test_component_sort_value_new_year() {
        let feb = CalendarDate::ymd(1788, 2, 5);
        let apr = CalendarDate::ymd(1788, 4, 5);
        assert_eq!(
            component_sort_value(Calendar::Julian, &feb, NewYear::Mar25),
            to_sdn(Calendar::Julian, 1789, 2, 5)
        );
        assert_eq!(
            component_sort_value(Calendar::Julian, &apr, NewYear::Mar25),
            to_sdn(Calendar::Julian, 1788, 4, 5)
        );
        assert_eq!(component_sort_value(Calendar::Julian, &CalendarDate::EMPTY, NewYear::Mar25), 0);
    }
}
