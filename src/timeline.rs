//! Axis helpers for plotting dates on a timeline.

use crate::Date;

/// Number of gridlines drawn across a timeline.
const GRID_LINES: i32 = 6;
/// Year spans are padded to a multiple of this.
const SPAN_STEP: i64 = 50;

/// Year axis covering every dated entry.
///
/// The lowest year is rounded down and the highest up to a decade; the low
/// end is then pushed back so the span is a multiple of 50 years with at least
/// 50 years before the first entry. Text-only dates and dates with no known
/// year are skipped; `None` if nothing is left.
pub fn year_range<'a>(dates: impl IntoIterator<Item = &'a Date>) -> Option<(i32, i32)> {
    let (low, high) = dates
        .into_iter()
        .filter(|date| date.is_valid())
        .flat_map(|date| [Some(date.year()), date.stop_year()])
        .flatten()
        .filter(|year| *year != 0)
        .fold(None, |acc: Option<(i32, i32)>, year| match acc {
            Some((low, high)) => Some((low.min(year), high.max(year))),
            None => Some((year, year)),
        })?;

    let low = i64::from(low).div_euclid(10) * 10;
    let high = (i64::from(high) + 9).div_euclid(10) * 10;
    let low = low - (SPAN_STEP - (high - low).rem_euclid(SPAN_STEP));
    Some((clamp_year(low), clamp_year(high)))
}

fn clamp_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// Evenly spaced year labels from `low` to `high`.
pub const fn grid_labels(low: i32, high: i32) -> [i32; GRID_LINES as usize] {
    let step = (high as i64 - low as i64) / (GRID_LINES as i64 - 1);
    let mut labels = [0; GRID_LINES as usize];
    let mut i = 0;
    while i < labels.len() {
        // Stays between `low` and `high` when `low <= high`
        labels[i] = (low as i64 + step * i as i64) as i32;
        i += 1;
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gregorian;

    #[test]
    fn test_year_range() {
        struct TestCase {
            years:       &'static [i32],
            expected:    Option<(i32, i32)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                years:       &[1789, 1876],
                expected:    Some((1730, 1880)),
                description: "span already a multiple of 50",
            },
            TestCase {
                years:       &[1801, 1823],
                expected:    Some((1780, 1830)),
                description: "short span padded to 50",
            },
            TestCase {
                years:       &[1800],
                expected:    Some((1750, 1800)),
                description: "single year",
            },
            TestCase {
                years:       &[],
                expected:    None,
                description: "nothing dated",
            },
        ];

        for case in &cases {
            let dates: Vec<_> = case.years.iter().map(|y| gregorian(*y, 0, 0)).collect();
            assert_eq!(year_range(&dates), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_year_range_skips_undated() {
        let dates = [
            Date::text_only("1500"),
            gregorian(0, 2, 5),
            Date::default(),
            "from 1801 to 1823".parse().unwrap(),
        ];
        assert_eq!(year_range(&dates), Some((1780, 1830)));
    }

    #[test]
    fn test_grid_labels() {
        assert_eq!(grid_labels(1730, 1880), [1730, 1760, 1790, 1820, 1850, 1880]);
        assert_eq!(grid_labels(1780, 1830), [1780, 1790, 1800, 1810, 1820, 1830]);
    }

    #[test]
    fn test_extreme_years() {
        let last = gregorian(i32::MAX, 0, 0);
        let first = gregorian(i32::MIN, 0, 0);

        assert_eq!(year_range([&last]), Some((2_147_483_600, i32::MAX)));
        assert_eq!(year_range([&first, &last]), Some((i32::MIN, i32::MAX)));

        let labels = grid_labels(i32::MIN, i32::MAX);
        assert_eq!(labels[0], i32::MIN);
        assert_eq!(labels[5], i32::MAX);
    }
}
