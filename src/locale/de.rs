use super::{Grammar, NumericOrder, QualityPosition};
use crate::config::DateFormat;

pub(super) static GRAMMAR: Grammar = Grammar {
    language:          "de",
    aliases:           &["deutsch", "german"],
    month_names:       [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    month_abbrevs:     [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    month_variants:    &[("Jänner", 1), ("Maerz", 3), ("Mrz", 3), ("Sept", 9)],
    estimated:         &["geschätzt", "gesch."],
    calculated:        &["errechnet", "berechnet", "err."],
    quality_position:  QualityPosition::Prefix,
    before:            &["vor"],
    after:             &["nach"],
    about:             &["um", "etwa", "circa", "ca."],
    from:              &["von", "ab", "seit"],
    to:                &["bis"],
    between:           &["zwischen"],
    and:               &["und"],
    bce:               &["v. Chr.", "v.Chr."],
    calendar_names:    [
        "gregorianisch",
        "julianisch",
        "hebräisch",
        "französisch republikanisch",
        "persisch",
        "islamisch",
        "schwedisch",
    ],
    numeric_order:     NumericOrder::DayMonthYear,
    numeric_separator: '.',
    day_suffix:        ".",
    format:            DateFormat::DayMonthYear,
};
