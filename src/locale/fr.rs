use super::{Grammar, NumericOrder, QualityPosition};
use crate::config::DateFormat;

pub(super) static GRAMMAR: Grammar = Grammar {
    language:          "fr",
    aliases:           &["français", "french"],
    month_names:       [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    month_abbrevs:     [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    month_variants:    &[("fevrier", 2), ("aout", 8), ("decembre", 12)],
    estimated:         &["estimée", "estimé", "est."],
    calculated:        &["calculée", "calculé", "calc."],
    quality_position:  QualityPosition::Prefix,
    before:            &["avant", "av."],
    after:             &["après", "ap."],
    about:             &["vers", "environ", "env.", "circa"],
    from:              &["de", "depuis"],
    to:                &["à", "jusqu'à"],
    between:           &["entre"],
    and:               &["et"],
    bce:               &["av. J.-C.", "av. J.C."],
    calendar_names:    [
        "grégorien",
        "julien",
        "hébreu",
        "républicain",
        "persan",
        "islamique",
        "suédois",
    ],
    numeric_order:     NumericOrder::DayMonthYear,
    numeric_separator: '/',
    day_suffix:        "",
    format:            DateFormat::DayMonthYear,
};
