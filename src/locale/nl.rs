use super::{Grammar, NumericOrder, QualityPosition};
use crate::config::DateFormat;

pub(super) static GRAMMAR: Grammar = Grammar {
    language:          "nl",
    aliases:           &["nederlands", "dutch"],
    month_names:       [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    month_abbrevs:     [
        "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    month_variants:    &[("maa", 3), ("sept", 9)],
    estimated:         &["geschat", "gesch."],
    calculated:        &["berekend", "ber."],
    quality_position:  QualityPosition::Prefix,
    before:            &["voor"],
    after:             &["na"],
    about:             &["rond", "omstreeks", "circa", "ca."],
    from:              &["van", "vanaf"],
    to:                &["tot"],
    between:           &["tussen"],
    and:               &["en"],
    bce:               &["v.Chr.", "v. Chr."],
    calendar_names:    [
        "gregoriaans",
        "juliaans",
        "hebreeuws",
        "Franse republiek",
        "Perzisch",
        "islamitisch",
        "Zweeds",
    ],
    numeric_order:     NumericOrder::DayMonthYear,
    numeric_separator: '-',
    day_suffix:        "",
    format:            DateFormat::DayMonthYear,
};
