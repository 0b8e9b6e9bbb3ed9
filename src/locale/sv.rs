use super::{Grammar, NumericOrder, QualityPosition};
use crate::config::DateFormat;

pub(super) static GRAMMAR: Grammar = Grammar {
    language:          "sv",
    aliases:           &["svenska", "swedish"],
    month_names:       [
        "januari",
        "februari",
        "mars",
        "april",
        "maj",
        "juni",
        "juli",
        "augusti",
        "september",
        "oktober",
        "november",
        "december",
    ],
    month_abbrevs:     [
        "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    month_variants:    &[("sept", 9)],
    estimated:         &["uppskattat", "uppsk."],
    calculated:        &["beräknat", "ber."],
    quality_position:  QualityPosition::Prefix,
    before:            &["före"],
    after:             &["efter"],
    about:             &["omkring", "cirka", "ca"],
    from:              &["från"],
    to:                &["till"],
    between:           &["mellan"],
    and:               &["och"],
    bce:               &["f.Kr.", "f. Kr."],
    calendar_names:    [
        "gregoriansk",
        "juliansk",
        "hebreisk",
        "fransk republikansk",
        "persisk",
        "islamisk",
        "svensk",
    ],
    numeric_order:     NumericOrder::YearMonthDay,
    numeric_separator: '-',
    day_suffix:        "",
    format:            DateFormat::Iso,
};
