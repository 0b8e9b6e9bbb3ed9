use super::{Grammar, NumericOrder, QualityPosition};
use crate::config::DateFormat;

pub(super) static GRAMMAR: Grammar = Grammar {
    language:          "en",
    aliases:           &["english", "c", "posix"],
    month_names:       [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_abbrevs:     [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    month_variants:    &[("Sept", 9)],
    estimated:         &["estimated", "est.", "est"],
    calculated:        &["calculated", "calc.", "calc"],
    quality_position:  QualityPosition::Prefix,
    before:            &["before", "bef.", "bef"],
    after:             &["after", "aft.", "aft"],
    about:             &["about", "abt.", "abt", "circa", "c.", "around"],
    from:              &["from"],
    to:                &["to"],
    between:           &["between", "bet.", "bet", "btw."],
    and:               &["and"],
    bce:               &["BC", "B.C.", "BCE", "B.C.E."],
    calendar_names:    [
        "Gregorian",
        "Julian",
        "Hebrew",
        "French Republican",
        "Persian",
        "Islamic",
        "Swedish",
    ],
    numeric_order:     NumericOrder::MonthDayYear,
    numeric_separator: '/',
    day_suffix:        "",
    format:            DateFormat::MonthDayYear,
};
