/// Highest month number any calendar uses (Hebrew Elul, French complementary days)
pub const MAX_MONTH: u8 = 13;

/// Upper bound on a day of month in every supported calendar
pub const MAX_DAY: u8 = 31;

/// Month/day used in place of an unknown month or day when ordering dates
pub const FALLBACK_MONTH: u8 = 1;
/// See [`FALLBACK_MONTH`]
pub const FALLBACK_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Julian/Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Mean Gregorian days per 400 years, used to turn year widths into days
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// SDN of 1 Tishri AM 1
pub(crate) const HEBREW_EPOCH: i64 = 347_998;
/// Parts (halakim) in a day
pub(crate) const HEBREW_PARTS_PER_DAY: i64 = 25_920;
/// Hebrew month lengths in Tishri order; Heshvan, Kislev and Adar I are adjusted per year
pub(crate) const HEBREW_MONTH_DAYS: [u8; 14] = [0, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29];
/// Month number of Adar I (only present in leap years)
pub(crate) const HEBREW_ADAR_I: u8 = 6;

/// SDN offset of the French Republican calendar (1 Vendémiaire I is `OFFSET + 366`)
pub(crate) const FRENCH_SDN_OFFSET: i64 = 2_375_474;
pub(crate) const FRENCH_DAYS_PER_4_YEARS: i64 = 1461;
pub(crate) const FRENCH_DAYS_PER_MONTH: i64 = 30;
/// The complementary days at the end of the French Republican year
pub(crate) const FRENCH_COMPLEMENTARY_MONTH: u8 = 13;

/// SDN of the day before 1 Muharram AH 1
pub(crate) const ISLAMIC_EPOCH: i64 = 1_948_439;

/// SDN base of the Persian arithmetic calendar
pub(crate) const PERSIAN_EPOCH: i64 = 1_948_320;
/// Days in a full 2820-year Persian cycle
pub(crate) const PERSIAN_DAYS_PER_CYCLE: i64 = 1_029_983;

/// Default widths (in years) of ABOUT/BEFORE/AFTER intervals
pub const DEFAULT_ABOUT_YEARS: u16 = 50;
/// See [`DEFAULT_ABOUT_YEARS`]
pub const DEFAULT_BEFORE_YEARS: u16 = 50;
/// See [`DEFAULT_ABOUT_YEARS`]
pub const DEFAULT_AFTER_YEARS: u16 = 50;

/// Language used when a requested locale has no grammar
pub const DEFAULT_LANGUAGE: &str = "en";

/// Environment variables consulted, in order, for the runtime locale
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];
