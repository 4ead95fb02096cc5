//! Date and date-offset parsers.
//!
//! # Exact formats
//!
//! A single character format is a standard format, expanded from the
//! culture's patterns:
//!
//! | Format     | Pattern                                            |
//! |------------|----------------------------------------------------|
//! | `d`        | short date                                         |
//! | `D`        | long date                                          |
//! | `f`        | long date, short time                              |
//! | `F`, `U`   | long date, long time                               |
//! | `g`        | short date, short time                             |
//! | `G`        | short date, long time                              |
//! | `M`, `m`   | month and day                                      |
//! | `t`        | short time                                         |
//! | `T`        | long time                                          |
//! | `Y`, `y`   | year and month                                     |
//! | `o`, `O`   | `yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK`         |
//! | `r`, `R`   | `ddd, dd MMM yyyy HH':'mm':'ss 'GMT'`              |
//! | `s`        | `yyyy'-'MM'-'dd'T'HH':'mm':'ss`                    |
//! | `u`        | `yyyy'-'MM'-'dd HH':'mm':'ss'Z'`                   |
//!
//! `o`, `r`, `s` and `u` always use the invariant culture; `r`, `u` and `U`
//! read the time as UTC. Any other single character is a format failure.
//!
//! Longer formats are custom patterns made of:
//!
//! - `d`, `dd` the day; `ddd`, `dddd` the abbreviated or full day name,
//!   which must agree with the date;
//! - `M`, `MM` the month; `MMM`, `MMMM` the abbreviated or full month name;
//! - `y`, `yy` a two digit year mapped through the culture's cutoff; `yyy`
//!   and longer exactly that many digits;
//! - `h`, `hh` the hour on a twelve hour clock; `H`, `HH` on a 24 hour clock;
//! - `m`, `mm` minutes; `s`, `ss` seconds;
//! - `f` to `fffffff` exactly that many fractional digits; `F` to `FFFFFFF`
//!   at most that many, with a preceding `.` optional along with them;
//! - `t`, `tt` the first character of, or the whole, AM/PM designator;
//! - `z`, `zz`, `zzz` an offset as `+h`, `+hh` or `+hh:mm`; `K` an optional
//!   `Z` or offset;
//! - `g` an optional era;
//! - `:` and `/` the culture's time and date separators;
//! - `'...'` and `"..."` quoted literals, `\c` an escaped character and a
//!   `%` prefix for single character custom formats.
//!
//! # Lenient parsing
//!
//! Without a format, the ISO 8601 forms are tried first, then the culture's
//! standard patterns. Missing date components default to `0001-01-01`; the
//! system clock is never consulted.

mod format;

use std::borrow::Cow;

use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::culture::Culture;
use crate::error::{Failure, Outcome};
use crate::input::{trim_white, Input};
use crate::style::DateTimeStyles;

use self::format::Matcher;

/// The `o` standard format.
pub const ROUND_TRIP_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK";
/// The `r` standard format.
pub const RFC1123_PATTERN: &str = "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'";
/// The `s` standard format.
pub const SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
/// The `u` standard format.
pub const UNIVERSAL_SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd HH':'mm':'ss'Z'";

const ISO_PATTERNS: [&str; 5] = [
    "yyyy'-'MM'-'dd'T'HH':'mm':'ss.FFFFFFFK",
    "yyyy'-'MM'-'dd'T'HH':'mmK",
    "yyyy'-'MM'-'dd HH':'mm':'ss.FFFFFFFK",
    "yyyy'-'MM'-'dd HH':'mmK",
    "yyyy'-'MM'-'ddK",
];

type Components = (PrimitiveDateTime, Option<UtcOffset>);

/// Parses a date without a format.
///
/// An offset in the input converts the result to UTC.
pub fn parse_date_time(
    input: Input<'_>,
    styles: DateTimeStyles,
    culture: &Culture,
) -> Outcome<PrimitiveDateTime> {
    parse_lenient(input, styles, culture).and_then(into_date_time)
}

/// Parses a date matching `format` exactly.
///
/// An offset in the input converts the result to UTC.
pub fn parse_date_time_exact(
    input: Input<'_>,
    format: &str,
    styles: DateTimeStyles,
    culture: &Culture,
) -> Outcome<PrimitiveDateTime> {
    parse_format(input, format, styles, culture).and_then(into_date_time)
}

/// Parses a date-offset without a format.
///
/// Input without an offset is taken as UTC.
pub fn parse_date_time_offset(
    input: Input<'_>,
    styles: DateTimeStyles,
    culture: &Culture,
) -> Outcome<OffsetDateTime> {
    parse_lenient(input, styles, culture).and_then(|components| into_offset(components, styles))
}

/// Parses a date-offset matching `format` exactly.
///
/// Input without an offset is taken as UTC.
pub fn parse_date_time_offset_exact(
    input: Input<'_>,
    format: &str,
    styles: DateTimeStyles,
    culture: &Culture,
) -> Outcome<OffsetDateTime> {
    parse_format(input, format, styles, culture)
        .and_then(|components| into_offset(components, styles))
}

fn prepare(input: Input<'_>, styles: DateTimeStyles) -> Outcome<&str> {
    let s = input.ok_or(Failure::ArgumentNull)?.trim_end_matches('\0');
    let s = trim_white(
        s,
        styles.contains(DateTimeStyles::ALLOW_LEADING_WHITE),
        styles.contains(DateTimeStyles::ALLOW_TRAILING_WHITE),
    );
    if s.is_empty() {
        Err(Failure::Format)
    } else {
        Ok(s)
    }
}

fn parse_lenient(
    input: Input<'_>,
    styles: DateTimeStyles,
    culture: &Culture,
) -> Outcome<Components> {
    let s = prepare(input, styles)?;
    let inner_white = styles.contains(DateTimeStyles::ALLOW_INNER_WHITE);
    let dtf = &culture.date_time_format;
    let culture_patterns = [
        format!("{} {}", dtf.short_date_pattern, dtf.long_time_pattern),
        format!("{} {}", dtf.short_date_pattern, dtf.short_time_pattern),
        dtf.short_date_pattern.to_owned(),
        dtf.full_date_time_pattern(),
        format!("{} {}", dtf.long_date_pattern, dtf.short_time_pattern),
        dtf.long_date_pattern.to_owned(),
        dtf.long_time_pattern.to_owned(),
        dtf.short_time_pattern.to_owned(),
        dtf.month_day_pattern.to_owned(),
        dtf.year_month_pattern.to_owned(),
        format!("{} HH:mm:ss", dtf.short_date_pattern),
        format!("{} HH:mm", dtf.short_date_pattern),
    ];
    let patterns = ISO_PATTERNS
        .iter()
        .map(|&pattern| Cow::Borrowed(pattern))
        .chain(culture_patterns.into_iter().map(Cow::Owned));
    for pattern in patterns {
        let components = Matcher::new(s, culture, true, inner_white)
            .run(&pattern)
            .and_then(|parsed| parsed.build());
        if components.is_ok() {
            return components;
        }
        tracing::trace!(pattern = %pattern, "lenient pattern did not match");
    }
    Err(Failure::Format)
}

fn parse_format(
    input: Input<'_>,
    format: &str,
    styles: DateTimeStyles,
    culture: &Culture,
) -> Outcome<Components> {
    let s = prepare(input, styles)?;
    let (pattern, culture, utc) = expand(format, culture)?;
    let parsed = Matcher::new(s, culture, false, styles.contains(DateTimeStyles::ALLOW_INNER_WHITE))
        .run(&pattern)?;
    let (value, offset) = parsed.build()?;
    Ok((value, offset.or(utc.then_some(UtcOffset::UTC))))
}

/// Expands a standard format, returning the pattern, the culture to match
/// it with and whether it reads UTC.
fn expand<'f, 'c>(
    format: &'f str,
    culture: &'c Culture,
) -> Outcome<(Cow<'f, str>, &'c Culture, bool)> {
    let mut chars = format.chars();
    let specifier = match (chars.next(), chars.next()) {
        (None, _) => return Err(Failure::Format),
        (Some(specifier), None) => specifier,
        (Some(_), Some(_)) => return Ok((Cow::Borrowed(format), culture, false)),
    };
    let dtf = &culture.date_time_format;
    let pattern = match specifier {
        'd' => Cow::Borrowed(dtf.short_date_pattern),
        'D' => Cow::Borrowed(dtf.long_date_pattern),
        'f' => Cow::Owned(format!("{} {}", dtf.long_date_pattern, dtf.short_time_pattern)),
        'F' => Cow::Owned(dtf.full_date_time_pattern()),
        'g' => Cow::Owned(format!("{} {}", dtf.short_date_pattern, dtf.short_time_pattern)),
        'G' => Cow::Owned(format!("{} {}", dtf.short_date_pattern, dtf.long_time_pattern)),
        'M' | 'm' => Cow::Borrowed(dtf.month_day_pattern),
        't' => Cow::Borrowed(dtf.short_time_pattern),
        'T' => Cow::Borrowed(dtf.long_time_pattern),
        'Y' | 'y' => Cow::Borrowed(dtf.year_month_pattern),
        'U' => return Ok((Cow::Owned(dtf.full_date_time_pattern()), culture, true)),
        'o' | 'O' => return Ok((Cow::Borrowed(ROUND_TRIP_PATTERN), Culture::invariant(), false)),
        'r' | 'R' => return Ok((Cow::Borrowed(RFC1123_PATTERN), Culture::invariant(), true)),
        's' => return Ok((Cow::Borrowed(SORTABLE_PATTERN), Culture::invariant(), false)),
        'u' => return Ok((Cow::Borrowed(UNIVERSAL_SORTABLE_PATTERN), Culture::invariant(), true)),
        _ => return Err(Failure::Format),
    };
    Ok((pattern, culture, false))
}

fn to_universal(value: PrimitiveDateTime, offset: UtcOffset) -> Outcome<PrimitiveDateTime> {
    value
        .checked_sub(Duration::seconds(i64::from(offset.whole_seconds())))
        .ok_or(Failure::Format)
}

fn into_date_time((value, offset): Components) -> Outcome<PrimitiveDateTime> {
    match offset {
        Some(offset) => to_universal(value, offset),
        None => Ok(value),
    }
}

fn into_offset((value, offset): Components, styles: DateTimeStyles) -> Outcome<OffsetDateTime> {
    let offset = offset.unwrap_or(UtcOffset::UTC);
    if styles.contains(DateTimeStyles::ADJUST_TO_UNIVERSAL) {
        to_universal(value, offset).map(PrimitiveDateTime::assume_utc)
    } else {
        Ok(value.assume_offset(offset))
    }
}
