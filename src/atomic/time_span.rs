//! Duration parsers.
//!
//! # Lenient parsing
//!
//! Without a format the input is `[-]d`, `[-][d.]h:m[:s[.f]]` or
//! `[-]d:h:m:s[.f]`, the fraction introduced by `.` or the culture's
//! decimal separator.
//!
//! # Exact formats
//!
//! | Format          | Shape                                 |
//! |-----------------|---------------------------------------|
//! | `c`, `t`, `T`   | `[-][d.]hh:mm:ss[.fffffff]`           |
//! | `g`             | `[-][d:]h:mm:ss[.FFFFFFF]`            |
//! | `G`             | `[-]d:hh:mm:ss.fffffff`               |
//!
//! `g` and `G` use the culture's decimal separator. Longer formats are
//! custom patterns of `d` to `dddddddd`, `h`, `hh`, `m`, `mm`, `s`, `ss`,
//! `f` to `fffffff`, `F` to `FFFFFFF`, quoted literals and `\` escapes; any
//! other character in a custom pattern is a format failure. A custom
//! pattern carries no sign, [`TimeSpanStyles::ASSUME_NEGATIVE`] negates it.
//!
//! Components beyond their range, hours past 23, minutes or seconds past
//! 59, more than seven fractional digits, more than 10675199 days, are an
//! overflow. In a custom pattern, digits past the `f` or `F` count are a
//! format failure.

use time::Duration;

use crate::culture::Culture;
use crate::error::{Failure, Outcome};
use crate::input::{strip_symbol, trim_white, Input};
use crate::style::TimeSpanStyles;

const MAX_DAYS: u64 = 10_675_199;
const MAX_FRACTION_DIGITS: usize = 7;
const TICKS_PER_SECOND: u64 = 10_000_000;
const NANOS_PER_TICK: u64 = 100;
const MAX_DAY_DIGITS: usize = 8;

/// Parses a duration without a format.
pub fn parse_time_span(
    input: Input<'_>,
    styles: TimeSpanStyles,
    culture: &Culture,
) -> Outcome<Duration> {
    let mut scanner = Scanner::new(prepare(input, styles)?);
    let mut parts = Parts {
        negative: scanner.eat("-"),
        ..Parts::default()
    };
    let first = scanner.number(1, usize::MAX)?.0;
    if scanner.is_done() {
        parts.days = first;
        return parts.to_duration();
    }
    let has_days = scanner.eat(".");
    if has_days {
        parts.days = first;
        parts.hours = scanner.number(1, usize::MAX)?.0;
    } else {
        parts.hours = first;
    }
    scanner.expect(":")?;
    parts.minutes = scanner.number(1, usize::MAX)?.0;
    if scanner.eat(":") {
        let third = scanner.number(1, usize::MAX)?.0;
        if !has_days && scanner.eat(":") {
            parts.days = parts.hours;
            parts.hours = parts.minutes;
            parts.minutes = third;
            parts.seconds = scanner.number(1, usize::MAX)?.0;
        } else {
            parts.seconds = third;
        }
        if scanner.eat(".") || scanner.eat_symbol(culture.number_format.decimal_separator) {
            parts.ticks = scanner.fraction(1, usize::MAX)?;
        }
    }
    scanner.end()?;
    parts.to_duration()
}

/// Parses a duration matching `format` exactly.
pub fn parse_time_span_exact(
    input: Input<'_>,
    format: &str,
    styles: TimeSpanStyles,
    culture: &Culture,
) -> Outcome<Duration> {
    let s = prepare(input, styles)?;
    let mut chars = format.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(Failure::Format),
        (Some('c' | 't' | 'T'), None) => parse_constant(s),
        (Some('g'), None) => parse_general(s, culture, false),
        (Some('G'), None) => parse_general(s, culture, true),
        (Some(_), None) => Err(Failure::Format),
        _ => {
            let value = parse_custom(s, format)?;
            if styles.contains(TimeSpanStyles::ASSUME_NEGATIVE) {
                Ok(-value)
            } else {
                Ok(value)
            }
        }
    }
}

fn prepare(input: Input<'_>, styles: TimeSpanStyles) -> Outcome<&str> {
    let s = input.ok_or(Failure::ArgumentNull)?.trim_end_matches('\0');
    Ok(trim_white(
        s,
        styles.contains(TimeSpanStyles::ALLOW_LEADING_WHITE),
        styles.contains(TimeSpanStyles::ALLOW_TRAILING_WHITE),
    ))
}

/// `[-][d.]hh:mm:ss[.fffffff]`
fn parse_constant(s: &str) -> Outcome<Duration> {
    let mut scanner = Scanner::new(s);
    let mut parts = Parts {
        negative: scanner.eat("-"),
        ..Parts::default()
    };
    let (first, len) = scanner.number(1, usize::MAX)?;
    if scanner.eat(".") {
        parts.days = first;
        parts.hours = scanner.number(2, 2)?.0;
    } else if len == 2 {
        parts.hours = first;
    } else {
        return Err(Failure::Format);
    }
    scanner.expect(":")?;
    parts.minutes = scanner.number(2, 2)?.0;
    scanner.expect(":")?;
    parts.seconds = scanner.number(2, 2)?.0;
    if scanner.eat(".") {
        parts.ticks = scanner.fraction(1, usize::MAX)?;
    }
    scanner.end()?;
    parts.to_duration()
}

/// `[-][d:]h:mm:ss[.FFFFFFF]`, or `[-]d:hh:mm:ss.fffffff` when `long`.
fn parse_general(s: &str, culture: &Culture, long: bool) -> Outcome<Duration> {
    let mut scanner = Scanner::new(s);
    let mut parts = Parts {
        negative: scanner.eat("-"),
        ..Parts::default()
    };
    let mut fields = vec![scanner.number(1, usize::MAX)?];
    while fields.len() < 4 && scanner.eat(":") {
        fields.push(scanner.number(1, usize::MAX)?);
    }
    let (hours, minutes, seconds) = match fields[..] {
        [days, hours, minutes, seconds] => {
            parts.days = days.0;
            (hours, minutes, seconds)
        }
        [hours, minutes, seconds] if !long => (hours, minutes, seconds),
        _ => return Err(Failure::Format),
    };
    if (long && hours.1 != 2) || hours.1 > 2 || minutes.1 != 2 || seconds.1 != 2 {
        return Err(Failure::Format);
    }
    parts.hours = hours.0;
    parts.minutes = minutes.0;
    parts.seconds = seconds.0;
    if scanner.eat_symbol(culture.number_format.decimal_separator) {
        let min = if long { MAX_FRACTION_DIGITS } else { 1 };
        parts.ticks = scanner.fraction(min, usize::MAX)?;
    } else if long {
        return Err(Failure::Format);
    }
    scanner.end()?;
    parts.to_duration()
}

fn parse_custom(s: &str, format: &str) -> Outcome<Duration> {
    let mut scanner = Scanner::new(s);
    let mut parts = Parts::default();
    let mut format = format;
    while let Some(c) = format.chars().next() {
        let after = &format[c.len_utf8()..];
        format = match c {
            '\'' | '"' => {
                let end = after.find(c).ok_or(Failure::Format)?;
                scanner.expect(&after[..end])?;
                &after[end + c.len_utf8()..]
            }
            '\\' => {
                let mut chars = after.chars();
                let escaped = chars.next().ok_or(Failure::Format)?;
                scanner.expect(escaped.encode_utf8(&mut [0; 4]))?;
                chars.as_str()
            }
            '%' => after,
            'd' | 'h' | 'm' | 's' | 'f' | 'F' => {
                let count = format.chars().take_while(|&next| next == c).count();
                match c {
                    'd' if count <= MAX_DAY_DIGITS => {
                        parts.days = scanner.number(count, MAX_DAY_DIGITS)?.0;
                    }
                    'h' if count <= 2 => parts.hours = scanner.number(count, 2)?.0,
                    'm' if count <= 2 => parts.minutes = scanner.number(count, 2)?.0,
                    's' if count <= 2 => parts.seconds = scanner.number(count, 2)?.0,
                    'f' if count <= MAX_FRACTION_DIGITS => {
                        parts.ticks = scanner.fraction(count, count)?;
                    }
                    'F' if count <= MAX_FRACTION_DIGITS => {
                        parts.ticks = scanner.fraction(0, count)?;
                    }
                    _ => return Err(Failure::Format),
                }
                &format[count..]
            }
            _ => return Err(Failure::Format),
        };
    }
    scanner.end()?;
    parts.to_duration()
}

#[derive(Debug, Default)]
struct Parts {
    negative: bool,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    ticks: u64,
}

impl Parts {
    fn to_duration(&self) -> Outcome<Duration> {
        if self.days > MAX_DAYS || self.hours > 23 || self.minutes > 59 || self.seconds > 59 {
            return Err(Failure::Overflow);
        }
        let seconds = ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds;
        let total_ticks = seconds
            .checked_mul(TICKS_PER_SECOND)
            .and_then(|ticks| ticks.checked_add(self.ticks))
            .filter(|&ticks| i64::try_from(ticks).is_ok())
            .ok_or(Failure::Overflow)?;
        let seconds = i64::try_from(total_ticks / TICKS_PER_SECOND).map_err(|_| Failure::Overflow)?;
        let nanos = i32::try_from(total_ticks % TICKS_PER_SECOND * NANOS_PER_TICK)
            .map_err(|_| Failure::Overflow)?;
        let value = Duration::new(seconds, nanos);
        Ok(if self.negative { -value } else { value })
    }
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn is_done(&self) -> bool {
        self.rest.is_empty()
    }

    fn end(&self) -> Outcome<()> {
        if self.is_done() {
            Ok(())
        } else {
            Err(Failure::Format)
        }
    }

    fn eat(&mut self, literal: &str) -> bool {
        match self.rest.strip_prefix(literal) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn eat_symbol(&mut self, symbol: &str) -> bool {
        match strip_symbol(self.rest, symbol) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, literal: &str) -> Outcome<()> {
        if self.eat(literal) {
            Ok(())
        } else {
            Err(Failure::Format)
        }
    }

    /// Reads at least `min` and at most `max` digits, returning the value
    /// and the number of digits read.
    fn number(&mut self, min: usize, max: usize) -> Outcome<(u64, usize)> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return Err(Failure::Format);
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        if digits.is_empty() {
            return Ok((0, 0));
        }
        digits
            .parse()
            .map(|value| (value, len))
            .map_err(|_| Failure::Overflow)
    }

    /// Reads fractional digits as ticks.
    ///
    /// More than seven digits are an overflow, digits left over past `max`
    /// a format failure.
    fn fraction(&mut self, min: usize, max: usize) -> Outcome<u64> {
        let (value, len) = self.number(min, max)?;
        if len > MAX_FRACTION_DIGITS {
            return Err(Failure::Overflow);
        }
        if self.rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(Failure::Format);
        }
        let scale = u32::try_from(MAX_FRACTION_DIGITS - len).map_err(|_| Failure::Overflow)?;
        Ok(value * 10_u64.pow(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(s: &str) -> Outcome<Duration> {
        parse_time_span(Some(s), TimeSpanStyles::default(), Culture::invariant())
    }

    fn exact(s: &str, format: &str) -> Outcome<Duration> {
        parse_time_span_exact(Some(s), format, TimeSpanStyles::default(), Culture::invariant())
    }

    fn hms(hours: i64, minutes: i64, seconds: i64) -> Duration {
        Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds)
    }

    #[test]
    fn test_lenient_shapes() {
        assert_eq!(lenient("6"), Ok(Duration::days(6)));
        assert_eq!(lenient("6:12"), Ok(hms(6, 12, 0)));
        assert_eq!(lenient(" 6:12:14 "), Ok(hms(6, 12, 14)));
        assert_eq!(lenient("1.6:12:14"), Ok(Duration::days(1) + hms(6, 12, 14)));
        assert_eq!(lenient("1:6:12:14"), Ok(Duration::days(1) + hms(6, 12, 14)));
        assert_eq!(
            lenient("6:12:14.45"),
            Ok(hms(6, 12, 14) + Duration::milliseconds(450))
        );
        assert_eq!(lenient("-6:12"), Ok(-hms(6, 12, 0)));
        assert_eq!(
            parse_time_span(
                Some("6:12:14,5"),
                TimeSpanStyles::default(),
                Culture::get("fr-FR").unwrap(),
            ),
            Ok(hms(6, 12, 14) + Duration::milliseconds(500))
        );
    }

    #[test]
    fn test_lenient_failures() {
        assert_eq!(lenient("6:12:14:15:16"), Err(Failure::Format));
        assert_eq!(lenient("6."), Err(Failure::Format));
        assert_eq!(lenient("abc"), Err(Failure::Format));
        assert_eq!(lenient(""), Err(Failure::Format));
        assert_eq!(lenient("24:00"), Err(Failure::Overflow));
        assert_eq!(lenient("6:60"), Err(Failure::Overflow));
        assert_eq!(lenient("6:12:14.12345678"), Err(Failure::Overflow));
        assert_eq!(lenient("10675200"), Err(Failure::Overflow));
        assert_eq!(lenient("99999999999999999999"), Err(Failure::Overflow));
        assert_eq!(
            parse_time_span(None, TimeSpanStyles::default(), Culture::invariant()),
            Err(Failure::ArgumentNull)
        );
    }

    #[test]
    fn test_standard_formats() {
        assert_eq!(
            exact("1.06:12:14.5", "c"),
            Ok(Duration::days(1) + hms(6, 12, 14) + Duration::milliseconds(500))
        );
        assert_eq!(exact("06:12:14", "c"), Ok(hms(6, 12, 14)));
        assert_eq!(exact("6:12:14", "c"), Err(Failure::Format));
        assert_eq!(
            exact("1:6:12:14", "g"),
            Ok(Duration::days(1) + hms(6, 12, 14))
        );
        assert_eq!(
            exact("-6:12:14.1", "g"),
            Ok(-(hms(6, 12, 14) + Duration::milliseconds(100)))
        );
        assert_eq!(
            exact("1:06:12:14.0000000", "G"),
            Ok(Duration::days(1) + hms(6, 12, 14))
        );
        assert_eq!(exact("1:06:12:14", "G"), Err(Failure::Format));
        assert_eq!(exact("06:12:14.12345678", "c"), Err(Failure::Overflow));
        assert_eq!(exact("06:12:14", "x"), Err(Failure::Format));
    }

    #[test]
    fn test_custom_formats() {
        assert_eq!(exact("06h12", "hh'h'mm"), Ok(hms(6, 12, 0)));
        assert_eq!(
            exact("3:06:12", "d\\:hh\\:mm"),
            Ok(Duration::days(3) + hms(6, 12, 0))
        );
        assert_eq!(
            exact("14.5", "ss\\.F"),
            Ok(Duration::seconds(14) + Duration::milliseconds(500))
        );
        assert_eq!(exact("14.", "ss\\.F"), Ok(Duration::seconds(14)));
        assert_eq!(exact("14.55", "ss\\.F"), Err(Failure::Format));
        assert_eq!(exact("14.555", "ss\\.ff"), Err(Failure::Format));
        assert_eq!(exact("06:12", "hh:mm"), Err(Failure::Format));
        assert_eq!(exact("25", "hh"), Err(Failure::Overflow));
        assert_eq!(
            parse_time_span_exact(
                Some("06"),
                "hh",
                TimeSpanStyles::ASSUME_NEGATIVE,
                Culture::invariant(),
            ),
            Ok(-Duration::hours(6))
        );
    }
}
