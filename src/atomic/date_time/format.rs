//! Custom format matching.

use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};

use crate::culture::Culture;
use crate::error::{Failure, Outcome};
use crate::input::{is_white, strip_prefix_ignore_case, strip_symbol};

/// Most fractional second digits a format may ask for.
const MAX_FRACTION_DIGITS: usize = 7;
/// Largest offset in whole hours.
const MAX_OFFSET_HOURS: u32 = 14;

/// Components collected while matching a pattern.
#[derive(Debug, Default)]
pub(super) struct Parsed {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<u8>,
    hour: Option<u32>,
    twelve_hour: bool,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    nanosecond: u32,
    pub(super) offset: Option<UtcOffset>,
}

impl Parsed {
    /// Assembles the date and time, year, month and day defaulting to one.
    pub(super) fn build(&self) -> Outcome<(PrimitiveDateTime, Option<UtcOffset>)> {
        let month = u8::try_from(self.month.unwrap_or(1))
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .ok_or(Failure::Format)?;
        let day = u8::try_from(self.day.unwrap_or(1)).map_err(|_| Failure::Format)?;
        let date = Date::from_calendar_date(self.year.unwrap_or(1), month, day)
            .map_err(|_| Failure::Format)?;
        if let Some(weekday) = self.weekday {
            if date.weekday().number_days_from_sunday() != weekday {
                return Err(Failure::Format);
            }
        }
        let mut hour = self.hour.unwrap_or(0);
        if self.twelve_hour && hour > 12 {
            return Err(Failure::Format);
        }
        match self.pm {
            Some(true) if hour < 12 => hour += 12,
            Some(false) if hour == 12 => hour = 0,
            Some(false) if hour > 12 => return Err(Failure::Format),
            _ => {}
        }
        let time = Time::from_hms_nano(
            u8::try_from(hour).map_err(|_| Failure::Format)?,
            u8::try_from(self.minute.unwrap_or(0)).map_err(|_| Failure::Format)?,
            u8::try_from(self.second.unwrap_or(0)).map_err(|_| Failure::Format)?,
            self.nanosecond,
        )
        .map_err(|_| Failure::Format)?;
        Ok((PrimitiveDateTime::new(date, time), self.offset))
    }
}

/// Matches input against custom format patterns.
///
/// In lenient mode numeric fields accept one digit less than their width
/// asks for, separators accept any of the common date or time separators
/// and names match in either their full or abbreviated form.
pub(super) struct Matcher<'a, 'c> {
    rest: &'a str,
    culture: &'c Culture,
    lenient: bool,
    inner_white: bool,
    parsed: Parsed,
}

impl<'a, 'c> Matcher<'a, 'c> {
    pub(super) fn new(
        input: &'a str,
        culture: &'c Culture,
        lenient: bool,
        inner_white: bool,
    ) -> Self {
        Self {
            rest: input,
            culture,
            lenient,
            inner_white,
            parsed: Parsed::default(),
        }
    }

    /// Matches the whole input against `pattern`.
    pub(super) fn run(mut self, pattern: &str) -> Outcome<Parsed> {
        let mut format = pattern;
        while let Some(c) = format.chars().next() {
            if self.inner_white {
                self.skip_white();
            }
            let after = &format[c.len_utf8()..];
            format = match c {
                '\'' | '"' => {
                    let end = after.find(c).ok_or(Failure::Format)?;
                    self.literal(&after[..end])?;
                    &after[end + c.len_utf8()..]
                }
                '\\' => {
                    let mut chars = after.chars();
                    let escaped = chars.next().ok_or(Failure::Format)?;
                    self.literal_char(escaped)?;
                    chars.as_str()
                }
                '%' => after,
                '.' if after.starts_with('F') => {
                    let count = after.bytes().take_while(|&b| b == b'F').count();
                    self.optional_fraction(count)?;
                    &after[count..]
                }
                '/' => {
                    self.date_separator()?;
                    after
                }
                ':' => {
                    self.time_separator()?;
                    after
                }
                'd' | 'M' | 'y' | 'h' | 'H' | 'm' | 's' | 'f' | 'F' | 't' | 'z' | 'K' | 'g' => {
                    let count = format.chars().take_while(|&next| next == c).count();
                    self.field(c, count)?;
                    &format[count * c.len_utf8()..]
                }
                c if is_white(c) || c == '\u{a0}' || c == '\u{202f}' => {
                    self.white()?;
                    after
                }
                c => {
                    self.literal_char(c)?;
                    after
                }
            };
        }
        if self.inner_white {
            self.skip_white();
        }
        if self.rest.is_empty() {
            Ok(self.parsed)
        } else {
            Err(Failure::Format)
        }
    }

    fn field(&mut self, c: char, count: usize) -> Outcome<()> {
        match c {
            'd' => match count {
                1 | 2 => self.parsed.day = Some(self.number(count, 2)?.0),
                _ => {
                    let culture = self.culture;
                    let dtf = &culture.date_time_format;
                    let (full, abbreviated) = (&dtf.day_names, &dtf.abbreviated_day_names);
                    let names = if count == 3 { abbreviated } else { full };
                    let index = self.name(names, full, abbreviated)?;
                    self.parsed.weekday = u8::try_from(index).ok();
                }
            },
            'M' => match count {
                1 | 2 => self.parsed.month = Some(self.number(count, 2)?.0),
                _ => {
                    let culture = self.culture;
                    let dtf = &culture.date_time_format;
                    let (full, abbreviated) = (&dtf.month_names, &dtf.abbreviated_month_names);
                    let names = if count == 3 { abbreviated } else { full };
                    let index = self.name(names, full, abbreviated)?;
                    self.parsed.month = u32::try_from(index + 1).ok();
                }
            },
            'y' => self.year(count)?,
            'h' | 'H' => {
                self.parsed.hour = Some(self.number(count.min(2), 2)?.0);
                self.parsed.twelve_hour = c == 'h';
            }
            'm' => self.parsed.minute = Some(self.number(count.min(2), 2)?.0),
            's' => self.parsed.second = Some(self.number(count.min(2), 2)?.0),
            'f' | 'F' => {
                if count > MAX_FRACTION_DIGITS {
                    return Err(Failure::Format);
                }
                let min = if c == 'f' { count } else { 0 };
                let (value, digits) = self.number(min, count)?;
                self.parsed.nanosecond = fraction_to_nanos(value, digits);
            }
            't' => self.designator(count)?,
            'z' => self.offset(count)?,
            'K' => self.offset_or_utc()?,
            _ => self.era(),
        }
        Ok(())
    }

    /// Reads between `min` and `max` digits, returning the value and the
    /// number of digits read.
    fn number(&mut self, min: usize, max: usize) -> Outcome<(u32, usize)> {
        let min = if self.lenient { min.min(1) } else { min };
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
            .map_err(|_| Failure::Format)
    }

    fn year(&mut self, count: usize) -> Outcome<()> {
        let (min, max) = match count {
            _ if self.lenient => (1, count.max(4)),
            1 => (1, 2),
            2 => (2, 2),
            _ => (count, count),
        };
        let (value, digits) = self.number(min, max)?;
        let value = i32::try_from(value).map_err(|_| Failure::Format)?;
        let two_digit = digits <= 2 && (self.lenient || count <= 2);
        self.parsed.year = Some(if two_digit {
            let max = self.culture.date_time_format.two_digit_year_max;
            let year = max / 100 * 100 + value;
            if year > max {
                year - 100
            } else {
                year
            }
        } else {
            value
        });
        Ok(())
    }

    /// Matches one of `names`, or in lenient mode the longest of `full` and
    /// `abbreviated`, returning its index.
    fn name(&mut self, names: &[&str], full: &[&str], abbreviated: &[&str]) -> Outcome<usize> {
        let candidates = if self.lenient {
            [full, abbreviated]
        } else {
            [names, &[][..]]
        };
        let (index, rest) = candidates
            .iter()
            .flat_map(|names| names.iter().enumerate())
            .filter_map(|(index, name)| {
                strip_prefix_ignore_case(self.rest, name).map(|rest| (index, rest))
            })
            .min_by_key(|(_, rest)| rest.len())
            .ok_or(Failure::Format)?;
        self.rest = rest;
        Ok(index)
    }

    fn designator(&mut self, count: usize) -> Outcome<()> {
        let dtf = &self.culture.date_time_format;
        let (am, pm) = (dtf.am_designator, dtf.pm_designator);
        if am.is_empty() && pm.is_empty() {
            return Ok(());
        }
        let mut candidates = Vec::with_capacity(4);
        if count > 1 || self.lenient {
            candidates.extend([(am, false), (pm, true)]);
        }
        if count == 1 || self.lenient {
            candidates.extend([(first_char(am), false), (first_char(pm), true)]);
        }
        let (pm, rest) = candidates
            .into_iter()
            .filter_map(|(designator, pm)| {
                strip_prefix_ignore_case(self.rest, designator).map(|rest| (pm, rest))
            })
            .min_by_key(|(_, rest)| rest.len())
            .ok_or(Failure::Format)?;
        self.rest = rest;
        self.parsed.pm = Some(pm);
        Ok(())
    }

    /// `z` is `+h`, `zz` is `+hh` and `zzz` is `+hh:mm`.
    fn offset(&mut self, count: usize) -> Outcome<()> {
        let negative = self.sign()?;
        let (hours, _) = self.number(count.min(2), 2)?;
        let minutes = if count >= 3 {
            self.rest = self.rest.strip_prefix(':').ok_or(Failure::Format)?;
            self.number(2, 2)?.0
        } else {
            0
        };
        self.set_offset(negative, hours, minutes)
    }

    /// `Z`, `+hh:mm`, `+hhmm`, `+hh` or nothing at all.
    fn offset_or_utc(&mut self) -> Outcome<()> {
        if let Some(rest) = self.rest.strip_prefix(|c: char| c == 'Z' || c == 'z') {
            self.rest = rest;
            self.parsed.offset = Some(UtcOffset::UTC);
            return Ok(());
        }
        if !self.rest.starts_with(|c: char| c == '+' || c == '-') {
            return Ok(());
        }
        let negative = self.sign()?;
        let (hours, _) = self.number(2, 2)?;
        if let Some(rest) = self.rest.strip_prefix(':') {
            self.rest = rest;
        }
        let (minutes, _) = self.number(0, 2)?;
        self.set_offset(negative, hours, minutes)
    }

    fn sign(&mut self) -> Outcome<bool> {
        let mut chars = self.rest.chars();
        let negative = match chars.next() {
            Some('+') => false,
            Some('-' | '\u{2212}') => true,
            _ => return Err(Failure::Format),
        };
        self.rest = chars.as_str();
        Ok(negative)
    }

    fn set_offset(&mut self, negative: bool, hours: u32, minutes: u32) -> Outcome<()> {
        if hours > MAX_OFFSET_HOURS || minutes > 59 || (hours == MAX_OFFSET_HOURS && minutes > 0) {
            return Err(Failure::Format);
        }
        let sign = if negative { -1 } else { 1 };
        let hours = i8::try_from(hours).map_err(|_| Failure::Format)? * sign;
        let minutes = i8::try_from(minutes).map_err(|_| Failure::Format)? * sign;
        let offset = UtcOffset::from_hms(hours, minutes, 0).map_err(|_| Failure::Format)?;
        self.parsed.offset = Some(offset);
        Ok(())
    }

    fn era(&mut self) {
        for era in ["A.D.", "AD"] {
            if let Some(rest) = strip_prefix_ignore_case(self.rest, era) {
                self.rest = rest;
                return;
            }
        }
    }

    /// `.` followed by up to `count` digits, or nothing.
    fn optional_fraction(&mut self, count: usize) -> Outcome<()> {
        if count > MAX_FRACTION_DIGITS {
            return Err(Failure::Format);
        }
        let decimal = self.culture.number_format.decimal_separator;
        let rest = self
            .rest
            .strip_prefix('.')
            .or_else(|| strip_symbol(self.rest, decimal).filter(|_| self.lenient));
        if let Some(rest) = rest.filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit())) {
            self.rest = rest;
            let (value, digits) = self.number(1, count)?;
            self.parsed.nanosecond = fraction_to_nanos(value, digits);
        }
        Ok(())
    }

    fn date_separator(&mut self) -> Outcome<()> {
        let separator = self.culture.date_time_format.date_separator;
        self.separator(separator, &["/", "-", "."])
    }

    fn time_separator(&mut self) -> Outcome<()> {
        let separator = self.culture.date_time_format.time_separator;
        self.separator(separator, &[":", "."])
    }

    fn separator(&mut self, separator: &str, lenient: &[&str]) -> Outcome<()> {
        let rest = strip_symbol(self.rest, separator).or_else(|| {
            lenient
                .iter()
                .filter(|_| self.lenient)
                .find_map(|separator| self.rest.strip_prefix(separator))
        });
        self.rest = rest.ok_or(Failure::Format)?;
        Ok(())
    }

    /// Exactly one white-space character, or any amount in lenient mode or
    /// when inner white-space is allowed.
    fn white(&mut self) -> Outcome<()> {
        if self.lenient || self.inner_white {
            self.skip_white();
            return Ok(());
        }
        let mut chars = self.rest.chars();
        match chars.next() {
            Some(c) if is_white(c) || c == '\u{a0}' || c == '\u{202f}' => {
                self.rest = chars.as_str();
                Ok(())
            }
            _ => Err(Failure::Format),
        }
    }

    fn skip_white(&mut self) {
        self.rest = self
            .rest
            .trim_start_matches(|c: char| is_white(c) || c == '\u{a0}' || c == '\u{202f}');
    }

    fn literal(&mut self, text: &str) -> Outcome<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.rest = strip_prefix_ignore_case(self.rest, text).ok_or(Failure::Format)?;
        Ok(())
    }

    fn literal_char(&mut self, c: char) -> Outcome<()> {
        self.literal(c.encode_utf8(&mut [0; 4]))
    }
}

fn first_char(s: &str) -> &str {
    s.chars().next().map_or("", |c| &s[..c.len_utf8()])
}

/// Scales `value` read from `digits` fractional digits to nanoseconds.
fn fraction_to_nanos(value: u32, digits: usize) -> u32 {
    let scale = u32::try_from(9_usize.saturating_sub(digits)).unwrap_or(0);
    value * 10_u32.pow(scale)
}
