//! Numeric atomic parsers.
//!
//! All of them share one lexer driven by [`NumberStyles`] and the culture's
//! [`NumberFormat`](crate::NumberFormat); they differ only in how the lexed
//! digits are converted into the target type.

mod lexer;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::culture::{Culture, NumberFormat};
use crate::error::{Failure, Outcome};
use crate::input::{trim_white, Input};
use crate::style::NumberStyles;

use self::lexer::{lex, Digits, Lexed};

/// Largest mantissa a `Decimal` holds, `2^96 - 1`.
const DECIMAL_MAX_MANTISSA: u128 = (1 << 96) - 1;
/// Largest scale a `Decimal` holds.
const DECIMAL_MAX_SCALE: i64 = 28;
/// Most significant digits a `Decimal` mantissa can have.
const DECIMAL_MAX_DIGITS: i64 = 29;

impl_parse_integer! {
    /// Parses an `i8`.
    parse_i8 => i8, signed;
    /// Parses an `i16`.
    parse_i16 => i16, signed;
    /// Parses an `i32`.
    parse_i32 => i32, signed;
    /// Parses an `i64`.
    parse_i64 => i64, signed;
    /// Parses a `u8`.
    parse_u8 => u8, unsigned;
    /// Parses a `u16`.
    parse_u16 => u16, unsigned;
    /// Parses a `u32`.
    parse_u32 => u32, unsigned;
    /// Parses a `u64`.
    parse_u64 => u64, unsigned;
}

/// Parses an integer of `bits` width into an `i128`, leaving the range check
/// of the concrete type to the caller.
///
/// A non-zero fractional part is an overflow. Hex and binary digits are read
/// as two's complement when `signed`.
fn parse_integer(
    input: Input<'_>,
    style: NumberStyles,
    culture: &Culture,
    bits: u32,
    signed: bool,
) -> Outcome<i128> {
    let s = input.ok_or(Failure::ArgumentNull)?;
    match lex(s, style, &culture.number_format)? {
        Lexed::Decimal(digits) => digits.to_integer(),
        Lexed::Radix { radix, digits } => radix_to_integer(radix, digits, bits, signed),
    }
}

fn radix_to_integer(radix: u32, digits: &str, bits: u32, signed: bool) -> Outcome<i128> {
    let digits = digits.trim_start_matches('0');
    let bits_per_digit = if radix == 16 { 4 } else { 1 };
    if digits.len() * bits_per_digit > bits as usize {
        return Err(Failure::Overflow);
    }
    if digits.is_empty() {
        return Ok(0);
    }
    let raw = u128::from_str_radix(digits, radix).map_err(|_| Failure::Format)?;
    let value = i128::try_from(raw).map_err(|_| Failure::Overflow)?;
    if signed && value >= 1 << (bits - 1) {
        Ok(value - (1 << bits))
    } else {
        Ok(value)
    }
}

/// Parses an `f32`.
///
/// Values beyond the type's range are an overflow. The culture's NaN and
/// infinity symbols are accepted ignoring case.
pub fn parse_f32(input: Input<'_>, style: NumberStyles, culture: &Culture) -> Outcome<f32> {
    parse_float(input, style, culture, f32::is_infinite)
}

/// Parses an `f64`.
///
/// Values beyond the type's range are an overflow. The culture's NaN and
/// infinity symbols are accepted ignoring case.
pub fn parse_f64(input: Input<'_>, style: NumberStyles, culture: &Culture) -> Outcome<f64> {
    parse_float(input, style, culture, f64::is_infinite)
}

fn parse_float<F: FromStr + Copy>(
    input: Input<'_>,
    style: NumberStyles,
    culture: &Culture,
    is_infinite: fn(F) -> bool,
) -> Outcome<F> {
    let s = input.ok_or(Failure::ArgumentNull)?;
    let nf = &culture.number_format;
    if let Some(symbol) = special_symbol(s, style, nf) {
        return symbol.parse().map_err(|_| Failure::Format);
    }
    let text = match lex(s, style, nf)? {
        Lexed::Decimal(digits) => digits.to_float_text(),
        Lexed::Radix { .. } => return Err(Failure::Format),
    };
    let value: F = text.parse().map_err(|_| Failure::Format)?;
    if is_infinite(value) {
        return Err(Failure::Overflow);
    }
    Ok(value)
}

fn special_symbol(s: &str, style: NumberStyles, nf: &NumberFormat) -> Option<&'static str> {
    let s = trim_white(
        s,
        style.contains(NumberStyles::ALLOW_LEADING_WHITE),
        style.contains(NumberStyles::ALLOW_TRAILING_WHITE),
    )
    .to_lowercase();
    let matches = |symbol: &str| !symbol.is_empty() && s == symbol.to_lowercase();
    let signed = |sign: &str, symbol: &str| matches(&format!("{sign}{symbol}"));
    if matches(nf.nan_symbol)
        || signed(nf.positive_sign, nf.nan_symbol)
        || signed(nf.negative_sign, nf.nan_symbol)
    {
        Some("NaN")
    } else if matches(nf.positive_infinity_symbol)
        || signed(nf.positive_sign, nf.positive_infinity_symbol)
    {
        Some("inf")
    } else if matches(nf.negative_infinity_symbol)
        || signed(nf.negative_sign, nf.positive_infinity_symbol)
    {
        Some("-inf")
    } else {
        None
    }
}

/// Parses a `Decimal`.
///
/// Digits beyond the 28th fractional place or the 29th significant digit
/// are rounded half to even.
pub fn parse_decimal(input: Input<'_>, style: NumberStyles, culture: &Culture) -> Outcome<Decimal> {
    let s = input.ok_or(Failure::ArgumentNull)?;
    match lex(s, style, &culture.number_format)? {
        Lexed::Decimal(digits) => digits.to_decimal(),
        Lexed::Radix { .. } => Err(Failure::Format),
    }
}

impl Digits {
    fn to_integer(&self) -> Outcome<i128> {
        let len = self.digits.len();
        let (integral, fractional) = if self.scale > 0 {
            let split = i64::try_from(len)
                .ok()
                .and_then(|len| usize::try_from(len - self.scale).ok())
                .unwrap_or(0);
            self.digits.split_at(split)
        } else {
            (&self.digits[..], &[][..])
        };
        if fractional.iter().any(|&digit| digit != 0) {
            return Err(Failure::Overflow);
        }
        let mut value = 0_i128;
        for &digit in integral {
            value = value
                .checked_mul(10)
                .and_then(|value| value.checked_add(i128::from(digit)))
                .ok_or(Failure::Overflow)?;
        }
        if value != 0 {
            for _ in self.scale..0 {
                value = value.checked_mul(10).ok_or(Failure::Overflow)?;
            }
        }
        Ok(if self.negative { -value } else { value })
    }

    fn to_float_text(&self) -> String {
        let mut text = String::with_capacity(self.digits.len() + 8);
        if self.negative {
            text.push('-');
        }
        if self.digits.is_empty() {
            text.push('0');
        }
        text.extend(self.digits.iter().map(|&digit| char::from(b'0' + digit)));
        text.push('e');
        text.push_str(&(-self.scale).to_string());
        text
    }

    fn to_decimal(&self) -> Outcome<Decimal> {
        let len = i64::try_from(self.digits.len()).map_err(|_| Failure::Overflow)?;
        if len == 0 {
            let scale = self.scale.clamp(0, DECIMAL_MAX_SCALE);
            return Ok(Decimal::new(0, u32::try_from(scale).unwrap_or(0)));
        }
        if len - self.scale > DECIMAL_MAX_DIGITS {
            return Err(Failure::Overflow);
        }
        let mut keep = (len - (self.scale - DECIMAL_MAX_SCALE).max(0)).min(DECIMAL_MAX_DIGITS);
        loop {
            let scale = self.scale - (len - keep);
            if keep < 0 {
                let scale = u32::try_from(DECIMAL_MAX_SCALE).map_err(|_| Failure::Overflow)?;
                return Ok(Decimal::new(0, scale));
            }
            let mut mantissa = self.rounded_prefix(keep);
            for _ in scale..0 {
                mantissa = mantissa.checked_mul(10).ok_or(Failure::Overflow)?;
            }
            if mantissa <= DECIMAL_MAX_MANTISSA {
                let signed = i128::try_from(mantissa).map_err(|_| Failure::Overflow)?;
                let signed = if self.negative { -signed } else { signed };
                let scale = u32::try_from(scale.max(0)).map_err(|_| Failure::Overflow)?;
                return Decimal::try_from_i128_with_scale(signed, scale)
                    .map_err(|_| Failure::Overflow);
            }
            if scale <= 0 {
                return Err(Failure::Overflow);
            }
            keep -= 1;
        }
    }

    /// The first `keep` digits as an integer, rounded half to even on the
    /// digits dropped after them.
    fn rounded_prefix(&self, keep: i64) -> u128 {
        let keep = usize::try_from(keep).unwrap_or(0).min(self.digits.len());
        let (kept, dropped) = self.digits.split_at(keep);
        let mantissa = kept
            .iter()
            .fold(0_u128, |acc, &digit| acc * 10 + u128::from(digit));
        let round_up = match dropped.split_first() {
            Some((&first, rest)) => {
                first > 5
                    || (first == 5 && (rest.iter().any(|&digit| digit != 0) || mantissa % 2 == 1))
            }
            None => false,
        };
        if round_up {
            mantissa + 1
        } else {
            mantissa
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant() -> &'static Culture {
        Culture::invariant()
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(
            parse_i8(Some("-128"), NumberStyles::INTEGER, invariant()),
            Ok(i8::MIN)
        );
        assert_eq!(
            parse_i8(Some("128"), NumberStyles::INTEGER, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_u64(Some("18446744073709551615"), NumberStyles::INTEGER, invariant()),
            Ok(u64::MAX)
        );
        assert_eq!(
            parse_u64(Some("18446744073709551616"), NumberStyles::INTEGER, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_i64(
                Some("99999999999999999999999999999999999999999"),
                NumberStyles::INTEGER,
                invariant(),
            ),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_u8(Some("-0"), NumberStyles::INTEGER, invariant()),
            Ok(0)
        );
        assert_eq!(
            parse_u8(Some("-1"), NumberStyles::INTEGER, invariant()),
            Err(Failure::Overflow)
        );
    }

    #[test]
    fn test_integer_fraction_and_exponent() {
        assert_eq!(
            parse_i32(Some("12.00"), NumberStyles::NUMBER, invariant()),
            Ok(12)
        );
        assert_eq!(
            parse_i32(Some("12.50"), NumberStyles::NUMBER, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_i32(Some("1.5e3"), NumberStyles::FLOAT, invariant()),
            Ok(1500)
        );
        assert_eq!(
            parse_i32(Some("15e-1"), NumberStyles::FLOAT, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_i32(Some("0e99999"), NumberStyles::FLOAT, invariant()),
            Ok(0)
        );
        assert_eq!(
            parse_i32(Some("1e99999"), NumberStyles::FLOAT, invariant()),
            Err(Failure::Overflow)
        );
    }

    #[test]
    fn test_integer_radix() {
        assert_eq!(
            parse_i8(Some("FF"), NumberStyles::HEX_NUMBER, invariant()),
            Ok(-1)
        );
        assert_eq!(
            parse_u8(Some("FF"), NumberStyles::HEX_NUMBER, invariant()),
            Ok(255)
        );
        assert_eq!(
            parse_u8(Some("00FF"), NumberStyles::HEX_NUMBER, invariant()),
            Ok(255)
        );
        assert_eq!(
            parse_u8(Some("100"), NumberStyles::HEX_NUMBER, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_i64(Some("8000000000000000"), NumberStyles::HEX_NUMBER, invariant()),
            Ok(i64::MIN)
        );
        assert_eq!(
            parse_i16(Some("1111111111111110"), NumberStyles::BINARY_NUMBER, invariant()),
            Ok(-2)
        );
        assert_eq!(
            parse_i32(Some("0"), NumberStyles::HEX_NUMBER, invariant()),
            Ok(0)
        );
    }

    #[test]
    fn test_float_symbols() {
        assert!(
            parse_f64(Some("nan"), NumberStyles::FLOAT, invariant())
                .unwrap()
                .is_nan()
        );
        assert_eq!(
            parse_f64(Some(" Infinity "), NumberStyles::FLOAT, invariant()),
            Ok(f64::INFINITY)
        );
        assert_eq!(
            parse_f32(Some("-INFINITY"), NumberStyles::FLOAT, invariant()),
            Ok(f32::NEG_INFINITY)
        );
        assert_eq!(
            parse_f64(Some("1e400"), NumberStyles::FLOAT, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_f64(Some("-1e400"), NumberStyles::FLOAT, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_f32(Some("3.5e38"), NumberStyles::FLOAT, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_f64(Some("1e-400"), NumberStyles::FLOAT, invariant()),
            Ok(0.0)
        );
        assert_eq!(
            parse_f64(Some("FF"), NumberStyles::HEX_NUMBER, invariant()),
            Err(Failure::Format)
        );
    }

    #[test]
    fn test_float_values() {
        assert_eq!(
            parse_f64(
                Some("1,234.5"),
                NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS,
                invariant(),
            ),
            Ok(1234.5)
        );
        assert_eq!(
            parse_f32(Some("-0.25"), NumberStyles::FLOAT, invariant()),
            Ok(-0.25)
        );
        assert_eq!(
            parse_f64(Some("0"), NumberStyles::FLOAT, invariant()),
            Ok(0.0)
        );
        assert_eq!(
            parse_f64(Some("2.5e-3"), NumberStyles::FLOAT, invariant()),
            Ok(0.0025)
        );
    }

    #[test]
    fn test_decimal_bounds() {
        assert_eq!(
            parse_decimal(
                Some("-79228162514264337593543950335"),
                NumberStyles::NUMBER,
                invariant(),
            ),
            Ok(Decimal::MIN)
        );
        assert_eq!(
            parse_decimal(Some("79228162514264337593543950336"), NumberStyles::NUMBER, invariant()),
            Err(Failure::Overflow)
        );
        assert_eq!(
            parse_decimal(
                Some("792281625142643375935439503350"),
                NumberStyles::NUMBER,
                invariant(),
            ),
            Err(Failure::Overflow)
        );
    }

    #[test]
    fn test_decimal_scale_and_rounding() {
        assert_eq!(
            parse_decimal(Some("1.50"), NumberStyles::NUMBER, invariant()),
            Ok(Decimal::new(150, 2))
        );
        assert_eq!(
            parse_decimal(Some("0.000"), NumberStyles::NUMBER, invariant()),
            Ok(Decimal::new(0, 3))
        );
        assert_eq!(
            parse_decimal(
                Some("0.00000000000000000000000000015"),
                NumberStyles::NUMBER,
                invariant(),
            ),
            Ok(Decimal::new(2, 28))
        );
        assert_eq!(
            parse_decimal(
                Some("0.00000000000000000000000000025"),
                NumberStyles::NUMBER,
                invariant(),
            ),
            Ok(Decimal::new(2, 28))
        );
        assert_eq!(
            parse_decimal(
                Some("7.9228162514264337593543950335"),
                NumberStyles::NUMBER,
                invariant(),
            ),
            Ok(Decimal::from_i128_with_scale(79_228_162_514_264_337_593_543_950_335, 28))
        );
        assert_eq!(
            parse_decimal(
                Some("9.99999999999999999999999999999"),
                NumberStyles::NUMBER,
                invariant(),
            ),
            Ok(Decimal::from_i128_with_scale(10_000_000_000_000_000_000_000_000_000, 27))
        );
        assert_eq!(
            parse_decimal(Some("1.5e2"), NumberStyles::FLOAT, invariant()),
            Ok(Decimal::new(150, 0))
        );
    }

    #[test]
    fn test_decimal_below_smallest_scale() {
        let tiny = format!("0.{}1", "0".repeat(40));
        let value = parse_decimal(Some(&tiny), NumberStyles::NUMBER, invariant()).unwrap();
        assert_eq!(value, Decimal::ZERO);
        assert_eq!(value.scale(), 28);

        let zeros = format!("0.{}", "0".repeat(31));
        let value = parse_decimal(Some(&zeros), NumberStyles::NUMBER, invariant()).unwrap();
        assert_eq!(value.scale(), 28);
    }
}
