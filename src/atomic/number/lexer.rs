use crate::culture::NumberFormat;
use crate::error::{Failure, Outcome};
use crate::input::{is_white, strip_symbol, trim_white};
use crate::style::NumberStyles;

/// Caps the exponent so digit arithmetic never overflows. Anything past it
/// is out of range for every target anyway.
const EXPONENT_LIMIT: i64 = 100_000;

/// The lexical content of a number: `digits * 10^-scale`, negated if
/// `negative`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    pub(crate) negative: bool,
    /// Significant decimal digits, no leading zeros.
    pub(crate) digits: Vec<u8>,
    pub(crate) scale: i64,
}

/// A number as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lexed<'a> {
    Decimal(Digits),
    /// Digits in base `radix`, without white-space.
    Radix { radix: u32, digits: &'a str },
}

pub(crate) fn lex<'a>(s: &'a str, style: NumberStyles, nf: &NumberFormat) -> Outcome<Lexed<'a>> {
    if style.intersects(NumberStyles::ALLOW_HEX_SPECIFIER | NumberStyles::ALLOW_BINARY_SPECIFIER) {
        return lex_radix(s, style);
    }
    Lexer::new(s, style, nf).lex().map(Lexed::Decimal)
}

fn lex_radix(s: &str, style: NumberStyles) -> Outcome<Lexed<'_>> {
    let digits = trim_white(
        s,
        style.contains(NumberStyles::ALLOW_LEADING_WHITE),
        style.contains(NumberStyles::ALLOW_TRAILING_WHITE),
    );
    let digits = digits.trim_end_matches('\0');
    let radix = if style.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        16
    } else {
        2
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Failure::Format);
    }
    Ok(Lexed::Radix { radix, digits })
}

struct Lexer<'a, 'n> {
    rest: &'a str,
    style: NumberStyles,
    nf: &'n NumberFormat,
    currency: bool,
    negative: bool,
    signed: bool,
    parenthesized: bool,
    seen_currency: bool,
}

impl<'a, 'n> Lexer<'a, 'n> {
    fn new(s: &'a str, style: NumberStyles, nf: &'n NumberFormat) -> Self {
        Self {
            rest: s,
            style,
            nf,
            currency: style.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL)
                && !nf.currency_symbol.is_empty(),
            negative: false,
            signed: false,
            parenthesized: false,
            seen_currency: false,
        }
    }

    fn allows(&self, flag: NumberStyles) -> bool {
        self.style.contains(flag)
    }

    fn next_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn skip_char(&mut self, c: char) {
        self.rest = &self.rest[c.len_utf8()..];
    }

    fn lex(mut self) -> Outcome<Digits> {
        self.leading();
        let mut digits = self.digits()?;
        self.trailing();
        let rest = self.rest.trim_end_matches('\0');
        if !rest.is_empty() || self.parenthesized {
            return Err(Failure::Format);
        }
        digits.negative = self.negative;
        Ok(digits)
    }

    fn try_sign(&mut self) -> bool {
        if self.signed {
            return false;
        }
        if let Some(rest) = strip_symbol(self.rest, self.nf.positive_sign) {
            self.rest = rest;
            self.signed = true;
            return true;
        }
        let negative = strip_symbol(self.rest, self.nf.negative_sign).or_else(|| {
            // Cultures using U+2212 still accept a typed hyphen.
            if self.nf.negative_sign == "\u{2212}" {
                self.rest.strip_prefix('-')
            } else {
                None
            }
        });
        if let Some(rest) = negative {
            self.rest = rest;
            self.signed = true;
            self.negative = true;
            return true;
        }
        false
    }

    fn try_currency(&mut self) -> bool {
        if !self.currency || self.seen_currency {
            return false;
        }
        match strip_symbol(self.rest, self.nf.currency_symbol) {
            Some(rest) => {
                self.rest = rest;
                self.seen_currency = true;
                true
            }
            None => false,
        }
    }

    fn leading(&mut self) {
        while let Some(c) = self.next_char() {
            if is_white(c)
                && self.allows(NumberStyles::ALLOW_LEADING_WHITE)
                && (!self.signed || self.seen_currency)
            {
                self.skip_char(c);
            } else if self.allows(NumberStyles::ALLOW_LEADING_SIGN) && self.try_sign() {
            } else if c == '(' && self.allows(NumberStyles::ALLOW_PARENTHESES) && !self.signed {
                self.skip_char(c);
                self.signed = true;
                self.negative = true;
                self.parenthesized = true;
            } else if !self.try_currency() {
                break;
            }
        }
    }

    fn strip_decimal_point(&self) -> Option<&'a str> {
        if self.currency {
            if let Some(rest) = strip_symbol(self.rest, self.nf.currency_decimal_separator) {
                return Some(rest);
            }
        }
        strip_symbol(self.rest, self.nf.decimal_separator)
    }

    fn strip_group_separator(&self) -> Option<&'a str> {
        if self.currency {
            if let Some(rest) = strip_symbol(self.rest, self.nf.currency_group_separator) {
                return Some(rest);
            }
        }
        strip_symbol(self.rest, self.nf.group_separator)
    }

    fn digits(&mut self) -> Outcome<Digits> {
        let mut digits = Vec::new();
        let mut seen_digit = false;
        let mut point = false;
        let mut scale = 0_i64;
        loop {
            match self.next_char() {
                Some(c @ '0'..='9') => {
                    self.skip_char(c);
                    seen_digit = true;
                    let digit = c as u8 - b'0';
                    if point {
                        scale += 1;
                    }
                    if digit != 0 || !digits.is_empty() {
                        digits.push(digit);
                    }
                }
                Some(_) => {
                    if self.allows(NumberStyles::ALLOW_DECIMAL_POINT) && !point {
                        if let Some(rest) = self.strip_decimal_point() {
                            self.rest = rest;
                            point = true;
                            continue;
                        }
                    }
                    // Group separators only appear between integral digits.
                    if seen_digit && !point && self.group_separator() {
                        continue;
                    }
                    break;
                }
                None => break,
            }
        }
        if !seen_digit {
            return Err(Failure::Format);
        }
        if self.allows(NumberStyles::ALLOW_EXPONENT) {
            scale -= self.exponent();
        }
        Ok(Digits {
            negative: false,
            digits,
            scale,
        })
    }

    fn group_separator(&mut self) -> bool {
        if !self.allows(NumberStyles::ALLOW_THOUSANDS) {
            return false;
        }
        match self.strip_group_separator() {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Reads an exponent, leaving the input untouched if there is none.
    fn exponent(&mut self) -> i64 {
        let Some(after) = self.rest.strip_prefix(['e', 'E']) else {
            return 0;
        };
        let (negative, after) = if let Some(rest) = strip_symbol(after, self.nf.negative_sign)
            .or_else(|| after.strip_prefix('-'))
        {
            (true, rest)
        } else if let Some(rest) =
            strip_symbol(after, self.nf.positive_sign).or_else(|| after.strip_prefix('+'))
        {
            (false, rest)
        } else {
            (false, after)
        };
        let (exponent, rest) = crate::input::split_digits(after);
        if exponent.is_empty() {
            return 0;
        }
        self.rest = rest;
        let value = exponent.bytes().fold(0_i64, |acc, b| {
            (acc * 10 + i64::from(b - b'0')).min(EXPONENT_LIMIT)
        });
        if negative {
            -value
        } else {
            value
        }
    }

    fn trailing(&mut self) {
        while let Some(c) = self.next_char() {
            if is_white(c) && self.allows(NumberStyles::ALLOW_TRAILING_WHITE) {
                self.skip_char(c);
            } else if self.allows(NumberStyles::ALLOW_TRAILING_SIGN) && self.try_sign() {
            } else if c == ')' && self.parenthesized {
                self.skip_char(c);
                self.parenthesized = false;
            } else if !self.try_currency() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(negative: bool, digits: &[u8], scale: i64) -> Lexed<'static> {
        Lexed::Decimal(Digits {
            negative,
            digits: digits.to_vec(),
            scale,
        })
    }

    #[test]
    fn test_lex_integer() {
        let nf = NumberFormat::INVARIANT;
        assert_eq!(
            lex(" -0120 ", NumberStyles::INTEGER, &nf),
            Ok(digits(true, &[1, 2, 0], 0))
        );
        assert_eq!(
            lex("+7", NumberStyles::INTEGER, &nf),
            Ok(digits(false, &[7], 0))
        );
        assert_eq!(lex("7-", NumberStyles::INTEGER, &nf), Err(Failure::Format));
        assert_eq!(lex("", NumberStyles::INTEGER, &nf), Err(Failure::Format));
        assert_eq!(lex("-", NumberStyles::INTEGER, &nf), Err(Failure::Format));
    }

    #[test]
    fn test_lex_number() {
        let nf = NumberFormat::INVARIANT;
        assert_eq!(
            lex("1,234.50-", NumberStyles::NUMBER, &nf),
            Ok(digits(true, &[1, 2, 3, 4, 5, 0], 2))
        );
        assert_eq!(
            lex(".5", NumberStyles::NUMBER, &nf),
            Ok(digits(false, &[5], 1))
        );
        assert_eq!(
            lex("0.05", NumberStyles::NUMBER, &nf),
            Ok(digits(false, &[5], 2))
        );
        assert_eq!(lex(",1", NumberStyles::NUMBER, &nf), Err(Failure::Format));
        assert_eq!(
            lex("1.2.3", NumberStyles::NUMBER, &nf),
            Err(Failure::Format)
        );
    }

    #[test]
    fn test_lex_exponent() {
        let nf = NumberFormat::INVARIANT;
        assert_eq!(
            lex("1.5e3", NumberStyles::FLOAT, &nf),
            Ok(digits(false, &[1, 5], -2))
        );
        assert_eq!(
            lex("15E-1", NumberStyles::FLOAT, &nf),
            Ok(digits(false, &[1, 5], 1))
        );
        assert_eq!(lex("1e", NumberStyles::FLOAT, &nf), Err(Failure::Format));
        assert_eq!(lex("1e3", NumberStyles::NUMBER, &nf), Err(Failure::Format));
    }

    #[test]
    fn test_lex_parentheses_and_currency() {
        let nf = NumberFormat::new(".", ",", "$", 2);
        assert_eq!(
            lex("($1,000.25)", NumberStyles::CURRENCY, &nf),
            Ok(digits(true, &[1, 0, 0, 0, 2, 5], 2))
        );
        assert_eq!(lex("(1", NumberStyles::CURRENCY, &nf), Err(Failure::Format));
        assert_eq!(
            lex("-$ 3", NumberStyles::CURRENCY, &nf),
            Ok(digits(true, &[3], 0))
        );
        assert_eq!(
            lex("$3$", NumberStyles::CURRENCY, &nf),
            Err(Failure::Format)
        );
    }

    #[test]
    fn test_lex_space_group_separator() {
        let nf = NumberFormat::new(",", "\u{a0}", "kr", 2);
        assert_eq!(
            lex("1 234,567 kr", NumberStyles::CURRENCY, &nf),
            Ok(digits(false, &[1, 2, 3, 4, 5, 6, 7], 3))
        );
    }

    #[test]
    fn test_lex_hyphen_for_minus_sign() {
        let nf = NumberFormat {
            negative_sign: "\u{2212}",
            ..NumberFormat::INVARIANT
        };
        assert_eq!(
            lex("-5", NumberStyles::INTEGER, &nf),
            Ok(digits(true, &[5], 0))
        );
        assert_eq!(
            lex("\u{2212}5", NumberStyles::INTEGER, &nf),
            Ok(digits(true, &[5], 0))
        );
    }

    #[test]
    fn test_lex_radix() {
        let nf = NumberFormat::INVARIANT;
        assert_eq!(
            lex(" fF ", NumberStyles::HEX_NUMBER, &nf),
            Ok(Lexed::Radix { radix: 16, digits: "fF" })
        );
        assert_eq!(
            lex("101", NumberStyles::BINARY_NUMBER, &nf),
            Ok(Lexed::Radix { radix: 2, digits: "101" })
        );
        assert_eq!(
            lex("0x1", NumberStyles::HEX_NUMBER, &nf),
            Err(Failure::Format)
        );
        assert_eq!(
            lex("12", NumberStyles::BINARY_NUMBER, &nf),
            Err(Failure::Format)
        );
    }
}
