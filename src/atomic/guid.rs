use uuid::Uuid;

use crate::error::{Failure, Outcome};
use crate::input::{is_white, Input};

/// The format used when none is given: 32 hex digits in hyphenated groups.
pub const DEFAULT_GUID_FORMAT: &str = "D";

/// Parses a GUID in any of the `N`, `D`, `B`, `P` or `X` forms.
///
/// | Format | Example                                                          |
/// |--------|------------------------------------------------------------------|
/// | `N`    | `00000000000000000000000000000000`                               |
/// | `D`    | `00000000-0000-0000-0000-000000000000`                           |
/// | `B`    | `{00000000-0000-0000-0000-000000000000}`                         |
/// | `P`    | `(00000000-0000-0000-0000-000000000000)`                         |
/// | `X`    | `{0x00000000,0x0000,0x0000,{0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00}}` |
pub fn parse_guid(input: Input<'_>) -> Outcome<Uuid> {
    let s = input.ok_or(Failure::ArgumentNull)?.trim_matches(is_white);
    let format = match s.as_bytes() {
        [b'{', b'0', b'x' | b'X', ..] => b'X',
        [b'{', ..] => b'B',
        [b'(', ..] => b'P',
        _ if s.len() == 32 => b'N',
        _ => b'D',
    };
    parse_form(s, format)
}

/// Parses a GUID in exactly one of the `N`, `D`, `B`, `P` or `X` forms.
///
/// The format specifier is a single character matched ignoring case; any
/// other specifier is a format failure.
pub fn parse_guid_exact(input: Input<'_>, format: &str) -> Outcome<Uuid> {
    let s = input.ok_or(Failure::ArgumentNull)?.trim_matches(is_white);
    match format.as_bytes() {
        [specifier] => parse_form(s, specifier.to_ascii_uppercase()),
        _ => Err(Failure::Format),
    }
}

fn parse_form(s: &str, format: u8) -> Outcome<Uuid> {
    let len = match format {
        b'N' => 32,
        b'D' => 36,
        b'B' if s.starts_with('{') => 38,
        b'P' => return parse_parenthesized(s),
        b'X' => return parse_hex_fields(s),
        _ => return Err(Failure::Format),
    };
    if s.len() != len {
        return Err(Failure::Format);
    }
    Uuid::try_parse(s).map_err(|_| Failure::Format)
}

fn parse_parenthesized(s: &str) -> Outcome<Uuid> {
    s.strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .filter(|s| s.len() == 36)
        .ok_or(Failure::Format)
        .and_then(|s| Uuid::try_parse(s).map_err(|_| Failure::Format))
}

/// `{0xdddddddd,0xdddd,0xdddd,{0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd}}`,
/// white-space anywhere and leading zeros optional.
fn parse_hex_fields(s: &str) -> Outcome<Uuid> {
    let compact: String = s.chars().filter(|&c| !is_white(c)).collect();
    let inner = compact
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix("}}"))
        .ok_or(Failure::Format)?;
    let (head, tail) = inner.split_once(",{").ok_or(Failure::Format)?;
    let mut head = head.split(',');
    let a = hex_field(head.next(), 8)?;
    let b = hex_field(head.next(), 4)?;
    let c = hex_field(head.next(), 4)?;
    if head.next().is_some() {
        return Err(Failure::Format);
    }
    let mut d = [0_u8; 8];
    let mut tail = tail.split(',');
    for byte in &mut d {
        *byte = u8::try_from(hex_field(tail.next(), 2)?).map_err(|_| Failure::Format)?;
    }
    if tail.next().is_some() {
        return Err(Failure::Format);
    }
    let b = u16::try_from(b).map_err(|_| Failure::Format)?;
    let c = u16::try_from(c).map_err(|_| Failure::Format)?;
    Ok(Uuid::from_fields(a, b, c, &d))
}

fn hex_field(field: Option<&str>, max_digits: usize) -> Outcome<u32> {
    let digits = field
        .and_then(|field| field.strip_prefix("0x").or_else(|| field.strip_prefix("0X")))
        .ok_or(Failure::Format)?;
    if digits.is_empty()
        || digits.len() > max_digits
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(Failure::Format);
    }
    u32::from_str_radix(digits, 16).map_err(|_| Failure::Format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYPHENATED: &str = "ca761232-ed42-11ce-bacd-00aa0057b223";

    fn expected() -> Uuid {
        Uuid::from_u128(0xca76_1232_ed42_11ce_bacd_00aa_0057_b223)
    }

    #[test]
    fn test_parse_any_form() {
        for s in [
            "ca761232ed4211cebacd00aa0057b223",
            HYPHENATED,
            " {CA761232-ED42-11CE-BACD-00AA0057B223} ",
            "(ca761232-ed42-11ce-bacd-00aa0057b223)",
            "{0xca761232, 0xed42, 0x11ce, {0xba, 0xcd, 0x00, 0xaa, 0x00, 0x57, 0xb2, 0x23}}",
        ] {
            assert_eq!(parse_guid(Some(s)), Ok(expected()), "{s}");
        }
    }

    #[test]
    fn test_parse_exact_form() {
        assert_eq!(parse_guid_exact(Some(HYPHENATED), "D"), Ok(expected()));
        assert_eq!(parse_guid_exact(Some(HYPHENATED), "d"), Ok(expected()));
        assert_eq!(
            parse_guid_exact(Some(HYPHENATED), "N"),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid_exact(Some(HYPHENATED), "B"),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid_exact(Some("ca761232ed4211cebacd00aa0057b223"), "D"),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid_exact(Some("{ca761232-ed42-11ce-bacd-00aa0057b223}"), "B"),
            Ok(expected())
        );
        assert_eq!(
            parse_guid_exact(Some(HYPHENATED), "Q"),
            Err(Failure::Format)
        );
        assert_eq!(parse_guid_exact(Some(HYPHENATED), ""), Err(Failure::Format));
        assert_eq!(
            parse_guid_exact(Some("{0x1,0x2,0x3,{0x4,0x5,0x6,0x7,0x8,0x9,0xa,0xb}}"), "X"),
            Ok(Uuid::from_fields(1, 2, 3, &[4, 5, 6, 7, 8, 9, 10, 11]))
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_guid(Some("ca761232-ed42-11ce-bacd-00aa0057b22")),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid(Some("ca761232-ed42-11ce-bacd-00aa0057b22g")),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid(Some("+a761232ed4211cebacd00aa0057b223")),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid(Some("{ca761232-ed42-11ce-bacd-00aa0057b223")),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid(Some("ca761232-ed42-11ce-bacd00aa0057b2233")),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid(Some("(ca761232ed4211cebacd00aa0057b223)")),
            Err(Failure::Format)
        );
        assert_eq!(
            parse_guid(Some("urn:uuid:ca761232-ed42-11ce-bacd-00aa0057b223")),
            Err(Failure::Format)
        );
        assert_eq!(parse_guid(Some("")), Err(Failure::Format));
        assert_eq!(parse_guid(None), Err(Failure::ArgumentNull));
    }
}
