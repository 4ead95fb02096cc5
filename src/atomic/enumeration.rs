use crate::descriptor::EnumType;
use crate::error::{Failure, Outcome};
use crate::input::{is_white, Input};

/// Parses a member name, a comma separated list of member names or a signed
/// decimal value of `ty`.
///
/// Listed members are or-ed together. A value that is not a declared member
/// is a format failure unless `ty` is a flags type. Empty or white-space
/// input is an argument failure.
pub fn parse_enum(input: Input<'_>, ty: &EnumType, ignore_case: bool) -> Outcome<i64> {
    let s = input.ok_or(Failure::ArgumentNull)?.trim_matches(is_white);
    if s.is_empty() {
        return Err(Failure::Argument);
    }
    let value = if s.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        parse_value(s)?
    } else {
        parse_names(s, ty, ignore_case)?
    };
    if ty.is_flags() || ty.is_defined(value) {
        Ok(value)
    } else {
        Err(Failure::Format)
    }
}

fn parse_value(s: &str) -> Outcome<i64> {
    let digits = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Failure::Format);
    }
    s.parse().map_err(|_| Failure::Overflow)
}

fn parse_names(s: &str, ty: &EnumType, ignore_case: bool) -> Outcome<i64> {
    s.split(',').try_fold(0, |value, name| {
        ty.value_of(name.trim_matches(is_white), ignore_case)
            .map(|member| value | member)
            .ok_or(Failure::Format)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLOR: EnumType = EnumType::new("Color", &[("Red", 1), ("Green", 2), ("Blue", 4)]);
    static ACCESS: EnumType = EnumType::flags("Access", &[("Read", 1), ("Write", 2)]);

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_enum(Some("Green"), &COLOR, false), Ok(2));
        assert_eq!(parse_enum(Some(" Blue "), &COLOR, false), Ok(4));
        assert_eq!(
            parse_enum(Some("green"), &COLOR, false),
            Err(Failure::Format)
        );
        assert_eq!(parse_enum(Some("green"), &COLOR, true), Ok(2));
        assert_eq!(
            parse_enum(Some("Purple"), &COLOR, true),
            Err(Failure::Format)
        );
    }

    #[test]
    fn test_parse_name_list() {
        assert_eq!(parse_enum(Some("Read, Write"), &ACCESS, false), Ok(3));
        assert_eq!(
            parse_enum(Some("Read,"), &ACCESS, false),
            Err(Failure::Format)
        );
        // The combination is not a declared member.
        assert_eq!(
            parse_enum(Some("Red, Blue"), &COLOR, false),
            Err(Failure::Format)
        );
        assert_eq!(parse_enum(Some("Red, Red"), &COLOR, false), Ok(1));
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_enum(Some("4"), &COLOR, false), Ok(4));
        assert_eq!(parse_enum(Some("+1"), &COLOR, false), Ok(1));
        assert_eq!(parse_enum(Some("3"), &COLOR, false), Err(Failure::Format));
        assert_eq!(parse_enum(Some("12"), &ACCESS, false), Ok(12));
        assert_eq!(parse_enum(Some("-7"), &ACCESS, false), Ok(-7));
        assert_eq!(parse_enum(Some("1x"), &ACCESS, false), Err(Failure::Format));
        assert_eq!(parse_enum(Some("-"), &ACCESS, false), Err(Failure::Format));
        assert_eq!(
            parse_enum(Some("99999999999999999999"), &ACCESS, false),
            Err(Failure::Overflow)
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_enum(Some(""), &COLOR, false), Err(Failure::Argument));
        assert_eq!(
            parse_enum(Some(" \t"), &COLOR, false),
            Err(Failure::Argument)
        );
        assert_eq!(parse_enum(None, &COLOR, false), Err(Failure::ArgumentNull));
    }
}
