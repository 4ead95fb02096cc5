use crate::error::{Failure, Outcome};
use crate::input::Input;

/// Parses a string holding exactly one `char`.
pub fn parse_char(input: Input<'_>) -> Outcome<char> {
    let s = input.ok_or(Failure::ArgumentNull)?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Failure::Format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char() {
        assert_eq!(parse_char(Some("a")), Ok('a'));
        assert_eq!(parse_char(Some("\u{e9}")), Ok('\u{e9}'));
        assert_eq!(parse_char(Some("ab")), Err(Failure::Format));
        assert_eq!(parse_char(Some("")), Err(Failure::Format));
        assert_eq!(parse_char(None), Err(Failure::ArgumentNull));
    }
}
