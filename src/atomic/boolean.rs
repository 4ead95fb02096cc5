use crate::error::{Failure, Outcome};
use crate::input::{is_white, Input};

/// Parses `true` or `false` ignoring case.
///
/// Surrounding white-space and trailing NUL characters are ignored.
pub fn parse_bool(input: Input<'_>) -> Outcome<bool> {
    let s = input.ok_or(Failure::ArgumentNull)?;
    let s = s
        .trim_start_matches(is_white)
        .trim_end_matches(|c| is_white(c) || c == '\0');
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Failure::Format)
    }
}
