//! The generic dispatch layer.
//!
//! Every converter funnels through one of these functions, which binds an
//! atomic parser to its arguments and hands back the raw [`Outcome`]. The
//! strategies project that outcome, so each call shape exists once instead
//! of once per strategy and type.
//!
//! A missing parser is a programming error: every function panics before
//! looking at the input when `parser` is `None`.
//!
//! # Example
//!
//! ```
//! use strparse::{dispatch, Failure, Outcome};
//!
//! fn parse_yes_no(input: Option<&str>) -> Outcome<bool> {
//!     match input {
//!         Some("yes") => Ok(true),
//!         Some("no") => Ok(false),
//!         Some(_) => Err(Failure::Format),
//!         None => Err(Failure::ArgumentNull),
//!     }
//! }
//!
//! assert_eq!(dispatch::parse(Some("yes"), Some(parse_yes_no)), Ok(true));
//! assert_eq!(dispatch::parse(Some("maybe"), Some(parse_yes_no)), Err(Failure::Format));
//! ```

use crate::culture::Culture;
use crate::error::{Failure, Outcome};
use crate::input::Input;

/// An exact format specification.
///
/// A list of candidates is tried in order and the first structural match
/// wins; remaining candidates are not tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formats<'f> {
    /// A single format.
    One(&'f str),
    /// Candidate formats in preference order.
    Many(&'f [&'f str]),
}

impl<'f> Formats<'f> {
    /// The candidates in order.
    pub fn iter(self) -> impl Iterator<Item = &'f str> {
        let (one, many) = match self {
            Self::One(format) => (Some(format), &[][..]),
            Self::Many(formats) => (None, formats),
        };
        one.into_iter().chain(many.iter().copied())
    }
}

impl<'f> From<&'f str> for Formats<'f> {
    fn from(format: &'f str) -> Self {
        Self::One(format)
    }
}

impl<'f> From<&'f [&'f str]> for Formats<'f> {
    fn from(formats: &'f [&'f str]) -> Self {
        Self::Many(formats)
    }
}

impl<'f, const N: usize> From<&'f [&'f str; N]> for Formats<'f> {
    fn from(formats: &'f [&'f str; N]) -> Self {
        Self::Many(formats)
    }
}

impl<'f> From<&'f Vec<&'f str>> for Formats<'f> {
    fn from(formats: &'f Vec<&'f str>) -> Self {
        Self::Many(formats)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn missing_parser() -> ! {
    panic!("atomic parser dependency is missing")
}

/// Parses `input` with a parser that takes no further arguments.
///
/// # Panics
///
/// Panics if `parser` is `None`.
#[track_caller]
pub fn parse<T, P>(input: Input<'_>, parser: Option<P>) -> Outcome<T>
where
    P: FnOnce(Input<'_>) -> Outcome<T>,
{
    let Some(parser) = parser else {
        missing_parser()
    };
    parser(input)
}

/// Parses `input` with a culture aware parser.
///
/// # Panics
///
/// Panics if `parser` is `None`.
#[track_caller]
pub fn parse_culture<T, P>(input: Input<'_>, culture: &Culture, parser: Option<P>) -> Outcome<T>
where
    P: FnOnce(Input<'_>, &Culture) -> Outcome<T>,
{
    let Some(parser) = parser else {
        missing_parser()
    };
    parser(input, culture)
}

/// Parses `input` with a parser taking style flags.
///
/// # Panics
///
/// Panics if `parser` is `None`.
#[track_caller]
pub fn parse_styled<T, S, P>(input: Input<'_>, style: S, parser: Option<P>) -> Outcome<T>
where
    P: FnOnce(Input<'_>, S) -> Outcome<T>,
{
    let Some(parser) = parser else {
        missing_parser()
    };
    parser(input, style)
}

/// Parses `input` with a culture aware parser taking style flags.
///
/// # Panics
///
/// Panics if `parser` is `None`.
#[track_caller]
pub fn parse_styled_culture<T, S, P>(
    input: Input<'_>,
    style: S,
    culture: &Culture,
    parser: Option<P>,
) -> Outcome<T>
where
    P: FnOnce(Input<'_>, S, &Culture) -> Outcome<T>,
{
    let Some(parser) = parser else {
        missing_parser()
    };
    parser(input, style, culture)
}

/// Parses `input` against each candidate format in order.
///
/// The parser runs once per candidate until one succeeds. An empty list is
/// a format failure; when every candidate fails the last failure is
/// returned.
///
/// # Panics
///
/// Panics if `parser` is `None`.
#[track_caller]
pub fn parse_exact<T, S, P>(
    input: Input<'_>,
    formats: Formats<'_>,
    style: S,
    culture: &Culture,
    parser: Option<P>,
) -> Outcome<T>
where
    S: Copy,
    P: FnMut(Input<'_>, &str, S, &Culture) -> Outcome<T>,
{
    let Some(mut parser) = parser else {
        missing_parser()
    };
    let mut last = Err(Failure::Format);
    for format in formats.iter() {
        last = parser(input, format, style, culture);
        if last.is_ok() {
            break;
        }
        tracing::trace!(format, "format did not match, trying next candidate");
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    type Plain = fn(Input<'_>) -> Outcome<u8>;

    fn parse_one(input: Input<'_>) -> Outcome<u8> {
        match input {
            Some("1") => Ok(1),
            Some(_) => Err(Failure::Format),
            None => Err(Failure::ArgumentNull),
        }
    }

    #[test]
    fn test_parse_passes_outcome_through() {
        assert_eq!(parse(Some("1"), Some(parse_one)), Ok(1));
        assert_eq!(parse(Some("2"), Some(parse_one)), Err(Failure::Format));
        assert_eq!(parse(None, Some(parse_one)), Err(Failure::ArgumentNull));
    }

    #[test]
    #[should_panic(expected = "atomic parser dependency is missing")]
    fn test_parse_missing_parser() {
        let _ = parse(Some("1"), None::<Plain>);
    }

    #[test]
    fn test_exact_tries_in_order() {
        let mut tried = Vec::new();
        let outcome = parse_exact(
            Some("b"),
            Formats::Many(&["a", "b", "c"]),
            (),
            Culture::invariant(),
            Some(|input: Input<'_>, format: &str, (), _: &Culture| {
                tried.push(format.to_owned());
                if input == Some(format) {
                    Ok(format.len())
                } else {
                    Err(Failure::Format)
                }
            }),
        );
        assert_eq!(outcome, Ok(1));
        assert_eq!(tried, ["a", "b"]);
    }

    #[test]
    fn test_exact_empty_list() {
        let outcome = parse_exact(
            Some("b"),
            Formats::Many(&[]),
            (),
            Culture::invariant(),
            Some(|_: Input<'_>, _: &str, (), _: &Culture| Ok(())),
        );
        assert_eq!(outcome, Err(Failure::Format));
    }

    #[test]
    fn test_exact_returns_last_failure() {
        let outcome: Outcome<()> = parse_exact(
            Some("b"),
            Formats::Many(&["overflow", "format"]),
            (),
            Culture::invariant(),
            Some(|_: Input<'_>, format: &str, (), _: &Culture| {
                if format == "overflow" {
                    Err(Failure::Overflow)
                } else {
                    Err(Failure::Format)
                }
            }),
        );
        assert_eq!(outcome, Err(Failure::Format));
    }
}
