//! All errors supported.

mod failure;

use core::fmt;

use crate::input::Input;

pub use self::failure::{Failure, Outcome};

/// The classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was absent where a value is required.
    ArgumentNull,
    /// The input was rejected before parsing was attempted.
    Argument,
    /// The input was malformed for the target type, style or format.
    Format,
    /// The input was well formed but outside the target type's range.
    Overflow,
    /// A requested culture identifier could not be resolved.
    UnknownCulture,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ArgumentNull => "argument null",
            Self::Argument => "invalid argument",
            Self::Format => "format",
            Self::Overflow => "overflow",
            Self::UnknownCulture => "unknown culture",
        })
    }
}

/// An error returned by the [`Standard`](crate::Standard) strategy and by
/// culture resolution.
///
/// # Example
///
/// ```
/// use strparse::{Convert, ErrorKind};
///
/// let error = "2147483648".convert().i32().parse().unwrap_err();
///
/// assert_eq!(error.kind(), ErrorKind::Overflow);
/// assert_eq!(
///     error.to_string(),
///     "value \"2147483648\" was either too large or too small for i32",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[must_use = "error must be handled"]
pub enum Error {
    /// See [`ErrorKind::ArgumentNull`].
    #[error("value cannot be absent when parsing {target}")]
    ArgumentNull {
        /// The name of the target type.
        target: &'static str,
    },
    /// See [`ErrorKind::Argument`].
    #[error("input for {target} must not be empty or consist only of white-space")]
    Argument {
        /// The name of the target type.
        target: &'static str,
        /// The rejected input.
        input: String,
    },
    /// See [`ErrorKind::Format`].
    #[error("input string {input:?} was not in a correct format for {target}")]
    Format {
        /// The name of the target type.
        target: &'static str,
        /// The malformed input.
        input: String,
    },
    /// See [`ErrorKind::Overflow`].
    #[error("value {input:?} was either too large or too small for {target}")]
    Overflow {
        /// The name of the target type.
        target: &'static str,
        /// The out of range input.
        input: String,
    },
    /// See [`ErrorKind::UnknownCulture`].
    #[error("culture {name:?} is not supported")]
    UnknownCulture {
        /// The identifier that was requested.
        name: String,
    },
}

impl Error {
    /// Creates the error describing a failed parse of `input` into `target`.
    pub fn from_failure(failure: Failure, target: &'static str, input: Input<'_>) -> Self {
        let input = input.unwrap_or_default().to_owned();
        match failure {
            Failure::ArgumentNull => Self::ArgumentNull { target },
            Failure::Argument => Self::Argument { target, input },
            Failure::Format => Self::Format { target, input },
            Failure::Overflow => Self::Overflow { target, input },
        }
    }

    pub(crate) fn unknown_culture(name: impl Into<String>) -> Self {
        Self::UnknownCulture { name: name.into() }
    }

    /// The classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentNull { .. } => ErrorKind::ArgumentNull,
            Self::Argument { .. } => ErrorKind::Argument,
            Self::Format { .. } => ErrorKind::Format,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::UnknownCulture { .. } => ErrorKind::UnknownCulture,
        }
    }

    /// The name of the type that was being parsed, if any.
    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        match self {
            Self::ArgumentNull { target }
            | Self::Argument { target, .. }
            | Self::Format { target, .. }
            | Self::Overflow { target, .. } => Some(target),
            Self::UnknownCulture { .. } => None,
        }
    }

    /// The input that caused the error, if it was present.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Argument { input, .. }
            | Self::Format { input, .. }
            | Self::Overflow { input, .. } => Some(input),
            Self::ArgumentNull { .. } | Self::UnknownCulture { .. } => None,
        }
    }
}
