use super::ErrorKind;

/// The outcome of an atomic parse.
///
/// This is never handed to callers of the converters directly, it is always
/// projected through a [`Strategy`](crate::Strategy) first.
pub type Outcome<T> = Result<T, Failure>;

/// `Failure` contains no details about what happened, other than how the
/// attempt failed.
///
/// It is the cheap error the atomic parsers report. Only the
/// [`Standard`](crate::Standard) strategy pays for turning it into a
/// descriptive [`Error`](crate::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "failure must be handled"]
pub enum Failure {
    /// The input was absent.
    ArgumentNull,
    /// The input was rejected before parsing.
    Argument,
    /// The input was malformed.
    Format,
    /// The input was out of range.
    Overflow,
}

impl Failure {
    /// The [`ErrorKind`] this failure maps to.
    #[must_use]
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::ArgumentNull => ErrorKind::ArgumentNull,
            Self::Argument => ErrorKind::Argument,
            Self::Format => ErrorKind::Format,
            Self::Overflow => ErrorKind::Overflow,
        }
    }
}
