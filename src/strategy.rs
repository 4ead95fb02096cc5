//! Failure policies.

use rust_decimal::Decimal;
use time::macros::datetime;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::error::{Error, Outcome};
use crate::input::Input;

/// Projects the outcome of an atomic parse into a strategy's result.
///
/// `State` is whatever the strategy carries on the converter between
/// construction and the parse call, the default value for [`Defaulted`].
pub trait Strategy<T> {
    /// Carried by converters using this strategy.
    type State;
    /// What a parse call returns.
    type Output;

    /// The state a freshly bound converter starts with.
    fn initial() -> Self::State;

    /// Maps the outcome of parsing `input` as `target`.
    fn resolve(
        state: Self::State,
        outcome: Outcome<T>,
        target: &'static str,
        input: Input<'_>,
    ) -> Self::Output;
}

/// Failures are returned as an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standard;

/// Failures are returned as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable;

/// Failures are replaced with a default value.
///
/// The default starts as [`DefaultValue::default_value`] and is replaced with
/// the converters' `or` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaulted;

impl<T> Strategy<T> for Standard {
    type State = ();
    type Output = Result<T, Error>;

    #[inline(always)]
    fn initial() {}

    #[inline]
    fn resolve(
        (): (),
        outcome: Outcome<T>,
        target: &'static str,
        input: Input<'_>,
    ) -> Self::Output {
        outcome.map_err(|failure| Error::from_failure(failure, target, input))
    }
}

impl<T> Strategy<T> for Nullable {
    type State = ();
    type Output = Option<T>;

    #[inline(always)]
    fn initial() {}

    #[inline]
    fn resolve(
        (): (),
        outcome: Outcome<T>,
        target: &'static str,
        _input: Input<'_>,
    ) -> Self::Output {
        match outcome {
            Ok(value) => Some(value),
            Err(failure) => {
                tracing::trace!(ty = target, ?failure, "parse failure absorbed as none");
                None
            }
        }
    }
}

impl<T> Strategy<T> for Defaulted
where
    T: DefaultValue,
{
    type State = T;
    type Output = T;

    #[inline(always)]
    fn initial() -> T {
        T::default_value()
    }

    #[inline]
    fn resolve(default: T, outcome: Outcome<T>, target: &'static str, _input: Input<'_>) -> T {
        match outcome {
            Ok(value) => value,
            Err(failure) => {
                tracing::trace!(ty = target, ?failure, "parse failure absorbed as default");
                default
            }
        }
    }
}

/// The value a [`Defaulted`] converter falls back to when no other default
/// was given.
pub trait DefaultValue {
    /// The fallback value.
    fn default_value() -> Self;
}

macro_rules! impl_default_value {
    ($($ty:ty => $value:expr),* $(,)?) => {
        $(
            impl DefaultValue for $ty {
                #[inline(always)]
                fn default_value() -> Self {
                    $value
                }
            }
        )*
    };
}

impl_default_value! {
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    f32 => 0.0,
    f64 => 0.0,
    bool => false,
    char => '\0',
    Decimal => Decimal::ZERO,
    Uuid => Uuid::nil(),
    Duration => Duration::ZERO,
    PrimitiveDateTime => datetime!(0001-01-01 0:00),
    OffsetDateTime => datetime!(0001-01-01 0:00 UTC),
}
