//! The fluent conversion facade.

mod currency;
mod date_time;
mod enumeration;
mod guid;
mod number;
mod simple;
mod time_span;

use core::marker::PhantomData;

use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::descriptor::{Enumeration, TypeInfo};
use crate::input::Input;
use crate::strategy::{Defaulted, Nullable, Standard, Strategy};

pub use self::currency::CurrencyConverter;
pub use self::date_time::{DateTimeConverter, DateTimeOffsetConverter};
pub use self::enumeration::{EnumConverter, EnumTypeConverter};
pub use self::guid::GuidConverter;
pub use self::number::{NumberConverter, Numeric};
pub use self::simple::{BoolConverter, CharConverter};
pub use self::time_span::TimeSpanConverter;

/// A string that can be converted.
///
/// Implemented for `str`, `String` and their `Option` forms, where `None`
/// is an absent input.
///
/// # Example
///
/// ```
/// use strparse::{Convert, ErrorKind};
///
/// let absent: Option<&str> = None;
///
/// assert_eq!(absent.convert().i32().parse().unwrap_err().kind(), ErrorKind::ArgumentNull);
/// assert_eq!(absent.convert_nullable().i32().parse(), None);
/// assert_eq!(String::from("7").convert_defaulted().u8().parse(), 7);
/// ```
pub trait Convert {
    /// The input this value converts from.
    fn as_input(&self) -> Input<'_>;

    /// Converts with the [`Standard`] strategy.
    #[inline]
    fn convert(&self) -> Conversion<'_, Standard> {
        Conversion::new(self.as_input())
    }

    /// Converts with the [`Nullable`] strategy.
    #[inline]
    fn convert_nullable(&self) -> Conversion<'_, Nullable> {
        Conversion::new(self.as_input())
    }

    /// Converts with the [`Defaulted`] strategy.
    #[inline]
    fn convert_defaulted(&self) -> Conversion<'_, Defaulted> {
        Conversion::new(self.as_input())
    }
}

impl Convert for str {
    #[inline]
    fn as_input(&self) -> Input<'_> {
        Some(self)
    }
}

impl Convert for String {
    #[inline]
    fn as_input(&self) -> Input<'_> {
        Some(self)
    }
}

impl Convert for Option<&str> {
    #[inline]
    fn as_input(&self) -> Input<'_> {
        *self
    }
}

impl Convert for Option<String> {
    #[inline]
    fn as_input(&self) -> Input<'_> {
        self.as_deref()
    }
}

/// An input bound to a strategy, choosing the target type next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion<'a, S> {
    input: Input<'a>,
    strategy: PhantomData<S>,
}

impl<'a, S> Conversion<'a, S> {
    /// Binds `input` to the strategy `S`.
    #[inline]
    pub fn new(input: Input<'a>) -> Self {
        Self {
            input,
            strategy: PhantomData,
        }
    }

    /// The bound input.
    #[inline]
    pub fn input(&self) -> Input<'a> {
        self.input
    }

    impl_conversion_numeric! {
        i8 => i8,
        i16 => i16,
        i32 => i32,
        i64 => i64,
        u8 => u8,
        u16 => u16,
        u32 => u32,
        u64 => u64,
        f32 => f32,
        f64 => f64,
        decimal => Decimal,
    }

    /// Converts a monetary amount to a `Decimal`.
    #[inline]
    pub fn currency(self) -> CurrencyConverter<'a, S>
    where
        S: Strategy<Decimal>,
    {
        CurrencyConverter::new(self.input)
    }

    /// Converts to `bool`.
    #[inline]
    pub fn boolean(self) -> BoolConverter<'a, S>
    where
        S: Strategy<bool>,
    {
        BoolConverter::new(self.input)
    }

    /// Converts to `char`.
    #[inline]
    pub fn character(self) -> CharConverter<'a, S>
    where
        S: Strategy<char>,
    {
        CharConverter::new(self.input)
    }

    /// Converts to a GUID.
    #[inline]
    pub fn guid(self) -> GuidConverter<'a, S>
    where
        S: Strategy<Uuid>,
    {
        GuidConverter::new(self.input)
    }

    /// Converts to the enumeration `E`.
    #[inline]
    pub fn enumeration<E>(self) -> EnumConverter<'a, E, S>
    where
        E: Enumeration,
        S: Strategy<E>,
    {
        EnumConverter::new(self.input)
    }

    /// Converts to the raw value of the enumeration `ty` describes.
    ///
    /// A missing or non-enumeration `ty` panics once parsed.
    #[inline]
    pub fn enum_type<'t>(self, ty: Option<&'t dyn TypeInfo>) -> EnumTypeConverter<'a, 't, S>
    where
        S: Strategy<i64>,
    {
        EnumTypeConverter::new(self.input, ty)
    }

    /// Converts to a date without an offset.
    #[inline]
    pub fn date_time(self) -> DateTimeConverter<'a, S>
    where
        S: Strategy<PrimitiveDateTime>,
    {
        DateTimeConverter::new(self.input)
    }

    /// Converts to a date with an offset.
    #[inline]
    pub fn date_time_offset(self) -> DateTimeOffsetConverter<'a, S>
    where
        S: Strategy<OffsetDateTime>,
    {
        DateTimeOffsetConverter::new(self.input)
    }

    /// Converts to a duration.
    #[inline]
    pub fn time_span(self) -> TimeSpanConverter<'a, S>
    where
        S: Strategy<Duration>,
    {
        TimeSpanConverter::new(self.input)
    }
}
