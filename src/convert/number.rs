use core::marker::PhantomData;

use rust_decimal::Decimal;

use crate::atomic;
use crate::culture::Culture;
use crate::descriptor::TypeDescriptor;
use crate::dispatch;
use crate::error::Outcome;
use crate::input::Input;
use crate::options::NumberOptions;
use crate::strategy::{DefaultValue, Defaulted, Strategy};
use crate::style::NumberStyles;

/// A numeric target type.
///
/// Implemented for every integer and floating point primitive the crate
/// converts to and for [`Decimal`].
pub trait Numeric: Sized {
    /// The type name and default style.
    const TYPE: TypeDescriptor;

    /// The atomic parser for this type.
    fn parse_styled(input: Input<'_>, style: NumberStyles, culture: &Culture) -> Outcome<Self>;
}

impl_numeric! {
    i8 => atomic::parse_i8, NumberStyles::INTEGER;
    i16 => atomic::parse_i16, NumberStyles::INTEGER;
    i32 => atomic::parse_i32, NumberStyles::INTEGER;
    i64 => atomic::parse_i64, NumberStyles::INTEGER;
    u8 => atomic::parse_u8, NumberStyles::INTEGER;
    u16 => atomic::parse_u16, NumberStyles::INTEGER;
    u32 => atomic::parse_u32, NumberStyles::INTEGER;
    u64 => atomic::parse_u64, NumberStyles::INTEGER;
    f32 => atomic::parse_f32, NumberStyles::FLOAT.union(NumberStyles::ALLOW_THOUSANDS);
    f64 => atomic::parse_f64, NumberStyles::FLOAT.union(NumberStyles::ALLOW_THOUSANDS);
    Decimal => atomic::parse_decimal, NumberStyles::NUMBER;
}

/// Converts to a [`Numeric`] type.
///
/// Created with the numeric methods of [`Conversion`](crate::Conversion),
/// like [`Conversion::i32`](crate::Conversion::i32).
///
/// # Example
///
/// ```
/// use strparse::{Convert, Culture, NumberOptions, NumberStyles};
///
/// let de = Culture::get("de-DE").unwrap();
///
/// assert_eq!("1.234".convert().i32().parse_culture_style(de, NumberStyles::NUMBER), Ok(1234));
/// assert_eq!("FF".convert().u8().parse_invariant_style(NumberStyles::HEX_NUMBER), Ok(255));
/// assert_eq!(
///     "(12)".convert_nullable().i64().parse_with(
///         NumberOptions::new()
///             .invariant()
///             .style(NumberStyles::INTEGER | NumberStyles::ALLOW_PARENTHESES),
///     ),
///     Some(-12),
/// );
/// ```
pub struct NumberConverter<'a, T, S>
where
    S: Strategy<T>,
{
    input: Input<'a>,
    state: S::State,
    marker: PhantomData<fn() -> (T, S)>,
}

impl<'a, T, S> NumberConverter<'a, T, S>
where
    T: Numeric,
    S: Strategy<T>,
{
    pub(crate) fn new(input: Input<'a>) -> Self {
        Self {
            input,
            state: S::initial(),
            marker: PhantomData,
        }
    }

    /// Parses with the current culture and the type's default style.
    pub fn parse(self) -> S::Output {
        self.parse_with(NumberOptions::new())
    }

    /// Parses with the current culture.
    pub fn parse_style(self, style: NumberStyles) -> S::Output {
        self.parse_with(NumberOptions::new().style(style))
    }

    /// Parses with `culture` and the type's default style.
    pub fn parse_culture(self, culture: &Culture) -> S::Output {
        self.parse_with(NumberOptions::new().culture(culture))
    }

    /// Parses with `culture`.
    pub fn parse_culture_style(self, culture: &Culture, style: NumberStyles) -> S::Output {
        self.parse_with(NumberOptions::new().culture(culture).style(style))
    }

    /// Parses with the invariant culture and the type's default style.
    pub fn parse_invariant(self) -> S::Output {
        self.parse_with(NumberOptions::new().invariant())
    }

    /// Parses with the invariant culture.
    pub fn parse_invariant_style(self, style: NumberStyles) -> S::Output {
        self.parse_with(NumberOptions::new().invariant().style(style))
    }

    /// Same as [`NumberConverter::parse`].
    #[inline]
    pub fn parse_current(self) -> S::Output {
        self.parse()
    }

    /// Same as [`NumberConverter::parse_style`].
    #[inline]
    pub fn parse_current_style(self, style: NumberStyles) -> S::Output {
        self.parse_style(style)
    }

    /// Parses with the culture and style `options` select.
    pub fn parse_with(self, options: NumberOptions<'_>) -> S::Output {
        let culture = options.culture.resolve();
        let style = options
            .style
            .or(T::TYPE.default_style)
            .unwrap_or(NumberStyles::NUMBER);
        let outcome =
            dispatch::parse_styled_culture(self.input, style, culture, Some(T::parse_styled));
        S::resolve(self.state, outcome, T::TYPE.name, self.input)
    }
}

impl<'a, T> NumberConverter<'a, T, Defaulted>
where
    T: Numeric + DefaultValue,
{
    /// Falls back to `default` instead of zero.
    #[must_use]
    pub fn or(mut self, default: T) -> Self {
        self.state = default;
        self
    }
}

