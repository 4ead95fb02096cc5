macro_rules! impl_parse_integer {
    (@signed signed) => {
        true
    };
    (@signed unsigned) => {
        false
    };
    ($($(#[$attr:meta])* $name:ident => $ty:ty, $sign:ident;)*) => {
        $(
            $(#[$attr])*
            ///
            /// Fails with an overflow when the value is outside the type's
            /// range or has a non-zero fractional part.
            pub fn $name(
                input: Input<'_>,
                style: NumberStyles,
                culture: &Culture,
            ) -> Outcome<$ty> {
                let value = parse_integer(
                    input,
                    style,
                    culture,
                    <$ty>::BITS,
                    impl_parse_integer!(@signed $sign),
                )?;
                <$ty>::try_from(value).map_err(|_| Failure::Overflow)
            }
        )*
    };
}

macro_rules! impl_numeric {
    ($($ty:ty => $parser:path, $style:expr;)*) => {
        $(
            impl Numeric for $ty {
                const TYPE: TypeDescriptor = TypeDescriptor::numeric(stringify!($ty), $style);

                #[inline]
                fn parse_styled(
                    input: Input<'_>,
                    style: NumberStyles,
                    culture: &Culture,
                ) -> Outcome<Self> {
                    $parser(input, style, culture)
                }
            }
        )*
    };
}

macro_rules! impl_conversion_numeric {
    ($($method:ident => $ty:ty,)*) => {
        $(
            impl_conversion_numeric!($method, $ty, stringify!($ty));
        )*
    };
    ($method:ident, $ty:ty, $ty_str:expr) => {
        #[doc = "Converts to `"]
        #[doc = $ty_str]
        #[doc = "`."]
        #[inline]
        pub fn $method(self) -> NumberConverter<'a, $ty, S>
        where
            S: Strategy<$ty>,
        {
            NumberConverter::new(self.input)
        }
    };
}

/// Declares a plain enum parsed as an [`Enumeration`](crate::Enumeration).
///
/// The first member is the value [`Defaulted`](crate::Defaulted) conversions
/// fall back to. Members without an explicit discriminant are numbered
/// from zero.
///
/// # Example
///
/// ```
/// use strparse::{enumeration, Convert};
///
/// enumeration! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Color {
///         Red = 1,
///         Green = 2,
///         Blue = 4,
///     }
/// }
///
/// assert_eq!("green".convert().enumeration::<Color>().ignore_case().parse(), Ok(Color::Green));
/// assert_eq!("4".convert().enumeration::<Color>().parse(), Ok(Color::Blue));
/// assert_eq!("8".convert_nullable().enumeration::<Color>().parse(), None);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $first:ident $(= $first_value:expr)?
            $(, $member:ident $(= $value:expr)?)* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[repr(i64)]
        $vis enum $name {
            $first $(= $first_value)?,
            $($member $(= $value)?,)*
        }

        impl $name {
            const ENUM_TYPE: $crate::EnumType = $crate::EnumType::new(
                stringify!($name),
                &[
                    (stringify!($first), $name::$first as i64),
                    $((stringify!($member), $name::$member as i64),)*
                ],
            );
        }

        impl $crate::DefaultValue for $name {
            #[inline]
            fn default_value() -> Self {
                $name::$first
            }
        }

        impl $crate::Enumeration for $name {
            #[inline]
            fn enum_type() -> &'static $crate::EnumType {
                &Self::ENUM_TYPE
            }

            fn from_value(value: i64) -> Option<Self> {
                if value == $name::$first as i64 {
                    return Some($name::$first);
                }
                $(
                    if value == $name::$member as i64 {
                        return Some($name::$member);
                    }
                )*
                None
            }
        }
    };
}
