//! Style flags controlling which lexical variations are accepted.

use bitflags::bitflags;

bitflags! {
    /// Lexical variations accepted when parsing numbers.
    ///
    /// The composite styles carry the defaults used by the converters:
    /// integers use [`NumberStyles::INTEGER`], `f32` and `f64` use
    /// [`NumberStyles::FLOAT`] with [`NumberStyles::ALLOW_THOUSANDS`],
    /// decimals use [`NumberStyles::NUMBER`] and currency uses
    /// [`NumberStyles::CURRENCY`].
    ///
    /// When a hex or binary specifier is present only the white-space flags
    /// are honored alongside it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NumberStyles: u32 {
        /// Leading white-space is skipped.
        const ALLOW_LEADING_WHITE = 0x0001;
        /// Trailing white-space is skipped.
        const ALLOW_TRAILING_WHITE = 0x0002;
        /// A leading positive or negative sign is accepted.
        const ALLOW_LEADING_SIGN = 0x0004;
        /// A trailing positive or negative sign is accepted.
        const ALLOW_TRAILING_SIGN = 0x0008;
        /// Enclosing parentheses denote a negative value.
        const ALLOW_PARENTHESES = 0x0010;
        /// A decimal separator is accepted.
        const ALLOW_DECIMAL_POINT = 0x0020;
        /// Group separators are accepted within the integral digits.
        const ALLOW_THOUSANDS = 0x0040;
        /// An exponent (`e` or `E`) is accepted.
        const ALLOW_EXPONENT = 0x0080;
        /// The culture's currency symbol is accepted.
        const ALLOW_CURRENCY_SYMBOL = 0x0100;
        /// The digits are hexadecimal.
        const ALLOW_HEX_SPECIFIER = 0x0200;
        /// The digits are binary.
        const ALLOW_BINARY_SPECIFIER = 0x0400;

        /// White-space and a leading sign.
        const INTEGER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_LEADING_SIGN.bits();
        /// White-space and hexadecimal digits.
        const HEX_NUMBER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_HEX_SPECIFIER.bits();
        /// White-space and binary digits.
        const BINARY_NUMBER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_BINARY_SPECIFIER.bits();
        /// [`NumberStyles::INTEGER`] plus trailing sign, decimal point and
        /// thousands.
        const NUMBER = Self::INTEGER.bits()
            | Self::ALLOW_TRAILING_SIGN.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_THOUSANDS.bits();
        /// [`NumberStyles::INTEGER`] plus decimal point and exponent.
        const FLOAT = Self::INTEGER.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_EXPONENT.bits();
        /// Everything except the exponent and the radix specifiers.
        const CURRENCY = Self::NUMBER.bits()
            | Self::ALLOW_PARENTHESES.bits()
            | Self::ALLOW_CURRENCY_SYMBOL.bits();
        /// Everything except the radix specifiers.
        const ANY = Self::CURRENCY.bits() | Self::ALLOW_EXPONENT.bits();
    }
}

bitflags! {
    /// Leniency when parsing dates and date-offsets.
    ///
    /// The default is [`DateTimeStyles::ALLOW_LEADING_WHITE`] with
    /// [`DateTimeStyles::ALLOW_TRAILING_WHITE`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DateTimeStyles: u32 {
        /// Leading white-space is skipped.
        const ALLOW_LEADING_WHITE = 0x0001;
        /// Trailing white-space is skipped.
        const ALLOW_TRAILING_WHITE = 0x0002;
        /// Extra white-space between components is skipped.
        const ALLOW_INNER_WHITE = 0x0004;
        /// All of the white-space flags.
        const ALLOW_WHITE_SPACES = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_INNER_WHITE.bits();
        /// Date-offsets are converted to UTC.
        const ADJUST_TO_UNIVERSAL = 0x0010;
    }
}

impl Default for DateTimeStyles {
    fn default() -> Self {
        Self::ALLOW_LEADING_WHITE | Self::ALLOW_TRAILING_WHITE
    }
}

bitflags! {
    /// Leniency when parsing durations.
    ///
    /// The default is [`TimeSpanStyles::ALLOW_LEADING_WHITE`] with
    /// [`TimeSpanStyles::ALLOW_TRAILING_WHITE`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TimeSpanStyles: u32 {
        /// Custom formats produce a negative duration.
        const ASSUME_NEGATIVE = 0x0001;
        /// Leading white-space is skipped.
        const ALLOW_LEADING_WHITE = 0x0002;
        /// Trailing white-space is skipped.
        const ALLOW_TRAILING_WHITE = 0x0004;
    }
}

impl Default for TimeSpanStyles {
    fn default() -> Self {
        Self::ALLOW_LEADING_WHITE | Self::ALLOW_TRAILING_WHITE
    }
}
