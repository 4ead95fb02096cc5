/// Culture specific symbols used when parsing numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separates the integral and fractional digits.
    pub decimal_separator: &'static str,
    /// Separates groups of integral digits.
    pub group_separator: &'static str,
    /// Decimal separator used in currency amounts.
    pub currency_decimal_separator: &'static str,
    /// Group separator used in currency amounts.
    pub currency_group_separator: &'static str,
    /// The local currency symbol.
    pub currency_symbol: &'static str,
    /// Number of fractional digits in a currency amount.
    pub currency_decimal_digits: u32,
    /// The positive sign.
    pub positive_sign: &'static str,
    /// The negative sign.
    pub negative_sign: &'static str,
    /// Not-a-number.
    pub nan_symbol: &'static str,
    /// Positive infinity.
    pub positive_infinity_symbol: &'static str,
    /// Negative infinity.
    pub negative_infinity_symbol: &'static str,
}

impl NumberFormat {
    pub(crate) const INVARIANT: Self = Self {
        decimal_separator: ".",
        group_separator: ",",
        currency_decimal_separator: ".",
        currency_group_separator: ",",
        currency_symbol: "\u{a4}",
        currency_decimal_digits: 2,
        positive_sign: "+",
        negative_sign: "-",
        nan_symbol: "NaN",
        positive_infinity_symbol: "Infinity",
        negative_infinity_symbol: "-Infinity",
    };

    /// A format with the given separators and currency, the remaining symbols
    /// taken from the invariant culture.
    pub const fn new(
        decimal_separator: &'static str,
        group_separator: &'static str,
        currency_symbol: &'static str,
        currency_decimal_digits: u32,
    ) -> Self {
        Self {
            decimal_separator,
            group_separator,
            currency_decimal_separator: decimal_separator,
            currency_group_separator: group_separator,
            currency_symbol,
            currency_decimal_digits,
            ..Self::INVARIANT
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}
