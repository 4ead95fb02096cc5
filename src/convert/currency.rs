use core::marker::PhantomData;

use rust_decimal::Decimal;

use crate::atomic;
use crate::culture::Culture;
use crate::descriptor::TypeDescriptor;
use crate::dispatch;
use crate::input::Input;
use crate::options::NumberOptions;
use crate::strategy::{Defaulted, Strategy};
use crate::style::NumberStyles;

const CURRENCY: TypeDescriptor = TypeDescriptor::numeric("currency", NumberStyles::CURRENCY);

/// Converts a monetary amount to a [`Decimal`].
///
/// Parsing uses [`NumberStyles::CURRENCY`] unless told otherwise, so the
/// culture's currency symbol, group separators and parentheses for negative
/// amounts are accepted.
///
/// # Example
///
/// ```
/// use strparse::{Convert, Culture, Decimal};
///
/// let sv = Culture::get("sv-SE").unwrap();
///
/// assert_eq!(
///     "1 234,567 kr".convert().currency().parse_culture(sv),
///     Ok(Decimal::new(1_234_567, 3)),
/// );
/// assert_eq!(
///     "1 234,567 kr".convert().currency().rounded().parse_culture(sv),
///     Ok(Decimal::new(123_457, 2)),
/// );
/// ```
pub struct CurrencyConverter<'a, S>
where
    S: Strategy<Decimal>,
{
    input: Input<'a>,
    state: S::State,
    rounded: bool,
    marker: PhantomData<fn() -> S>,
}

impl<'a, S> CurrencyConverter<'a, S>
where
    S: Strategy<Decimal>,
{
    pub(crate) fn new(input: Input<'a>) -> Self {
        Self {
            input,
            state: S::initial(),
            rounded: false,
            marker: PhantomData,
        }
    }

    /// Rounds a parsed amount to the culture's currency decimal digits,
    /// half to even.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        self.rounded = true;
        self
    }

    /// Parses with the current culture.
    pub fn parse(self) -> S::Output {
        self.parse_with(NumberOptions::new())
    }

    /// Parses with the current culture and `style`.
    pub fn parse_style(self, style: NumberStyles) -> S::Output {
        self.parse_with(NumberOptions::new().style(style))
    }

    /// Parses with `culture`.
    pub fn parse_culture(self, culture: &Culture) -> S::Output {
        self.parse_with(NumberOptions::new().culture(culture))
    }

    /// Parses with `culture` and `style`.
    pub fn parse_culture_style(self, culture: &Culture, style: NumberStyles) -> S::Output {
        self.parse_with(NumberOptions::new().culture(culture).style(style))
    }

    /// Parses with the invariant culture.
    pub fn parse_invariant(self) -> S::Output {
        self.parse_with(NumberOptions::new().invariant())
    }

    /// Parses with the invariant culture and `style`.
    pub fn parse_invariant_style(self, style: NumberStyles) -> S::Output {
        self.parse_with(NumberOptions::new().invariant().style(style))
    }

    /// Parses with the culture and style `options` select.
    pub fn parse_with(self, options: NumberOptions<'_>) -> S::Output {
        let culture = options.culture.resolve();
        let style = options
            .style
            .or(CURRENCY.default_style)
            .unwrap_or(NumberStyles::CURRENCY);
        let outcome =
            dispatch::parse_styled_culture(self.input, style, culture, Some(atomic::parse_decimal))
                .map(|amount| {
                    if self.rounded {
                        amount.round_dp(culture.number_format.currency_decimal_digits)
                    } else {
                        amount
                    }
                });
        S::resolve(self.state, outcome, CURRENCY.name, self.input)
    }
}

impl<'a> CurrencyConverter<'a, Defaulted> {
    /// Falls back to `default` instead of zero.
    #[must_use]
    pub fn or(mut self, default: Decimal) -> Self {
        self.state = default;
        self
    }
}
