use core::marker::PhantomData;

use uuid::Uuid;

use crate::atomic::{self, DEFAULT_GUID_FORMAT};
use crate::culture::Culture;
use crate::descriptor::TypeDescriptor;
use crate::dispatch::{self, Formats};
use crate::input::Input;
use crate::strategy::{Defaulted, Strategy};

const GUID: TypeDescriptor = TypeDescriptor::new("Guid");

/// Converts to a [`Uuid`].
///
/// # Example
///
/// ```
/// use strparse::{Convert, Uuid};
///
/// let id = Uuid::from_u128(0xca76_1232_ed42_11ce_bacd_00aa_0057_b223);
///
/// assert_eq!("{ca761232-ed42-11ce-bacd-00aa0057b223}".convert().guid().parse(), Ok(id));
/// assert_eq!("ca761232ed4211cebacd00aa0057b223".convert().guid().parse_exact("N"), Ok(id));
/// assert_eq!(
///     "ca761232ed4211cebacd00aa0057b223".convert_nullable().guid().parse_exact_default(),
///     None,
/// );
/// ```
pub struct GuidConverter<'a, S>
where
    S: Strategy<Uuid>,
{
    input: Input<'a>,
    state: S::State,
    marker: PhantomData<fn() -> S>,
}

impl<'a, S> GuidConverter<'a, S>
where
    S: Strategy<Uuid>,
{
    pub(crate) fn new(input: Input<'a>) -> Self {
        Self {
            input,
            state: S::initial(),
            marker: PhantomData,
        }
    }

    /// Parses any of the `N`, `D`, `B`, `P` and `X` forms.
    pub fn parse(self) -> S::Output {
        let outcome = dispatch::parse(self.input, Some(atomic::parse_guid));
        S::resolve(self.state, outcome, GUID.name, self.input)
    }

    /// Parses the form `format` names: one of `N`, `D`, `B`, `P` or `X`,
    /// ignoring case.
    pub fn parse_exact(self, format: &str) -> S::Output {
        let outcome = dispatch::parse_exact(
            self.input,
            Formats::One(format),
            (),
            Culture::invariant(),
            Some(|input: Input<'_>, format: &str, (), _: &Culture| {
                atomic::parse_guid_exact(input, format)
            }),
        );
        S::resolve(self.state, outcome, GUID.name, self.input)
    }

    /// Parses the `D` form.
    #[inline]
    pub fn parse_exact_default(self) -> S::Output {
        self.parse_exact(DEFAULT_GUID_FORMAT)
    }
}

impl<'a> GuidConverter<'a, Defaulted> {
    /// Falls back to `default` instead of the nil GUID.
    #[must_use]
    pub fn or(mut self, default: Uuid) -> Self {
        self.state = default;
        self
    }
}
