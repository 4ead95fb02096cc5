use core::marker::PhantomData;

use crate::atomic;
use crate::descriptor::{Enumeration, TypeInfo};
use crate::dispatch;
use crate::error::Failure;
use crate::input::Input;
use crate::strategy::{Defaulted, Strategy};

/// Converts to an [`Enumeration`].
///
/// Accepts a member name, a comma separated list of member names or a
/// signed decimal value. Names are case sensitive unless
/// [`ignore_case`](EnumConverter::ignore_case) is set.
pub struct EnumConverter<'a, E, S>
where
    S: Strategy<E>,
{
    input: Input<'a>,
    state: S::State,
    ignore_case: bool,
    marker: PhantomData<fn() -> (E, S)>,
}

impl<'a, E, S> EnumConverter<'a, E, S>
where
    E: Enumeration,
    S: Strategy<E>,
{
    pub(crate) fn new(input: Input<'a>) -> Self {
        Self {
            input,
            state: S::initial(),
            ignore_case: false,
            marker: PhantomData,
        }
    }

    /// Matches member names ignoring case.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Parses the input.
    pub fn parse(self) -> S::Output {
        let ty = E::enum_type();
        let ignore_case = self.ignore_case;
        let outcome = dispatch::parse(
            self.input,
            Some(|input: Input<'_>| {
                atomic::parse_enum(input, ty, ignore_case)
                    .and_then(|value| E::from_value(value).ok_or(Failure::Format))
            }),
        );
        S::resolve(self.state, outcome, ty.name(), self.input)
    }
}

impl<'a, E> EnumConverter<'a, E, Defaulted>
where
    E: Enumeration,
{
    /// Falls back to `default` instead of the type's default member.
    #[must_use]
    pub fn or(mut self, default: E) -> Self {
        self.state = default;
        self
    }
}

/// Converts to the raw value of an enumeration described at runtime.
///
/// # Panics
///
/// Parsing panics when the type is missing or is not an enumeration, in
/// every strategy.
///
/// # Example
///
/// ```
/// use strparse::{Convert, EnumType, TypeInfo};
///
/// static LEVEL: EnumType = EnumType::new("Level", &[("Low", 1), ("High", 2)]);
///
/// let ty: &dyn TypeInfo = &LEVEL;
///
/// assert_eq!("High".convert().enum_type(Some(ty)).parse(), Ok(2));
/// assert_eq!("3".convert_defaulted().enum_type(Some(ty)).or(-1).parse(), -1);
/// ```
pub struct EnumTypeConverter<'a, 't, S>
where
    S: Strategy<i64>,
{
    input: Input<'a>,
    ty: Option<&'t dyn TypeInfo>,
    state: S::State,
    ignore_case: bool,
}

impl<'a, 't, S> EnumTypeConverter<'a, 't, S>
where
    S: Strategy<i64>,
{
    pub(crate) fn new(input: Input<'a>, ty: Option<&'t dyn TypeInfo>) -> Self {
        Self {
            input,
            ty,
            state: S::initial(),
            ignore_case: false,
        }
    }

    /// Matches member names ignoring case.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Parses the input.
    ///
    /// # Panics
    ///
    /// Panics if the type is missing or is not an enumeration.
    #[track_caller]
    pub fn parse(self) -> S::Output {
        let Some(info) = self.ty else {
            panic!("enumeration type is missing")
        };
        let Some(ty) = info.as_enum() else {
            panic!("type {} is not an enumeration", info.name())
        };
        let ignore_case = self.ignore_case;
        let outcome = dispatch::parse(
            self.input,
            Some(|input: Input<'_>| atomic::parse_enum(input, ty, ignore_case)),
        );
        S::resolve(self.state, outcome, info.name(), self.input)
    }
}

impl<'a, 't> EnumTypeConverter<'a, 't, Defaulted> {
    /// Falls back to `default` instead of zero.
    #[must_use]
    pub fn or(mut self, default: i64) -> Self {
        self.state = default;
        self
    }
}
