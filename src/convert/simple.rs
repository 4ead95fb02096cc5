use core::marker::PhantomData;

use crate::atomic;
use crate::culture::Culture;
use crate::descriptor::TypeDescriptor;
use crate::dispatch;
use crate::input::Input;
use crate::strategy::{Defaulted, Strategy};

const BOOL: TypeDescriptor = TypeDescriptor::new("bool");
const CHAR: TypeDescriptor = TypeDescriptor::new("char");

/// Converts `true` or `false`, ignoring case, to a `bool`.
///
/// The culture taking methods exist for symmetry with the other converters;
/// the accepted words do not depend on the culture.
pub struct BoolConverter<'a, S>
where
    S: Strategy<bool>,
{
    input: Input<'a>,
    state: S::State,
    marker: PhantomData<fn() -> S>,
}

impl<'a, S> BoolConverter<'a, S>
where
    S: Strategy<bool>,
{
    pub(crate) fn new(input: Input<'a>) -> Self {
        Self {
            input,
            state: S::initial(),
            marker: PhantomData,
        }
    }

    /// Parses the input.
    pub fn parse(self) -> S::Output {
        let outcome = dispatch::parse(self.input, Some(atomic::parse_bool));
        S::resolve(self.state, outcome, BOOL.name, self.input)
    }

    /// Parses the input; `culture` is ignored.
    pub fn parse_culture(self, culture: &Culture) -> S::Output {
        let outcome = dispatch::parse_culture(
            self.input,
            culture,
            Some(|input: Input<'_>, _: &Culture| atomic::parse_bool(input)),
        );
        S::resolve(self.state, outcome, BOOL.name, self.input)
    }

    /// Parses the input.
    #[inline]
    pub fn parse_invariant(self) -> S::Output {
        self.parse_culture(Culture::invariant())
    }
}

impl<'a> BoolConverter<'a, Defaulted> {
    /// Falls back to `default` instead of `false`.
    #[must_use]
    pub fn or(mut self, default: bool) -> Self {
        self.state = default;
        self
    }
}

/// Converts a string of exactly one `char`.
pub struct CharConverter<'a, S>
where
    S: Strategy<char>,
{
    input: Input<'a>,
    state: S::State,
    marker: PhantomData<fn() -> S>,
}

impl<'a, S> CharConverter<'a, S>
where
    S: Strategy<char>,
{
    pub(crate) fn new(input: Input<'a>) -> Self {
        Self {
            input,
            state: S::initial(),
            marker: PhantomData,
        }
    }

    /// Parses the input.
    pub fn parse(self) -> S::Output {
        let outcome = dispatch::parse(self.input, Some(atomic::parse_char));
        S::resolve(self.state, outcome, CHAR.name, self.input)
    }
}

impl<'a> CharConverter<'a, Defaulted> {
    /// Falls back to `default` instead of `'\0'`.
    #[must_use]
    pub fn or(mut self, default: char) -> Self {
        self.state = default;
        self
    }
}
