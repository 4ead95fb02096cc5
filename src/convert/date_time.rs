use core::marker::PhantomData;

use time::{OffsetDateTime, PrimitiveDateTime};

use crate::atomic::date_time as atomic;
use crate::culture::Culture;
use crate::descriptor::TypeDescriptor;
use crate::dispatch::{self, Formats};
use crate::input::Input;
use crate::options::DateOptions;
use crate::strategy::{Defaulted, Strategy};
use crate::style::DateTimeStyles;

const DATE_TIME: TypeDescriptor = TypeDescriptor::new("DateTime");
const DATE_TIME_OFFSET: TypeDescriptor = TypeDescriptor::new("DateTimeOffset");

macro_rules! impl_date_converter {
    (
        $(#[$attr:meta])*
        $name:ident => $ty:ty, $target:expr, $lenient:path, $exact:path, $default_doc:literal
    ) => {
        $(#[$attr])*
        pub struct $name<'a, S>
        where
            S: Strategy<$ty>,
        {
            input: Input<'a>,
            state: S::State,
            marker: PhantomData<fn() -> S>,
        }

        impl<'a, S> $name<'a, S>
        where
            S: Strategy<$ty>,
        {
            pub(crate) fn new(input: Input<'a>) -> Self {
                Self {
                    input,
                    state: S::initial(),
                    marker: PhantomData,
                }
            }

            /// Parses leniently with the current culture.
            pub fn parse(self) -> S::Output {
                self.parse_with(DateOptions::new())
            }

            /// Parses leniently with the current culture and `styles`.
            pub fn parse_styles(self, styles: DateTimeStyles) -> S::Output {
                self.parse_with(DateOptions::new().styles(styles))
            }

            /// Parses leniently with `culture`.
            pub fn parse_culture(self, culture: &Culture) -> S::Output {
                self.parse_with(DateOptions::new().culture(culture))
            }

            /// Parses leniently with `culture` and `styles`.
            pub fn parse_culture_styles(
                self,
                culture: &Culture,
                styles: DateTimeStyles,
            ) -> S::Output {
                self.parse_with(DateOptions::new().culture(culture).styles(styles))
            }

            /// Parses leniently with the invariant culture.
            pub fn parse_invariant(self) -> S::Output {
                self.parse_with(DateOptions::new().invariant())
            }

            /// Parses leniently with the invariant culture and `styles`.
            pub fn parse_invariant_styles(self, styles: DateTimeStyles) -> S::Output {
                self.parse_with(DateOptions::new().invariant().styles(styles))
            }

            /// Parses with the current culture, requiring one of `formats`.
            pub fn parse_exact<'f>(self, formats: impl Into<Formats<'f>>) -> S::Output {
                self.parse_with(DateOptions::new().formats(formats))
            }

            /// Parses with the current culture and `styles`, requiring one of
            /// `formats`.
            pub fn parse_exact_styles<'f>(
                self,
                formats: impl Into<Formats<'f>>,
                styles: DateTimeStyles,
            ) -> S::Output {
                self.parse_with(DateOptions::new().formats(formats).styles(styles))
            }

            /// Parses with `culture`, requiring one of `formats`.
            pub fn parse_exact_culture<'f>(
                self,
                formats: impl Into<Formats<'f>>,
                culture: &Culture,
            ) -> S::Output {
                self.parse_with(DateOptions::new().formats(formats).culture(culture))
            }

            /// Parses with `culture` and `styles`, requiring one of `formats`.
            pub fn parse_exact_culture_styles<'f>(
                self,
                formats: impl Into<Formats<'f>>,
                culture: &Culture,
                styles: DateTimeStyles,
            ) -> S::Output {
                self.parse_with(
                    DateOptions::new()
                        .formats(formats)
                        .culture(culture)
                        .styles(styles),
                )
            }

            /// Parses with the invariant culture, requiring one of `formats`.
            pub fn parse_exact_invariant<'f>(self, formats: impl Into<Formats<'f>>) -> S::Output {
                self.parse_with(DateOptions::new().formats(formats).invariant())
            }

            /// Parses with the invariant culture and `styles`, requiring one
            /// of `formats`.
            pub fn parse_exact_invariant_styles<'f>(
                self,
                formats: impl Into<Formats<'f>>,
                styles: DateTimeStyles,
            ) -> S::Output {
                self.parse_with(DateOptions::new().formats(formats).invariant().styles(styles))
            }

            /// Parses with the culture, styles and formats `options` select.
            pub fn parse_with(self, options: DateOptions<'_, '_>) -> S::Output {
                let culture = options.culture.resolve();
                let styles = options.styles.unwrap_or_default();
                let outcome = match options.formats {
                    Some(formats) => {
                        dispatch::parse_exact(self.input, formats, styles, culture, Some($exact))
                    }
                    None => dispatch::parse_styled_culture(
                        self.input,
                        styles,
                        culture,
                        Some($lenient),
                    ),
                };
                S::resolve(self.state, outcome, $target.name, self.input)
            }
        }

        impl<'a> $name<'a, Defaulted> {
            #[doc = concat!("Falls back to `default` instead of ", $default_doc, ".")]
            #[must_use]
            pub fn or(mut self, default: $ty) -> Self {
                self.state = default;
                self
            }
        }
    };
}

impl_date_converter! {
    /// Converts to a date and time of day without an offset.
    ///
    /// An offset in the input converts the value to UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use strparse::{Convert, Culture};
    /// use time::macros::datetime;
    ///
    /// let gb = Culture::get("en-GB").unwrap();
    ///
    /// assert_eq!(
    ///     "05/01/2024 13:04".convert().date_time().parse_culture(gb),
    ///     Ok(datetime!(2024-01-05 13:04)),
    /// );
    /// assert_eq!(
    ///     "2024-01-05T13:04:05".convert().date_time().parse_exact(&["o", "s"]),
    ///     Ok(datetime!(2024-01-05 13:04:05)),
    /// );
    /// assert_eq!("ABC".convert_nullable().date_time().parse_exact(&["s", "o"]), None);
    /// ```
    DateTimeConverter => PrimitiveDateTime, DATE_TIME, atomic::parse_date_time,
        atomic::parse_date_time_exact, "`0001-01-01 00:00`"
}

impl_date_converter! {
    /// Converts to a date and time of day with an offset from UTC.
    ///
    /// Input without an offset is taken as UTC;
    /// [`DateTimeStyles::ADJUST_TO_UNIVERSAL`] converts the value to UTC.
    DateTimeOffsetConverter => OffsetDateTime, DATE_TIME_OFFSET, atomic::parse_date_time_offset,
        atomic::parse_date_time_offset_exact, "`0001-01-01 00:00 UTC`"
}
