use core::marker::PhantomData;

use time::Duration;

use crate::atomic;
use crate::culture::Culture;
use crate::descriptor::TypeDescriptor;
use crate::dispatch::{self, Formats};
use crate::input::Input;
use crate::options::TimeSpanOptions;
use crate::strategy::{Defaulted, Strategy};
use crate::style::TimeSpanStyles;

const TIME_SPAN: TypeDescriptor = TypeDescriptor::new("TimeSpan");

/// Converts to a [`Duration`].
///
/// # Example
///
/// ```
/// use strparse::{Convert, Duration, ErrorKind};
///
/// assert_eq!("1.02:03:04".convert().time_span().parse_invariant(), Ok(Duration::seconds(93_784)));
/// assert_eq!(
///     "02:03".convert().time_span().parse_exact_invariant("hh\\:mm"),
///     Ok(Duration::minutes(123)),
/// );
///
/// let error = "24:00".convert().time_span().parse_invariant().unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Overflow);
/// ```
pub struct TimeSpanConverter<'a, S>
where
    S: Strategy<Duration>,
{
    input: Input<'a>,
    state: S::State,
    marker: PhantomData<fn() -> S>,
}

impl<'a, S> TimeSpanConverter<'a, S>
where
    S: Strategy<Duration>,
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
        self.parse_with(TimeSpanOptions::new())
    }

    /// Parses leniently with `culture`.
    pub fn parse_culture(self, culture: &Culture) -> S::Output {
        self.parse_with(TimeSpanOptions::new().culture(culture))
    }

    /// Parses leniently with the invariant culture.
    pub fn parse_invariant(self) -> S::Output {
        self.parse_with(TimeSpanOptions::new().invariant())
    }

    /// Parses with the current culture, requiring one of `formats`.
    pub fn parse_exact<'f>(self, formats: impl Into<Formats<'f>>) -> S::Output {
        self.parse_with(TimeSpanOptions::new().formats(formats))
    }

    /// Parses with `culture`, requiring one of `formats`.
    pub fn parse_exact_culture<'f>(
        self,
        formats: impl Into<Formats<'f>>,
        culture: &Culture,
    ) -> S::Output {
        self.parse_with(TimeSpanOptions::new().formats(formats).culture(culture))
    }

    /// Parses with the invariant culture, requiring one of `formats`.
    pub fn parse_exact_invariant<'f>(self, formats: impl Into<Formats<'f>>) -> S::Output {
        self.parse_with(TimeSpanOptions::new().formats(formats).invariant())
    }

    /// Parses with `culture` and `styles`, requiring one of `formats`.
    pub fn parse_exact_styles<'f>(
        self,
        formats: impl Into<Formats<'f>>,
        culture: &Culture,
        styles: TimeSpanStyles,
    ) -> S::Output {
        self.parse_with(
            TimeSpanOptions::new()
                .formats(formats)
                .culture(culture)
                .styles(styles),
        )
    }

    /// Parses with the culture, styles and formats `options` select.
    pub fn parse_with(self, options: TimeSpanOptions<'_, '_>) -> S::Output {
        let culture = options.culture.resolve();
        let styles = options.styles.unwrap_or_default();
        let outcome = match options.formats {
            Some(formats) => dispatch::parse_exact(
                self.input,
                formats,
                styles,
                culture,
                Some(atomic::parse_time_span_exact),
            ),
            None => dispatch::parse_styled_culture(
                self.input,
                styles,
                culture,
                Some(atomic::parse_time_span),
            ),
        };
        S::resolve(self.state, outcome, TIME_SPAN.name, self.input)
    }
}

impl<'a> TimeSpanConverter<'a, Defaulted> {
    /// Falls back to `default` instead of zero.
    #[must_use]
    pub fn or(mut self, default: Duration) -> Self {
        self.state = default;
        self
    }
}
