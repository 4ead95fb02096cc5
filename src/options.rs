//! Per call configuration.
//!
//! Each options struct bundles the culture selector, style flags and format
//! specification for one call. Unset fields take the defaults documented on
//! them.

use crate::culture::{Culture, CultureSelector};
use crate::dispatch::Formats;
use crate::style::{DateTimeStyles, NumberStyles, TimeSpanStyles};

/// Options for numeric and currency conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberOptions<'c> {
    /// Defaults to the current culture.
    pub culture: CultureSelector<'c>,
    /// Defaults to the target type's default style.
    pub style: Option<NumberStyles>,
}

impl<'c> NumberOptions<'c> {
    /// Current culture with the default style.
    pub const fn new() -> Self {
        Self {
            culture: CultureSelector::Current,
            style: None,
        }
    }

    /// Uses `culture`.
    #[must_use]
    pub const fn culture(mut self, culture: &'c Culture) -> Self {
        self.culture = CultureSelector::Explicit(culture);
        self
    }

    /// Uses the invariant culture.
    #[must_use]
    pub const fn invariant(mut self) -> Self {
        self.culture = CultureSelector::Invariant;
        self
    }

    /// Uses `style` in place of the default style.
    #[must_use]
    pub const fn style(mut self, style: NumberStyles) -> Self {
        self.style = Some(style);
        self
    }
}

/// Options for date and date-offset conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateOptions<'c, 'f> {
    /// Defaults to the current culture.
    pub culture: CultureSelector<'c>,
    /// Defaults to [`DateTimeStyles::default`].
    pub styles: Option<DateTimeStyles>,
    /// Exact formats; lenient parsing when `None`.
    pub formats: Option<Formats<'f>>,
}

impl<'c, 'f> DateOptions<'c, 'f> {
    /// Current culture, default styles, lenient parsing.
    pub const fn new() -> Self {
        Self {
            culture: CultureSelector::Current,
            styles: None,
            formats: None,
        }
    }

    /// Uses `culture`.
    #[must_use]
    pub const fn culture(mut self, culture: &'c Culture) -> Self {
        self.culture = CultureSelector::Explicit(culture);
        self
    }

    /// Uses the invariant culture.
    #[must_use]
    pub const fn invariant(mut self) -> Self {
        self.culture = CultureSelector::Invariant;
        self
    }

    /// Uses `styles` in place of the default styles.
    #[must_use]
    pub const fn styles(mut self, styles: DateTimeStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Requires the input to match one of `formats`.
    #[must_use]
    pub fn formats(mut self, formats: impl Into<Formats<'f>>) -> Self {
        self.formats = Some(formats.into());
        self
    }
}

/// Options for duration conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeSpanOptions<'c, 'f> {
    /// Defaults to the current culture.
    pub culture: CultureSelector<'c>,
    /// Defaults to [`TimeSpanStyles::default`].
    pub styles: Option<TimeSpanStyles>,
    /// Exact formats; lenient parsing when `None`.
    pub formats: Option<Formats<'f>>,
}

impl<'c, 'f> TimeSpanOptions<'c, 'f> {
    /// Current culture, default styles, lenient parsing.
    pub const fn new() -> Self {
        Self {
            culture: CultureSelector::Current,
            styles: None,
            formats: None,
        }
    }

    /// Uses `culture`.
    #[must_use]
    pub const fn culture(mut self, culture: &'c Culture) -> Self {
        self.culture = CultureSelector::Explicit(culture);
        self
    }

    /// Uses the invariant culture.
    #[must_use]
    pub const fn invariant(mut self) -> Self {
        self.culture = CultureSelector::Invariant;
        self
    }

    /// Uses `styles` in place of the default styles.
    #[must_use]
    pub const fn styles(mut self, styles: TimeSpanStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Requires the input to match one of `formats`.
    #[must_use]
    pub fn formats(mut self, formats: impl Into<Formats<'f>>) -> Self {
        self.formats = Some(formats.into());
        self
    }
}
