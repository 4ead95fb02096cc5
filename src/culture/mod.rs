//! Culture providers.
//!
//! A [`Culture`] supplies the symbols and patterns the atomic parsers consult.
//! The built-in table covers the invariant culture plus `en-US`, `en-GB`,
//! `fr-FR`, `de-DE`, `es-ES`, `sv-SE`, `nb-NO` and `da-DK`. Callers may also
//! build their own and pass them as [`CultureSelector::Explicit`].
//!
//! # Current culture
//!
//! The current culture is a process wide value that is fixed once read. It
//! can be chosen with [`install_current`] before its first use; otherwise it
//! is derived from the `LC_ALL`, `LC_NUMERIC` and `LANG` environment
//! variables, in that order, falling back to invariant.

mod date;
mod number;
mod table;

use std::env;
use std::sync::OnceLock;

use crate::error::Error;

pub use self::date::DateTimeFormat;
pub use self::number::NumberFormat;

static CURRENT: OnceLock<&'static Culture> = OnceLock::new();

/// Locale specific formatting rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    /// The culture name, `""` for the invariant culture.
    pub name: &'static str,
    /// The numeric culture identifier.
    pub lcid: u32,
    /// A human readable name.
    pub display_name: &'static str,
    /// Number symbols.
    pub number_format: NumberFormat,
    /// Date and time names and patterns.
    pub date_time_format: DateTimeFormat,
}

impl Culture {
    /// The culture independent rules.
    #[inline]
    pub fn invariant() -> &'static Self {
        &table::INVARIANT
    }

    /// The process wide current culture.
    ///
    /// See the [module documentation](self) for how it is chosen.
    pub fn current() -> &'static Self {
        CURRENT.get_or_init(from_environment)
    }

    /// All built-in cultures, invariant first.
    pub fn all() -> impl Iterator<Item = &'static Self> {
        table::CULTURES.iter().copied()
    }

    /// Resolves a culture by name.
    ///
    /// Names are matched ignoring case. `""` and `"invariant"` yield the
    /// invariant culture and POSIX spellings such as `fr_FR.UTF-8` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCulture`] if no culture has that name.
    ///
    /// # Example
    ///
    /// ```
    /// use strparse::{Culture, ErrorKind};
    ///
    /// assert_eq!(Culture::get("EN-us").unwrap().lcid, 1033);
    /// assert_eq!(Culture::get("de_DE.UTF-8").unwrap().name, "de-DE");
    /// assert_eq!(Culture::get("xx-XX").unwrap_err().kind(), ErrorKind::UnknownCulture);
    /// ```
    pub fn get(name: &str) -> Result<&'static Self, Error> {
        let normalized = normalize_name(name);
        if normalized.is_empty() || normalized.eq_ignore_ascii_case("invariant") {
            return Ok(Self::invariant());
        }
        Self::all()
            .find(|culture| culture.name.eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| Error::unknown_culture(name))
    }

    /// Resolves a culture by its numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCulture`] if no culture has that identifier.
    pub fn from_lcid(lcid: u32) -> Result<&'static Self, Error> {
        Self::all()
            .find(|culture| culture.lcid == lcid)
            .ok_or_else(|| Error::unknown_culture(lcid.to_string()))
    }

    /// Returns `true` for the invariant culture.
    #[inline]
    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }
}

/// Fixes the current culture for the rest of the process.
///
/// # Errors
///
/// Returns the culture already in use if the current culture was installed
/// or read before.
pub fn install_current(culture: &'static Culture) -> Result<(), &'static Culture> {
    CURRENT.set(culture).map_err(|_| Culture::current())
}

/// Selects the culture a conversion uses.
///
/// Resolution happens when the conversion runs; the selector itself holds
/// no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CultureSelector<'c> {
    /// [`Culture::current`].
    #[default]
    Current,
    /// [`Culture::invariant`].
    Invariant,
    /// A caller supplied culture.
    Explicit(&'c Culture),
}

impl<'c> CultureSelector<'c> {
    /// The culture this selector refers to.
    pub fn resolve(self) -> &'c Culture {
        match self {
            Self::Current => Culture::current(),
            Self::Invariant => Culture::invariant(),
            Self::Explicit(culture) => culture,
        }
    }
}

impl<'c> From<&'c Culture> for CultureSelector<'c> {
    fn from(culture: &'c Culture) -> Self {
        Self::Explicit(culture)
    }
}

fn normalize_name(name: &str) -> String {
    let name = name.trim();
    let name = name.split(['.', '@']).next().unwrap_or_default();
    name.replace('_', "-")
}

fn from_environment() -> &'static Culture {
    for var in ["LC_ALL", "LC_NUMERIC", "LANG"] {
        let Ok(value) = env::var(var) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        let normalized = normalize_name(&value);
        if normalized == "C" || normalized == "POSIX" {
            tracing::debug!(var, value = %value, "using invariant culture");
            return Culture::invariant();
        }
        return match Culture::get(&normalized) {
            Ok(culture) => {
                tracing::debug!(
                    var,
                    value = %value,
                    culture = culture.name,
                    "using current culture"
                );
                culture
            }
            Err(error) => {
                tracing::warn!(var, value = %value, %error, "falling back to invariant culture");
                Culture::invariant()
            }
        };
    }
    Culture::invariant()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_lcid() {
        assert_eq!(Culture::get("fr-FR").unwrap().lcid, 1036);
        assert_eq!(Culture::from_lcid(1053).unwrap().name, "sv-SE");
        assert!(Culture::get("").unwrap().is_invariant());
        assert!(Culture::get("Invariant").unwrap().is_invariant());
        assert!(Culture::from_lcid(127).unwrap().is_invariant());
    }

    #[test]
    fn test_unknown_culture() {
        assert_eq!(
            Culture::get("tlh-KX").unwrap_err(),
            Error::UnknownCulture {
                name: "tlh-KX".into()
            }
        );
        assert_eq!(
            Culture::from_lcid(1).unwrap_err(),
            Error::UnknownCulture { name: "1".into() }
        );
    }

    #[test]
    fn test_normalize_posix_names() {
        assert_eq!(normalize_name("fr_FR.UTF-8"), "fr-FR");
        assert_eq!(normalize_name("de_DE@euro"), "de-DE");
        assert_eq!(normalize_name("C.UTF-8"), "C");
    }

    #[test]
    fn test_selector_resolution() {
        let fr = Culture::get("fr-FR").unwrap();
        assert_eq!(CultureSelector::Explicit(fr).resolve(), fr);
        assert!(CultureSelector::Invariant.resolve().is_invariant());
        assert_eq!(CultureSelector::Current.resolve(), Culture::current());
    }
}
