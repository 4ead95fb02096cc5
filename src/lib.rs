//! Fluently and explicitly convert strings into primitive and common types.
//!
//! # Basic usage
//!
//! ```rust
//! use strparse::{Convert, Culture};
//!
//! // Standard: failures are returned as a typed error.
//! assert_eq!("42".convert().i32().parse(), Ok(42));
//!
//! // Nullable: failures become `None`.
//! assert_eq!("XYZ".convert_nullable().i32().parse(), None);
//!
//! // Defaulted: failures become the supplied default.
//! assert_eq!("XYZ".convert_defaulted().i32().or(-1).parse(), -1);
//!
//! // Culture sensitive parsing.
//! let fr = Culture::get("fr-FR").unwrap();
//! assert_eq!("1 234,5".convert().f64().parse_culture(fr), Ok(1234.5));
//! ```
//!
//! # Strategies
//!
//! Every conversion picks one of three strategies up front:
//!
//! - [`Standard`] returns `Result<T, Error>` where the error kind tells a
//!   malformed input ([`ErrorKind::Format`]) apart from one that is out of
//!   range ([`ErrorKind::Overflow`]).
//! - [`Nullable`] returns `Option<T>`.
//! - [`Defaulted`] returns `T`, substituting the default carried by the
//!   converter.
//!
//! # Panics
//!
//! Only contract violations panic: dispatching without an atomic parser, or
//! parsing an enumeration against a missing or non-enum type descriptor.
//! Everything the input can cause is reported through the strategy.

#![deny(
    unsafe_code,
    // For derived implementations.
    unused_qualifications,
    clippy::pedantic
)]
#![forbid(
    anonymous_parameters,
    unstable_features,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(
    clippy::inline_always,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::type_repetition_in_bounds
)]

#[macro_use]
mod macros;

pub mod atomic;
pub mod culture;
pub mod dispatch;
mod convert;
mod descriptor;
mod error;
mod input;
mod options;
mod strategy;
mod style;

pub use self::convert::*;
pub use self::culture::{Culture, CultureSelector, DateTimeFormat, NumberFormat};
pub use self::descriptor::{EnumType, Enumeration, TypeDescriptor, TypeInfo};
pub use self::dispatch::Formats;
pub use self::error::{Error, ErrorKind, Failure, Outcome};
pub use self::input::Input;
pub use self::options::{DateOptions, NumberOptions, TimeSpanOptions};
pub use self::strategy::{DefaultValue, Defaulted, Nullable, Standard, Strategy};
pub use self::style::{DateTimeStyles, NumberStyles, TimeSpanStyles};

pub use rust_decimal::Decimal;
pub use time::{Duration, OffsetDateTime, PrimitiveDateTime};
pub use uuid::Uuid;
