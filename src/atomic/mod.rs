//! Atomic parsers.
//!
//! One primitive per target type and call shape. Each reports an
//! [`Outcome`](crate::Outcome) rather than panicking, so the same primitive
//! serves every strategy through the [`dispatch`](crate::dispatch) layer.

mod boolean;
mod character;
pub mod date_time;
mod enumeration;
mod guid;
mod number;
pub mod time_span;

pub use self::boolean::parse_bool;
pub use self::character::parse_char;
pub use self::date_time::{
    parse_date_time, parse_date_time_exact, parse_date_time_offset, parse_date_time_offset_exact,
};
pub use self::enumeration::parse_enum;
pub use self::guid::{parse_guid, parse_guid_exact, DEFAULT_GUID_FORMAT};
pub use self::number::{
    parse_decimal, parse_f32, parse_f64, parse_i16, parse_i32, parse_i64, parse_i8, parse_u16,
    parse_u32, parse_u64, parse_u8,
};
pub use self::time_span::{parse_time_span, parse_time_span_exact};
