//! Target type descriptors.

use core::fmt;

use crate::style::NumberStyles;

/// Runtime information about a target type.
pub trait TypeInfo: Sync {
    /// The type name used in error messages.
    fn name(&self) -> &'static str;

    /// The enumeration description, if the type is an enumeration.
    fn as_enum(&self) -> Option<&EnumType>;
}

/// Identifies a primitive target type and its default number style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// The type name.
    pub name: &'static str,
    /// The style used when none is given, for numeric types.
    pub default_style: Option<NumberStyles>,
}

impl TypeDescriptor {
    /// A descriptor for a non-numeric type.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default_style: None,
        }
    }

    /// A descriptor for a numeric type.
    pub const fn numeric(name: &'static str, default_style: NumberStyles) -> Self {
        Self {
            name,
            default_style: Some(default_style),
        }
    }
}

impl TypeInfo for TypeDescriptor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_enum(&self) -> Option<&EnumType> {
        None
    }
}

/// Describes a set of named constants.
///
/// A flags type accepts any value, whether or not it decomposes into its
/// declared members. Any other type only accepts declared members.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EnumType {
    name: &'static str,
    members: &'static [(&'static str, i64)],
    flags: bool,
}

impl EnumType {
    /// An enumeration accepting only its declared members.
    pub const fn new(name: &'static str, members: &'static [(&'static str, i64)]) -> Self {
        Self {
            name,
            members,
            flags: false,
        }
    }

    /// A flags enumeration accepting any combination of values.
    pub const fn flags(name: &'static str, members: &'static [(&'static str, i64)]) -> Self {
        Self {
            name,
            members,
            flags: true,
        }
    }

    /// The declared members as `(name, value)` pairs.
    #[inline]
    pub fn members(&self) -> &'static [(&'static str, i64)] {
        self.members
    }

    /// Returns `true` if this is a flags enumeration.
    #[inline]
    pub fn is_flags(&self) -> bool {
        self.flags
    }

    /// Returns `true` if `value` is a declared member.
    pub fn is_defined(&self, value: i64) -> bool {
        self.members.iter().any(|&(_, member)| member == value)
    }

    /// The value of the member named `name`.
    pub fn value_of(&self, name: &str, ignore_case: bool) -> Option<i64> {
        self.members
            .iter()
            .find(|(member, _)| {
                if ignore_case {
                    member.to_lowercase() == name.to_lowercase()
                } else {
                    *member == name
                }
            })
            .map(|&(_, value)| value)
    }
}

impl TypeInfo for EnumType {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_enum(&self) -> Option<&EnumType> {
        Some(self)
    }
}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("members", &self.members.len())
            .finish()
    }
}

/// A Rust type parsed as an enumeration.
///
/// Plain enums are best declared with [`enumeration!`](crate::enumeration),
/// flags types implement this by hand so any combination can be held.
///
/// # Example
///
/// ```
/// use strparse::{Convert, DefaultValue, EnumType, Enumeration};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Access(u8);
///
/// static ACCESS: EnumType = EnumType::flags("Access", &[("Read", 1), ("Write", 2)]);
///
/// impl DefaultValue for Access {
///     fn default_value() -> Self {
///         Access(0)
///     }
/// }
///
/// impl Enumeration for Access {
///     fn enum_type() -> &'static EnumType {
///         &ACCESS
///     }
///
///     fn from_value(value: i64) -> Option<Self> {
///         u8::try_from(value).ok().map(Access)
///     }
/// }
///
/// assert_eq!("Read, Write".convert().enumeration::<Access>().parse(), Ok(Access(3)));
/// assert_eq!("12".convert().enumeration::<Access>().parse(), Ok(Access(12)));
/// ```
pub trait Enumeration: crate::strategy::DefaultValue + Sized {
    /// The description this type is parsed against.
    fn enum_type() -> &'static EnumType;

    /// Builds the value from a parsed member value.
    ///
    /// Returning `None` rejects the value as malformed.
    fn from_value(value: i64) -> Option<Self>;
}
