//! Enum metadata: names, descriptions and discriminants
//!
//! Implement [`EnumMeta`] with [`describe_enum!`](crate::describe_enum) and
//! the helpers below work for any fieldless enum.

use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Static metadata for a fieldless enum
pub trait EnumMeta: Sized + Copy + PartialEq + 'static {
    /// Every variant in declaration order
    fn variants() -> &'static [Self];
    fn name(&self) -> &'static str;
    /// The description attached to the variant, if any
    fn declared_description(&self) -> Option<&'static str>;
    fn discriminant(&self) -> i64;

    fn from_discriminant(value: i64) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.discriminant() == value)
    }
}

/// Implement [`EnumMeta`] for a fieldless enum
///
/// ```
/// use chet::describe_enum;
/// use chet::ext::enums::{EnumExt, EnumMeta};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Status {
///     Active = 1,
///     Disabled = 2,
/// }
///
/// describe_enum!(Status {
///     Active => "启用",
///     Disabled,
/// });
///
/// assert_eq!(Status::Active.description(), "启用");
/// assert_eq!(Status::Disabled.description(), "Disabled");
/// ```
#[macro_export]
macro_rules! describe_enum {
    (@desc $desc:expr) => {
        Some($desc)
    };
    (@desc) => {
        None
    };
    ($ty:ident { $($variant:ident $(=> $desc:expr)?),* $(,)? }) => {
        impl $crate::ext::enums::EnumMeta for $ty {
            fn variants() -> &'static [Self] {
                &[$($ty::$variant),*]
            }

            fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant)),*
                }
            }

            fn declared_description(&self) -> Option<&'static str> {
                match self {
                    $($ty::$variant => $crate::describe_enum!(@desc $($desc)?)),*
                }
            }

            fn discriminant(&self) -> i64 {
                *self as i64
            }
        }
    };
}

/// Per-value helpers available on every [`EnumMeta`] type
pub trait EnumExt: EnumMeta {
    fn to_int(&self) -> i32 {
        self.discriminant() as i32
    }

    fn to_long(&self) -> i64 {
        self.discriminant()
    }

    fn to_string_value(&self) -> String {
        self.name().to_string()
    }

    /// Declared description, or the variant name when none was given
    fn description(&self) -> &'static str {
        self.declared_description().unwrap_or_else(|| self.name())
    }
}

impl<E: EnumMeta> EnumExt for E {}

pub fn is_defined<E: EnumMeta>(value: i64) -> bool {
    E::from_discriminant(value).is_some()
}

pub fn values<E: EnumMeta>() -> Vec<E> {
    E::variants().to_vec()
}

pub fn names<E: EnumMeta>() -> Vec<&'static str> {
    E::variants().iter().map(|v| v.name()).collect()
}

/// Match on description first, then on the variant name
pub fn from_description<E: EnumMeta>(text: &str, fallback: E) -> E {
    let variants = E::variants();
    variants
        .iter()
        .find(|v| v.declared_description() == Some(text))
        .or_else(|| variants.iter().find(|v| v.name() == text))
        .copied()
        .unwrap_or(fallback)
}

/// Case-insensitive variant name or numeric discriminant
pub fn parse_or<E: EnumMeta>(text: &str, fallback: E) -> E {
    let text = text.trim();
    if let Some(found) = E::variants()
        .iter()
        .find(|v| v.name().eq_ignore_ascii_case(text))
    {
        return *found;
    }
    text.parse::<i64>()
        .ok()
        .and_then(E::from_discriminant)
        .unwrap_or(fallback)
}

pub fn from_int_or<E: EnumMeta>(value: i64, fallback: E) -> E {
    E::from_discriminant(value).unwrap_or(fallback)
}

pub fn value_description_map<E: EnumMeta>() -> BTreeMap<i64, &'static str> {
    E::variants()
        .iter()
        .map(|v| (v.discriminant(), v.description()))
        .collect()
}

pub fn name_description_map<E: EnumMeta>() -> BTreeMap<&'static str, &'static str> {
    E::variants()
        .iter()
        .map(|v| (v.name(), v.description()))
        .collect()
}

/// A combination of flag variants stored as the OR of their discriminants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSet<E> {
    bits: i64,
    _marker: PhantomData<E>,
}

impl<E: EnumMeta> FlagSet<E> {
    pub fn empty() -> Self {
        Self::from_bits(0)
    }

    pub fn from_bits(bits: i64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    pub fn bits(&self) -> i64 {
        self.bits
    }

    pub fn has(&self, flag: E) -> bool {
        let bits = flag.discriminant();
        self.bits & bits == bits
    }

    pub fn add(self, flag: E) -> Self {
        Self::from_bits(self.bits | flag.discriminant())
    }

    pub fn remove(self, flag: E) -> Self {
        Self::from_bits(self.bits & !flag.discriminant())
    }

    /// Variants whose bits are all set, in declaration order
    pub fn flags(&self) -> Vec<E> {
        E::variants()
            .iter()
            .copied()
            .filter(|v| v.discriminant() != 0 && self.has(*v))
            .collect()
    }
}

impl<E: EnumMeta> From<E> for FlagSet<E> {
    fn from(flag: E) -> Self {
        Self::from_bits(flag.discriminant())
    }
}
