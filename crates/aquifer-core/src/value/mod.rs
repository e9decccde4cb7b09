mod convert;
mod kind;


pub use convert::convert;
pub use kind::FieldKind;

use crate::{
    traits::EnumValue,
    types::{Date, Decimal, Timestamp, Ulid},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ValueError
///
/// Conversion failures. Always surfaced to the hydration caller;
/// never coerced to a default.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ValueError {
    #[error("cannot convert {from} into {to}")]
    Unsupported { from: &'static str, to: FieldKind },

    #[error("value {value} is out of range for {to}")]
    OutOfRange { value: String, to: FieldKind },

    #[error("cannot parse {text:?} as {to}")]
    Parse { text: String, to: FieldKind },

    #[error("{repr} is not a declared discriminant of enum {enum_name}")]
    EnumRepr { repr: i64, enum_name: &'static str },

    #[error("expected a {expected} value, found {found}")]
    Mismatch { expected: FieldKind, found: &'static str },
}

///
/// ValueEnum
///
/// Erased, already-typed enum value: the declared discriminant plus an
/// optional variant name kept for diagnostics.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ValueEnum {
    pub repr: i64,
    pub name: Option<String>,
}

impl fmt::Display for ValueEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.repr),
        }
    }
}

///
/// Value
///
/// Raw column value as surfaced by a row source, and equally the
/// normalized output of the converter.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Date(Date),
    Timestamp(Timestamp),
    Ulid(Ulid),
    Enum(ValueEnum),
}

impl Value {
    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Ulid(_) => "ulid",
            Self::Enum(_) => "enum",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Erase an already-typed enum value.
    #[must_use]
    pub fn from_enum<E: EnumValue>(value: E) -> Self {
        Self::Enum(ValueEnum {
            repr: value.repr(),
            name: Some(value.name().to_string()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Ulid(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Uint(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<Ulid> for Value {
    fn from(v: Ulid) -> Self {
        Self::Ulid(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
