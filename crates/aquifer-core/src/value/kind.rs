use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Closed set of conversion targets a mapped field can resolve to.
/// Resolved once at registration time (after unwrapping `Option`),
/// dispatched by match in the converter thereafter.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    Decimal,
    Text,
    Date,
    Timestamp,
    Ulid,
    Enum,
}

impl FieldKind {
    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Ulid => "ulid",
            Self::Enum => "enum",
        }
    }

    /// Whether this kind participates in numeric widening/narrowing.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float | Self::Decimal)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
