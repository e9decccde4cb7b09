//! Aquifer core: metadata-driven hydration of typed entity graphs from
//! flat, join-aliased row projections.
//!
//! ## Crate layout
//! - `row`: the ordinal-based row-source contract and its two shapes
//!   (materialized row, streaming cursor).
//! - `value`: the raw value model, target kinds, and the converter.
//! - `types`: the temporal/decimal/identifier scalars the value model
//!   carries.
//! - `traits`: the declaration contract (`Entity`) and the narrowing
//!   contracts (`FieldValue`, `FieldTarget`, `EnumValue`).
//! - `accessor`: one-time compilation of type-erased setters/factories.
//! - `metadata`: descriptors, the declaration builder, and the
//!   get-or-build registry.
//! - `hydrate`: the recursive per-row population algorithm.
//!
//! The `prelude` mirrors the surface a mapping declaration and a
//! result-set loop need.

mod macros;

pub mod accessor;
pub mod error;
pub mod hydrate;
pub mod metadata;
pub mod row;
pub mod traits;
pub mod types;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;
pub use hydrate::{hydrate, hydrate_dyn};

///
/// Prelude
///
/// Domain vocabulary only; internals stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        enum_value,
        error::Error,
        hydrate::{Path, hydrate, hydrate_dyn},
        metadata::{EntityMap, EntityMetadata, MetadataRegistry},
        row::{BufferedRow, ColumnSet, RowCursor, RowSource},
        traits::{Entity, EnumValue, FieldTarget, FieldValue},
        types::{Date, Decimal, Timestamp, Ulid},
        value::{FieldKind, Value, ValueEnum, ValueError, convert},
    };
}
