pub mod buffered;
pub mod columns;
pub mod cursor;

pub use buffered::BufferedRow;
pub use columns::ColumnSet;
pub use cursor::RowCursor;

use crate::value::Value;

///
/// RowSource
///
/// Uniform ordinal-based view over one tabular record. Both a forward-only
/// streaming cursor and a materialized row adapt to these three operations,
/// so the hydration engine is source-agnostic.
///
/// Column absence is not an error: `ordinal` returns `None` and the engine
/// treats it as "skip". Callers must only pass ordinals obtained from
/// `ordinal` on the same source.
///

pub trait RowSource {
    /// Resolve a column name to its ordinal, `None` when unknown.
    fn ordinal(&self, name: &str) -> Option<usize>;

    /// Whether the value at `ordinal` is null.
    fn is_null(&self, ordinal: usize) -> bool;

    /// Raw value at `ordinal`.
    fn value(&self, ordinal: usize) -> Value;
}
