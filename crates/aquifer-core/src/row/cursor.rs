use crate::{
    row::{ColumnSet, RowSource},
    value::Value,
};
use std::sync::Arc;

///
/// RowCursor
///
/// Forward-only streaming cursor over value records sharing one projection
/// header. `advance` steps to the next record; the `RowSource` view always
/// reads the current one. Hydration happens between successive advances,
/// so aborting a stream is a caller decision between rows.
///

pub struct RowCursor<I>
where
    I: Iterator<Item = Vec<Value>>,
{
    columns: Arc<ColumnSet>,
    records: I,
    current: Option<Vec<Value>>,
}

impl<I> RowCursor<I>
where
    I: Iterator<Item = Vec<Value>>,
{
    #[must_use]
    pub fn new(columns: Arc<ColumnSet>, records: I) -> Self {
        Self {
            columns,
            records,
            current: None,
        }
    }

    /// Step to the next record. Returns false once the stream is drained.
    pub fn advance(&mut self) -> bool {
        self.current = self.records.next();
        self.current.is_some()
    }

    #[must_use]
    pub fn columns(&self) -> &Arc<ColumnSet> {
        &self.columns
    }

    fn record(&self) -> &[Value] {
        self.current
            .as_deref()
            .expect("row cursor read before advance or after drain")
    }
}

impl<I> RowSource for RowCursor<I>
where
    I: Iterator<Item = Vec<Value>>,
{
    fn ordinal(&self, name: &str) -> Option<usize> {
        self.columns.ordinal(name)
    }

    fn is_null(&self, ordinal: usize) -> bool {
        self.record()[ordinal].is_null()
    }

    fn value(&self, ordinal: usize) -> Value {
        self.record()[ordinal].clone()
    }
}
