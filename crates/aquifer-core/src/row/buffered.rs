use crate::{
    row::{ColumnSet, RowSource},
    value::Value,
};
use std::sync::Arc;

///
/// BufferedRow
///
/// Fully materialized row: a shared projection header plus owned values.
/// The in-memory counterpart to `RowCursor`, with identical semantics.
///

#[derive(Clone, Debug)]
pub struct BufferedRow {
    columns: Arc<ColumnSet>,
    values: Vec<Value>,
}

impl BufferedRow {
    /// Pair a value record with its projection header.
    ///
    /// # Panics
    /// Panics when the record width does not match the header.
    #[must_use]
    pub fn new(columns: Arc<ColumnSet>, values: Vec<Value>) -> Self {
        assert_eq!(
            columns.len(),
            values.len(),
            "row width must match its column set"
        );

        Self { columns, values }
    }

    /// Build a standalone row from name/value pairs. Intended for tests
    /// and tooling; result-set iteration shares one `ColumnSet` instead.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let (names, values): (Vec<String>, Vec<Value>) =
            pairs.into_iter().map(|(n, v)| (n.into(), v)).unzip();

        Self {
            columns: Arc::new(ColumnSet::new(names)),
            values,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &Arc<ColumnSet> {
        &self.columns
    }
}

impl RowSource for BufferedRow {
    fn ordinal(&self, name: &str) -> Option<usize> {
        self.columns.ordinal(name)
    }

    fn is_null(&self, ordinal: usize) -> bool {
        self.values[ordinal].is_null()
    }

    fn value(&self, ordinal: usize) -> Value {
        self.values[ordinal].clone()
    }
}
