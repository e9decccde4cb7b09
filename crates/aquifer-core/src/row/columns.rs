use std::collections::HashMap;

///
/// ColumnSet
///
/// Shared projection header: column names in result order plus the
/// name-to-ordinal index. Built once per result set and shared by every
/// row view through an `Arc`.
///
/// Lookup is exact-match. Duplicate names keep the first ordinal, matching
/// the usual reader behavior for ambiguous projections.
///

#[derive(Clone, Debug, Default)]
pub struct ColumnSet {
    names: Vec<String>,
    ordinals: HashMap<String, usize>,
}

impl ColumnSet {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut ordinals = HashMap::with_capacity(names.len());
        for (ordinal, name) in names.iter().enumerate() {
            ordinals.entry(name.clone()).or_insert(ordinal);
        }

        Self { names, ordinals }
    }

    #[must_use]
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ordinals_in_projection_order() {
        let columns = ColumnSet::new(["Id", "Name", "Customer.Id"]);

        assert_eq!(columns.ordinal("Id"), Some(0));
        assert_eq!(columns.ordinal("Customer.Id"), Some(2));
        assert_eq!(columns.ordinal("Missing"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let columns = ColumnSet::new(["Id"]);

        assert_eq!(columns.ordinal("id"), None);
    }

    #[test]
    fn duplicate_names_keep_the_first_ordinal() {
        let columns = ColumnSet::new(["Id", "Id"]);

        assert_eq!(columns.ordinal("Id"), Some(0));
        assert_eq!(columns.len(), 2);
    }
}
