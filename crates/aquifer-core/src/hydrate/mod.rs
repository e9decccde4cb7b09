//! Module: hydrate
//! Responsibility: the recursive row-to-object population algorithm.
//! Does not own: metadata construction (metadata layer), value semantics
//! (value layer), or row access (row layer).
//! Boundary: one call per root row; the surrounding result-set iteration
//! lives with the caller.

pub mod path;

pub use path::Path;

use crate::{
    error::Error,
    metadata::{EntityMetadata, MetadataRegistry},
    row::RowSource,
    traits::Entity,
    value::convert,
};
use std::any::{Any, TypeId};

/// Populate `instance` and its nested graph from one row.
///
/// Fetches-or-builds `T`'s metadata, then walks it from the root path.
/// Missing columns are tolerated (the field keeps its pre-hydration
/// value); conversion failures propagate with the offending column name.
pub fn hydrate<T: Entity>(
    instance: &mut T,
    row: &dyn RowSource,
    registry: &MetadataRegistry,
) -> Result<(), Error> {
    let metadata = registry.get_or_build::<T>();

    hydrate_level(instance, row, &metadata, registry, &mut Path::root())
}

/// Erased entry point for result-set loops that carry instances as
/// `dyn Any`. Unlike [`hydrate`], this cannot build metadata on demand:
/// a type never registered with this registry is a configuration error.
pub fn hydrate_dyn(
    instance: &mut dyn Any,
    type_id: TypeId,
    row: &dyn RowSource,
    registry: &MetadataRegistry,
) -> Result<(), Error> {
    let metadata = registry
        .get(type_id)
        .ok_or(Error::MissingEntityDeclaration { type_id })?;

    hydrate_level(instance, row, &metadata, registry, &mut Path::root())
}

fn hydrate_level(
    instance: &mut dyn Any,
    row: &dyn RowSource,
    metadata: &EntityMetadata,
    registry: &MetadataRegistry,
    path: &mut Path,
) -> Result<(), Error> {
    // Fields before nested mappings. Not load-bearing, but the order is
    // kept stable for reproducibility.
    for field in metadata.fields() {
        let column = path.column(field.column_name());

        let Some(ordinal) = row.ordinal(&column) else {
            continue; // absent column: keep the pre-hydration value
        };

        let value = if row.is_null(ordinal) {
            None
        } else {
            let converted = convert(row.value(ordinal), field.kind())
                .map_err(|source| Error::conversion(&column, source))?;
            Some(converted)
        };

        field
            .set(instance, value)
            .map_err(|source| Error::conversion(&column, source))?;
    }

    for nested in metadata.nested() {
        // A declared primary key gates instantiation: the join column must
        // be projected and non-null. Without one the child is built
        // unconditionally.
        if let Some(primary_key) = nested.primary_key() {
            let pk_column = format!("{}{}.{primary_key}", path.prefix(), nested.name());

            match row.ordinal(&pk_column) {
                None => continue,
                Some(ordinal) if row.is_null(ordinal) => continue,
                Some(_) => {}
            }
        }

        let mut child = nested.new_child();
        let child_metadata = nested.child_metadata(registry);

        path.push(nested.name());
        let populated = hydrate_level(child.as_mut(), row, &child_metadata, registry, path);
        path.pop();
        populated?;

        nested.assign(instance, child);
    }

    Ok(())
}
