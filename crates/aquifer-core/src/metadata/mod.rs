pub mod build;
pub mod registry;

pub use build::EntityMap;
pub use registry::MetadataRegistry;

use crate::{
    accessor::{ChildFactory, ChildSetter, FieldSetter},
    value::{FieldKind, Value, ValueError},
};
use std::{any::Any, fmt, sync::Arc};

/// Monomorphized hook that fetches-or-builds a child type's metadata
/// through the shared registry.
pub type MetadataFn = fn(&MetadataRegistry) -> Arc<EntityMetadata>;

///
/// EntityMetadata
///
/// Immutable per-type mapping descriptor. Built exactly once per registry
/// and shared behind an `Arc`; safe for unsynchronized concurrent reads.
///

pub struct EntityMetadata {
    type_name: &'static str,
    fields: Vec<FieldMapping>,
    nested: Vec<NestedMapping>,
}

impl EntityMetadata {
    pub(crate) const fn new(
        type_name: &'static str,
        fields: Vec<FieldMapping>,
        nested: Vec<NestedMapping>,
    ) -> Self {
        Self {
            type_name,
            fields,
            nested,
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Field mappings in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldMapping] {
        &self.fields
    }

    /// Nested mappings in declaration order.
    #[must_use]
    pub fn nested(&self) -> &[NestedMapping] {
        &self.nested
    }

    /// An empty descriptor is valid; hydrating against it is a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.nested.is_empty()
    }
}

impl fmt::Debug for EntityMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityMetadata")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("nested", &self.nested)
            .finish()
    }
}

///
/// FieldMapping
///
/// One mapped scalar property: declared name, optional column override,
/// the kind resolved at registration, and the compiled setter.
///

pub struct FieldMapping {
    name: &'static str,
    column: Option<&'static str>,
    kind: FieldKind,
    set: FieldSetter,
}

impl FieldMapping {
    pub(crate) const fn new(
        name: &'static str,
        column: Option<&'static str>,
        kind: FieldKind,
        set: FieldSetter,
    ) -> Self {
        Self {
            name,
            column,
            kind,
            set,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Column resolution fallback: explicit override, else the declared name.
    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        match self.column {
            Some(column) => column,
            None => self.name,
        }
    }

    pub(crate) fn set(
        &self,
        instance: &mut dyn Any,
        value: Option<Value>,
    ) -> Result<(), ValueError> {
        (self.set)(instance, value)
    }
}

impl fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

///
/// NestedMapping
///
/// One composed child entity: declared property name (path segment and
/// default column prefix), optional primary-key column gating
/// instantiation, compiled factory/setter, and the registry hook for the
/// child's own metadata.
///

pub struct NestedMapping {
    name: &'static str,
    primary_key: Option<&'static str>,
    make: ChildFactory,
    set: ChildSetter,
    child_metadata: MetadataFn,
}

impl NestedMapping {
    pub(crate) const fn new(
        name: &'static str,
        primary_key: Option<&'static str>,
        make: ChildFactory,
        set: ChildSetter,
        child_metadata: MetadataFn,
    ) -> Self {
        Self {
            name,
            primary_key,
            make,
            set,
            child_metadata,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn primary_key(&self) -> Option<&'static str> {
        self.primary_key
    }

    pub(crate) fn new_child(&self) -> Box<dyn Any> {
        (self.make)()
    }

    pub(crate) fn assign(&self, parent: &mut dyn Any, child: Box<dyn Any>) {
        (self.set)(parent, child);
    }

    pub(crate) fn child_metadata(&self, registry: &MetadataRegistry) -> Arc<EntityMetadata> {
        (self.child_metadata)(registry)
    }
}

impl fmt::Debug for NestedMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedMapping")
            .field("name", &self.name)
            .field("primary_key", &self.primary_key)
            .finish_non_exhaustive()
    }
}
