use crate::{
    accessor::{compile_child_setter, compile_factory, compile_field_setter},
    metadata::{EntityMetadata, FieldMapping, MetadataRegistry, NestedMapping},
    traits::{Entity, FieldTarget},
};
use std::marker::PhantomData;

///
/// EntityMap
///
/// Declaration collector for one entity type. `Entity::declare` runs
/// against this once per registry; declaration order is the stable
/// processing order for fields and nested mappings alike.
///

pub struct EntityMap<T: Entity> {
    fields: Vec<FieldMapping>,
    nested: Vec<NestedMapping>,
    _entity: PhantomData<fn(T)>,
}

impl<T: Entity> EntityMap<T> {
    pub(crate) const fn new() -> Self {
        Self {
            fields: Vec::new(),
            nested: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Declare a scalar field mapped to the column of the same name.
    ///
    /// `F` carries the resolved kind; `Option<F>` resolves to `F`'s kind
    /// and maps null columns to `None` instead of the scalar default.
    pub fn field<F: FieldTarget>(&mut self, name: &'static str, assign: fn(&mut T, F)) -> &mut Self {
        self.fields.push(FieldMapping::new(
            name,
            None,
            F::KIND,
            compile_field_setter(assign),
        ));
        self
    }

    /// Declare a scalar field with an explicit column-name override.
    pub fn field_as<F: FieldTarget>(
        &mut self,
        name: &'static str,
        column: &'static str,
        assign: fn(&mut T, F),
    ) -> &mut Self {
        self.fields.push(FieldMapping::new(
            name,
            Some(column),
            F::KIND,
            compile_field_setter(assign),
        ));
        self
    }

    /// Declare a composed child entity with no primary-key gate.
    ///
    /// The child is instantiated unconditionally on every hydration, even
    /// when none of its own columns are present in the row. Declare a
    /// primary key instead whenever LEFT-JOIN null-safety is wanted.
    pub fn nested<C: Entity>(&mut self, name: &'static str, assign: fn(&mut T, C)) -> &mut Self {
        self.push_nested::<C>(name, None, assign);
        self
    }

    /// Declare a composed child entity gated on a primary-key column.
    ///
    /// The child is instantiated iff `prefix.name.primary_key` exists in
    /// the row and is non-null.
    pub fn nested_keyed<C: Entity>(
        &mut self,
        name: &'static str,
        primary_key: &'static str,
        assign: fn(&mut T, C),
    ) -> &mut Self {
        self.push_nested::<C>(name, Some(primary_key), assign);
        self
    }

    fn push_nested<C: Entity>(
        &mut self,
        name: &'static str,
        primary_key: Option<&'static str>,
        assign: fn(&mut T, C),
    ) {
        self.nested.push(NestedMapping::new(
            name,
            primary_key,
            compile_factory::<C>(),
            compile_child_setter(assign),
            MetadataRegistry::get_or_build::<C>,
        ));
    }

    pub(crate) fn build(self) -> EntityMetadata {
        EntityMetadata::new(T::NAME, self.fields, self.nested)
    }
}

/// Run a type's declaration and produce its descriptor.
///
/// Side-effect-free: racing builds of the same type are safe to discard.
pub(crate) fn build_metadata<T: Entity>() -> EntityMetadata {
    let mut map = EntityMap::new();
    T::declare(&mut map);

    map.build()
}
