//! Module: accessor
//! Responsibility: one-time compilation of type-erased setters/factories.
//! Does not own: conversion semantics (value layer) or call ordering
//! (hydration engine).
//! Boundary: invoked at registration; the products run once per mapped
//! column per row with no further downcasting cost beyond a pointer check.

use crate::{
    traits::{Entity, FieldTarget},
    value::{Value, ValueError},
};
use std::{any::Any, sync::Arc};

/// Compiled field setter: narrows the converted value and assigns it.
/// `None` is the null sentinel for the field's kind.
pub type FieldSetter = Arc<dyn Fn(&mut dyn Any, Option<Value>) -> Result<(), ValueError> + Send + Sync>;

/// Compiled child setter: moves a finished child entity into its parent.
pub type ChildSetter = Arc<dyn Fn(&mut dyn Any, Box<dyn Any>) + Send + Sync>;

/// Compiled zero-argument child factory.
pub type ChildFactory = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Compile a field setter for one mapped property.
///
/// The downcast cannot fail when invoked through metadata keyed by the
/// instance's own type; a failure is a precondition violation upstream,
/// not a recoverable condition.
pub(crate) fn compile_field_setter<T, F>(assign: fn(&mut T, F)) -> FieldSetter
where
    T: Entity,
    F: FieldTarget,
{
    Arc::new(move |instance, value| {
        let target = instance
            .downcast_mut::<T>()
            .expect("field setter invoked against a foreign instance type");

        assign(target, F::from_nullable(value)?);

        Ok(())
    })
}

/// Compile a child setter for one nested property.
pub(crate) fn compile_child_setter<T, C>(assign: fn(&mut T, C)) -> ChildSetter
where
    T: Entity,
    C: Entity,
{
    Arc::new(move |instance, child| {
        let target = instance
            .downcast_mut::<T>()
            .expect("child setter invoked against a foreign instance type");
        let child = child
            .downcast::<C>()
            .expect("child setter received a foreign child type");

        assign(target, *child);
    })
}

/// Compile the zero-argument factory for a nested entity type.
pub(crate) fn compile_factory<C: Entity>() -> ChildFactory {
    Arc::new(|| Box::new(C::default()))
}
