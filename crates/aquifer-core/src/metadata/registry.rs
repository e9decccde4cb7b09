use crate::{
    metadata::{EntityMetadata, build::build_metadata},
    traits::Entity,
};
use std::{
    any::TypeId,
    collections::BTreeMap,
    sync::{Arc, RwLock},
};
use tracing::debug;

///
/// MetadataRegistry
///
/// Get-or-build cache of per-type descriptors. Constructed explicitly and
/// passed into hydration calls; entries live for the registry's lifetime
/// and are never rebuilt or invalidated. The lock guards only the map —
/// descriptors themselves are immutable and shared by `Arc`.
///

pub struct MetadataRegistry {
    entries: RwLock<BTreeMap<TypeId, Arc<EntityMetadata>>>,
}

impl MetadataRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Fetch `T`'s descriptor, building and caching it on first access.
    ///
    /// Concurrent first accesses may build redundantly; building is
    /// side-effect-free and the first insert wins, so at most one value is
    /// ever observed as the cached descriptor.
    pub fn get_or_build<T: Entity>(&self) -> Arc<EntityMetadata> {
        let type_id = TypeId::of::<T>();

        if let Some(found) = self.read().get(&type_id) {
            return Arc::clone(found);
        }

        let built = Arc::new(build_metadata::<T>());
        debug!(
            entity = built.type_name(),
            fields = built.fields().len(),
            nested = built.nested().len(),
            "built entity metadata"
        );

        let mut entries = self.write();
        let entry = entries.entry(type_id).or_insert(built);

        Arc::clone(entry)
    }

    /// Erased lookup for introspection and dynamic hydration. Returns
    /// `None` for a type never registered through this registry.
    #[must_use]
    pub fn get(&self, type_id: TypeId) -> Option<Arc<EntityMetadata>> {
        self.read().get(&type_id).map(Arc::clone)
    }

    /// Pre-populate the cache for `T` (and nothing else; nested types are
    /// built lazily on first hydration).
    pub fn warm<T: Entity>(&self) {
        self.get_or_build::<T>();
    }

    #[must_use]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.read().contains_key(&type_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<TypeId, Arc<EntityMetadata>>> {
        self.entries
            .read()
            .expect("metadata registry lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<TypeId, Arc<EntityMetadata>>> {
        self.entries
            .write()
            .expect("metadata registry lock poisoned")
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        Self::new()
    }
}
