//! Identifier to entity handle mapping
//!
//! Built by the loader alongside the world it indexes. Both are discarded
//! together when the scene changes.

use crate::ecs::Entity;
use std::collections::HashMap;

/// Maps scene identifiers to entity handles and back
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    by_id: HashMap<String, Entity>,
    by_entity: Vec<Option<String>>,
}

impl IdMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` identifiers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_id: HashMap::with_capacity(capacity),
            by_entity: Vec::with_capacity(capacity),
        }
    }

    /// Register `id` for `entity`, returning the handle previously bound to `id`
    pub fn insert(&mut self, id: impl Into<String>, entity: Entity) -> Option<Entity> {
        let id = id.into();
        let index = entity.index();
        if index >= self.by_entity.len() {
            self.by_entity.resize_with(index + 1, || None);
        }
        self.by_entity[index] = Some(id.clone());

        let previous = self.by_id.insert(id, entity);
        if let Some(previous) = previous.filter(|previous| *previous != entity) {
            if let Some(slot) = self.by_entity.get_mut(previous.index()) {
                *slot = None;
            }
        }
        previous
    }

    /// Handle registered for `id`
    pub fn get(&self, id: &str) -> Option<Entity> {
        self.by_id.get(id).copied()
    }

    /// Identifier registered for `entity`
    pub fn name_of(&self, entity: Entity) -> Option<&str> {
        self.by_entity.get(entity.index())?.as_deref()
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterate over `(id, entity)` pairs in entity order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Entity)> {
        self.by_entity
            .iter()
            .filter_map(|slot| slot.as_deref())
            .filter_map(|id| self.by_id.get(id).map(|entity| (id, *entity)))
    }
}
