//! ECS World implementation
//!
//! The world owns every component column and the per-entity tag column.
//! Entities are never removed; a new world is built when the scene changes.

use super::components::{Angle, Color, EntityTags, Position, Pulsing, RaySegment, Size, Velocity};
use super::storage::ComponentColumn;
use super::{Component, Entity};
use crate::foundation::math::Vec2;
use thiserror::Error;

/// Errors raised when reading or writing the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The handle does not belong to this store
    #[error("entity {entity} is out of range (store holds {len} entities)")]
    EntityOutOfRange {
        /// Offending handle
        entity: Entity,
        /// Number of entities in the store
        len: usize,
    },

    /// The entity exists but does not carry the component
    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        /// Offending handle
        entity: Entity,
        /// Component name
        component: &'static str,
    },
}

/// Component columns, one per component type
#[derive(Debug, Clone, Default)]
pub(crate) struct Columns {
    pub(crate) position: ComponentColumn<Position>,
    pub(crate) velocity: ComponentColumn<Velocity>,
    pub(crate) angle: ComponentColumn<Angle>,
    pub(crate) size: ComponentColumn<Size>,
    pub(crate) color: ComponentColumn<Color>,
    pub(crate) pulsing: ComponentColumn<Pulsing>,
    pub(crate) ray_segment: ComponentColumn<RaySegment>,
}

/// ECS World containing all entities and components
#[derive(Debug, Clone, Default)]
pub struct World {
    next_entity_id: u32,
    pub(crate) tags: Vec<EntityTags>,
    pub(crate) columns: Columns,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world with room for `capacity` entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_entity_id: 0,
            tags: Vec::with_capacity(capacity),
            columns: Columns::default(),
        }
    }

    /// Create a new entity carrying `tags`
    pub fn create_entity(&mut self, tags: EntityTags) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.tags.push(tags);
        entity
    }

    /// Number of entities in the world
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the world holds no entities
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Whether `entity` belongs to this world
    pub fn contains(&self, entity: Entity) -> bool {
        entity.index() < self.tags.len()
    }

    fn check(&self, entity: Entity) -> Result<usize, StoreError> {
        if self.contains(entity) {
            Ok(entity.index())
        } else {
            Err(StoreError::EntityOutOfRange {
                entity,
                len: self.tags.len(),
            })
        }
    }

    /// Add a component to an entity, returning the value it replaced
    pub fn insert<C: Component>(&mut self, entity: Entity, component: C) -> Result<Option<C>, StoreError> {
        let index = self.check(entity)?;
        Ok(C::column_mut(self).insert(index, component))
    }

    /// Get a component from an entity
    pub fn get<C: Component>(&self, entity: Entity) -> Result<&C, StoreError> {
        let index = self.check(entity)?;
        C::column(self).get(index).ok_or(StoreError::MissingComponent {
            entity,
            component: C::NAME,
        })
    }

    /// Get a mutable component from an entity
    pub fn get_mut<C: Component>(&mut self, entity: Entity) -> Result<&mut C, StoreError> {
        let index = self.check(entity)?;
        C::column_mut(self).get_mut(index).ok_or(StoreError::MissingComponent {
            entity,
            component: C::NAME,
        })
    }

    /// Whether the entity carries component `C`
    pub fn has<C: Component>(&self, entity: Entity) -> bool {
        C::column(self).contains(entity.index())
    }

    /// Tags carried by an entity
    pub fn tags(&self, entity: Entity) -> Result<EntityTags, StoreError> {
        let index = self.check(entity)?;
        Ok(self.tags[index])
    }

    /// Iterate over all entities in creation order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        (0..self.next_entity_id).map(Entity::new)
    }

    /// Iterate over entities carrying every tag in `tags`, in creation order
    pub fn entities_with(&self, tags: EntityTags) -> impl Iterator<Item = Entity> + '_ {
        self.entities()
            .filter(move |entity| self.tags[entity.index()].contains(tags))
    }

    /// Count entities carrying every tag in `tags`
    pub fn count_with(&self, tags: EntityTags) -> usize {
        self.entities_with(tags).count()
    }

    /// Anchor position of an entity
    pub fn position(&self, entity: Entity) -> Result<Vec2, StoreError> {
        self.get::<Position>(entity).map(Position::vec)
    }

    /// Size of an entity
    pub fn size(&self, entity: Entity) -> Result<Size, StoreError> {
        self.get::<Size>(entity).copied()
    }

    /// Orientation of an entity in radians
    pub fn angle(&self, entity: Entity) -> Result<f64, StoreError> {
        self.get::<Angle>(entity).map(Angle::radians)
    }

    /// Color of an entity
    pub fn color(&self, entity: Entity) -> Result<&str, StoreError> {
        self.get::<Color>(entity).map(Color::as_str)
    }

    /// Velocity of an entity
    pub fn velocity(&self, entity: Entity) -> Result<Vec2, StoreError> {
        self.get::<Velocity>(entity).map(|velocity| velocity.0)
    }

    /// Whether an object is drawn pulsing
    pub fn is_pulsing(&self, entity: Entity) -> Result<bool, StoreError> {
        self.get::<Pulsing>(entity).map(|pulsing| pulsing.0)
    }

    /// Drawn segment of a ray entity
    pub fn ray_segment(&self, entity: Entity) -> Result<RaySegment, StoreError> {
        self.get::<RaySegment>(entity).copied()
    }

    /// Geometric center of an entity: `position + size / 2`
    pub fn center(&self, entity: Entity) -> Result<Vec2, StoreError> {
        let position = self.position(entity)?;
        let size = self.size(entity)?;
        Ok(size.center_from(position))
    }
}
