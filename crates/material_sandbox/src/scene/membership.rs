//! Scene membership collaborator
//!
//! Insertion and removal are not safely idempotent at this boundary, so
//! callers track presence themselves (see [`super::toggle::EntityToggle`]).

use std::collections::HashSet;

use super::entity::Entity;

/// The set of entities drawn and lit this frame
pub trait SceneMembership {
    /// Add an entity to the scene
    fn add_entity(&mut self, entity: Entity);

    /// Remove an entity from the scene
    fn remove_entity(&mut self, entity: Entity);

    /// Whether the entity is in the scene
    fn contains(&self, entity: Entity) -> bool;

    /// Number of entities in the scene
    fn entity_count(&self) -> usize;
}

/// Simple set-backed scene
///
/// Counts redundant adds and removes so misuse of the boundary is visible in
/// logs and tests.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    entities: HashSet<Entity>,
    adds: usize,
    removes: usize,
    redundant: usize,
}

impl SceneRegistry {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Total `add_entity` calls
    pub fn add_count(&self) -> usize {
        self.adds
    }

    /// Total `remove_entity` calls
    pub fn remove_count(&self) -> usize {
        self.removes
    }

    /// Adds of present entities plus removes of absent ones
    pub fn redundant_count(&self) -> usize {
        self.redundant
    }
}

impl SceneMembership for SceneRegistry {
    fn add_entity(&mut self, entity: Entity) {
        self.adds += 1;
        if !self.entities.insert(entity) {
            self.redundant += 1;
            log::warn!("Entity {:?} added to the scene twice", entity);
        }
    }

    fn remove_entity(&mut self, entity: Entity) {
        self.removes += 1;
        if !self.entities.remove(&entity) {
            self.redundant += 1;
            log::warn!("Entity {:?} removed from the scene but was not present", entity);
        }
    }

    fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EntityKind, EntityManager};

    #[test]
    fn test_redundant_operations_are_counted() {
        let mut entities = EntityManager::new();
        let light = entities.create(EntityKind::DirectionalLight);
        let mut scene = SceneRegistry::new();

        scene.add_entity(light);
        scene.add_entity(light);
        assert_eq!(scene.entity_count(), 1);
        assert_eq!(scene.redundant_count(), 1);

        scene.remove_entity(light);
        scene.remove_entity(light);
        assert!(!scene.contains(light));
        assert_eq!(scene.add_count(), 2);
        assert_eq!(scene.remove_count(), 2);
        assert_eq!(scene.redundant_count(), 2);
    }
}
