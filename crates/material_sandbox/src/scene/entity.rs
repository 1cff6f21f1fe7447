//! Entity implementation

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Entity identifier
    pub struct Entity;
}

/// What an entity stands for in the sandbox scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A mesh with `primitives` material slots
    Renderable {
        /// Number of primitives, each with its own material slot
        primitives: usize,
    },
    /// The sun
    DirectionalLight,
    /// The spot light parented to the root renderable
    SpotLight,
}

/// Allocates and tracks entity handles
///
/// Slots are reused after `destroy`, so slot order says nothing about when an
/// entity was created. Creation order is tracked separately.
#[derive(Debug, Default)]
pub struct EntityManager {
    entities: SlotMap<Entity, EntityKind>,
    creation_order: Vec<Entity>,
}

impl EntityManager {
    /// Create an empty entity manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an entity
    pub fn create(&mut self, kind: EntityKind) -> Entity {
        let entity = self.entities.insert(kind);
        self.creation_order.push(entity);
        entity
    }

    /// Release an entity; returns its kind if it was alive
    pub fn destroy(&mut self, entity: Entity) -> Option<EntityKind> {
        let kind = self.entities.remove(entity)?;
        self.creation_order.retain(|&e| e != entity);
        Some(kind)
    }

    /// Kind of a live entity
    pub fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.entities.get(entity).copied()
    }

    /// Whether the handle refers to a live entity
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live renderables, oldest first
    pub fn renderables(&self) -> Vec<Entity> {
        self.creation_order
            .iter()
            .copied()
            .filter(|&entity| matches!(self.entities.get(entity), Some(EntityKind::Renderable { .. })))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_destroy() {
        let mut entities = EntityManager::new();
        let light = entities.create(EntityKind::DirectionalLight);
        let mesh = entities.create(EntityKind::Renderable { primitives: 3 });

        assert_eq!(entities.len(), 2);
        assert_eq!(entities.kind(mesh), Some(EntityKind::Renderable { primitives: 3 }));
        assert_eq!(entities.renderables(), vec![mesh]);

        assert_eq!(entities.destroy(light), Some(EntityKind::DirectionalLight));
        assert!(!entities.is_alive(light));
        // Stale handles stay dead after the slot is reused
        let spot = entities.create(EntityKind::SpotLight);
        assert_ne!(spot, light);
        assert_eq!(entities.kind(light), None);
    }

    #[test]
    fn test_renderables_keep_creation_order_after_slot_reuse() {
        let mut entities = EntityManager::new();
        let a = entities.create(EntityKind::Renderable { primitives: 1 });
        let b = entities.create(EntityKind::Renderable { primitives: 1 });
        entities.destroy(a);
        // Lands in the slot `a` freed
        let c = entities.create(EntityKind::Renderable { primitives: 1 });

        assert_eq!(entities.renderables(), vec![b, c]);
        assert_eq!(entities.destroy(a), None);
        assert_eq!(entities.renderables(), vec![b, c]);
    }
}
