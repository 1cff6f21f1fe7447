//! Toggle-backed scene entities
//!
//! An optional entity has two flags: the user-facing `enabled` request and a
//! `present_in_scene` shadow of actual membership. Reconciliation issues the
//! single Add or Remove that converges them, and nothing while they agree.

use super::entity::Entity;
use super::membership::SceneMembership;

/// Scene membership change issued by a reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Already converged
    None,
    /// Insert the entity
    Add,
    /// Remove the entity
    Remove,
}

/// Converge presence with the request
///
/// Returns the new presence and the action that gets there.
pub fn reconcile(requested_enabled: bool, currently_present: bool) -> (bool, ToggleAction) {
    match (requested_enabled, currently_present) {
        (true, false) => (true, ToggleAction::Add),
        (false, true) => (false, ToggleAction::Remove),
        _ => (currently_present, ToggleAction::None),
    }
}

/// A membership change applied to a specific entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCommand {
    /// Target entity
    pub entity: Entity,
    /// Add or Remove
    pub action: ToggleAction,
}

/// Persistent presence state of one optional entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityToggle {
    entity: Entity,
    present_in_scene: bool,
}

impl EntityToggle {
    /// Track an entity that is not in the scene yet
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            present_in_scene: false,
        }
    }

    /// Track an entity whose current membership is already known
    pub fn with_presence(entity: Entity, present_in_scene: bool) -> Self {
        Self {
            entity,
            present_in_scene,
        }
    }

    /// The tracked entity
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Whether the entity is currently in the scene
    pub fn is_present(&self) -> bool {
        self.present_in_scene
    }

    /// Reconcile against `requested_enabled` and apply the action to `scene`
    ///
    /// The presence flag is updated in the same call that touches the scene,
    /// so later phases of the frame always observe the converged state.
    pub fn sync(&mut self, requested_enabled: bool, scene: &mut dyn SceneMembership) -> ToggleAction {
        let (present, action) = reconcile(requested_enabled, self.present_in_scene);
        match action {
            ToggleAction::Add => scene.add_entity(self.entity),
            ToggleAction::Remove => scene.remove_entity(self.entity),
            ToggleAction::None => {}
        }
        self.present_in_scene = present;
        action
    }

    /// Like [`Self::sync`], returning a command when something changed
    pub fn sync_command(&mut self, requested_enabled: bool, scene: &mut dyn SceneMembership) -> Option<SceneCommand> {
        match self.sync(requested_enabled, scene) {
            ToggleAction::None => None,
            action => Some(SceneCommand {
                entity: self.entity,
                action,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EntityKind, EntityManager, SceneRegistry};

    #[test]
    fn test_reconcile_table() {
        assert_eq!(reconcile(true, false), (true, ToggleAction::Add));
        assert_eq!(reconcile(false, true), (false, ToggleAction::Remove));
        assert_eq!(reconcile(true, true), (true, ToggleAction::None));
        assert_eq!(reconcile(false, false), (false, ToggleAction::None));
    }

    #[test]
    fn test_reconcile_steady_state_is_idempotent() {
        let mut present = true;
        for _ in 0..2 {
            let (next, action) = reconcile(true, present);
            assert_eq!(action, ToggleAction::None);
            present = next;
        }
        assert!(present);
    }

    #[test]
    fn test_single_transition_adds_once() {
        let mut entities = EntityManager::new();
        let mut scene = SceneRegistry::new();
        let mut toggle = EntityToggle::new(entities.create(EntityKind::SpotLight));

        let actions: Vec<_> = [false, true, true, true, false, false, true]
            .into_iter()
            .map(|enabled| {
                let action = toggle.sync(enabled, &mut scene);
                assert_eq!(toggle.is_present(), enabled);
                assert_eq!(scene.contains(toggle.entity()), enabled);
                action
            })
            .collect();

        assert_eq!(
            actions,
            vec![
                ToggleAction::None,
                ToggleAction::Add,
                ToggleAction::None,
                ToggleAction::None,
                ToggleAction::Remove,
                ToggleAction::None,
                ToggleAction::Add,
            ]
        );
        assert_eq!(scene.add_count(), 2);
        assert_eq!(scene.remove_count(), 1);
        assert_eq!(scene.redundant_count(), 0);
    }

    #[test]
    fn test_toggles_do_not_share_state() {
        let mut entities = EntityManager::new();
        let mut scene = SceneRegistry::new();
        let mut sun = EntityToggle::new(entities.create(EntityKind::DirectionalLight));
        let mut spot = EntityToggle::new(entities.create(EntityKind::SpotLight));

        assert_eq!(sun.sync(true, &mut scene), ToggleAction::Add);
        assert_eq!(spot.sync(false, &mut scene), ToggleAction::None);
        assert!(sun.is_present());
        assert!(!spot.is_present());

        let command = spot.sync_command(true, &mut scene);
        assert_eq!(command, Some(SceneCommand { entity: spot.entity(), action: ToggleAction::Add }));
        assert_eq!(sun.sync_command(true, &mut scene), None);
        assert_eq!(scene.entity_count(), 2);
    }

    #[test]
    fn test_known_presence() {
        let mut entities = EntityManager::new();
        let mut scene = SceneRegistry::new();
        let light = entities.create(EntityKind::DirectionalLight);
        scene.add_entity(light);

        let mut toggle = EntityToggle::with_presence(light, true);
        assert_eq!(toggle.sync(true, &mut scene), ToggleAction::None);
        assert_eq!(scene.add_count(), 1);
    }
}
