//! Scene membership
//!
//! Entity handles, the scene membership collaborator and the toggle that
//! keeps optional entities in the scene in step with their enable flags.

pub mod entity;
pub mod membership;
pub mod toggle;

pub use entity::{Entity, EntityKind, EntityManager};
pub use membership::{SceneMembership, SceneRegistry};
pub use toggle::{reconcile, EntityToggle, SceneCommand, ToggleAction};
