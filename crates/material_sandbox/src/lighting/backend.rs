//! Lighting collaborator interface

use crate::foundation::math::Vec3;
use crate::scene::Entity;

use super::light::{DirectionalLightState, IndirectLightState, SpotLightState};

/// Dominant light estimated from an image-based light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IblEstimate {
    /// Direction the dominant light travels
    pub direction: Vec3,
    /// Linear color of the dominant light
    pub color: Vec3,
    /// Intensity of the dominant light, already scaled by the IBL intensity
    pub intensity: f32,
}

/// Receives light state every frame
///
/// State is pushed regardless of scene membership so that a light re-enabled
/// later shows the latest settings immediately.
pub trait LightingBackend {
    /// Overwrite the directional light instance
    fn set_directional_light(&mut self, entity: Entity, state: &DirectionalLightState);

    /// Overwrite the spot light instance
    fn set_spot_light(&mut self, entity: Entity, state: &SpotLightState);

    /// Overwrite the indirect light, when an IBL is loaded
    fn set_indirect_light(&mut self, _state: &IndirectLightState) {}

    /// Whether an IBL is loaded
    fn has_indirect_light(&self) -> bool {
        false
    }
}
