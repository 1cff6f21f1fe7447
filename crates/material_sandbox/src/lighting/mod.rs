//! Lighting system
//!
//! Light and shadow state pushed from the parameter record to the lighting
//! collaborator once per frame.

pub mod backend;
pub mod light;

pub use backend::{IblEstimate, LightingBackend};
pub use light::{DirectionalLightState, IndirectLightState, ShadowOptions, SpotLightState};
