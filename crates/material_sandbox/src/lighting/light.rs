//! Light state records
//!
//! Pure data: every record is rebuilt from the parameter record each frame
//! and overwrites the light instance wholesale.

use crate::foundation::math::{normalize_or, rotation_y, Mat3, Vec3};
use crate::material::SandboxParameters;

/// Shadow map and contact shadow options of the directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowOptions {
    /// Stabilize the shadow map against camera motion
    pub stable: bool,
    /// Normal bias in texels
    pub normal_bias: f32,
    /// Constant bias in world units
    pub constant_bias: f32,
    /// Polygon offset constant term
    pub polygon_offset_constant: f32,
    /// Polygon offset slope term
    pub polygon_offset_slope: f32,
    /// Screen-space contact shadows
    pub screen_space_contact_shadows: bool,
    /// Contact shadow ray-march steps
    pub step_count: u8,
    /// Contact shadow ray length in world units
    pub max_shadow_distance: f32,
}

impl ShadowOptions {
    /// Build from the parameter record
    pub fn from_params(params: &SandboxParameters) -> Self {
        Self {
            stable: params.stable_shadow_map,
            normal_bias: params.normal_bias,
            constant_bias: params.constant_bias,
            polygon_offset_constant: params.polygon_offset_constant,
            polygon_offset_slope: params.polygon_offset_slope,
            screen_space_contact_shadows: params.screen_space_contact_shadows,
            step_count: params.step_count,
            max_shadow_distance: params.max_shadow_distance,
        }
    }
}

/// Directional light (sun) state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLightState {
    /// Linear color
    pub color: Vec3,
    /// Illuminance in lux
    pub intensity: f32,
    /// Normalized direction the light travels
    pub direction: Vec3,
    /// Sun disk angular radius in degrees
    pub sun_angular_radius: f32,
    /// Sun halo size
    pub sun_halo_size: f32,
    /// Sun halo falloff
    pub sun_halo_falloff: f32,
    /// Shadow options
    pub shadow: ShadowOptions,
}

impl DirectionalLightState {
    /// Build from the parameter record
    pub fn from_params(params: &SandboxParameters) -> Self {
        Self {
            color: params.light_color,
            intensity: params.light_intensity,
            // The direction widget can momentarily produce a zero vector
            direction: normalize_or(params.light_direction, Vec3::new(0.0, -1.0, 0.0)),
            sun_angular_radius: params.sun_angular_radius,
            sun_halo_size: params.sun_halo_size,
            sun_halo_falloff: params.sun_halo_falloff,
            shadow: ShadowOptions::from_params(params),
        }
    }
}

/// Spot light state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLightState {
    /// Translation relative to the parent renderable
    pub position: Vec3,
    /// Linear color
    pub color: Vec3,
    /// Luminous power in lumens
    pub intensity: f32,
    /// Whether the light casts shadows
    pub cast_shadows: bool,
    /// Inner cone half-angle in radians
    pub inner_cone: f32,
    /// Outer cone half-angle in radians
    pub outer_cone: f32,
}

impl SpotLightState {
    /// Build from the parameter record
    pub fn from_params(params: &SandboxParameters) -> Self {
        Self {
            position: params.spot_light_position,
            color: params.spot_light_color,
            intensity: params.spot_light_intensity,
            cast_shadows: params.spot_light_cast_shadows,
            inner_cone: params.spot_light_cone_angle * params.spot_light_cone_fade,
            outer_cone: params.spot_light_cone_angle,
        }
    }
}

/// Image-based light state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndirectLightState {
    /// IBL intensity
    pub intensity: f32,
    /// Environment rotation
    pub rotation: Mat3,
}

impl IndirectLightState {
    /// Build from the parameter record
    pub fn from_params(params: &SandboxParameters) -> Self {
        Self {
            intensity: params.ibl_intensity,
            rotation: rotation_y(params.ibl_rotation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_directional_from_params() {
        let params = SandboxParameters {
            light_direction: Vec3::new(0.0, -2.0, 0.0),
            stable_shadow_map: true,
            step_count: 16,
            ..Default::default()
        };
        let light = DirectionalLightState::from_params(&params);
        assert_relative_eq!(light.direction, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(light.intensity, 110_000.0);
        assert!(light.shadow.stable);
        assert_eq!(light.shadow.step_count, 16);
        assert_eq!(light.shadow.polygon_offset_slope, 2.0);
    }

    #[test]
    fn test_degenerate_direction_falls_back() {
        let params = SandboxParameters {
            light_direction: Vec3::zeros(),
            ..Default::default()
        };
        let light = DirectionalLightState::from_params(&params);
        assert_eq!(light.direction, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_spot_cone() {
        let params = SandboxParameters {
            spot_light_cone_angle: 0.8,
            spot_light_cone_fade: 0.5,
            ..Default::default()
        };
        let spot = SpotLightState::from_params(&params);
        assert_relative_eq!(spot.inner_cone, 0.4);
        assert_relative_eq!(spot.outer_cone, 0.8);
        assert_eq!(spot.position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_indirect_identity_rotation() {
        let indirect = IndirectLightState::from_params(&SandboxParameters::default());
        assert_relative_eq!(indirect.rotation, Mat3::identity());
        assert_eq!(indirect.intensity, 30_000.0);
    }
}
