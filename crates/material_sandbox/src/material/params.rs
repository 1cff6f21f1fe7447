//! The sandbox parameter record
//!
//! One flat record holds every field the user can edit. It is created once
//! with engine defaults, mutated in place by the UI each frame and only ever
//! read by the binder and the sync passes. There are no per-variant records:
//! the binder derives the applicable subset from the active variant.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::Vec3;
use crate::lighting::IblEstimate;
use crate::render::options::{AmbientOcclusionOptions, BloomOptions, FogOptions};

use super::model::{BlendingMode, MaterialModel, RefractionOptions};
use super::variant::{resolve, VariantId};

/// Every user-editable sandbox parameter
///
/// Colors are display-encoded (sRGB) unless stated otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxParameters {
    // Material selection
    /// Active shading model
    pub material_model: MaterialModel,
    /// Active blending mode (Lit only)
    pub blending: BlendingMode,
    /// Refraction technique (refracting Lit blending only)
    pub refraction: RefractionOptions,

    // Material fields
    /// Base color
    pub base_color: Vec3,
    /// Opacity for blended modes
    pub alpha: f32,
    /// Perceptual roughness
    pub roughness: f32,
    /// Metalness
    pub metallic: f32,
    /// Dielectric reflectance
    pub reflectance: f32,
    /// Clear coat layer strength
    pub clear_coat: f32,
    /// Clear coat layer roughness
    pub clear_coat_roughness: f32,
    /// Anisotropy in [-1, 1]
    pub anisotropy: f32,
    /// Thickness for subsurface and refraction
    pub thickness: f32,
    /// Subsurface scattering power
    pub subsurface_power: f32,
    /// Glossiness (specular-glossiness model)
    pub glossiness: f32,
    /// Specular color (specular-glossiness model), passed through as-is
    pub specular_color: Vec3,
    /// Subsurface color
    pub subsurface_color: Vec3,
    /// Cloth sheen color
    pub sheen_color: Vec3,
    /// Index of refraction
    pub ior: f32,
    /// Transmission factor
    pub transmission: f32,
    /// Distance at which `transmittance_color` is reached
    pub distance: f32,
    /// Color of light after crossing `distance` units of the medium
    pub transmittance_color: Vec3,
    /// Emissive color
    pub emissive_color: Vec3,
    /// Emissive intensity as an exposure value
    pub emissive_ev: f32,
    /// How much camera exposure affects emission
    pub emissive_exposure_weight: f32,
    /// Specular anti-aliasing screen-space variance
    pub specular_anti_aliasing_variance: f32,
    /// Specular anti-aliasing clamping threshold
    pub specular_anti_aliasing_threshold: f32,

    // Object
    /// Whether the edited renderables cast shadows
    pub cast_shadows: bool,

    // Directional light
    /// Requested presence of the directional light
    pub directional_light_enabled: bool,
    /// Linear color of the directional light
    pub light_color: Vec3,
    /// Illuminance in lux
    pub light_intensity: f32,
    /// Direction the light travels
    pub light_direction: Vec3,
    /// Sun disk angular radius in degrees
    pub sun_angular_radius: f32,
    /// Sun halo size, in multiples of the disk radius
    pub sun_halo_size: f32,
    /// Sun halo falloff exponent
    pub sun_halo_falloff: f32,

    // Shadows
    /// Stabilize the shadow map against camera motion
    pub stable_shadow_map: bool,
    /// Normal bias in texels
    pub normal_bias: f32,
    /// Constant bias in world units
    pub constant_bias: f32,
    /// Polygon offset constant term
    pub polygon_offset_constant: f32,
    /// Polygon offset slope term
    pub polygon_offset_slope: f32,
    /// Enable screen-space contact shadows
    pub screen_space_contact_shadows: bool,
    /// Contact shadow ray-march steps
    pub step_count: u8,
    /// Contact shadow ray length in world units
    pub max_shadow_distance: f32,

    // Spot light
    /// Requested presence of the spot light
    pub spot_light_enabled: bool,
    /// Position relative to the root renderable
    pub spot_light_position: Vec3,
    /// Linear color of the spot light
    pub spot_light_color: Vec3,
    /// Luminous power in lumens
    pub spot_light_intensity: f32,
    /// Whether the spot light casts shadows
    pub spot_light_cast_shadows: bool,
    /// Outer cone half-angle in radians
    pub spot_light_cone_angle: f32,
    /// Inner cone as a fraction of the outer cone
    pub spot_light_cone_fade: f32,

    // Camera
    /// Aperture in f-stops
    pub camera_aperture: f32,
    /// Shutter speed as the reciprocal of seconds
    pub camera_speed: f32,
    /// Sensitivity in ISO
    pub camera_iso: f32,

    // Indirect light
    /// IBL intensity
    pub ibl_intensity: f32,
    /// IBL rotation around +Y in radians
    pub ibl_rotation: f32,

    // Post-processing
    /// Screen-space ambient occlusion
    pub ssao: bool,
    /// SSAO tuning
    pub ssao_options: AmbientOcclusionOptions,
    /// Fog tuning
    pub fog_options: FogOptions,
    /// Bloom tuning
    pub bloom_options: BloomOptions,
    /// 4x MSAA
    pub msaa: bool,
    /// ACES tone mapping instead of linear
    pub tonemapping: bool,
    /// Temporal dithering
    pub dithering: bool,
    /// FXAA
    pub fxaa: bool,
}

impl Default for SandboxParameters {
    fn default() -> Self {
        Self {
            material_model: MaterialModel::Lit,
            blending: BlendingMode::Opaque,
            refraction: RefractionOptions::default(),

            base_color: Vec3::new(0.69, 0.69, 0.69),
            alpha: 1.0,
            roughness: 0.6,
            metallic: 0.0,
            reflectance: 0.5,
            clear_coat: 0.0,
            clear_coat_roughness: 0.0,
            anisotropy: 0.0,
            thickness: 1.0,
            subsurface_power: 12.234,
            glossiness: 0.0,
            specular_color: Vec3::zeros(),
            subsurface_color: Vec3::zeros(),
            sheen_color: Vec3::new(0.83, 0.0, 0.0),
            ior: 1.5,
            transmission: 1.0,
            distance: 1.0,
            transmittance_color: Vec3::new(1.0, 1.0, 1.0),
            emissive_color: Vec3::zeros(),
            emissive_ev: 0.0,
            emissive_exposure_weight: 1.0,
            specular_anti_aliasing_variance: 0.0,
            specular_anti_aliasing_threshold: 0.0,

            cast_shadows: true,

            directional_light_enabled: true,
            light_color: Vec3::new(0.98, 0.92, 0.89),
            light_intensity: 110_000.0,
            light_direction: Vec3::new(0.6, -1.0, -0.8),
            sun_angular_radius: 1.9,
            sun_halo_size: 10.0,
            sun_halo_falloff: 80.0,

            stable_shadow_map: false,
            normal_bias: 1.0,
            constant_bias: 0.001,
            polygon_offset_constant: 0.5,
            polygon_offset_slope: 2.0,
            screen_space_contact_shadows: false,
            step_count: 8,
            max_shadow_distance: 0.3,

            spot_light_enabled: false,
            spot_light_position: Vec3::new(0.0, 1.0, 0.0),
            spot_light_color: Vec3::new(1.0, 1.0, 1.0),
            spot_light_intensity: 100_000.0,
            spot_light_cast_shadows: true,
            spot_light_cone_angle: std::f32::consts::FRAC_PI_4,
            spot_light_cone_fade: 0.9,

            camera_aperture: 16.0,
            camera_speed: 125.0,
            camera_iso: 100.0,

            ibl_intensity: 30_000.0,
            ibl_rotation: 0.0,

            ssao: false,
            ssao_options: AmbientOcclusionOptions::default(),
            fog_options: FogOptions::default(),
            bloom_options: BloomOptions {
                enabled: true,
                ..BloomOptions::default()
            },
            msaa: false,
            tonemapping: true,
            dithering: true,
            fxaa: true,
        }
    }
}

impl SandboxParameters {
    /// Variant selected by the current toggles
    pub fn variant(&self) -> VariantId {
        resolve(self.material_model, self.blending, self.refraction.screen_space_refraction)
    }

    /// Whether the current blending mode refracts
    pub fn has_refraction(&self) -> bool {
        self.blending.has_refraction()
    }

    /// Seed the directional light from an IBL estimate
    ///
    /// Matches the sun to the dominant light of the environment so the
    /// direct and indirect lighting agree at startup.
    pub fn seed_from_ibl(&mut self, estimate: &IblEstimate) {
        self.light_direction = estimate.direction;
        self.light_color = estimate.color;
        self.light_intensity = estimate.intensity;
    }
}

impl Config for SandboxParameters {}
