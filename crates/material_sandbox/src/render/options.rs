//! View options derived from the parameter record

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::material::SandboxParameters;

/// Screen-space ambient occlusion tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientOcclusionOptions {
    /// Sampling radius in world units
    pub radius: f32,
    /// Self-occlusion bias
    pub bias: f32,
    /// Occlusion strength
    pub intensity: f32,
    /// Contrast exponent
    pub power: f32,
}

impl Default for AmbientOcclusionOptions {
    fn default() -> Self {
        Self {
            radius: 0.3,
            bias: 0.0005,
            intensity: 1.0,
            power: 1.0,
        }
    }
}

/// Bloom tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomOptions {
    /// Enable bloom
    pub enabled: bool,
    /// Bloom strength
    pub strength: f32,
    /// Strength of the dirt texture, when one is supplied
    pub dirt_strength: f32,
}

impl Default for BloomOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 0.10,
            dirt_strength: 0.2,
        }
    }
}

/// Height fog tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogOptions {
    /// Enable fog
    pub enabled: bool,
    /// Distance where fog starts
    pub distance: f32,
    /// Fog density
    pub density: f32,
    /// Altitude of the fog base
    pub height: f32,
    /// Density falloff with altitude
    pub height_falloff: f32,
    /// Distance where in-scattering starts
    pub in_scattering_start: f32,
    /// Size of the in-scattering lobe
    pub in_scattering_size: f32,
    /// Take the fog color from the IBL
    pub fog_color_from_ibl: bool,
    /// Linear fog color
    pub color: Vec3,
}

impl Default for FogOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            distance: 0.0,
            density: 0.1,
            height: 0.0,
            height_falloff: 1.0,
            in_scattering_start: 0.0,
            in_scattering_size: -1.0,
            fog_color_from_ibl: false,
            color: Vec3::new(0.5, 0.5, 0.5),
        }
    }
}

/// Post-process anti-aliasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntiAliasing {
    /// None
    None,
    /// Fast approximate anti-aliasing
    Fxaa,
}

/// Tone mapping operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneMapping {
    /// Linear, no tone curve
    Linear,
    /// ACES filmic curve
    Aces,
}

/// Output dithering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dithering {
    /// None
    None,
    /// Temporal dithering
    Temporal,
}

/// Ambient occlusion technique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientOcclusion {
    /// None
    None,
    /// Screen-space ambient occlusion
    Ssao,
}

/// Physical camera exposure settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraExposure {
    /// Aperture in f-stops
    pub aperture: f32,
    /// Shutter speed in seconds
    pub shutter_speed: f32,
    /// Sensitivity in ISO
    pub sensitivity: f32,
}

impl CameraExposure {
    /// Exposure value at ISO 100
    pub fn ev100(&self) -> f32 {
        (self.aperture * self.aperture / self.shutter_speed * 100.0 / self.sensitivity).log2()
    }
}

/// Everything the view needs before the frame is rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Post-process anti-aliasing
    pub anti_aliasing: AntiAliasing,
    /// Tone mapping operator
    pub tone_mapping: ToneMapping,
    /// Output dithering
    pub dithering: Dithering,
    /// Bloom settings
    pub bloom: BloomOptions,
    /// Fog settings
    pub fog: FogOptions,
    /// MSAA sample count
    pub sample_count: u8,
    /// Ambient occlusion technique
    pub ambient_occlusion: AmbientOcclusion,
    /// Ambient occlusion settings
    pub ambient_occlusion_options: AmbientOcclusionOptions,
    /// Camera exposure
    pub exposure: CameraExposure,
}

impl ViewOptions {
    /// Derive view options from the parameter record
    pub fn from_params(params: &SandboxParameters) -> Self {
        Self {
            anti_aliasing: if params.fxaa { AntiAliasing::Fxaa } else { AntiAliasing::None },
            tone_mapping: if params.tonemapping { ToneMapping::Aces } else { ToneMapping::Linear },
            dithering: if params.dithering { Dithering::Temporal } else { Dithering::None },
            bloom: params.bloom_options,
            fog: params.fog_options,
            sample_count: if params.msaa { 4 } else { 1 },
            ambient_occlusion: if params.ssao { AmbientOcclusion::Ssao } else { AmbientOcclusion::None },
            ambient_occlusion_options: params.ssao_options,
            exposure: CameraExposure {
                aperture: params.camera_aperture,
                shutter_speed: 1.0 / params.camera_speed,
                sensitivity: params.camera_iso,
            },
        }
    }
}
