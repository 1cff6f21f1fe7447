//! Render option sync
//!
//! View and camera settings pushed to the renderer before each frame.

pub mod options;

pub use options::{
    AmbientOcclusion, AmbientOcclusionOptions, AntiAliasing, BloomOptions, CameraExposure, Dithering,
    FogOptions, ToneMapping, ViewOptions,
};
