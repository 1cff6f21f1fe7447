//! Sandbox application configuration
//!
//! Carries what the sandbox would otherwise take from its command line.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Rendering backend requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// OpenGL
    #[default]
    OpenGl,
    /// Vulkan
    Vulkan,
    /// Metal
    Metal,
}

impl Backend {
    /// Parse a backend name, falling back to the default with a warning
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: ConfigError| {
            log::warn!("{e}");
            Self::default()
        })
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opengl" => Ok(Self::OpenGl),
            "vulkan" => Ok(Self::Vulkan),
            "metal" => Ok(Self::Metal),
            _ => Err(ConfigError::UnknownOption {
                option: "backend",
                value: s.to_string(),
                accepted: "'opengl'|'vulkan'|'metal'",
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenGl => "opengl",
            Self::Vulkan => "vulkan",
            Self::Metal => "metal",
        })
    }
}

/// Camera manipulator mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Orbit around the model
    #[default]
    Orbit,
    /// Free flight
    Flight,
}

impl CameraMode {
    /// Parse a camera mode, falling back to the default with a warning
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: ConfigError| {
            log::warn!("{e}");
            Self::default()
        })
    }
}

impl FromStr for CameraMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orbit" => Ok(Self::Orbit),
            "flight" => Ok(Self::Flight),
            _ => Err(ConfigError::UnknownOption {
                option: "camera mode",
                value: s.to_string(),
                accepted: "'flight'|'orbit'",
            }),
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Orbit => "orbit",
            Self::Flight => "flight",
        })
    }
}

/// Sandbox application configuration
///
/// `backend` and `camera_mode` stay strings so that an unrecognized value
/// degrades to the default instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Window title
    pub title: String,
    /// Backend name: `opengl`, `vulkan` or `metal`
    pub backend: String,
    /// Camera mode name: `orbit` or `flight`
    pub camera_mode: String,
    /// Directory of a prefiltered IBL
    pub ibl_directory: Option<PathBuf>,
    /// Split the window into four views
    pub split_view: bool,
    /// Uniform scale applied to the root renderable
    pub scale: f32,
    /// Add a shadow-receiving ground plane
    pub shadow_plane: bool,
    /// Only apply the edited material to the first renderable
    pub single_mode: bool,
    /// Bloom dirt texture
    pub dirt: Option<PathBuf>,
    /// Mesh files to load
    pub meshes: Vec<PathBuf>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            title: "Material Sandbox".to_string(),
            backend: Backend::default().to_string(),
            camera_mode: CameraMode::default().to_string(),
            ibl_directory: None,
            split_view: false,
            scale: 1.0,
            shadow_plane: false,
            single_mode: false,
            dirt: None,
            meshes: Vec::new(),
        }
    }
}

impl SandboxConfig {
    /// Requested backend, defaulted when unrecognized
    pub fn backend(&self) -> Backend {
        Backend::parse_or_default(&self.backend)
    }

    /// Requested camera mode, defaulted when unrecognized
    pub fn camera_mode(&self) -> CameraMode {
        CameraMode::parse_or_default(&self.camera_mode)
    }

    /// Check that the sandbox can start with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meshes.is_empty() {
            return Err(ConfigError::Invalid("at least one mesh file is required".to_string()));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!("scale must be positive, got {}", self.scale)));
        }
        Ok(())
    }
}

impl Config for SandboxConfig {}
