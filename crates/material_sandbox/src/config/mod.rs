//! Configuration system
//!
//! File-backed configuration for the sandbox application and for parameter
//! presets. `.toml` and `.ron` are supported, picked by file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

mod sandbox_config;

pub use sandbox_config::{Backend, CameraMode, SandboxConfig};

/// On-disk encoding, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Format for a path, or `UnsupportedFormat`
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn decode<T: for<'de> Deserialize<'de>>(self, text: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    fn encode<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

/// File-backed configuration
///
/// Fields missing from a file take their `Default` values when the type is
/// `#[serde(default)]`.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let loaded = format.decode(&std::fs::read_to_string(path)?)?;
        log::debug!("Loaded {:?} configuration from {}", format, path.display());
        Ok(loaded)
    }

    /// Save to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = ConfigFormat::from_path(path)?.encode(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Option value not in the accepted set
    #[error("Unrecognized {option} '{value}'. Must be {accepted}")]
    UnknownOption {
        /// Option name
        option: &'static str,
        /// Rejected value
        value: String,
        /// Accepted values, for the diagnostic
        accepted: &'static str,
    },

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
