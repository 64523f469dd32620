//! Configuration system

pub use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Toml => Self::from_toml_str(&contents),
            ConfigFormat::Ron => Self::from_ron_str(&contents),
        }
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
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

    /// Values that parse but cannot drive a simulation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which part of a mirror's line may carry a reflection point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentPolicy {
    /// Any point on the infinite line through the mirror
    #[default]
    InfiniteLine,
    /// Only points within the mirror's length, measured from its center
    ClipToSegment,
}

/// Simulated screen extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in scene units
    pub width: f64,
    /// Height in scene units
    pub height: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Options for the reflection engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionConfig {
    /// Segment clipping policy
    pub segment_policy: SegmentPolicy,
    /// Color of derived rays
    pub ray_color: String,
    /// Stroke width of derived rays
    pub ray_width: f64,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            segment_policy: SegmentPolicy::InfiniteLine,
            ray_color: "yellow".to_string(),
            ray_width: 2.0,
        }
    }
}

/// Frame timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    /// Step used by fixed-step drivers
    pub fixed_delta_time: f64,
    /// Upper bound applied to every time step
    pub max_delta_time: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            fixed_delta_time: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

/// Top-level simulation configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Screen extent used by the boundary system
    pub screen: ScreenConfig,
    /// Reflection engine options
    pub reflection: ReflectionConfig,
    /// Frame timing
    pub tick: TickConfig,
}

impl SimulationConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenConfig { width, height } = self.screen;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {width}x{height}"
            )));
        }
        let ray_width = self.reflection.ray_width;
        if !(ray_width.is_finite() && ray_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ray width must be positive, got {ray_width}"
            )));
        }
        let TickConfig {
            fixed_delta_time,
            max_delta_time,
        } = self.tick;
        if !(fixed_delta_time.is_finite() && fixed_delta_time > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fixed time step must be positive, got {fixed_delta_time}"
            )));
        }
        if !(max_delta_time.is_finite() && max_delta_time >= fixed_delta_time) {
            return Err(ConfigError::Invalid(format!(
                "max time step {max_delta_time} is below the fixed step {fixed_delta_time}"
            )));
        }
        Ok(())
    }
}

impl Config for SimulationConfig {}
