use serde::{Deserialize, Serialize};
use crate::components::geometry::Dimension;

/// Side length of the default (test-sized) world.
pub const DEFAULT_DIM: f64 = 20.0;

/// Named gravity constants selectable at environment construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravityPreset {
    #[default]
    Earth,
    Moon,
}

impl GravityPreset {
    pub fn value(self) -> f64 {
        match self {
            GravityPreset::Earth => 9.81,
            GravityPreset::Moon => 6.673,
        }
    }
}

/// Construction-time settings for an `Environment`.
/// Loaded from JSON; any missing field takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub gravity: GravityPreset,
    #[serde(default = "default_dim")]
    pub width: f64,
    #[serde(default = "default_dim")]
    pub height: f64,
}

fn default_dim() -> f64 {
    DEFAULT_DIM
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            gravity: GravityPreset::default(),
            width: DEFAULT_DIM,
            height: DEFAULT_DIM,
        }
    }
}

impl EnvironmentConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }
}
