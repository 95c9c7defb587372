//! Controller settings, stored as TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. The operation cap is fixed and deliberately absent here.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{DEFAULT_FRAMES_PER_GATE, DEFAULT_NORM_TOLERANCE, QuantalizerError};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Settings for one controller instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Values offered by the angle selector.
    pub angle_menu: AngleMenuPolicy,

    /// Built-in renderer tuning.
    pub renderer: RendererSettings,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, QuantalizerError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, QuantalizerError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, QuantalizerError> {
        Ok(toml::to_string(self)?)
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), QuantalizerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

// =============================================================================
// ANGLE MENU
// =============================================================================

/// Which multiple of π the "-π" entry of the angle menu produces.
///
/// `Symmetric` gives the menu ±{π/4, π/2, π, 2π}. `Legacy` replays the
/// historical behaviour where "-π" applied `-0.1·π`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMenuPolicy {
    #[default]
    Symmetric,
    Legacy,
}

// =============================================================================
// RENDERER
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Interpolated frames emitted per gate.
    pub frames_per_gate: usize,

    /// Maximum deviation of a trajectory point's norm from 1.0.
    pub norm_tolerance: f64,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            frames_per_gate: DEFAULT_FRAMES_PER_GATE,
            // Interpolation accumulates rounding; leave headroom over the state check.
            norm_tolerance: DEFAULT_NORM_TOLERANCE * 1e3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() -> Result<(), QuantalizerError> {
        let settings = Settings::from_toml_str("")?;
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.angle_menu, AngleMenuPolicy::Symmetric);
        assert_eq!(settings.renderer.frames_per_gate, DEFAULT_FRAMES_PER_GATE);
        Ok(())
    }

    #[test]
    fn test_partial_toml_overrides() -> Result<(), QuantalizerError> {
        let settings = Settings::from_toml_str(
            r#"
            angle_menu = "legacy"

            [renderer]
            frames_per_gate = 12
            "#,
        )?;
        assert_eq!(settings.angle_menu, AngleMenuPolicy::Legacy);
        assert_eq!(settings.renderer.frames_per_gate, 12);
        assert_eq!(settings.renderer.norm_tolerance, RendererSettings::default().norm_tolerance);
        Ok(())
    }

    #[test]
    fn test_bad_policy_is_a_parse_error() {
        let result = Settings::from_toml_str(r#"angle_menu = "lopsided""#);
        assert!(matches!(result, Err(QuantalizerError::ConfigParse(_))));
    }

    #[test]
    fn test_save_and_load() -> Result<(), QuantalizerError> {
        let dir = std::env::temp_dir().join(format!("quantalizer-settings-{}", std::process::id()));
        let path = dir.join("settings.toml");
        let settings = Settings {
            angle_menu: AngleMenuPolicy::Legacy,
            renderer: RendererSettings { frames_per_gate: 5, norm_tolerance: 1e-6 },
        };
        settings.save_to(&path)?;
        assert_eq!(Settings::load_from(&path)?, settings);
        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<(), QuantalizerError> {
        let path = std::env::temp_dir().join("quantalizer-does-not-exist/settings.toml");
        assert_eq!(Settings::load_from(&path)?, Settings::default());
        Ok(())
    }
}
