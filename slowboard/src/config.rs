//! User-tunable settings, stored as JSON in the app config directory

use crate::geometry::{BoardGeometry, BOARD_CELLS};
use serde::{Deserialize, Serialize};
use slowcore::storage::{self, StorageError};
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "SLOWBOARD_CONFIG";

const DEFAULT_BOARD_SIZE: f32 = 700.0;
const DEFAULT_SNAP_OFFSET: f32 = 40.0;
const DEFAULT_PICKUP_RADIUS: f32 = 30.0;
const DEFAULT_EPSILON: f32 = 1e-3;

/// What ends a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTrigger {
    /// The next press of the button after the one that picked the piece up.
    #[default]
    SecondPress,
    /// Letting go of the button.
    Release,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub board_size: f32,
    pub snap_offset: f32,
    /// How close (in pixels) the pointer must be to a piece to grab it.
    pub pickup_radius: f32,
    pub drop_trigger: DropTrigger,
    /// Tolerance when comparing piece positions.
    pub epsilon: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            snap_offset: DEFAULT_SNAP_OFFSET,
            pickup_radius: DEFAULT_PICKUP_RADIUS,
            drop_trigger: DropTrigger::default(),
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl BoardConfig {
    /// `$SLOWBOARD_CONFIG` if set, otherwise `config.json` in the app config dir.
    pub fn path() -> PathBuf {
        slowcore::env_path(CONFIG_ENV)
            .unwrap_or_else(|| storage::config_dir("slowboard").join("config.json"))
    }

    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<Self>(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config.validated()
            }
            Err(StorageError::NotFound(_)) => {
                log::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace out-of-range values with their defaults.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.board_size.is_finite() && self.board_size > 0.0) {
            log::warn!("board_size {} out of range, using {}", self.board_size, defaults.board_size);
            self.board_size = defaults.board_size;
        }
        let cell = self.board_size / BOARD_CELLS as f32;
        if !(self.snap_offset > 0.0 && self.snap_offset < cell) {
            let scaled = DEFAULT_SNAP_OFFSET * self.board_size / DEFAULT_BOARD_SIZE;
            log::warn!("snap_offset {} out of range, using {}", self.snap_offset, scaled);
            self.snap_offset = scaled;
        }
        if !(self.pickup_radius.is_finite() && self.pickup_radius > 0.0) {
            log::warn!("pickup_radius {} out of range, using {}", self.pickup_radius, defaults.pickup_radius);
            self.pickup_radius = defaults.pickup_radius;
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            self.epsilon = defaults.epsilon;
        }
        self
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry { size: self.board_size, snap_offset: self.snap_offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_geometry_defaults() {
        assert_eq!(BoardConfig::default().geometry(), BoardGeometry::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = BoardConfig::from_json(r#"{ "drop_trigger": "release" }"#).unwrap();
        assert_eq!(config.drop_trigger, DropTrigger::Release);
        assert_eq!(config.board_size, 700.0);
        assert_eq!(config.pickup_radius, 30.0);
    }

    #[test]
    fn test_bad_values_are_replaced() {
        let config = BoardConfig::from_json(
            r#"{ "board_size": 400.0, "snap_offset": 90.0, "pickup_radius": -1.0, "epsilon": 0.0 }"#,
        )
        .unwrap();
        assert_eq!(config.board_size, 400.0);
        assert!(config.snap_offset > 0.0 && config.snap_offset < 50.0);
        assert_eq!(config.pickup_radius, 30.0);
        assert_eq!(config.epsilon, 1e-3);
    }

    #[test]
    fn test_unknown_trigger_is_an_error() {
        assert!(BoardConfig::from_json(r#"{ "drop_trigger": "double_click" }"#).is_err());
    }

    #[test]
    fn test_load_missing_and_broken_files() {
        let dir = std::env::temp_dir().join(format!("slowboard_config_{}", std::process::id()));
        assert_eq!(BoardConfig::load_from(&dir.join("absent.json")), BoardConfig::default());

        std::fs::create_dir_all(&dir).unwrap();
        let broken = dir.join("broken.json");
        std::fs::write(&broken, "[1, 2").unwrap();
        assert_eq!(BoardConfig::load_from(&broken), BoardConfig::default());

        let saved = dir.join("saved.json");
        let config = BoardConfig { pickup_radius: 25.0, ..BoardConfig::default() };
        config.save_to(&saved).unwrap();
        assert_eq!(BoardConfig::load_from(&saved), config);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
