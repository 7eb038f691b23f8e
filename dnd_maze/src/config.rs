// Generation parameters.
//
// Every knob the generator reads lives in `MazeConfig`: logical dimensions,
// the optional seed, connection length bounds, the room content chances, the
// loop-edge probability, and the dungeon's display name. The generator uses
// no magic numbers beyond these.
//
// Configs can be built in code (`MazeConfig { width: 8, ..Default::default() }`)
// or loaded from JSON with `MazeConfig::from_json()`. Missing JSON fields fall
// back to the defaults, which match the classic command-line tool
// (5x5 rooms, lengths 1-10, owner 40%, treasure 30%, trap 25%, loops 10%).
//
// `validate()` performs the checks a front end should run before calling
// `generate()`. The generator does not call it: it assumes validated input
// and degrades gracefully on boundary values (zero dimensions, chances of
// exactly 0.0 or 1.0).
//
// See also: `generator.rs` which consumes the config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All tunable inputs to `generate()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Number of room columns (logical width).
    pub width: u32,
    /// Number of room rows (logical height).
    pub height: u32,
    /// Seed for the generation stream. `None` draws one from OS entropy; the
    /// seed actually used is recorded on the resulting `Maze`.
    pub seed: Option<u64>,
    /// Inclusive lower bound on every connection's length.
    pub min_connection_length: u32,
    /// Inclusive upper bound on every connection's length.
    pub max_connection_length: u32,
    /// Probability (0-1) that a room has an owner.
    pub owner_chance: f64,
    /// Probability (0-1) that a room holds treasure.
    pub treasure_chance: f64,
    /// Probability (0-1) that a room is trapped.
    pub trap_chance: f64,
    /// Probability (0-1), per eligible room side, of carving an extra
    /// connection after the spanning tree is complete.
    pub extra_connections: f64,
    /// Display name of the dungeon.
    pub name: String,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            seed: None,
            min_connection_length: 1,
            max_connection_length: 10,
            owner_chance: 0.4,
            treasure_chance: 0.3,
            trap_chance: 0.25,
            extra_connections: 0.1,
            name: "The Dungeon".to_string(),
        }
    }
}

/// A rule violated by a `MazeConfig`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("width and height must be at least 1 (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },
    #[error("minimum connection length must be at least 1")]
    ZeroMinLength,
    #[error("maximum connection length {max} is less than minimum {min}")]
    InvertedLengths { min: u32, max: u32 },
    #[error("{field} must be within [0, 1] (got {value})")]
    ChanceOutOfRange { field: &'static str, value: f64 },
}

impl MazeConfig {
    /// Parse a config from a JSON string. Absent fields take default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the config against the rules a caller must enforce before
    /// generation. Reports the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_connection_length < 1 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.max_connection_length < self.min_connection_length {
            return Err(ConfigError::InvertedLengths {
                min: self.min_connection_length,
                max: self.max_connection_length,
            });
        }
        for (field, value) in [
            ("owner_chance", self.owner_chance),
            ("treasure_chance", self.treasure_chance),
            ("trap_chance", self.trap_chance),
            ("extra_connections", self.extra_connections),
        ] {
            // NaN fails `contains`, so it is rejected here too.
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ChanceOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_tool() {
        let config = MazeConfig::default();
        assert_eq!((config.width, config.height), (5, 5));
        assert_eq!(config.seed, None);
        assert_eq!(config.min_connection_length, 1);
        assert_eq!(config.max_connection_length, 10);
        assert_eq!(config.owner_chance, 0.4);
        assert_eq!(config.treasure_chance, 0.3);
        assert_eq!(config.trap_chance, 0.25);
        assert_eq!(config.extra_connections, 0.1);
        assert_eq!(config.name, "The Dungeon");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn default_config_serializes() {
        let config = MazeConfig {
            seed: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored = MazeConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn config_loads_partial_json() {
        let json = r#"{
            "width": 10,
            "height": 8,
            "seed": 7,
            "name": "Dragon's Lair"
        }"#;
        let config = MazeConfig::from_json(json).unwrap();
        assert_eq!((config.width, config.height), (10, 8));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.name, "Dragon's Lair");
        // Unspecified fields keep their defaults.
        assert_eq!(config.max_connection_length, 10);
        assert_eq!(config.trap_chance, 0.25);
    }

    #[test]
    fn config_rejects_bad_json() {
        assert!(MazeConfig::from_json(r#"{"width": -3}"#).is_err());
        assert!(MazeConfig::from_json("not json").is_err());
    }

    #[test]
    fn validate_rejects_empty_grid() {
        let config = MazeConfig {
            width: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 0, height: 5 })
        );
    }

    #[test]
    fn validate_rejects_bad_lengths() {
        let zero = MazeConfig {
            min_connection_length: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroMinLength));

        let inverted = MazeConfig {
            min_connection_length: 7,
            max_connection_length: 3,
            ..Default::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvertedLengths { min: 7, max: 3 })
        );

        let equal = MazeConfig {
            min_connection_length: 4,
            max_connection_length: 4,
            ..Default::default()
        };
        assert_eq!(equal.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_range_chances() {
        let high = MazeConfig {
            trap_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            high.validate(),
            Err(ConfigError::ChanceOutOfRange { field: "trap_chance", .. })
        ));

        let nan = MazeConfig {
            extra_connections: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::ChanceOutOfRange { field: "extra_connections", .. })
        ));

        let edges = MazeConfig {
            owner_chance: 0.0,
            treasure_chance: 1.0,
            ..Default::default()
        };
        assert_eq!(edges.validate(), Ok(()));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ConfigError::InvertedLengths { min: 5, max: 2 };
        assert_eq!(
            err.to_string(),
            "maximum connection length 2 is less than minimum 5"
        );
    }
}
