//! Engine configuration.
//!
//! Settings come from an optional JSON file at startup and can be changed at
//! runtime with `setoption`. Every field has a default, so a partial file (or
//! `{}`) is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::movegen::Rules;
use crate::search::{validate_depth, SearchError, SearchParams};

/// Errors that can occur while loading or changing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown option: '{0}'")]
    UnknownOption(String),

    #[error("invalid value for option {name}: '{value}'")]
    InvalidValue { name: String, value: String },

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Difficulty levels exposed to players, each a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_name(s: &str) -> Option<Difficulty> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Persistent engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Explicit depth; overrides `difficulty` when set.
    pub depth: Option<u32>,
    pub rules: Rules,
    /// Search root moves in parallel.
    pub parallel: bool,
    /// Enable alpha-beta pruning.
    pub pruning: bool,
    /// Time cap per search in milliseconds; `None` searches to completion.
    pub movetime_ms: Option<u64>,
}

impl EngineConfig {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        EngineConfig::from_json(&text)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        if let Some(depth) = config.depth {
            validate_depth(depth as i64)?;
        }
        Ok(config)
    }

    /// Depth used when `go` does not specify one.
    pub fn search_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    /// Builds search parameters, letting per-search values override settings.
    pub fn search_params(&self, depth: Option<u32>, movetime_ms: Option<u64>) -> SearchParams {
        SearchParams {
            depth: depth.unwrap_or_else(|| self.search_depth()),
            parallel: self.parallel,
            pruning: self.pruning,
            movetime: movetime_ms.or(self.movetime_ms).map(Duration::from_millis),
        }
    }

    /// Applies a `setoption` command. Option names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.unwrap_or("").to_string(),
        };

        match name.to_ascii_lowercase().as_str() {
            "difficulty" => {
                self.difficulty = value.and_then(Difficulty::from_name).ok_or_else(invalid)?;
                self.depth = None;
            }
            "depth" => {
                let raw: i64 = value.and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
                self.depth = Some(validate_depth(raw)?);
            }
            "rules" => {
                self.rules = value.and_then(Rules::from_name).ok_or_else(invalid)?;
            }
            "parallel" => {
                self.parallel = parse_flag(value).ok_or_else(invalid)?;
            }
            "pruning" => {
                self.pruning = parse_flag(value).ok_or_else(invalid)?;
            }
            "movetime" => {
                let ms: u64 = value.and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
                self.movetime_ms = (ms > 0).then_some(ms);
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

/// Parses a boolean option value; a bare option name means `true`.
fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value.map(|v| v.to_ascii_lowercase()) {
        None => Some(true),
        Some(v) => match v.as_str() {
            "true" | "on" | "1" | "yes" => Some(true),
            "false" | "off" | "0" | "no" => Some(false),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.search_depth(), 2);
        assert_eq!(config.rules, Rules::Free);
        assert!(!config.parallel);
        assert!(!config.pruning);
        assert_eq!(config.movetime_ms, None);
    }

    #[test]
    fn difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_name(d.name()), Some(d));
        }
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn json_fields() {
        let config = EngineConfig::from_json(
            r#"{"difficulty": "hard", "rules": "geometric", "parallel": true, "movetime_ms": 250}"#,
        )
        .unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.rules, Rules::Geometric);
        assert!(config.parallel);
        assert_eq!(config.movetime_ms, Some(250));
        assert_eq!(config.search_depth(), 3);
    }

    #[test]
    fn json_rejects_unknown_fields_and_deep_searches() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"threads": 4}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"depth": 40}"#),
            Err(ConfigError::Search(SearchError::DepthTooLarge { .. }))
        ));
    }

    #[test]
    fn json_roundtrip() {
        let config = EngineConfig {
            depth: Some(1),
            pruning: true,
            ..EngineConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/gambit.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn set_option_updates_fields() {
        let mut config = EngineConfig::default();
        config.set_option("Depth", Some("1")).unwrap();
        assert_eq!(config.search_depth(), 1);
        config.set_option("Difficulty", Some("hard")).unwrap();
        assert_eq!(config.search_depth(), 3);
        config.set_option("Rules", Some("geometric")).unwrap();
        assert_eq!(config.rules, Rules::Geometric);
        config.set_option("Parallel", None).unwrap();
        assert!(config.parallel);
        config.set_option("pruning", Some("on")).unwrap();
        assert!(config.pruning);
        config.set_option("MoveTime", Some("100")).unwrap();
        assert_eq!(config.movetime_ms, Some(100));
        config.set_option("MoveTime", Some("0")).unwrap();
        assert_eq!(config.movetime_ms, None);
    }

    #[test]
    fn set_option_rejects_bad_input() {
        let mut config = EngineConfig::default();
        assert!(matches!(
            config.set_option("Threads", Some("8")),
            Err(ConfigError::UnknownOption(_))
        ));
        assert!(matches!(
            config.set_option("Difficulty", Some("nightmare")),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set_option("Depth", Some("-2")),
            Err(ConfigError::Search(SearchError::NegativeDepth(-2)))
        ));
        assert!(matches!(
            config.set_option("Parallel", Some("maybe")),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn search_params_prefer_per_search_values() {
        let config = EngineConfig {
            movetime_ms: Some(500),
            parallel: true,
            ..EngineConfig::default()
        };
        let params = config.search_params(None, None);
        assert_eq!(params.depth, 2);
        assert_eq!(params.movetime, Some(Duration::from_millis(500)));
        assert!(params.parallel);

        let params = config.search_params(Some(1), Some(20));
        assert_eq!(params.depth, 1);
        assert_eq!(params.movetime, Some(Duration::from_millis(20)));
    }
}
