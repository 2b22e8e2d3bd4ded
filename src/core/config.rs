//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kana/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::exercise::ExerciseType;
use crate::core::options::DEFAULT_OPTION_COUNT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KanaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Absolute, or relative to `~/.kana/`.
    pub history_file: Option<String>,
    pub default_exercise: Option<ExerciseType>,
    pub option_count: Option<usize>,
    pub seed: Option<u64>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub history: Option<PathBuf>,
    pub exercise: Option<ExerciseType>,
    pub option_count: Option<usize>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HISTORY_FILE: &str = "kana-practice-history.json";
pub const LOG_FILE: &str = "kana.log";
/// Fewer than two options would give the answer away.
pub const MIN_OPTION_COUNT: usize = 2;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub history_path: PathBuf,
    pub start_exercise: Option<ExerciseType>,
    pub option_count: usize,
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.kana/`, the home of config, history and log.
pub fn kana_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kana"))
}

/// Returns the path to `~/.kana/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    kana_dir().map(|d| d.join("config.toml"))
}

/// Where the log file goes: `~/.kana/kana.log`, or the working directory.
pub fn log_path() -> PathBuf {
    match kana_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join(LOG_FILE),
        _ => PathBuf::from(LOG_FILE),
    }
}

/// Load config from `~/.kana/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KanaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<KanaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KanaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(KanaConfig::default());
    }

    let config = parse_config(&fs::read_to_string(&path)?)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<KanaConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# kana-cli configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# history_file = "kana-practice-history.json"  # Relative to ~/.kana/, or absolute
# default_exercise = "kana_to_reading"         # Open this drill on start
# option_count = 4                             # Choices per question (min 2)
# seed = 42                                    # Fixed RNG seed for reproducible drills
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KanaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with environment lookups supplied by the caller.
pub fn resolve_with_env(
    config: &KanaConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // History path: CLI → env → config → default
    let history_path = cli
        .history
        .clone()
        .or_else(|| env("KANA_HISTORY_FILE").map(PathBuf::from))
        .or_else(|| config.general.history_file.as_deref().map(in_kana_dir))
        .unwrap_or_else(|| in_kana_dir(DEFAULT_HISTORY_FILE));

    // Option count: CLI → env → config → default, never below the minimum
    let option_count = cli
        .option_count
        .or_else(|| {
            env("KANA_OPTION_COUNT").and_then(|v| match v.trim().parse() {
                Ok(n) => Some(n),
                Err(e) => {
                    warn!("Ignoring KANA_OPTION_COUNT={:?}: {}", v, e);
                    None
                }
            })
        })
        .or(config.general.option_count)
        .unwrap_or(DEFAULT_OPTION_COUNT)
        .max(MIN_OPTION_COUNT);

    ResolvedConfig {
        history_path,
        start_exercise: cli.exercise.or(config.general.default_exercise),
        option_count,
        seed: cli.seed.or(config.general.seed),
    }
}

/// Resolves `file` against `~/.kana/` unless it is absolute.
fn in_kana_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match kana_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = KanaConfig::default();
        assert!(config.general.history_file.is_none());
        assert!(config.general.default_exercise.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&KanaConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.option_count, DEFAULT_OPTION_COUNT);
        assert!(resolved.history_path.ends_with(DEFAULT_HISTORY_FILE));
        assert!(resolved.start_exercise.is_none());
        assert!(resolved.seed.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = KanaConfig {
            general: GeneralConfig {
                history_file: Some("/tmp/kana/h.json".to_string()),
                default_exercise: Some(ExerciseType::ReadingToKana),
                option_count: Some(6),
                seed: Some(99),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.history_path, PathBuf::from("/tmp/kana/h.json"));
        assert_eq!(resolved.start_exercise, Some(ExerciseType::ReadingToKana));
        assert_eq!(resolved.option_count, 6);
        assert_eq!(resolved.seed, Some(99));
    }

    #[test]
    fn test_resolve_env_beats_config_and_cli_beats_env() {
        let config = KanaConfig {
            general: GeneralConfig {
                history_file: Some("/from/config.json".to_string()),
                option_count: Some(6),
                ..Default::default()
            },
        };
        let env = |key: &str| match key {
            "KANA_HISTORY_FILE" => Some("/from/env.json".to_string()),
            "KANA_OPTION_COUNT" => Some("5".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.history_path, PathBuf::from("/from/env.json"));
        assert_eq!(resolved.option_count, 5);

        let cli = CliOverrides {
            history: Some(PathBuf::from("/from/cli.json")),
            option_count: Some(3),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.history_path, PathBuf::from("/from/cli.json"));
        assert_eq!(resolved.option_count, 3);
    }

    #[test]
    fn test_option_count_clamped_to_minimum() {
        let cli = CliOverrides {
            option_count: Some(1),
            ..Default::default()
        };
        let resolved = resolve_with_env(&KanaConfig::default(), &cli, no_env);
        assert_eq!(resolved.option_count, MIN_OPTION_COUNT);
    }

    #[test]
    fn test_bad_env_option_count_ignored() {
        let env = |key: &str| (key == "KANA_OPTION_COUNT").then(|| "lots".to_string());
        let resolved = resolve_with_env(&KanaConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.option_count, DEFAULT_OPTION_COUNT);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
history_file = "drills.json"
default_exercise = "katakana_to_hiragana"
option_count = 5
seed = 7
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.history_file.as_deref(), Some("drills.json"));
        assert_eq!(
            config.general.default_exercise,
            Some(ExerciseType::KatakanaToHiragana)
        );
        assert_eq!(config.general.option_count, Some(5));
        assert_eq!(config.general.seed, Some(7));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let config = parse_config("[general]\noption_count = 3\n").unwrap();
        assert_eq!(config.general.option_count, Some(3));
        assert!(config.general.history_file.is_none());
        assert!(config.general.seed.is_none());
    }

    #[test]
    fn test_unknown_exercise_is_parse_error() {
        let err = parse_config("[general]\ndefault_exercise = \"kanji\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
