// Configuration loading and parsing (rating.toml).

use std::path::{Path, PathBuf};
use thiserror::Error;

use serde::Deserialize;

use crate::rating::{FormulaWeights, LeagueContext};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole rating.toml file. Both tables
/// are optional; omitted keys fall back to the documented defaults.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    league: LeagueContext,
    #[serde(default)]
    weights: FormulaWeights,
}

/// The assembled configuration: league normalization context plus the
/// formula weight table (the defaults, or a caller's what-if override).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub league: LeagueContext,
    pub weights: FormulaWeights,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from a TOML file.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = Config {
        league: file.league,
        weights: file.weights,
    };

    validate(&config)?;

    Ok(config)
}

/// Load `config/rating.toml` relative to `base_dir` if it exists, otherwise
/// fall back to the built-in defaults (neutral pace, 15.0 average, default
/// weight table).
pub fn load_config_or_default(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("rating.toml");
    if path.exists() {
        load_config_from(&path)
    } else {
        Ok(Config::default())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    // League scalars must be finite, and both feed a multiplication/division
    // in the adjustment, so neither may be zero or negative.
    if !config.league.pace_factor.is_finite() || config.league.pace_factor <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "league.pace_factor".into(),
            message: format!("must be a finite number > 0, got {}", config.league.pace_factor),
        });
    }
    if !config.league.average_rating.is_finite() || config.league.average_rating <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "league.average_rating".into(),
            message: format!(
                "must be a finite number > 0, got {}",
                config.league.average_rating
            ),
        });
    }

    // Weights may take either sign (what-if formulas are allowed to flip
    // them), but a non-finite weight would poison every downstream value.
    let w = &config.weights;
    let weight_fields: &[(&str, f64)] = &[
        ("weights.three_pointer", w.three_pointer),
        ("weights.two_pointer", w.two_pointer),
        ("weights.free_throw", w.free_throw),
        ("weights.offensive_rebound", w.offensive_rebound),
        ("weights.defensive_rebound", w.defensive_rebound),
        ("weights.assist", w.assist),
        ("weights.steal", w.steal),
        ("weights.block", w.block),
        ("weights.turnover", w.turnover),
        ("weights.missed_field_goal", w.missed_field_goal),
        ("weights.missed_free_throw", w.missed_free_throw),
        ("weights.personal_foul", w.personal_foul),
    ];
    for (name, val) in weight_fields {
        if !val.is_finite() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be a finite number, got {val}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
