// Stat-line loading from CSV.
//
// Reads basketball-reference-style season total rows. Extra columns are
// silently absorbed; malformed rows are skipped with a warning rather than
// failing the whole import.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::rating::PlayerStats;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// One CSV row of season totals. Column names follow the common stat-site
/// header set, with aliases for the frequent variants; columns not listed
/// here (TRB, FG%, and so on) are ignored.
#[derive(Debug, Deserialize)]
struct RawStatLine {
    #[serde(rename = "Name", alias = "Player")]
    name: String,
    #[serde(rename = "Team", alias = "Tm", default)]
    team: String,
    #[serde(rename = "Season", default)]
    season: String,
    #[serde(rename = "Pos", alias = "POS", default)]
    position: String,
    #[serde(rename = "MIN", alias = "MP")]
    minutes: f64,
    #[serde(rename = "G", default)]
    games_played: Option<f64>,
    #[serde(rename = "FGM", alias = "FG")]
    field_goals_made: f64,
    #[serde(rename = "FGA")]
    field_goals_attempted: f64,
    #[serde(rename = "3PM", alias = "3P")]
    threes_made: f64,
    #[serde(rename = "3PA")]
    threes_attempted: f64,
    #[serde(rename = "FTM", alias = "FT")]
    free_throws_made: f64,
    #[serde(rename = "FTA")]
    free_throws_attempted: f64,
    #[serde(rename = "ORB", alias = "OREB")]
    offensive_rebounds: f64,
    #[serde(rename = "DRB", alias = "DREB")]
    defensive_rebounds: f64,
    #[serde(rename = "AST")]
    assists: f64,
    #[serde(rename = "STL")]
    steals: f64,
    #[serde(rename = "BLK")]
    blocks: f64,
    #[serde(rename = "TOV", alias = "TO")]
    turnovers: f64,
    #[serde(rename = "PF")]
    personal_fouls: f64,
    #[serde(rename = "PTS", default)]
    points: Option<f64>,
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl From<RawStatLine> for PlayerStats {
    fn from(raw: RawStatLine) -> Self {
        PlayerStats {
            name: raw.name.trim().to_string(),
            team: non_empty(raw.team),
            season: non_empty(raw.season),
            position: non_empty(raw.position),
            minutes: raw.minutes,
            games_played: raw.games_played,
            field_goals_made: raw.field_goals_made,
            field_goals_attempted: raw.field_goals_attempted,
            threes_made: raw.threes_made,
            threes_attempted: raw.threes_attempted,
            free_throws_made: raw.free_throws_made,
            free_throws_attempted: raw.free_throws_attempted,
            offensive_rebounds: raw.offensive_rebounds,
            defensive_rebounds: raw.defensive_rebounds,
            assists: raw.assists,
            steals: raw.steals,
            blocks: raw.blocks,
            turnovers: raw.turnovers,
            personal_fouls: raw.personal_fouls,
            points: raw.points,
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Load stat lines from any reader. Malformed rows are skipped with a
/// warning; rows with out-of-range values are kept as-is, since rejecting
/// them with a field-level diagnostic is the validator's job.
pub fn load_stats_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerStats>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut lines = Vec::new();
    for result in reader.deserialize::<RawStatLine>() {
        match result {
            Ok(raw) => lines.push(PlayerStats::from(raw)),
            Err(e) => {
                warn!("skipping malformed stat row: {}", e);
            }
        }
    }
    Ok(lines)
}

/// Load stat lines from a CSV file.
pub fn load_stats(path: &Path) -> Result<Vec<PlayerStats>, ImportError> {
    let file = std::fs::File::open(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_stats_from_reader(file).map_err(|e| ImportError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
