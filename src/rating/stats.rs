// Input stat line for the rating pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PlayerStats
// ---------------------------------------------------------------------------

/// A single player's counting statistics for one season (or one game).
///
/// All numeric fields are `f64` because they arrive from forms and CSV files
/// and may be negative, fractional, or non-finite; the validator rejects
/// anything the formula cannot accept. `minutes` is the player's total
/// playing time; `games_played` is optional and only used to check that the
/// per-game playing time is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub position: Option<String>,

    pub minutes: f64,
    #[serde(default)]
    pub games_played: Option<f64>,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub threes_made: f64,
    pub threes_attempted: f64,
    pub free_throws_made: f64,
    pub free_throws_attempted: f64,
    pub offensive_rebounds: f64,
    pub defensive_rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub personal_fouls: f64,
    /// Total points, if the caller wants the cross-check.
    #[serde(default)]
    pub points: Option<f64>,
}

impl PlayerStats {
    /// Points implied by the made-shot counts: two points per non-three field
    /// goal, three per three-pointer, one per free throw.
    pub fn reconstructed_points(&self) -> f64 {
        (self.field_goals_made - self.threes_made) * 2.0
            + self.threes_made * 3.0
            + self.free_throws_made
    }
}

// ---------------------------------------------------------------------------
// StatField
// ---------------------------------------------------------------------------

/// The closed set of numeric fields on `PlayerStats`.
///
/// Negative-value and finiteness validation iterate `StatField::ALL` so the
/// compiler, not a runtime key walk, guarantees every field is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatField {
    Minutes,
    GamesPlayed,
    FieldGoalsMade,
    FieldGoalsAttempted,
    ThreesMade,
    ThreesAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    OffensiveRebounds,
    DefensiveRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    Points,
}

impl StatField {
    pub const ALL: [StatField; 16] = [
        StatField::Minutes,
        StatField::GamesPlayed,
        StatField::FieldGoalsMade,
        StatField::FieldGoalsAttempted,
        StatField::ThreesMade,
        StatField::ThreesAttempted,
        StatField::FreeThrowsMade,
        StatField::FreeThrowsAttempted,
        StatField::OffensiveRebounds,
        StatField::DefensiveRebounds,
        StatField::Assists,
        StatField::Steals,
        StatField::Blocks,
        StatField::Turnovers,
        StatField::PersonalFouls,
        StatField::Points,
    ];

    /// Read this field's value from a stat line. `None` for optional fields
    /// the caller left out.
    pub fn value_in(self, stats: &PlayerStats) -> Option<f64> {
        match self {
            StatField::Minutes => Some(stats.minutes),
            StatField::GamesPlayed => stats.games_played,
            StatField::FieldGoalsMade => Some(stats.field_goals_made),
            StatField::FieldGoalsAttempted => Some(stats.field_goals_attempted),
            StatField::ThreesMade => Some(stats.threes_made),
            StatField::ThreesAttempted => Some(stats.threes_attempted),
            StatField::FreeThrowsMade => Some(stats.free_throws_made),
            StatField::FreeThrowsAttempted => Some(stats.free_throws_attempted),
            StatField::OffensiveRebounds => Some(stats.offensive_rebounds),
            StatField::DefensiveRebounds => Some(stats.defensive_rebounds),
            StatField::Assists => Some(stats.assists),
            StatField::Steals => Some(stats.steals),
            StatField::Blocks => Some(stats.blocks),
            StatField::Turnovers => Some(stats.turnovers),
            StatField::PersonalFouls => Some(stats.personal_fouls),
            StatField::Points => stats.points,
        }
    }

    /// Human-readable field name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            StatField::Minutes => "minutes played",
            StatField::GamesPlayed => "games played",
            StatField::FieldGoalsMade => "field goals made",
            StatField::FieldGoalsAttempted => "field goals attempted",
            StatField::ThreesMade => "three-pointers made",
            StatField::ThreesAttempted => "three-pointers attempted",
            StatField::FreeThrowsMade => "free throws made",
            StatField::FreeThrowsAttempted => "free throws attempted",
            StatField::OffensiveRebounds => "offensive rebounds",
            StatField::DefensiveRebounds => "defensive rebounds",
            StatField::Assists => "assists",
            StatField::Steals => "steals",
            StatField::Blocks => "blocks",
            StatField::Turnovers => "turnovers",
            StatField::PersonalFouls => "personal fouls",
            StatField::Points => "points",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
