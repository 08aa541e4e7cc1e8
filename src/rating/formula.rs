// Weighted-sum formula and league normalization.
//
// The raw value is a pure weighted sum of counting stats expressed per 36
// minutes. Normalization multiplies by the league pace factor and rescales so
// that a league-average raw value lands exactly on the canonical 15.0.

use serde::{Deserialize, Serialize};

use crate::rating::stats::PlayerStats;
use crate::rating::RatingError;

/// The adjusted value a league-average season maps to, by construction.
pub const CANONICAL_AVERAGE: f64 = 15.0;

/// Reporting basis for the raw value: minutes in a regulation-length stint.
pub const REPORTING_MINUTES: f64 = 36.0;

// ---------------------------------------------------------------------------
// LeagueContext
// ---------------------------------------------------------------------------

/// League-level normalization scalars. Supplied by the caller and never
/// mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueContext {
    /// Ratio of the league's possession rate to the reference pace.
    /// 1.0 means neutral (no pace adjustment).
    pub pace_factor: f64,
    /// League-average raw value on the per-36 basis. The adjustment rescales
    /// this to `CANONICAL_AVERAGE`.
    pub average_rating: f64,
}

impl Default for LeagueContext {
    fn default() -> Self {
        Self {
            pace_factor: 1.0,
            average_rating: CANONICAL_AVERAGE,
        }
    }
}

// ---------------------------------------------------------------------------
// FormulaWeights
// ---------------------------------------------------------------------------

/// The twelve signed per-category coefficients.
///
/// Negative-category weights (turnovers, misses, fouls) are negative
/// constants: the formula is a single weighted sum and never hard-codes a
/// subtraction, so callers exploring what-if formulas control every sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaWeights {
    pub three_pointer: f64,
    pub two_pointer: f64,
    pub free_throw: f64,
    pub offensive_rebound: f64,
    pub defensive_rebound: f64,
    pub assist: f64,
    pub steal: f64,
    pub block: f64,
    pub turnover: f64,
    pub missed_field_goal: f64,
    pub missed_free_throw: f64,
    pub personal_foul: f64,
}

impl Default for FormulaWeights {
    fn default() -> Self {
        Self {
            three_pointer: 3.0,
            two_pointer: 2.0,
            free_throw: 0.667,
            offensive_rebound: 0.7,
            defensive_rebound: 0.3,
            assist: 0.7,
            steal: 1.0,
            block: 0.7,
            turnover: -1.0,
            missed_field_goal: -0.4,
            missed_free_throw: -0.8,
            personal_foul: -0.4,
        }
    }
}

impl FormulaWeights {
    /// Multiply every coefficient by `k`. The raw value is linear in the
    /// weights, so this scales it by the same factor.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            three_pointer: self.three_pointer * k,
            two_pointer: self.two_pointer * k,
            free_throw: self.free_throw * k,
            offensive_rebound: self.offensive_rebound * k,
            defensive_rebound: self.defensive_rebound * k,
            assist: self.assist * k,
            steal: self.steal * k,
            block: self.block * k,
            turnover: self.turnover * k,
            missed_field_goal: self.missed_field_goal * k,
            missed_free_throw: self.missed_free_throw * k,
            personal_foul: self.personal_foul * k,
        }
    }
}

// ---------------------------------------------------------------------------
// ComponentBreakdown
// ---------------------------------------------------------------------------

/// Per-category decomposition of the adjusted value, for visualization.
///
/// Each component is on the same per-36, pace- and baseline-normalized scale
/// as the adjusted value itself, so the five components sum to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentBreakdown {
    pub scoring: f64,
    pub rebounding: f64,
    pub playmaking: f64,
    pub defense: f64,
    pub negatives: f64,
}

impl ComponentBreakdown {
    pub fn total(&self) -> f64 {
        self.scoring + self.rebounding + self.playmaking + self.defense + self.negatives
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Raw and normalized values plus the component decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaOutput {
    pub raw_value: f64,
    pub adjusted_value: f64,
    pub breakdown: ComponentBreakdown,
}

/// Compute the per-36 raw value, the league-adjusted value, and the
/// component breakdown for an already-validated stat line.
///
/// `adjusted = raw × pace_factor × (15 / league average)`, which anchors a
/// league-average season to exactly 15.0 at neutral pace regardless of era.
pub fn compute_adjusted(
    stats: &PlayerStats,
    league: &LeagueContext,
    weights: &FormulaWeights,
) -> Result<FormulaOutput, RatingError> {
    // Unreachable after validation; kept as a defensive check because
    // everything below divides by playing time.
    if stats.minutes <= 0.0 {
        return Err(RatingError::DivisionByZero);
    }

    let two_point_made = stats.field_goals_made - stats.threes_made;

    let scoring = weights.three_pointer * stats.threes_made
        + weights.two_pointer * two_point_made
        + weights.free_throw * stats.free_throws_made;
    let rebounding = weights.offensive_rebound * stats.offensive_rebounds
        + weights.defensive_rebound * stats.defensive_rebounds;
    let playmaking = weights.assist * stats.assists;
    let defense = weights.steal * stats.steals + weights.block * stats.blocks;
    let negatives = weights.missed_field_goal
        * (stats.field_goals_attempted - stats.field_goals_made)
        + weights.missed_free_throw * (stats.free_throws_attempted - stats.free_throws_made)
        + weights.turnover * stats.turnovers
        + weights.personal_foul * stats.personal_fouls;

    let per_36 = REPORTING_MINUTES / stats.minutes;
    let raw_value = (scoring + rebounding + playmaking + defense + negatives) * per_36;

    let adjustment = league.pace_factor * (CANONICAL_AVERAGE / league.average_rating);
    let adjusted_value = raw_value * adjustment;

    // Same scale as adjusted_value, so components sum to it.
    let component_scale = per_36 * adjustment;
    let breakdown = ComponentBreakdown {
        scoring: scoring * component_scale,
        rebounding: rebounding * component_scale,
        playmaking: playmaking * component_scale,
        defense: defense * component_scale,
        negatives: negatives * component_scale,
    };

    Ok(FormulaOutput {
        raw_value,
        adjusted_value,
        breakdown,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
