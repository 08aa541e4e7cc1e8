// Rating engine: validation, weighted formula, league normalization, tiers.
//
// Stateless and synchronous; every call builds its result from scratch, so
// concurrent callers need no locking and identical inputs always produce
// identical outputs.

pub mod formula;
pub mod stats;
pub mod tier;
pub mod validate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use formula::{ComponentBreakdown, FormulaWeights, LeagueContext};
pub use stats::{PlayerStats, StatField};
pub use tier::Tier;
pub use validate::ValidationError;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Any failure the engine can report. Always returned as a value, never a
/// panic, so callers can render the message inline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Defensive only: validation guarantees positive playing time, so the
    /// formula should never see a zero denominator.
    #[error("playing time of zero reached the formula engine")]
    DivisionByZero,
}

// ---------------------------------------------------------------------------
// PlayerRating
// ---------------------------------------------------------------------------

/// The full result of rating one stat line. Immutable; constructed fresh per
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerRating {
    /// Weighted per-36 productivity before league normalization.
    pub raw_value: f64,
    /// Raw value normalized for pace and league average; the scale where the
    /// league-wide mean is 15.0.
    pub adjusted_value: f64,
    pub tier: Tier,
    pub breakdown: ComponentBreakdown,
}

// ---------------------------------------------------------------------------
// Pipeline entry point
// ---------------------------------------------------------------------------

/// Validate a stat line, compute its raw and adjusted values, and classify
/// the result.
///
/// The stages always run in this order and never interleave; the formula is
/// unreachable for a line that fails validation. Defaults for the league
/// context and weights are `LeagueContext::default()` (neutral pace,
/// average 15.0) and `FormulaWeights::default()`.
pub fn validate_and_compute(
    stats: &PlayerStats,
    league: &LeagueContext,
    weights: &FormulaWeights,
) -> Result<PlayerRating, RatingError> {
    validate::validate(stats)?;

    let out = formula::compute_adjusted(stats, league, weights)?;

    Ok(PlayerRating {
        raw_value: out.raw_value,
        adjusted_value: out.adjusted_value,
        tier: Tier::from_adjusted(out.adjusted_value),
        breakdown: out.breakdown,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
