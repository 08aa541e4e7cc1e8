// Stat-line validation: everything that must hold before the formula runs.

use thiserror::Error;

use crate::rating::stats::{PlayerStats, StatField};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A validation failure. Every variant is deterministic for a given input and
/// user-correctable; none is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be negative (got {value})")]
    NegativeValue { field: StatField, value: f64 },

    #[error("{field} is not a finite number")]
    NonFiniteValue { field: StatField },

    #[error("playing time must be greater than zero")]
    ZeroPlayingTime,

    #[error("{field} ({value}) cannot exceed {limit_field} ({limit})")]
    InconsistentShotData {
        field: StatField,
        value: f64,
        limit_field: StatField,
        limit: f64,
    },

    #[error("points total ({supplied}) does not match the value implied by made shots ({computed})")]
    PointsMismatch { supplied: f64, computed: f64 },
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Shot categories where the made count is bounded by an attempt count, plus
/// the containment rules for three-pointers (a three is a field goal).
const SHOT_BOUNDS: [(StatField, StatField); 5] = [
    (StatField::FieldGoalsMade, StatField::FieldGoalsAttempted),
    (StatField::ThreesMade, StatField::ThreesAttempted),
    (StatField::FreeThrowsMade, StatField::FreeThrowsAttempted),
    (StatField::ThreesMade, StatField::FieldGoalsMade),
    (StatField::ThreesAttempted, StatField::FieldGoalsAttempted),
];

/// Check a stat line for negative values and logical consistency.
///
/// Purely a predicate plus structured diagnostic: no side effects, and the
/// first rule violated (in a fixed order) is reported. The formula engine
/// must not be invoked unless this returns `Ok`.
pub fn validate(stats: &PlayerStats) -> Result<(), ValidationError> {
    // Finiteness and sign, over the full closed field set.
    for field in StatField::ALL {
        if let Some(value) = field.value_in(stats) {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteValue { field });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeValue { field, value });
            }
        }
    }

    // The formula divides by playing time, so this is a hard precondition.
    if stats.minutes <= 0.0 {
        return Err(ValidationError::ZeroPlayingTime);
    }
    if let Some(games) = stats.games_played {
        if games <= 0.0 {
            return Err(ValidationError::ZeroPlayingTime);
        }
    }

    for (field, limit_field) in SHOT_BOUNDS {
        // Both sides are always present; SHOT_BOUNDS never names an optional field.
        let value = field.value_in(stats).unwrap_or(0.0);
        let limit = limit_field.value_in(stats).unwrap_or(0.0);
        if value > limit {
            return Err(ValidationError::InconsistentShotData {
                field,
                value,
                limit_field,
                limit,
            });
        }
    }

    // Exact equality: counting stats are whole numbers, so no tolerance.
    if let Some(supplied) = stats.points {
        let computed = stats.reconstructed_points();
        if supplied != computed {
            return Err(ValidationError::PointsMismatch { supplied, computed });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
