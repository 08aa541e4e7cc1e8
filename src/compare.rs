// Caller-owned comparison set of rated players.
//
// The engine itself keeps no session state; a caller that wants to compare
// players holds one of these. Entries are immutable once added, and the
// league context and weight table are fixed at construction so every entry
// in a set is rated on the same scale.

use thiserror::Error;

use crate::rating::{
    validate_and_compute, FormulaWeights, LeagueContext, PlayerRating, PlayerStats, RatingError,
};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("player '{name}' is already in the comparison set")]
    DuplicatePlayer { name: String },

    #[error(transparent)]
    Rating(#[from] RatingError),
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One rated player in a comparison set.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub stats: PlayerStats,
    pub rating: PlayerRating,
}

/// An explicit, caller-owned collection of immutable rating results.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    league: LeagueContext,
    weights: FormulaWeights,
    entries: Vec<ComparisonEntry>,
}

impl ComparisonSet {
    pub fn new(league: LeagueContext, weights: FormulaWeights) -> Self {
        Self {
            league,
            weights,
            entries: Vec::new(),
        }
    }

    /// Rate a stat line and add it to the set. Rejects a second entry with
    /// the same player name; a line that fails validation is not added.
    pub fn add(&mut self, stats: PlayerStats) -> Result<(), CompareError> {
        if self.entries.iter().any(|e| e.stats.name == stats.name) {
            return Err(CompareError::DuplicatePlayer { name: stats.name });
        }
        let rating = validate_and_compute(&stats, &self.league, &self.weights)?;
        self.entries.push(ComparisonEntry { stats, rating });
        Ok(())
    }

    /// Remove a player by name. Returns whether an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.stats.name != name);
        self.entries.len() < before
    }

    /// Entries sorted descending by adjusted value.
    pub fn ranked(&self) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<&ComparisonEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.rating
                .adjusted_value
                .partial_cmp(&a.rating.adjusted_value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::new(LeagueContext::default(), FormulaWeights::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
