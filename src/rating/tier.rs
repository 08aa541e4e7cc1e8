// Qualitative tier classification of the adjusted value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of six ordered quality tiers. Variants are declared worst-to-best so
/// the derived `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    BenchPlayer,
    RotationPlayer,
    SolidStarter,
    AllStar,
    MvpCandidate,
    AllTimeGreat,
}

impl Tier {
    /// Classify an adjusted value. Total over all finite inputs; thresholds
    /// are inclusive lower bounds, so a tie goes to the higher tier. NaN is
    /// never seen here because the validator rejects non-finite stats.
    pub fn from_adjusted(adjusted: f64) -> Self {
        if adjusted >= 30.0 {
            Self::AllTimeGreat
        } else if adjusted >= 25.0 {
            Self::MvpCandidate
        } else if adjusted >= 20.0 {
            Self::AllStar
        } else if adjusted >= 15.0 {
            Self::SolidStarter
        } else if adjusted >= 13.0 {
            Self::RotationPlayer
        } else {
            Self::BenchPlayer
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AllTimeGreat => "All-time great season",
            Self::MvpCandidate => "MVP candidate",
            Self::AllStar => "All-Star caliber",
            Self::SolidStarter => "Solid starter",
            Self::RotationPlayer => "Rotation player",
            Self::BenchPlayer => "Bench player",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
