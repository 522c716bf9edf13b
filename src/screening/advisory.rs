//! Advisory threshold policy.
//!
//! Exactly two bands: a strict `> 60` percent selects the high-risk message,
//! everything else the routine-surveillance message. Distinct from the
//! three-band gauge coloring in [`crate::dashboard`].

use serde::{Deserialize, Serialize};

/// Percent above which the high-risk advisory is shown. Strict comparison:
/// a score of exactly 60 stays routine.
pub const HIGH_RISK_THRESHOLD_PERCENT: f64 = 60.0;

const HIGH_RISK_MESSAGE: &str = "High-risk profile. An urgent consultation for an \
     upper digestive endoscopy is strongly recommended.";

const ROUTINE_MESSAGE: &str = "No criteria for immediate urgency, but routine \
     surveillance remains advisable.";

/// Which of the two advisory messages applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    Routine,
    HighRisk,
}

impl AdvisoryLevel {
    pub fn for_percent(percent: f64) -> Self {
        if percent > HIGH_RISK_THRESHOLD_PERCENT {
            Self::HighRisk
        } else {
            Self::Routine
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Routine => ROUTINE_MESSAGE,
            Self::HighRisk => HIGH_RISK_MESSAGE,
        }
    }
}

/// Advisory as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub message: String,
}

/// Select the advisory for a normalized risk percentage.
pub fn advisory_for(percent: f64) -> Advisory {
    let level = AdvisoryLevel::for_percent(percent);
    Advisory {
        level,
        message: level.message().to_string(),
    }
}
