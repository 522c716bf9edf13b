//! Risk dashboard — the single aggregate the presentation layer renders.
//!
//! One pure function of the questionnaire state produces everything the
//! frontend needs: the normalized percentage, the three-band gauge
//! coloring, the radar axes, and the binary advisory. Recomputed on every
//! read; nothing here is stored.

use serde::{Deserialize, Serialize};

use crate::models::symptom::SymptomState;
use crate::screening::advisory::{advisory_for, Advisory};
use crate::screening::profile::{radar_profile, RadarAxis};
use crate::screening::scorer::risk_percent;

/// Gauge coloring tier. Three bands — distinct from the binary advisory
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// Fixed gauge segments: band, lower bound, upper bound.
pub const GAUGE_SEGMENTS: [(RiskBand, f64, f64); 3] = [
    (RiskBand::Low, 0.0, 30.0),
    (RiskBand::Medium, 30.0, 70.0),
    (RiskBand::High, 70.0, 100.0),
];

impl RiskBand {
    /// Band for a normalized percentage. Segment bounds are half-open:
    /// 30 is medium, 70 is high.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 30.0 {
            Self::Low
        } else if percent < 70.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "orange",
            Self::High => "red",
        }
    }
}

/// One colored segment of the gauge arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSegment {
    pub band: RiskBand,
    pub from: f64,
    pub to: f64,
    pub color: String,
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDashboard {
    pub risk_percent: f64,
    pub band: RiskBand,
    pub gauge: Vec<GaugeSegment>,
    pub radar: Vec<RadarAxis>,
    pub advisory: Advisory,
}

/// Assemble the full dashboard for the current questionnaire state.
pub fn build_dashboard(state: &SymptomState) -> RiskDashboard {
    let percent = risk_percent(state);
    RiskDashboard {
        risk_percent: percent,
        band: RiskBand::for_percent(percent),
        gauge: gauge_segments(),
        radar: radar_profile(state),
        advisory: advisory_for(percent),
    }
}

fn gauge_segments() -> Vec<GaugeSegment> {
    GAUGE_SEGMENTS
        .iter()
        .map(|(band, from, to)| GaugeSegment {
            band: *band,
            from: *from,
            to: *to,
            color: band.color().to_string(),
        })
        .collect()
}
