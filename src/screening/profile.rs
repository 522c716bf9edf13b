//! Radar profile builder.
//!
//! Projects the six symptoms onto numeric radar axes in the fixed key order.
//! The axes are ranged 0–10; boolean and ordinal values are coerced to a
//! constant placeholder since they have no natural position on that range.
//! The coercion is lossy and deliberate.

use serde::{Deserialize, Serialize};

use crate::models::enums::SymptomId;
use crate::models::symptom::{SymptomState, SymptomValue};

/// Radar axis range upper bound.
pub const RADAR_AXIS_MAX: f64 = 10.0;

/// Placeholder drawn for boolean and ordinal symptoms.
pub const RADAR_PLACEHOLDER: f64 = 5.0;

/// One radar axis: symptom, display label, plotted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub symptom: SymptomId,
    pub label: String,
    pub value: f64,
}

/// Build the six radar axes in the fixed key order.
pub fn radar_profile(state: &SymptomState) -> Vec<RadarAxis> {
    state
        .entries()
        .iter()
        .map(|(symptom, value)| RadarAxis {
            symptom: *symptom,
            label: symptom.label().to_string(),
            value: radar_value(*value),
        })
        .collect()
}

fn radar_value(value: SymptomValue) -> f64 {
    match value {
        SymptomValue::Intensity(i) => f64::from(i),
        // Kilograms pass through unclamped; a large loss draws past the
        // 0–10 axis, matching the original dashboard.
        SymptomValue::Kilograms(kg) => f64::from(kg),
        SymptomValue::Present(_) | SymptomValue::Exposure(_) => RADAR_PLACEHOLDER,
    }
}
