//! Fixed-weight risk scorer.
//!
//! A weighted sum over the questionnaire state, normalized to a 0–100
//! percentage. Weights and the normalization constant are fixed; there is
//! no configuration surface and no calibration against clinical data.

use crate::models::enums::ExposureLevel;
use crate::models::symptom::{SymptomState, SymptomValue};

/// Multiplier applied to every 0–10 intensity value.
pub const INTENSITY_WEIGHT: f64 = 1.5;

/// Weight loss above this many kilograms scores points.
pub const WEIGHT_LOSS_THRESHOLD_KG: u8 = 5;

/// Points for weight loss beyond the threshold.
pub const WEIGHT_LOSS_POINTS: f64 = 5.0;

/// Points for a set chronic reflux flag.
pub const REFLUX_POINTS: f64 = 3.0;

/// Points for tobacco/alcohol consumption at the highest level only.
pub const HIGH_EXPOSURE_POINTS: f64 = 4.0;

/// Raw score divisor before conversion to a percentage.
pub const NORMALIZATION_CONSTANT: f64 = 30.0;

/// Upper clamp of the normalized score. No lower clamp is needed since
/// every contribution is non-negative.
pub const MAX_PERCENT: f64 = 100.0;

/// Score contribution of a single symptom value.
pub fn contribution(value: SymptomValue) -> f64 {
    match value {
        SymptomValue::Intensity(i) => f64::from(i) * INTENSITY_WEIGHT,
        SymptomValue::Kilograms(kg) => {
            if kg > WEIGHT_LOSS_THRESHOLD_KG {
                WEIGHT_LOSS_POINTS
            } else {
                0.0
            }
        }
        SymptomValue::Present(true) => REFLUX_POINTS,
        SymptomValue::Present(false) => 0.0,
        SymptomValue::Exposure(ExposureLevel::High) => HIGH_EXPOSURE_POINTS,
        SymptomValue::Exposure(_) => 0.0,
    }
}

/// Unnormalized weighted sum over all six symptoms.
pub fn raw_score(state: &SymptomState) -> f64 {
    state
        .entries()
        .iter()
        .map(|(_, value)| contribution(*value))
        .sum()
}

/// Normalized risk percentage in [0, 100].
pub fn risk_percent(state: &SymptomState) -> f64 {
    (raw_score(state) / NORMALIZATION_CONSTANT * 100.0).min(MAX_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::SymptomId;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn intensity_contribution_matches_weight() {
        for i in 0..=10u8 {
            assert!(approx(
                contribution(SymptomValue::Intensity(i)),
                f64::from(i) * 1.5
            ));
        }
    }

    #[test]
    fn intensity_contribution_is_monotonic() {
        let mut previous = -1.0;
        for i in 0..=10u8 {
            let c = contribution(SymptomValue::Intensity(i));
            assert!(c > previous);
            previous = c;
        }
    }

    #[test]
    fn weight_loss_boundary_at_five_kg() {
        assert!(approx(contribution(SymptomValue::Kilograms(5)), 0.0));
        assert!(approx(contribution(SymptomValue::Kilograms(6)), 5.0));
        assert!(approx(contribution(SymptomValue::Kilograms(0)), 0.0));
        assert!(approx(contribution(SymptomValue::Kilograms(50)), 5.0));
    }

    #[test]
    fn reflux_flag_contribution() {
        assert!(approx(contribution(SymptomValue::Present(true)), 3.0));
        assert!(approx(contribution(SymptomValue::Present(false)), 0.0));
    }

    #[test]
    fn only_high_exposure_scores() {
        assert!(approx(
            contribution(SymptomValue::Exposure(ExposureLevel::None)),
            0.0
        ));
        assert!(approx(
            contribution(SymptomValue::Exposure(ExposureLevel::Moderate)),
            0.0
        ));
        assert!(approx(
            contribution(SymptomValue::Exposure(ExposureLevel::High)),
            4.0
        ));
    }

    #[test]
    fn all_clear_state_scores_zero() {
        let state = SymptomState::new();
        assert!(approx(raw_score(&state), 0.0));
        assert!(approx(risk_percent(&state), 0.0));
    }

    #[test]
    fn classic_high_risk_scenario_scores_ninety() {
        // dysphagia 10, 10 kg lost, reflux, high exposure:
        // 15 + 5 + 3 + 4 = 27 → 27/30 × 100 = 90
        let mut state = SymptomState::new();
        state.set_intensity(SymptomId::Dysphagia, 10).unwrap();
        state.set_weight_loss(10).unwrap();
        state.set_reflux(true);
        state.set_exposure(ExposureLevel::High);

        assert!(approx(raw_score(&state), 27.0));
        assert!(approx(risk_percent(&state), 90.0));
    }

    #[test]
    fn score_clamped_to_one_hundred() {
        // Everything maxed: 3 × 15 + 5 + 3 + 4 = 57 raw → 190 unclamped
        let mut state = SymptomState::new();
        state.set_intensity(SymptomId::Dysphagia, 10).unwrap();
        state.set_intensity(SymptomId::ChestPain, 10).unwrap();
        state.set_intensity(SymptomId::Anemia, 10).unwrap();
        state.set_weight_loss(50).unwrap();
        state.set_reflux(true);
        state.set_exposure(ExposureLevel::High);

        assert!(approx(raw_score(&state), 57.0));
        assert!(approx(risk_percent(&state), 100.0));
    }

    #[test]
    fn every_intensity_symptom_carries_the_weight() {
        for symptom in [SymptomId::Dysphagia, SymptomId::ChestPain, SymptomId::Anemia] {
            let mut state = SymptomState::new();
            state.set_intensity(symptom, 4).unwrap();
            assert!(approx(raw_score(&state), 6.0), "failed for {symptom}");
        }
    }

    #[test]
    fn scorer_reads_without_mutating() {
        let mut state = SymptomState::new();
        state.set_intensity(SymptomId::Dysphagia, 3).unwrap();
        let before = state.clone();
        let first = risk_percent(&state);
        let second = risk_percent(&state);
        assert!(approx(first, second));
        assert_eq!(state, before);
    }

    #[test]
    fn risk_percent_stays_in_bounds() {
        for dysphagia in [0u8, 5, 10] {
            for kg in [0u8, 6, 50] {
                let mut state = SymptomState::new();
                state.set_intensity(SymptomId::Dysphagia, dysphagia).unwrap();
                state.set_weight_loss(kg).unwrap();
                let p = risk_percent(&state);
                assert!((0.0..=100.0).contains(&p));
            }
        }
    }
}
