//! Questionnaire state — six fixed symptoms, each with its own value shape.
//!
//! The state lives for one session, starts at all-clear defaults, and is
//! mutated only by the questionnaire widgets or the free-text detector.
//! The scorer and profile builder read it, never write it.

use serde::{Deserialize, Serialize};

use super::enums::{ExposureLevel, SymptomId};

/// Upper bound of a 0–10 intensity slider.
pub const INTENSITY_MAX: u8 = 10;

/// Upper bound of the weight-loss field, in kilograms over three months.
pub const WEIGHT_LOSS_MAX_KG: u8 = 50;

/// Value a free-text keyword match writes into the matched symptom.
pub const PRESENT_INDICATOR: u8 = 1;

/// Errors from symptom state mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymptomError {
    #[error("Intensity for {symptom} out of range: {value} (max {})", INTENSITY_MAX)]
    IntensityOutOfRange { symptom: SymptomId, value: u8 },
    #[error("Weight loss out of range: {value} kg (max {})", WEIGHT_LOSS_MAX_KG)]
    WeightLossOutOfRange { value: u8 },
    #[error("{symptom} does not take an intensity value")]
    NotAnIntensity { symptom: SymptomId },
}

/// One symptom's current value, tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SymptomValue {
    /// 0–10 slider intensity.
    Intensity(u8),
    /// Kilograms lost over the last three months, 0–50.
    Kilograms(u8),
    /// Boolean presence flag.
    Present(bool),
    /// Ordinal consumption level.
    Exposure(ExposureLevel),
}

/// The full questionnaire state. Keys are fixed; none is ever added or
/// removed at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomState {
    pub dysphagia: u8,
    pub weight_loss_kg: u8,
    pub chest_pain: u8,
    pub reflux: bool,
    pub tobacco_alcohol: ExposureLevel,
    pub anemia: u8,
}

impl SymptomState {
    /// All-clear state: intensities and kilograms at 0, flag off,
    /// exposure at `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one symptom.
    pub fn value(&self, symptom: SymptomId) -> SymptomValue {
        match symptom {
            SymptomId::Dysphagia => SymptomValue::Intensity(self.dysphagia),
            SymptomId::WeightLoss => SymptomValue::Kilograms(self.weight_loss_kg),
            SymptomId::ChestPain => SymptomValue::Intensity(self.chest_pain),
            SymptomId::Reflux => SymptomValue::Present(self.reflux),
            SymptomId::TobaccoAlcohol => SymptomValue::Exposure(self.tobacco_alcohol),
            SymptomId::Anemia => SymptomValue::Intensity(self.anemia),
        }
    }

    /// All six entries in the fixed key order.
    pub fn entries(&self) -> [(SymptomId, SymptomValue); 6] {
        SymptomId::ALL.map(|id| (id, self.value(id)))
    }

    /// Set a 0–10 intensity. Errors for non-intensity symptoms and
    /// out-of-range values.
    pub fn set_intensity(&mut self, symptom: SymptomId, value: u8) -> Result<(), SymptomError> {
        if value > INTENSITY_MAX {
            return Err(SymptomError::IntensityOutOfRange { symptom, value });
        }
        match symptom {
            SymptomId::Dysphagia => self.dysphagia = value,
            SymptomId::ChestPain => self.chest_pain = value,
            SymptomId::Anemia => self.anemia = value,
            other => return Err(SymptomError::NotAnIntensity { symptom: other }),
        }
        Ok(())
    }

    /// Set kilograms lost, 0–50.
    pub fn set_weight_loss(&mut self, kilograms: u8) -> Result<(), SymptomError> {
        if kilograms > WEIGHT_LOSS_MAX_KG {
            return Err(SymptomError::WeightLossOutOfRange { value: kilograms });
        }
        self.weight_loss_kg = kilograms;
        Ok(())
    }

    /// Toggle the chronic reflux flag.
    pub fn set_reflux(&mut self, present: bool) {
        self.reflux = present;
    }

    /// Set the tobacco/alcohol consumption level.
    pub fn set_exposure(&mut self, level: ExposureLevel) {
        self.tobacco_alcohol = level;
    }

    /// Record a free-text keyword match: numeric symptoms get the fixed
    /// present indicator, the reflux flag is raised. Graded exposure has no
    /// single presence value and is never covered by the keyword table.
    pub fn mark_present(&mut self, symptom: SymptomId) {
        match symptom {
            SymptomId::Dysphagia => self.dysphagia = PRESENT_INDICATOR,
            SymptomId::WeightLoss => self.weight_loss_kg = PRESENT_INDICATOR,
            SymptomId::ChestPain => self.chest_pain = PRESENT_INDICATOR,
            SymptomId::Anemia => self.anemia = PRESENT_INDICATOR,
            SymptomId::Reflux => self.reflux = true,
            SymptomId::TobaccoAlcohol => {}
        }
    }
}
