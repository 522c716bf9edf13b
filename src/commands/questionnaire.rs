//! Questionnaire IPC commands.
//!
//! Seven commands:
//! - `get_questionnaire`: snapshot of the current symptom state
//! - `set_symptom_intensity`: 0–10 slider value for an intensity symptom
//! - `set_weight_loss`: kilograms lost over the last three months
//! - `set_reflux`: chronic reflux checkbox
//! - `set_exposure`: tobacco/alcohol consumption level
//! - `analyze_description`: free-text keyword detection with user feedback
//! - `reset_questionnaire`: back to session defaults

use std::str::FromStr;
use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::enums::{ExposureLevel, SymptomId};
use crate::models::symptom::SymptomState;
use crate::screening::keywords;

/// Free-text descriptions longer than this are rejected.
const MAX_DESCRIPTION_LEN: usize = 2000;

fn validate_description(text: &str) -> Result<(), String> {
    if text.len() > MAX_DESCRIPTION_LEN {
        return Err(format!(
            "Description must be {MAX_DESCRIPTION_LEN} characters or fewer"
        ));
    }
    Ok(())
}

/// Returns the current questionnaire state.
#[tauri::command]
pub fn get_questionnaire(state: State<'_, Arc<CoreState>>) -> Result<SymptomState, String> {
    state.snapshot().map_err(|e| e.to_string())
}

/// Sets a 0–10 intensity value for one of the intensity symptoms.
#[tauri::command]
pub fn set_symptom_intensity(
    symptom: String,
    value: u8,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let id = SymptomId::from_str(&symptom).map_err(|e| e.to_string())?;

    let mut questionnaire = state.write_questionnaire().map_err(|e| e.to_string())?;
    questionnaire.set_intensity(id, value).map_err(|e| e.to_string())
}

/// Sets kilograms lost over the last three months (0–50).
#[tauri::command]
pub fn set_weight_loss(
    kilograms: u8,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let mut questionnaire = state.write_questionnaire().map_err(|e| e.to_string())?;
    questionnaire.set_weight_loss(kilograms).map_err(|e| e.to_string())
}

/// Toggles the chronic gastro-esophageal reflux flag.
#[tauri::command]
pub fn set_reflux(present: bool, state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    let mut questionnaire = state.write_questionnaire().map_err(|e| e.to_string())?;
    questionnaire.set_reflux(present);
    Ok(())
}

/// Sets the tobacco/alcohol consumption level.
#[tauri::command]
pub fn set_exposure(level: String, state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    let level = ExposureLevel::from_str(&level).map_err(|e| e.to_string())?;

    let mut questionnaire = state.write_questionnaire().map_err(|e| e.to_string())?;
    questionnaire.set_exposure(level);
    Ok(())
}

/// Scans a free-text description for symptom keywords, records the matches,
/// and returns the detected symptom labels for user feedback.
#[tauri::command]
pub fn analyze_description(
    text: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<String>, String> {
    validate_description(&text)?;

    let mut questionnaire = state.write_questionnaire().map_err(|e| e.to_string())?;
    let detected = keywords::detect_symptoms(&text, &mut questionnaire);

    tracing::debug!(count = detected.len(), "Free-text symptom scan");
    Ok(detected.iter().map(|s| s.label().to_string()).collect())
}

/// Resets the questionnaire to all-clear defaults.
#[tauri::command]
pub fn reset_questionnaire(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    state.reset_questionnaire().map_err(|e| e.to_string())
}
