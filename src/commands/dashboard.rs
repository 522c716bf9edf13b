//! Risk dashboard IPC command.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::dashboard::{build_dashboard, RiskDashboard};

/// Recomputes and returns the full dashboard view model for the current
/// questionnaire state.
#[tauri::command]
pub fn get_risk_dashboard(state: State<'_, Arc<CoreState>>) -> Result<RiskDashboard, String> {
    let questionnaire = state.read_questionnaire().map_err(|e| e.to_string())?;
    Ok(build_dashboard(&questionnaire))
}
