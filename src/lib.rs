pub mod animation;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod dashboard;
pub mod models;
pub mod screening;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("OesoScan starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::questionnaire::get_questionnaire,
            commands::questionnaire::set_symptom_intensity,
            commands::questionnaire::set_weight_loss,
            commands::questionnaire::set_reflux,
            commands::questionnaire::set_exposure,
            commands::questionnaire::analyze_description,
            commands::questionnaire::reset_questionnaire,
            commands::dashboard::get_risk_dashboard,
            commands::animation::get_intro_animation,
        ])
        .run(tauri::generate_context!())
        .expect("error while running OesoScan");
}
