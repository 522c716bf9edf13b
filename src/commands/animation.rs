//! Intro animation IPC command.

use crate::animation::{AnimationSource, HttpAnimationSource};

/// Fetches the decorative welcome animation. `None` on any failure — the
/// frontend simply renders without it.
#[tauri::command]
pub fn get_intro_animation() -> Option<serde_json::Value> {
    HttpAnimationSource::default_remote().fetch()
}
