/// Application-level constants
pub const APP_NAME: &str = "OesoScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote Lottie JSON shown on the welcome card. Purely decorative;
/// any fetch failure is skipped silently.
pub const INTRO_ANIMATION_URL: &str =
    "https://assets5.lottiefiles.com/packages/lf20_5njp3vnu.json";

/// Timeout for the decorative animation fetch.
pub const INTRO_ANIMATION_TIMEOUT_SECS: u64 = 5;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,oesoscan_lib=debug".to_string()
}
