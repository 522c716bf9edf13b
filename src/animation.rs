//! Decorative intro animation — best-effort remote fetch.
//!
//! The welcome card shows a Lottie animation fetched from a fixed URL. It
//! is pure decoration: every failure mode (offline, non-success status,
//! malformed body) yields `None` and the app renders without it. No retry,
//! no user-facing error. The source is injectable so nothing downstream
//! depends on network reachability.

use serde_json::Value;

use crate::config;

/// Supplier of the optional animation payload.
pub trait AnimationSource {
    /// The animation JSON, or `None` when unavailable for any reason.
    fn fetch(&self) -> Option<Value>;
}

/// Fetches the animation over HTTP with a bounded timeout.
pub struct HttpAnimationSource {
    client: reqwest::blocking::Client,
    url: String,
    timeout_secs: u64,
}

impl HttpAnimationSource {
    pub fn new(url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.to_string(),
            timeout_secs,
        }
    }

    /// The configured remote asset with the default timeout.
    pub fn default_remote() -> Self {
        Self::new(
            config::INTRO_ANIMATION_URL,
            config::INTRO_ANIMATION_TIMEOUT_SECS,
        )
    }
}

impl AnimationSource for HttpAnimationSource {
    fn fetch(&self) -> Option<Value> {
        let response = match self.client.get(&self.url).send() {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                tracing::debug!(url = %self.url, timeout_secs = self.timeout_secs, "Animation fetch timed out, skipping");
                return None;
            }
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "Animation fetch failed, skipping");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(url = %self.url, status = %response.status(), "Animation fetch non-success, skipping");
            return None;
        }

        response.json().ok()
    }
}

/// Source that never yields an animation — offline default and test stand-in.
pub struct NoopAnimationSource;

impl AnimationSource for NoopAnimationSource {
    fn fetch(&self) -> Option<Value> {
        None
    }
}

/// Source returning a fixed payload — for tests.
pub struct StaticAnimationSource {
    payload: Value,
}

impl StaticAnimationSource {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

impl AnimationSource for StaticAnimationSource {
    fn fetch(&self) -> Option<Value> {
        Some(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn noop_source_yields_nothing() {
        assert!(NoopAnimationSource.fetch().is_none());
    }

    #[test]
    fn static_source_yields_payload() {
        let source = StaticAnimationSource::new(json!({"v": "5.5.7", "layers": []}));
        let payload = source.fetch().unwrap();
        assert_eq!(payload["v"], "5.5.7");
    }

    #[test]
    fn http_source_records_configuration() {
        let source = HttpAnimationSource::new("https://example.invalid/anim.json", 3);
        assert_eq!(source.url, "https://example.invalid/anim.json");
        assert_eq!(source.timeout_secs, 3);
    }

    #[test]
    fn default_remote_uses_configured_url() {
        let source = HttpAnimationSource::default_remote();
        assert_eq!(source.url, config::INTRO_ANIMATION_URL);
        assert_eq!(source.timeout_secs, config::INTRO_ANIMATION_TIMEOUT_SECS);
    }

    #[test]
    fn connection_failure_yields_none() {
        // Discard port on loopback: connection refused, no crash, no payload.
        let source = HttpAnimationSource::new("http://127.0.0.1:9/anim.json", 1);
        assert!(source.fetch().is_none());
    }

    #[test]
    fn sources_work_as_trait_objects() {
        let sources: Vec<Box<dyn AnimationSource>> = vec![
            Box::new(NoopAnimationSource),
            Box::new(StaticAnimationSource::new(json!({}))),
        ];
        assert!(sources[0].fetch().is_none());
        assert!(sources[1].fetch().is_some());
    }
}
