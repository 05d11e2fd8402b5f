// Configuration module
// Centralized management of application configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed demo link loaded by the "Use Demo" control.
pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// URL filled in by the "Use Demo" control.
    pub demo_url: String,
    /// How long the "Demo URL loaded!" notice stays visible.
    pub demo_notice_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            demo_url: DEMO_VIDEO_URL.to_string(),
            demo_notice_ms: 2000,
        }
    }
}

impl StudioConfig {
    pub fn demo_notice_duration(&self) -> Duration {
        Duration::from_millis(self.demo_notice_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.demo_url, DEMO_VIDEO_URL);
        assert_eq!(config.demo_notice_duration(), Duration::from_millis(2000));
    }
}
