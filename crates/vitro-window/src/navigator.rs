//! Navigator API
//!
//! Pure data tables presenting a desktop Linux profile. Every field
//! is a constant; the two methods are logging stubs.

use serde::Serialize;
use tracing::{debug, info};

/// window.navigator data
#[derive(Debug, Clone, Serialize)]
pub struct Navigator {
    pub user_agent: String,
    pub app_name: String,
    pub app_code_name: String,
    pub app_version: String,
    pub platform: String,
    pub vendor: String,
    pub language: String,
    pub languages: Vec<String>,
    pub hardware_concurrency: u32,
    pub max_touch_points: u32,
    pub on_line: bool,
    pub cookie_enabled: bool,
    pub webdriver: bool,
    pub pdf_viewer_enabled: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        let user_agent = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) vitro/0.1"
            .to_string();
        let app_version = user_agent
            .strip_prefix("Mozilla/")
            .unwrap_or(&user_agent)
            .to_string();
        Self {
            user_agent,
            app_name: "Netscape".to_string(),
            app_code_name: "Mozilla".to_string(),
            app_version,
            platform: "Linux x86_64".to_string(),
            vendor: String::new(),
            language: "en-US".to_string(),
            languages: vec!["en-US".to_string(), "en".to_string()],
            hardware_concurrency: 4,
            max_touch_points: 0,
            on_line: true,
            cookie_enabled: true,
            webdriver: false,
            pdf_viewer_enabled: false,
        }
    }
}

impl Navigator {
    /// Always false, like every modern browser
    pub fn java_enabled(&self) -> bool {
        debug!("navigator.javaEnabled() called");
        false
    }

    /// Logs the beacon and reports it as queued
    pub fn send_beacon(&self, url: &str, data: &str) -> bool {
        info!(url, bytes = data.len(), "navigator.sendBeacon (stub)");
        true
    }
}
