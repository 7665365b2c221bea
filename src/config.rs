//! App Configuration
//!
//! Read once at startup from an inline JSON element:
//! `<script id="app-config" type="application/json">{ ... }</script>`.
//! Every field has a default, so a missing element means defaults.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which backend the store talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendChoice {
    /// Tauri when the host injected `window.__TAURI__`, memory otherwise
    #[default]
    Auto,
    Tauri,
    Memory,
}

/// Resolved backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Tauri,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendChoice,
    /// How long the error banner stays up
    pub error_display_ms: u32,
    /// Simulated round-trip of the memory backend
    pub memory_latency_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendChoice::Auto,
            error_display_ms: 3000,
            memory_latency_ms: 0,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from the page. Absent or blank element yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&text)
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn resolve_backend(&self, tauri_present: bool) -> BackendKind {
        match self.backend {
            BackendChoice::Tauri => BackendKind::Tauri,
            BackendChoice::Memory => BackendKind::Memory,
            BackendChoice::Auto if tauri_present => BackendKind::Tauri,
            BackendChoice::Auto => BackendKind::Memory,
        }
    }
}

/// Whether the page runs inside a Tauri webview
pub fn tauri_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &"__TAURI__".into()).ok())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}
