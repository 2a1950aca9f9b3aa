//! Process-wide configuration, resolved exactly once at startup.
//!
//! The deployment injects the backend location through an `API_BASE` window
//! global (set in `index.html` before the wasm bundle loads). `App` resolves
//! it into an immutable [`AppConfig`] and provides it through a
//! `ContextProvider`; the API client layer only ever sees the resolved
//! value, never the global.

use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    /// Reads the `API_BASE` window global, falling back to the same-origin
    /// default when unset.
    pub fn resolve() -> Self {
        let global = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("API_BASE")).ok())
            .and_then(|v| v.as_string());
        Self::from_global(global)
    }

    fn from_global(value: Option<String>) -> Self {
        let api_base = match value {
            Some(v) if !v.trim().is_empty() => v.trim().trim_end_matches('/').to_string(),
            _ => DEFAULT_API_BASE.to_string(),
        };
        AppConfig { api_base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_global_falls_back_to_default() {
        assert_eq!(AppConfig::from_global(None).api_base, "/api");
        assert_eq!(AppConfig::from_global(Some("  ".into())).api_base, "/api");
    }

    #[test]
    fn configured_base_is_normalized() {
        let cfg = AppConfig::from_global(Some("https://api.example.com/v1/".into()));
        assert_eq!(cfg.api_base, "https://api.example.com/v1");
    }
}
