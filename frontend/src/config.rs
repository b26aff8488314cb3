use log::warn;
use shared::WheelConfig;
use web_sys::{window, Element};

pub const WHEEL_CONFIG_ATTRIBUTE: &str = "data-wheel-config";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.is_empty() {
                // Same origin as the page serving the widget
                let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    // Default to the local dev server
    "http://127.0.0.1:8080".to_string()
}

pub fn api_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}

/// Reads an optional JSON override from the trigger's `data-wheel-config`
/// attribute. Unknown or malformed overrides fall back to the defaults.
pub fn read_wheel_config(element: &Element) -> WheelConfig {
    match element.get_attribute(WHEEL_CONFIG_ATTRIBUTE) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed {}: {}", WHEEL_CONFIG_ATTRIBUTE, e);
            WheelConfig::default()
        }),
        None => WheelConfig::default(),
    }
}
