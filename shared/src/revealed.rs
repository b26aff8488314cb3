use serde::{Deserialize, Serialize};

use crate::error::{ensure_success, SpinError};
use crate::validation::validate_css_color;

/// Colour used when an option has none, or one we will not put in a style.
pub const NEUTRAL_COLOR: &str = "#2d3748";

/// A wheel option the player has already uncovered, as served by
/// `GET /api/wheel/revealed` and `POST /api/wheel/complete/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelOption {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub anime_character: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl WheelOption {
    pub fn from_response(status: u16, body: &str) -> Result<Self, SpinError> {
        ensure_success(status)?;
        serde_json::from_str(body).map_err(|e| SpinError::Decode(e.to_string()))
    }

    pub fn list_from_response(status: u16, body: &str) -> Result<Vec<Self>, SpinError> {
        ensure_success(status)?;
        serde_json::from_str(body).map_err(|e| SpinError::Decode(e.to_string()))
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }

    pub fn title(&self) -> String {
        match self.icon.as_deref().map(str::trim).filter(|icon| !icon.is_empty()) {
            Some(icon) => format!("{} {}", icon, self.text),
            None => self.text.clone(),
        }
    }

    pub fn accent_color(&self) -> &str {
        match self.color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() && validate_css_color(color).is_ok() => color,
            _ => NEUTRAL_COLOR,
        }
    }
}

/// `POST` path that marks option `id` completed.
pub fn complete_path(endpoint: &str, id: i64) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), id)
}

/// Swaps in the server's copy of a just-completed option.
pub fn apply_completion(options: &mut Vec<WheelOption>, updated: WheelOption) {
    match options.iter_mut().find(|option| option.id == updated.id) {
        Some(slot) => *slot = updated,
        None => options.push(updated),
    }
}
