use serde::{Deserialize, Serialize};

use crate::error::{ensure_success, SpinError};

/// Counters served by `GET /api/wheel/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelStats {
    pub total: u64,
    pub completed: u64,
    pub revealed: u64,
    pub completion_percentage: u64,
    pub revealed_percentage: u64,
}

impl WheelStats {
    pub fn from_json(body: &str) -> Result<Self, SpinError> {
        serde_json::from_str(body).map_err(|e| SpinError::Decode(e.to_string()))
    }

    pub fn from_response(status: u16, body: &str) -> Result<Self, SpinError> {
        ensure_success(status)?;
        Self::from_json(body)
    }

    pub fn revealed_label(&self) -> String {
        format!("{} / {} ({}%)", self.revealed, self.total, self.revealed_percentage)
    }

    pub fn completed_label(&self) -> String {
        format!("{} / {} ({}%)", self.completed, self.total, self.completion_percentage)
    }
}
