use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunables for one wheel widget. `Default` reproduces the stock widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WheelConfig {
    pub spin_endpoint: String,
    pub stats_endpoint: String,
    pub revealed_endpoint: String,
    pub complete_endpoint: String,
    pub spin_degrees: u32,
    pub spin_duration_ms: u32,
    pub spin_easing: String,
    pub reveal_delay_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_endpoint: SPIN_ENDPOINT.to_string(),
            stats_endpoint: STATS_ENDPOINT.to_string(),
            revealed_endpoint: REVEALED_ENDPOINT.to_string(),
            complete_endpoint: COMPLETE_ENDPOINT.to_string(),
            spin_degrees: SPIN_DEGREES,
            spin_duration_ms: SPIN_DURATION_MS,
            spin_easing: SPIN_EASING.to_string(),
            reveal_delay_ms: REVEAL_DELAY_MS,
        }
    }
}

impl WheelConfig {
    pub fn spin_transition(&self) -> String {
        format!("transform {} {}", format_duration(self.spin_duration_ms), self.spin_easing)
    }

    pub fn spin_transform(&self) -> String {
        rotate(self.spin_degrees)
    }

    pub fn reset_transform(&self) -> String {
        rotate(0)
    }
}

fn rotate(degrees: u32) -> String {
    format!("rotate({}deg)", degrees)
}

fn format_duration(millis: u32) -> String {
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{}ms", millis)
    }
}
