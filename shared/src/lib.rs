pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod reload;
pub mod revealed;
pub mod spin_handler;
pub mod spin_result;
pub mod validation;
pub mod wheel_stats;

pub use config::WheelConfig;
pub use display::{CardLine, DisplayContent, ResultCard};
pub use error::{ensure_success, SpinError};
pub use reload::ReloadTracker;
pub use revealed::{apply_completion, complete_path, WheelOption};
pub use spin_handler::{
    Delay, DisplayRegion, SpinHandler, SpinOutcome, SpinSource, TriggerControl, WheelElement,
};
pub use spin_result::SpinResult;
pub use wheel_stats::WheelStats;
