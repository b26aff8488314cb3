pub mod use_reloaded;
pub mod use_revealed_options;
pub mod use_wheel_stats;

pub use use_reloaded::*;
pub use use_revealed_options::*;
pub use use_wheel_stats::*;
