pub mod revealed_gallery;
pub mod stats_panel;

pub use revealed_gallery::RevealedGallery;
pub use stats_panel::StatsPanel;
