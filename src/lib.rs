//! # Solar Still - Water Clarity Visualization
//!
//! Animates the clarity of water in a solar still climbing from dirty (0.0)
//! to clear (1.0), next to a reference table of filtration materials.

pub mod app;
pub mod config;
pub mod error;
pub mod headless;
pub mod materials;
pub mod render;
pub mod simulation;
pub mod ui;

pub use app::App;
pub use config::SimConfig;
pub use error::ConfigError;
