//! UI system - clarity readout, materials table and controls help

mod clarity_panel;
pub mod controls_help;
mod materials_table;
pub mod ui_state;

pub use clarity_panel::{level_color, show_clarity_panel};
pub use controls_help::ControlsHelpState;
pub use materials_table::show_materials_table;
pub use ui_state::UiState;
