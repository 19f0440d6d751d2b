//! Central UI state management

use egui::Color32;

use super::clarity_panel::show_clarity_panel;
use super::controls_help::ControlsHelpState;
use super::materials_table::show_materials_table;
use crate::simulation::ClaritySimulation;

/// Central UI state container
pub struct UiState {
    /// Controls help panel
    pub controls_help: ControlsHelpState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            controls_help: ControlsHelpState::new(),
        }
    }

    /// Toggle controls help visibility
    pub fn toggle_help(&mut self) {
        self.controls_help.toggle();
    }

    /// Render all UI elements
    pub fn render(&self, ctx: &egui::Context, sim: &ClaritySimulation) {
        // Transparent panel so the water tint shows through
        egui::CentralPanel::default()
            .frame(egui::Frame::new().inner_margin(16.0))
            .show(ctx, |ui| {
                ui.heading("Solar Distillation Simulator");
                ui.add_space(8.0);

                overlay_frame().show(ui, |ui| {
                    show_clarity_panel(ui, sim);
                });

                ui.add_space(12.0);

                overlay_frame().show(ui, |ui| {
                    show_materials_table(ui);
                });

                ui.add_space(8.0);
                ui.small("Press H for controls");
            });

        self.controls_help.render(ctx);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn overlay_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 180))
        .inner_margin(10.0)
        .corner_radius(4.0)
}
