//! Clarity readout: headline label, progress bar and status text

use egui::{Color32, RichText};

use crate::simulation::{ClarityLevel, ClaritySimulation};

/// Label colour for a clarity level
pub fn level_color(level: ClarityLevel) -> Color32 {
    match level {
        ClarityLevel::Dirty => Color32::from_rgb(200, 150, 90),
        ClarityLevel::Filtering => Color32::from_rgb(240, 220, 120),
        ClarityLevel::Clear => Color32::from_rgb(140, 220, 255),
    }
}

/// Draw the clarity readout into `ui`
pub fn show_clarity_panel(ui: &mut egui::Ui, sim: &ClaritySimulation) {
    let clarity = sim.clarity();

    ui.label(
        RichText::new(sim.clarity_label())
            .size(22.0)
            .strong()
            .color(level_color(sim.level())),
    );

    ui.add(
        egui::ProgressBar::new(clarity.value() as f32)
            .desired_width(ui.available_width())
            .show_percentage(),
    );

    ui.add_space(6.0);
    ui.label(sim.status_text());

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!(
            "Still temperature: {:.1}°C   +{:.4} clarity/step",
            sim.temperature_c(),
            sim.increment()
        ))
        .small()
        .color(Color32::LIGHT_GRAY),
    );
}
