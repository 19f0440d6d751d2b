//! Static table of filtration material properties

use egui::RichText;

use crate::materials::{COLUMNS, MATERIALS};

/// Draw the material properties grid into `ui`
pub fn show_materials_table(ui: &mut egui::Ui) {
    ui.label(RichText::new("Filtration Materials").strong());
    ui.add_space(4.0);

    egui::Grid::new("materials_table")
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for header in COLUMNS {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for material in &MATERIALS {
                for cell in material.cells() {
                    ui.label(cell);
                }
                ui.end_row();
            }
        });
}
