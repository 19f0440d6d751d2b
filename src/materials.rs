//! Filtration material reference data
//!
//! A fixed, read-only table describing the materials layered in the still.
//! It is shown alongside the simulation but does not feed into it.

use serde::Serialize;

/// Descriptive properties of one filtration material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Material {
    pub name: &'static str,
    /// How open the material's structure is
    pub porosity: &'static str,
    /// What the material binds as water passes through
    pub adsorption: &'static str,
    /// How readily water drains through a bed of it
    pub drainage: &'static str,
    pub particle_composition: &'static str,
}

/// Column headers, in display order
pub const COLUMNS: [&str; 5] = [
    "Material",
    "Porosity",
    "Adsorption",
    "Drainage",
    "Particle Composition",
];

/// The fixed material set: charcoal, gravel, magnet
pub const MATERIALS: [Material; 3] = [
    Material {
        name: "Charcoal",
        porosity: "High",
        adsorption: "Strong (traps toxins)",
        drainage: "Moderate",
        particle_composition: "Carbon-rich",
    },
    Material {
        name: "Gravel",
        porosity: "Moderate",
        adsorption: "Minimal",
        drainage: "Excellent",
        particle_composition: "Coarse and fine particles",
    },
    Material {
        name: "Magnet",
        porosity: "None",
        adsorption: "Selective for ferromagnetic metals",
        drainage: "Not applicable",
        particle_composition: "Metallic (for attraction)",
    },
];

impl Material {
    /// Look up a material by name, ignoring case
    pub fn find(name: &str) -> Option<&'static Material> {
        MATERIALS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Cell values in [`COLUMNS`] order
    pub fn cells(&self) -> [&'static str; 5] {
        [
            self.name,
            self.porosity,
            self.adsorption,
            self.drainage,
            self.particle_composition,
        ]
    }
}

/// Render the material table as aligned plain text
pub fn format_table() -> String {
    let mut widths = COLUMNS.map(str::len);
    for material in &MATERIALS {
        for (width, cell) in widths.iter_mut().zip(material.cells()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS, &widths);
    for material in &MATERIALS {
        push_row(&mut out, &material.cells(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
