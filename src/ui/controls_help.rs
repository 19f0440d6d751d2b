//! On-screen controls help display

/// Controls help panel state
pub struct ControlsHelpState {
    visible: bool,
}

impl ControlsHelpState {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Toggle help visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Render controls help panel
    pub fn render(&self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }

        let screen_rect = ctx.content_rect();
        let panel_width = 220.0;
        let panel_x = screen_rect.max.x - panel_width - 20.0;

        egui::Window::new("Controls")
            .fixed_pos(egui::pos2(panel_x, 20.0))
            .fixed_size(egui::vec2(panel_width, 0.0))
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                ui.label("Space - Pause / resume");
                ui.label("R - Restart with dirty water");
                ui.label("H - Toggle this help");
                ui.label("Esc - Quit");
            });
    }
}

impl Default for ControlsHelpState {
    fn default() -> Self {
        Self::new()
    }
}
