//! Spacer window.

use cog_core::DebugWindow;

/// An intentionally empty window. Useful as a placeholder panel when
/// arranging a layout, so real windows can be spread apart.
#[derive(Default)]
pub struct SpacingWindow;

impl DebugWindow for SpacingWindow {
    fn render_help(&self, ui: &mut egui::Ui) {
        ui.label("An empty window that can be used to organize the layout.");
    }

    fn render_content(&mut self, _ui: &mut egui::Ui) {}
}
