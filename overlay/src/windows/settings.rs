//! Overlay settings window.

use cog_core::config::{OverlayConfig, WidgetAlignment};
use cog_core::DebugWindow;

use super::SharedConfig;

/// Edits the live display settings and shows the configured shortcuts.
pub struct SettingsWindow {
    config: SharedConfig,
}

impl SettingsWindow {
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }
}

impl DebugWindow for SettingsWindow {
    fn render_help(&self, ui: &mut egui::Ui) {
        ui.label("Display options for the overlay itself.");
    }

    fn render_content(&mut self, ui: &mut egui::Ui) {
        let mut config = self.config.borrow_mut();
        let display = &mut config.display;

        ui.checkbox(&mut display.compact_mode, "Compact mode");
        ui.checkbox(&mut display.transparent_mode, "Transparent mode");
        ui.checkbox(&mut display.show_help, "Show help");
        ui.checkbox(
            &mut display.show_windows_in_main_menu,
            "Show windows in main menu",
        );
        ui.checkbox(&mut display.show_widget_borders, "Show widget borders");
        ui.checkbox(
            &mut display.disable_shortcuts_when_text_input,
            "Disable shortcuts when typing",
        );

        egui::ComboBox::from_label("Widget alignment")
            .selected_text(format!("{:?}", display.widget_alignment))
            .show_ui(ui, |ui| {
                for alignment in [
                    WidgetAlignment::Left,
                    WidgetAlignment::Center,
                    WidgetAlignment::Right,
                ] {
                    ui.selectable_value(
                        &mut display.widget_alignment,
                        alignment,
                        format!("{alignment:?}"),
                    );
                }
            });

        ui.separator();
        ui.label("Shortcuts");
        egui::Grid::new("cog_shortcuts").num_columns(2).show(ui, |ui| {
            ui.label("Toggle input");
            ui.weak(config.shortcuts.toggle_input.to_string());
            ui.end_row();
            ui.label("Toggle selection");
            ui.weak(config.shortcuts.toggle_selection.to_string());
            ui.end_row();
            for (slot, chord) in config.shortcuts.load_layout.iter().enumerate() {
                ui.label(format!("Load layout {}", slot + 1));
                ui.weak(chord.to_string());
                ui.end_row();
            }
        });

        ui.separator();
        if ui.button("Reset settings").clicked() {
            *config = OverlayConfig::default();
        }
    }
}
