//! Main menu bar rendering.
//!
//! Renders the menu tree recursively (branches as submenus, leaves as window
//! toggles), the "Window" utility menu, and the widget toolbar. All window
//! state lives in the registry; this module only draws and flips flags.

use cog_core::config::{DisplayConfig, WidgetAlignment};
use cog_core::{MenuNode, WindowId, WindowRegistry};

/// Minimum width for window content embedded into a menu.
const EMBEDDED_MENU_WIDTH: f32 = 300.0;

/// Identities of the overlay's own windows, listed under the "Window" menu
/// instead of the regular tree.
pub struct BuiltinMenuIds {
    pub layouts: WindowId,
    pub settings: WindowId,
    pub spacing: Vec<WindowId>,
}

/// Render the whole main menu bar into a top panel.
pub fn render(
    ctx: &egui::Context,
    root: &MenuNode,
    registry: &mut WindowRegistry,
    display: &DisplayConfig,
    builtin: &BuiltinMenuIds,
) {
    egui::TopBottomPanel::top("cog_main_menu").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            for child in &root.children {
                render_node(ui, child, registry, display);
            }
            render_window_menu(ui, registry, display, builtin);
            render_widgets(ui, registry, display);
        });
    });
}

fn render_node(
    ui: &mut egui::Ui,
    node: &MenuNode,
    registry: &mut WindowRegistry,
    display: &DisplayConfig,
) {
    match node.window {
        Some(id) => render_menu_item(ui, registry, id, display),
        None => {
            ui.menu_button(&node.name, |ui| {
                for child in &node.children {
                    render_node(ui, child, registry, display);
                }
            });
        }
    }
}

/// One window leaf: either a visibility checkbox, or (in embedded display
/// mode) a submenu holding the window content itself, where clicking the
/// entry still toggles the floating panel.
fn render_menu_item(
    ui: &mut egui::Ui,
    registry: &mut WindowRegistry,
    id: WindowId,
    display: &DisplayConfig,
) {
    let Some(entry) = registry.find_mut(id) else {
        return;
    };

    if display.show_windows_in_main_menu {
        let name = entry.name().to_string();
        let response = ui.menu_button(name, |ui| {
            ui.set_min_width(EMBEDDED_MENU_WIDTH);
            entry.window_mut().render_content(ui);
        });
        if response.response.clicked() {
            entry.visible = !entry.visible;
        }
    } else {
        let name = entry.name().to_string();
        let response = ui.checkbox(&mut entry.visible, name);
        if display.show_help {
            response.on_hover_ui(|ui| entry.window().render_help(ui));
        }
    }
}

fn render_window_menu(
    ui: &mut egui::Ui,
    registry: &mut WindowRegistry,
    display: &DisplayConfig,
    builtin: &BuiltinMenuIds,
) {
    ui.menu_button("Window", |ui| {
        if ui.button("Close All Windows").clicked() {
            registry.close_all();
            ui.close();
        }
        ui.separator();

        render_menu_item(ui, registry, builtin.layouts, display);
        render_menu_item(ui, registry, builtin.settings, display);

        if !builtin.spacing.is_empty() {
            ui.menu_button("Spacing", |ui| {
                for id in &builtin.spacing {
                    render_menu_item(ui, registry, *id, display);
                }
            });
        }
    });
}

/// The widget toolbar: per-window mini widgets rendered directly in the menu
/// bar, in display order, honoring the configured alignment.
fn render_widgets(ui: &mut egui::Ui, registry: &mut WindowRegistry, display: &DisplayConfig) {
    let visible: Vec<WindowId> = registry
        .widget_ids()
        .iter()
        .copied()
        .filter(|id| registry.find(*id).is_some_and(|e| e.widget_visible))
        .collect();
    if visible.is_empty() {
        return;
    }

    match display.widget_alignment {
        WidgetAlignment::Left => render_widget_row(ui, registry, &visible, display),
        WidgetAlignment::Center => {
            ui.add_space(ui.available_width() * 0.5);
            render_widget_row(ui, registry, &visible, display);
        }
        WidgetAlignment::Right => {
            // Right-to-left layout reverses drawing order, so feed the ids
            // reversed to keep the configured order on screen.
            let reversed: Vec<WindowId> = visible.into_iter().rev().collect();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                render_widget_row(ui, registry, &reversed, display);
            });
        }
    }
}

fn render_widget_row(
    ui: &mut egui::Ui,
    registry: &mut WindowRegistry,
    ids: &[WindowId],
    display: &DisplayConfig,
) {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 && display.show_widget_borders {
            ui.separator();
        }
        if let Some(entry) = registry.find_mut(*id) {
            entry.window_mut().render_widget(ui);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cog_core::DebugWindow;

    struct NullWindow;

    impl DebugWindow for NullWindow {
        fn render_content(&mut self, _ui: &mut egui::Ui) {}
    }

    struct WidgetWindow;

    impl DebugWindow for WidgetWindow {
        fn render_content(&mut self, _ui: &mut egui::Ui) {}
        fn has_widget(&self) -> bool {
            true
        }
        fn render_widget(&mut self, ui: &mut egui::Ui) {
            ui.label("w");
        }
    }

    fn run_frame(registry: &mut WindowRegistry, display: &DisplayConfig) {
        let root = MenuNode::sorted_from_registry(registry);
        let builtin = BuiltinMenuIds {
            layouts: registry.register(Box::new(NullWindow), "Window.Layouts", false),
            settings: registry.register(Box::new(NullWindow), "Window.Settings", false),
            spacing: vec![],
        };
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render(ctx, &root, registry, display, &builtin);
        });
    }

    #[test]
    fn test_render_smoke() {
        let mut registry = WindowRegistry::new();
        registry.register(Box::new(NullWindow), "Engine.Metrics", true);
        registry.register(Box::new(NullWindow), "Engine.Selection", true);
        registry.register(Box::new(WidgetWindow), "Gameplay.Stats", true);
        registry
            .find_mut(WindowId::from_name("Gameplay.Stats"))
            .unwrap()
            .widget_visible = true;

        for alignment in [
            WidgetAlignment::Left,
            WidgetAlignment::Center,
            WidgetAlignment::Right,
        ] {
            let display = DisplayConfig {
                widget_alignment: alignment,
                show_widget_borders: true,
                ..DisplayConfig::default()
            };
            run_frame(&mut registry, &display);
        }
    }

    #[test]
    fn test_render_embedded_mode_smoke() {
        let mut registry = WindowRegistry::new();
        registry.register(Box::new(NullWindow), "Engine.Metrics", true);

        let display = DisplayConfig {
            show_windows_in_main_menu: true,
            ..DisplayConfig::default()
        };
        run_frame(&mut registry, &display);
    }
}
