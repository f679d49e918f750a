//! Frame orchestrator.
//!
//! [`OverlayManager`] owns the registry, menu tree, config, input flag,
//! selection mode and layout store, and drives everything from a single
//! per-frame [`OverlayManager::tick`] call made by the host inside its egui
//! pass. Built-in windows are registered lazily on the first tick so hosts
//! can add their own windows in any order before the first frame.

use std::cell::RefCell;
use std::rc::Rc;

use cog_core::config::{self, OverlayConfig};
use cog_core::shortcuts::{EguiInput, InputSource, ShortcutAction};
use cog_core::{
    read_layout, write_layout, DebugWindow, InputToggle, MenuNode, SelectionGuard, SelectionMode,
    WindowId, WindowRegistry,
};

use crate::commands::HostCommand;
use crate::menu_bar::{self, BuiltinMenuIds};
use crate::storage::LayoutStore;
use crate::windows::{
    LayoutRequest, LayoutsWindow, RequestQueue, SettingsWindow, SharedConfig, SpacingWindow,
};

/// Default screen position for windows that have no remembered placement.
const DEFAULT_WINDOW_POS: [f32; 2] = [10.0, 10.0];
/// Window background opacity in transparent mode.
const TRANSPARENT_ALPHA: f32 = 0.35;
/// Spacer windows registered under Window > Spacing.
const NUM_SPACING_WINDOWS: usize = 4;

/// The per-frame overlay driver.
pub struct OverlayManager {
    registry: WindowRegistry,
    menu_root: MenuNode,
    menu_dirty: bool,
    config: SharedConfig,
    input: InputToggle,
    selection: SelectionMode,
    store: LayoutStore,
    requests: RequestQueue,
    /// Slot whose blob is applied at the start of the next tick.
    layout_to_load: Option<usize>,
    reset_layout_pending: bool,
    remote_attached: bool,
    /// `Some` once the built-in windows are registered.
    builtin: Option<BuiltinMenuIds>,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayManager {
    /// Manager with the platform layout store and the persisted config.
    pub fn new() -> Self {
        Self::with_parts(LayoutStore::new(), config::load())
    }

    /// Manager with an explicit store and config.
    pub fn with_parts(store: LayoutStore, config: OverlayConfig) -> Self {
        let input = InputToggle::new(false);
        Self {
            registry: WindowRegistry::new(),
            menu_root: MenuNode::root(),
            menu_dirty: true,
            config: Rc::new(RefCell::new(config)),
            input: input.clone(),
            selection: SelectionMode::new(input),
            store,
            requests: Rc::new(RefCell::new(Vec::new())),
            layout_to_load: None,
            reset_layout_pending: false,
            remote_attached: false,
            builtin: None,
        }
    }

    /// Register a host window under its full dotted name.
    pub fn add_window(
        &mut self,
        window: Box<dyn DebugWindow>,
        full_name: &str,
        add_to_menu: bool,
    ) -> WindowId {
        self.menu_dirty = true;
        self.registry.register(window, full_name, add_to_menu)
    }

    fn initialize(&mut self) {
        let mut spacing = Vec::with_capacity(NUM_SPACING_WINDOWS);
        for i in 1..=NUM_SPACING_WINDOWS {
            let name = format!("Window.Spacing {i}");
            spacing.push(self.registry.register(Box::new(SpacingWindow), &name, false));
        }

        let layouts = self.registry.register(
            Box::new(LayoutsWindow::new(
                Rc::clone(&self.requests),
                Rc::clone(&self.config),
            )),
            "Window.Layouts",
            false,
        );
        let settings = self.registry.register(
            Box::new(SettingsWindow::new(Rc::clone(&self.config))),
            "Window.Settings",
            false,
        );

        self.builtin = Some(BuiltinMenuIds {
            layouts,
            settings,
            spacing,
        });
        self.menu_dirty = true;
        tracing::info!(windows = self.registry.len(), "overlay initialized");
    }

    /// Drive one overlay frame. Call once per frame from inside the host's
    /// egui pass.
    pub fn tick(&mut self, ctx: &egui::Context, dt: f32) {
        if self.builtin.is_none() {
            self.initialize();
        }

        if self.reset_layout_pending {
            self.reset_layout_pending = false;
            self.reset_layout(ctx);
        }

        // Deferred by one frame so every window registered by the host
        // exists before the blob is applied.
        if let Some(index) = self.layout_to_load.take() {
            if let Some(blob) = self.store.load(index) {
                read_layout(&mut self.registry, &blob);
            }
        }

        for entry in self.registry.iter_mut() {
            entry.window_mut().game_tick(dt);
        }

        // With a remote viewer attached the overlay is drawn on the remote
        // end; rendering it locally too would duplicate it. Selection mode
        // still needs the local pass for picking.
        if self.remote_attached && !self.selection.is_active() {
            if self.input.enabled() {
                self.input.set_enabled(false);
            }
            return;
        }

        self.handle_inputs(&EguiInput(ctx));
        self.render(ctx, dt);
        self.drain_requests(ctx);
    }

    /// Match the configured shortcuts against this frame's input and run
    /// the triggered actions.
    pub fn handle_inputs(&mut self, input: &dyn InputSource) {
        let (shortcuts, suppress_in_text) = {
            let config = self.config.borrow();
            (
                config.shortcuts.clone(),
                config.display.disable_shortcuts_when_text_input,
            )
        };

        if suppress_in_text && input.wants_text_input() {
            return;
        }

        for action in shortcuts.pressed_actions(input) {
            match action {
                ShortcutAction::ToggleInput => self.toggle_input(),
                ShortcutAction::ToggleSelectionMode => {
                    self.set_selection_mode(!self.selection.is_active());
                }
                ShortcutAction::LoadLayout(slot) => self.load_layout(slot),
            }
        }
    }

    fn render(&mut self, ctx: &egui::Context, dt: f32) {
        if self.menu_dirty {
            self.menu_root = MenuNode::sorted_from_registry(&self.registry);
            self.menu_dirty = false;
        }

        let display = self.config.borrow().display.clone();
        let selection_active = self.selection.is_active();

        let saved_style = display.compact_mode.then(|| {
            let saved = (*ctx.style()).clone();
            ctx.style_mut(|style| {
                style.spacing.item_spacing = egui::vec2(4.0, 2.0);
                style.spacing.button_padding = egui::vec2(3.0, 1.0);
                style.spacing.window_margin = egui::Margin::same(4);
            });
            saved
        });

        // Selection mode hides all overlay chrome to leave the viewport
        // clear for picking.
        if (self.input.enabled() || self.remote_attached) && !selection_active {
            if let Some(builtin) = &self.builtin {
                menu_bar::render(ctx, &self.menu_root, &mut self.registry, &display, builtin);
            }
        }

        let window_frame = {
            let mut frame = egui::Frame::window(&ctx.style());
            if display.transparent_mode {
                frame.fill = frame.fill.gamma_multiply(TRANSPARENT_ALPHA);
            }
            frame
        };

        let ids: Vec<WindowId> = self.registry.iter().map(|e| e.id()).collect();
        for id in ids {
            let Some(entry) = self.registry.find_mut(id) else {
                continue;
            };
            entry.window_mut().render_tick(dt);

            if !entry.visible || selection_active {
                continue;
            }

            let title = entry.name().to_string();
            let mut open = true;
            let window = entry.window_mut();
            egui::Window::new(title)
                .id(egui::Id::new(id.0))
                .open(&mut open)
                .default_pos(DEFAULT_WINDOW_POS)
                .frame(window_frame)
                .show(ctx, |ui| window.render_content(ui));
            if !open {
                entry.visible = false;
            }
        }

        if let Some(saved) = saved_style {
            ctx.set_style(saved);
        }
    }

    fn drain_requests(&mut self, ctx: &egui::Context) {
        let requests: Vec<LayoutRequest> = self.requests.borrow_mut().drain(..).collect();
        for request in requests {
            match request {
                LayoutRequest::Load(slot) => self.load_layout(slot),
                LayoutRequest::Save(slot) => self.save_layout(slot),
                LayoutRequest::Reset => self.reset_layout(ctx),
            }
        }
    }

    /// Hide every window, then apply the slot's blob on the next tick.
    pub fn load_layout(&mut self, index: usize) {
        self.registry.close_all();
        self.layout_to_load = Some(index);
    }

    /// Snapshot the current window/widget state into a slot.
    pub fn save_layout(&mut self, index: usize) {
        let blob = write_layout(&self.registry);
        if let Err(err) = self.store.save(index, &blob) {
            tracing::warn!("failed to save layout {index}: {err}");
        }
    }

    /// Forget all remembered window placements, so every panel falls back
    /// to its default position.
    pub fn reset_layout(&self, ctx: &egui::Context) {
        ctx.memory_mut(|memory| *memory = Default::default());
    }

    /// Run a parsed host command.
    pub fn execute(&mut self, command: HostCommand) {
        match command {
            HostCommand::ToggleInput => self.toggle_input(),
            HostCommand::DisableInput => self.disable_input(),
            // Needs the egui context, so it runs at the start of the next tick.
            HostCommand::ResetLayout => self.reset_layout_pending = true,
            HostCommand::LoadLayout(index) => self.load_layout(index),
            HostCommand::SaveLayout(index) => self.save_layout(index),
        }
    }

    pub fn toggle_input(&mut self) {
        self.input.toggle();
        tracing::debug!(enabled = self.input.enabled(), "overlay input toggled");
    }

    pub fn disable_input(&mut self) {
        self.input.set_enabled(false);
    }

    pub fn input_enabled(&self) -> bool {
        self.input.enabled()
    }

    /// Shared handle to the input-enabled flag, for the host's input routing.
    pub fn input_toggle(&self) -> InputToggle {
        self.input.clone()
    }

    /// Raise (`true`) or release (`false`) one selection-mode activation.
    pub fn set_selection_mode(&self, active: bool) {
        self.selection.set_active(active);
    }

    /// Activate selection mode for the lifetime of the returned guard.
    pub fn begin_selection(&self) -> SelectionGuard {
        self.selection.activate()
    }

    pub fn selection_active(&self) -> bool {
        self.selection.is_active()
    }

    /// Tell the overlay whether a remote viewer is currently attached.
    pub fn set_remote_attached(&mut self, attached: bool) {
        self.remote_attached = attached;
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        &mut self.registry
    }

    /// Shared handle to the live config.
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Persist the config. Call when the host shuts down.
    pub fn shutdown(&mut self) {
        if let Err(err) = config::save(&self.config.borrow()) {
            tracing::warn!("failed to save overlay config: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use cog_core::shortcuts::KeyChord;

    struct NullWindow;

    impl DebugWindow for NullWindow {
        fn render_content(&mut self, _ui: &mut egui::Ui) {}
    }

    struct ProbeWindow {
        ticks: Rc<Cell<u32>>,
    }

    impl DebugWindow for ProbeWindow {
        fn game_tick(&mut self, _dt: f32) {
            self.ticks.set(self.ticks.get() + 1);
        }
        fn render_content(&mut self, _ui: &mut egui::Ui) {}
    }

    struct FakeInput {
        pressed: Vec<KeyChord>,
        text: bool,
    }

    impl FakeInput {
        fn pressing(chords: &[&str]) -> Self {
            Self {
                pressed: chords.iter().map(|s| s.parse().unwrap()).collect(),
                text: false,
            }
        }
    }

    impl InputSource for FakeInput {
        fn is_chord_pressed(&self, chord: &KeyChord) -> bool {
            self.pressed.contains(chord)
        }
        fn wants_text_input(&self) -> bool {
            self.text
        }
    }

    fn manager() -> (OverlayManager, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = LayoutStore::with_dir(dir.path());
        (
            OverlayManager::with_parts(store, OverlayConfig::default()),
            dir,
        )
    }

    fn run_tick(manager: &mut OverlayManager) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| manager.tick(ctx, 0.016));
    }

    #[test]
    fn test_builtin_windows_registered_on_first_tick() {
        let (mut manager, _dir) = manager();
        assert!(manager.registry().is_empty());

        run_tick(&mut manager);
        assert_eq!(manager.registry().len(), NUM_SPACING_WINDOWS + 2);
        assert!(manager
            .registry()
            .find(WindowId::from_name("Window.Layouts"))
            .is_some());
        assert!(manager
            .registry()
            .find(WindowId::from_name("Window.Settings"))
            .is_some());
    }

    #[test]
    fn test_invisible_windows_still_game_tick() {
        let (mut manager, _dir) = manager();
        let ticks = Rc::new(Cell::new(0));
        manager.add_window(
            Box::new(ProbeWindow {
                ticks: Rc::clone(&ticks),
            }),
            "Engine.Probe",
            true,
        );

        run_tick(&mut manager);
        run_tick(&mut manager);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn test_toggle_input_shortcut() {
        let (mut manager, _dir) = manager();
        let input = FakeInput::pressing(&["F1"]);

        manager.handle_inputs(&input);
        assert!(manager.input_enabled());
        manager.handle_inputs(&input);
        assert!(!manager.input_enabled());
    }

    #[test]
    fn test_selection_shortcut() {
        let (mut manager, _dir) = manager();
        let input = FakeInput::pressing(&["F5"]);

        manager.handle_inputs(&input);
        assert!(manager.selection_active());
        manager.handle_inputs(&input);
        assert!(!manager.selection_active());
    }

    #[test]
    fn test_toggle_input_wins_over_selection() {
        let (mut manager, _dir) = manager();
        let input = FakeInput::pressing(&["F1", "F5"]);

        manager.handle_inputs(&input);
        assert!(manager.input_enabled());
        assert!(!manager.selection_active());
    }

    #[test]
    fn test_layout_shortcut_fires_alongside_toggle() {
        let (mut manager, _dir) = manager();
        let input = FakeInput::pressing(&["F1", "Ctrl+2"]);

        manager.handle_inputs(&input);
        assert!(manager.input_enabled());
        assert_eq!(manager.layout_to_load, Some(1));
    }

    #[test]
    fn test_text_input_suppresses_shortcuts() {
        let (mut manager, _dir) = manager();
        let mut input = FakeInput::pressing(&["F1"]);
        input.text = true;

        manager.handle_inputs(&input);
        assert!(!manager.input_enabled());
    }

    #[test]
    fn test_deferred_layout_load_applies_next_tick() {
        let (mut manager, _dir) = manager();
        let id = manager.add_window(Box::new(NullWindow), "Engine.Probe", true);
        run_tick(&mut manager);

        manager.registry_mut().find_mut(id).unwrap().visible = true;
        manager.save_layout(0);

        manager.load_layout(0);
        // close_all happened immediately, the blob applies next tick.
        assert!(!manager.registry().find(id).unwrap().visible);

        run_tick(&mut manager);
        assert!(manager.registry().find(id).unwrap().visible);
    }

    #[test]
    fn test_loading_empty_slot_leaves_windows_hidden() {
        let (mut manager, _dir) = manager();
        let id = manager.add_window(Box::new(NullWindow), "Engine.Probe", true);
        manager.registry_mut().find_mut(id).unwrap().visible = true;

        manager.load_layout(3);
        run_tick(&mut manager);
        assert!(!manager.registry().find(id).unwrap().visible);
    }

    #[test]
    fn test_execute_commands() {
        let (mut manager, _dir) = manager();

        manager.execute(HostCommand::ToggleInput);
        assert!(manager.input_enabled());
        manager.execute(HostCommand::DisableInput);
        assert!(!manager.input_enabled());

        manager.execute(HostCommand::LoadLayout(2));
        assert_eq!(manager.layout_to_load, Some(2));

        manager.execute(HostCommand::ResetLayout);
        assert!(manager.reset_layout_pending);
        run_tick(&mut manager);
        assert!(!manager.reset_layout_pending);
    }

    #[test]
    fn test_remote_viewer_disables_local_input() {
        let (mut manager, _dir) = manager();
        manager.toggle_input();
        assert!(manager.input_enabled());

        manager.set_remote_attached(true);
        run_tick(&mut manager);
        assert!(!manager.input_enabled());
    }

    #[test]
    fn test_selection_keeps_local_pass_with_remote_viewer() {
        let (mut manager, _dir) = manager();
        manager.set_remote_attached(true);

        let guard = manager.begin_selection();
        run_tick(&mut manager);
        // Selection force-enables input; the remote short-circuit must not
        // have cleared it while the mode is active.
        assert!(manager.input_enabled());

        drop(guard);
        run_tick(&mut manager);
        assert!(!manager.input_enabled());
    }

    #[test]
    fn test_selection_guard_restores_input() {
        let (manager, _dir) = manager();
        {
            let _guard = manager.begin_selection();
            assert!(manager.selection_active());
            assert!(manager.input_enabled());
        }
        assert!(!manager.selection_active());
        assert!(!manager.input_enabled());
    }
}
