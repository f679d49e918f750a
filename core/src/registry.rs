//! Window registry.
//!
//! Owns every registered debug window and the registry-side state the
//! overlay needs to drive it: visibility, menu placement, and widget
//! ordering. Windows are created once at initialization and live until
//! shutdown.

use crate::window::{DebugWindow, WindowId};

/// A registered window plus its overlay-side state.
pub struct WindowEntry {
    window: Box<dyn DebugWindow>,
    full_name: String,
    name: String,
    id: WindowId,
    in_main_menu: bool,
    has_widget: bool,
    /// Whether the floating panel is shown.
    pub visible: bool,
    /// Whether the window's menu entry expands into an embedded submenu.
    pub show_menu: bool,
    /// Whether the toolbar widget is shown (only meaningful with a widget).
    pub widget_visible: bool,
    widget_order: u32,
}

impl WindowEntry {
    /// Full dotted name, e.g. `"Engine.Metrics"`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Last segment of the dotted name, used as the panel title.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn in_main_menu(&self) -> bool {
        self.in_main_menu
    }

    pub fn has_widget(&self) -> bool {
        self.has_widget
    }

    pub fn widget_order(&self) -> u32 {
        self.widget_order
    }

    pub fn set_widget_order(&mut self, order: u32) {
        self.widget_order = order;
    }

    pub fn window(&self) -> &dyn DebugWindow {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> &mut dyn DebugWindow {
        self.window.as_mut()
    }
}

/// Registry of all debug windows, in registration order.
#[derive(Default)]
pub struct WindowRegistry {
    entries: Vec<WindowEntry>,
    /// Widget display order: ids of widget-bearing windows.
    widget_ids: Vec<WindowId>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window under its full dotted name and assign it a stable
    /// identity. The window is initialized here.
    ///
    /// Registering the same name twice is ignored and returns the existing
    /// identity.
    pub fn register(
        &mut self,
        mut window: Box<dyn DebugWindow>,
        full_name: &str,
        add_to_menu: bool,
    ) -> WindowId {
        let id = WindowId::from_name(full_name);
        if self.find(id).is_some() {
            tracing::warn!("window {full_name:?} already registered - ignored");
            return id;
        }

        window.initialize();

        let has_widget = window.has_widget();
        let name = full_name
            .rsplit('.')
            .next()
            .unwrap_or(full_name)
            .to_string();

        let order = self.widget_ids.len() as u32;
        if has_widget {
            self.widget_ids.push(id);
        }

        self.entries.push(WindowEntry {
            window,
            full_name: full_name.to_string(),
            name,
            id,
            in_main_menu: add_to_menu,
            has_widget,
            visible: false,
            show_menu: false,
            widget_visible: false,
            widget_order: order,
        });

        id
    }

    /// Look up a window by its stable identity.
    pub fn find(&self, id: WindowId) -> Option<&WindowEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: WindowId) -> Option<&mut WindowEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Hide every window.
    pub fn close_all(&mut self) {
        for entry in &mut self.entries {
            entry.visible = false;
        }
    }

    /// Ask every window to restore its default configuration.
    pub fn reset_all_configs(&mut self) {
        for entry in &mut self.entries {
            entry.window.reset_config();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowEntry> {
        self.entries.iter_mut()
    }

    /// Widget-bearing window ids in display order.
    pub fn widget_ids(&self) -> &[WindowId] {
        &self.widget_ids
    }

    /// Re-sort the widget display order by each entry's order index.
    ///
    /// The sort is stable so entries with equal indices keep their relative
    /// registration order.
    pub fn sort_widgets_by_order(&mut self) {
        let mut ids = std::mem::take(&mut self.widget_ids);
        ids.sort_by_key(|id| {
            self.entries
                .iter()
                .find(|e| e.id == *id)
                .map(|e| e.widget_order)
                .unwrap_or(u32::MAX)
        });
        self.widget_ids = ids;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
