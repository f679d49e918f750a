//! Debug window trait and stable identities.

use std::fmt;

use xxhash_rust::xxh32::xxh32;

/// Stable numeric identity of a debug window.
///
/// Derived from a hash of the window's full dotted name, so it survives
/// restarts and registration-order changes and can key persisted layout
/// state. Identity collisions across differently-named windows are an
/// accepted engineering risk and are not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl WindowId {
    /// Derive the identity from a full dotted window name.
    pub fn from_name(full_name: &str) -> Self {
        Self(xxh32(full_name.as_bytes(), 0))
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// A registrable debug window.
///
/// Implementations are self-contained panels showing or editing one category
/// of live host state. The registry owns them as boxed trait objects;
/// visibility, naming and widget ordering live on the registry entry, not on
/// the window itself.
pub trait DebugWindow {
    /// Called once when the window is registered.
    fn initialize(&mut self) {}

    /// Per-frame game-logic update. Runs every frame, even while the window
    /// is invisible, so windows can keep collecting data.
    fn game_tick(&mut self, _dt: f32) {}

    /// Per-frame render-side update. Runs every rendered frame regardless of
    /// visibility, before any window content is drawn.
    fn render_tick(&mut self, _dt: f32) {}

    /// Render the window's content into `ui`.
    ///
    /// The same method renders the floating panel and, in embedded display
    /// mode, the inline submenu content.
    fn render_content(&mut self, ui: &mut egui::Ui);

    /// Render the window's help text (shown in the menu hover tooltip).
    fn render_help(&self, ui: &mut egui::Ui) {
        ui.label("No help available.");
    }

    /// Whether this window also renders a compact entry in the persistent
    /// main-menu toolbar.
    fn has_widget(&self) -> bool {
        false
    }

    /// Render the compact toolbar entry. Only called when [`Self::has_widget`]
    /// returns true and the widget is visible.
    fn render_widget(&mut self, _ui: &mut egui::Ui) {}

    /// Restore the window's default configuration.
    fn reset_config(&mut self) {}
}
