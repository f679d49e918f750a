//! Layout slot window.

use std::cell::RefCell;
use std::rc::Rc;

use cog_core::DebugWindow;

use super::SharedConfig;

/// How many layout slots the overlay offers.
pub const NUM_LAYOUTS: usize = 4;

/// A layout action requested from the UI, applied by the manager at the end
/// of the frame (loads and resets need the whole registry, which is borrowed
/// while windows render).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRequest {
    Load(usize),
    Save(usize),
    Reset,
}

/// Shared, single-thread queue of pending layout requests.
pub type RequestQueue = Rc<RefCell<Vec<LayoutRequest>>>;

/// Lets the user load, save and reset the numbered layout slots.
pub struct LayoutsWindow {
    requests: RequestQueue,
    config: SharedConfig,
}

impl LayoutsWindow {
    pub fn new(requests: RequestQueue, config: SharedConfig) -> Self {
        Self { requests, config }
    }

    fn push(&self, request: LayoutRequest) {
        self.requests.borrow_mut().push(request);
    }
}

impl DebugWindow for LayoutsWindow {
    fn render_help(&self, ui: &mut egui::Ui) {
        ui.label(
            "Save the current window layout into one of the numbered slots, \
             or load a previously saved one. Reset puts every window back at \
             its default position.",
        );
    }

    fn render_content(&mut self, ui: &mut egui::Ui) {
        let chords: Vec<String> = {
            let config = self.config.borrow();
            config
                .shortcuts
                .load_layout
                .iter()
                .map(|chord| chord.to_string())
                .collect()
        };

        for slot in 0..NUM_LAYOUTS {
            ui.horizontal(|ui| {
                ui.label(format!("Layout {}", slot + 1));
                if ui.button("Load").clicked() {
                    self.push(LayoutRequest::Load(slot));
                }
                if ui.button("Save").clicked() {
                    self.push(LayoutRequest::Save(slot));
                }
                if let Some(chord) = chords.get(slot) {
                    ui.weak(chord);
                }
            });
        }

        ui.separator();
        if ui.button("Reset layout").clicked() {
            self.push(LayoutRequest::Reset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cog_core::OverlayConfig;

    #[test]
    fn test_requests_are_queued() {
        let requests: RequestQueue = Rc::new(RefCell::new(Vec::new()));
        let config: SharedConfig = Rc::new(RefCell::new(OverlayConfig::default()));
        let window = LayoutsWindow::new(Rc::clone(&requests), config);

        window.push(LayoutRequest::Save(2));
        window.push(LayoutRequest::Reset);
        assert_eq!(
            requests.borrow().as_slice(),
            &[LayoutRequest::Save(2), LayoutRequest::Reset]
        );
    }
}
