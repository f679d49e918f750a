//! Selection-mode reference counting.
//!
//! Selection mode is the actor-picking interaction mode: menus and panels are
//! hidden to leave the viewport clear while the user clicks a live object.
//! Several features can request it simultaneously, so activation is counted
//! rather than boolean: the mode stays active while the count is positive,
//! and one feature leaving it never cancels another's need for it.
//!
//! Entering selection mode snapshots the overlay input-enabled flag and
//! force-enables input; leaving restores the snapshot. The snapshot is taken
//! only on the 0 -> 1 transition so nested activations do not overwrite it.
//!
//! Everything here is single-thread state shared through `Rc`, matching the
//! overlay's frame-driven execution model.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared handle to the overlay input-enabled flag.
///
/// The host reads this each frame to decide whether keyboard/mouse input is
/// routed to the overlay or to the game.
#[derive(Clone, Default)]
pub struct InputToggle(Rc<Cell<bool>>);

impl InputToggle {
    pub fn new(enabled: bool) -> Self {
        Self(Rc::new(Cell::new(enabled)))
    }

    pub fn enabled(&self) -> bool {
        self.0.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.set(enabled);
    }

    pub fn toggle(&self) {
        self.0.set(!self.0.get());
    }
}

struct SelectionState {
    counter: u32,
    input_enabled_before: bool,
    input: InputToggle,
}

/// Reference-counted selection mode.
#[derive(Clone)]
pub struct SelectionMode {
    state: Rc<RefCell<SelectionState>>,
}

impl SelectionMode {
    pub fn new(input: InputToggle) -> Self {
        Self {
            state: Rc::new(RefCell::new(SelectionState {
                counter: 0,
                input_enabled_before: false,
                input,
            })),
        }
    }

    /// Increment (`true`) or decrement (`false`) the activation count,
    /// clamped at zero.
    pub fn set_active(&self, value: bool) {
        let mut state = self.state.borrow_mut();
        let was_active = state.counter > 0;

        state.counter = if value {
            state.counter + 1
        } else {
            state.counter.saturating_sub(1)
        };

        let is_active = state.counter > 0;
        if is_active {
            if !was_active {
                state.input_enabled_before = state.input.enabled();
            }
            state.input.set_enabled(true);
        } else if was_active {
            let restore = state.input_enabled_before;
            state.input.set_enabled(restore);
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().counter > 0
    }

    /// Activate selection mode for the lifetime of the returned guard.
    pub fn activate(&self) -> SelectionGuard {
        self.set_active(true);
        SelectionGuard { mode: self.clone() }
    }
}

/// Token holding one selection-mode activation; dropping it deactivates.
pub struct SelectionGuard {
    mode: SelectionMode,
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        self.mode.set_active(false);
    }
}
