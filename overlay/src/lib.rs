//! Cog debug overlay for egui hosts.
//!
//! An in-process immediate-mode debug overlay: the host owns the
//! [`egui::Context`] and calls [`OverlayManager::tick`] once per frame from
//! its render loop. Debug windows implement [`cog_core::DebugWindow`] and are
//! registered under dot-separated menu paths; the overlay drives their
//! per-frame updates, renders the main menu and floating panels, matches
//! shortcuts, and persists window layouts to numbered slots.
//!
//! ```no_run
//! use cog_overlay::OverlayManager;
//!
//! let mut overlay = OverlayManager::new();
//! # let ctx = egui::Context::default();
//! # let dt = 0.016;
//! // each frame, inside the host's egui pass:
//! overlay.tick(&ctx, dt);
//! ```

pub mod commands;
pub mod manager;
pub mod menu_bar;
pub mod storage;
pub mod windows;

pub use commands::HostCommand;
pub use manager::OverlayManager;
pub use storage::LayoutStore;

pub use cog_core::{DebugWindow, MetricEvent, MetricsAggregator, OverlayConfig, WindowId};
