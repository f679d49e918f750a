//! Built-in overlay windows.
//!
//! These are the windows the overlay registers for itself: layout slot
//! management, overlay settings, spacer panels, and the metrics viewer.
//! They communicate with the manager through shared single-thread handles
//! (requests queue, config cell) since windows cannot borrow the manager
//! while it is rendering them.

mod layouts;
mod metrics;
mod settings;
mod spacing;

pub use layouts::{LayoutRequest, LayoutsWindow, RequestQueue, NUM_LAYOUTS};
pub use metrics::{MetricsWindow, SharedMetrics};
pub use settings::SettingsWindow;
pub use spacing::SpacingWindow;

use std::cell::RefCell;
use std::rc::Rc;

use cog_core::OverlayConfig;

/// Shared, single-thread handle to the live overlay config.
pub type SharedConfig = Rc<RefCell<OverlayConfig>>;
