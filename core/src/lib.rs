//! Core model for the Cog debug overlay.
//!
//! Cog is an in-process immediate-mode debug overlay for game hosts built on
//! [`egui`]. This crate holds the engine-agnostic pieces: the window trait and
//! registry, the dot-path main-menu tree, the layout settings codec, the
//! shortcut matcher, selection-mode reference counting, the overlay
//! configuration, and the metrics aggregator.
//!
//! The frame orchestrator that composes these into a per-frame overlay lives
//! in the `cog-overlay` crate. Everything here runs on the host's main
//! simulation/render thread; nothing blocks or synchronizes.

pub mod config;
pub mod error;
pub mod menu;
pub mod metrics;
pub mod registry;
pub mod selection;
pub mod settings;
pub mod shortcuts;
pub mod window;

pub use config::{DisplayConfig, OverlayConfig, ShortcutConfig, WidgetAlignment};
pub use error::StorageError;
pub use menu::MenuNode;
pub use metrics::{MetricEvent, MetricStream, MetricsAggregator};
pub use registry::{WindowEntry, WindowRegistry};
pub use selection::{InputToggle, SelectionGuard, SelectionMode};
pub use settings::{read_layout, write_layout};
pub use shortcuts::{EguiInput, InputSource, KeyChord, ModifierPolicy, Requirement, ShortcutAction};
pub use window::{DebugWindow, WindowId};
