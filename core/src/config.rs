//! Overlay configuration (display options + shortcuts), persisted as TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::StorageError;
use crate::shortcuts::{InputSource, KeyChord, ShortcutAction};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub shortcuts: ShortcutConfig,
}

/// Toolbar widget placement inside the main menu bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Tighter paddings and spacings for all overlay windows.
    #[serde(default)]
    pub compact_mode: bool,
    /// Render floating panels with a translucent background.
    #[serde(default)]
    pub transparent_mode: bool,
    /// Show the "(?)" help markers next to menu entries.
    #[serde(default = "default_true")]
    pub show_help: bool,
    /// Embedded display mode: menu entries expand into the window content
    /// inline instead of toggling a floating panel.
    #[serde(default)]
    pub show_windows_in_main_menu: bool,
    #[serde(default)]
    pub widget_alignment: WidgetAlignment,
    #[serde(default)]
    pub show_widget_borders: bool,
    /// Suppress all shortcuts while the host UI wants raw text input.
    #[serde(default = "default_true")]
    pub disable_shortcuts_when_text_input: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_mode: false,
            transparent_mode: false,
            show_help: true,
            show_windows_in_main_menu: false,
            widget_alignment: WidgetAlignment::Left,
            show_widget_borders: false,
            disable_shortcuts_when_text_input: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutConfig {
    #[serde(default = "default_toggle_input")]
    pub toggle_input: KeyChord,
    #[serde(default = "default_toggle_selection")]
    pub toggle_selection: KeyChord,
    /// One chord per layout slot; index in this list = layout index.
    #[serde(default = "default_load_layout")]
    pub load_layout: Vec<KeyChord>,
}

fn default_toggle_input() -> KeyChord {
    KeyChord::key(egui::Key::F1)
}

fn default_toggle_selection() -> KeyChord {
    KeyChord::key(egui::Key::F5)
}

fn default_load_layout() -> Vec<KeyChord> {
    vec![
        KeyChord::ctrl(egui::Key::Num1),
        KeyChord::ctrl(egui::Key::Num2),
        KeyChord::ctrl(egui::Key::Num3),
        KeyChord::ctrl(egui::Key::Num4),
    ]
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            toggle_input: default_toggle_input(),
            toggle_selection: default_toggle_selection(),
            load_layout: default_load_layout(),
        }
    }
}

impl ShortcutConfig {
    /// Actions triggered by this frame's input.
    ///
    /// Toggle-input and toggle-selection are mutually exclusive within a
    /// frame (toggle-input wins); the layout chords are checked
    /// independently of both.
    pub fn pressed_actions(&self, input: &dyn InputSource) -> Vec<ShortcutAction> {
        let mut actions = Vec::new();

        if input.is_chord_pressed(&self.toggle_input) {
            actions.push(ShortcutAction::ToggleInput);
        } else if input.is_chord_pressed(&self.toggle_selection) {
            actions.push(ShortcutAction::ToggleSelectionMode);
        }

        for (slot, chord) in self.load_layout.iter().enumerate() {
            if input.is_chord_pressed(chord) {
                actions.push(ShortcutAction::LoadLayout(slot));
            }
        }

        actions
    }
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "cog", "cog")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "cog", "cog")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Load the config, falling back to defaults if missing or unreadable.
pub fn load() -> OverlayConfig {
    config_dir()
        .and_then(|dir| std::fs::read_to_string(dir.join("cog.toml")).ok())
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

pub fn save(config: &OverlayConfig) -> Result<(), StorageError> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(&dir)?;
        let content = toml::to_string_pretty(config)?;
        std::fs::write(dir.join("cog.toml"), content)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeInput(Vec<KeyChord>);

    impl InputSource for FakeInput {
        fn is_chord_pressed(&self, chord: &KeyChord) -> bool {
            self.0.contains(chord)
        }
        fn wants_text_input(&self) -> bool {
            false
        }
    }

    fn pressing(chords: &[&str]) -> FakeInput {
        FakeInput(chords.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn test_pressed_actions_toggle_input_wins() {
        let shortcuts = ShortcutConfig::default();

        let actions = shortcuts.pressed_actions(&pressing(&["F1", "F5"]));
        assert_eq!(actions, [ShortcutAction::ToggleInput]);

        let actions = shortcuts.pressed_actions(&pressing(&["F5"]));
        assert_eq!(actions, [ShortcutAction::ToggleSelectionMode]);
    }

    #[test]
    fn test_pressed_actions_layout_chords_are_independent() {
        let shortcuts = ShortcutConfig::default();

        let actions = shortcuts.pressed_actions(&pressing(&["F1", "Ctrl+3"]));
        assert_eq!(
            actions,
            [ShortcutAction::ToggleInput, ShortcutAction::LoadLayout(2)]
        );

        assert!(shortcuts.pressed_actions(&pressing(&[])).is_empty());
    }

    #[test]
    fn test_config_default() {
        let config = OverlayConfig::default();
        assert!(!config.display.compact_mode);
        assert!(config.display.show_help);
        assert!(config.display.disable_shortcuts_when_text_input);
        assert_eq!(config.shortcuts.load_layout.len(), 4);
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let mut config = OverlayConfig::default();
        config.display.transparent_mode = true;
        config.display.widget_alignment = WidgetAlignment::Right;
        config.shortcuts.toggle_input = "Ctrl+F2".parse().unwrap();
        config.shortcuts.toggle_selection = "Shift*+F5".parse().unwrap();

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: OverlayConfig = toml::from_str(&toml_str).unwrap();

        assert!(parsed.display.transparent_mode);
        assert_eq!(parsed.display.widget_alignment, WidgetAlignment::Right);
        assert_eq!(parsed.shortcuts.toggle_input, config.shortcuts.toggle_input);
        // Ignored-modifier policy must survive the save/load cycle.
        assert_eq!(
            parsed.shortcuts.toggle_selection,
            config.shortcuts.toggle_selection
        );
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: OverlayConfig = toml::from_str("").unwrap();
        assert!(config.display.show_help);
        assert_eq!(
            config.shortcuts.toggle_input,
            KeyChord::key(egui::Key::F1)
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml_str = r#"
[display]
compact_mode = true
"#;
        let config: OverlayConfig = toml::from_str(toml_str).unwrap();
        assert!(config.display.compact_mode);
        assert!(config.display.show_help); // default
        assert_eq!(config.shortcuts.load_layout.len(), 4); // default
    }

    #[test]
    fn test_shortcuts_serialize_as_strings() {
        let config = OverlayConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains(r#"toggle_input = "F1""#));
        assert!(toml_str.contains(r#""Ctrl+1""#));
    }
}
