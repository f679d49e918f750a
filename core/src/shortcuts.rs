//! Shortcut matching: physical input chords mapped to logical debug actions.
//!
//! Chords pair an [`egui::Key`] with a per-modifier policy and are checked
//! polling-style once per frame against the host input state ("newly
//! pressed"). Chords serialize as human-readable strings like
//! `"Ctrl+F1"` or `"Shift+Escape"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Logical actions a shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Toggle input focus between the game and the overlay.
    ToggleInput,
    /// Toggle actor-picking selection mode.
    ToggleSelectionMode,
    /// Load the persisted layout with this slot index.
    LoadLayout(usize),
}

/// Matching requirement for one modifier key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Requirement {
    /// The modifier must be held.
    Required,
    /// The modifier must not be held.
    #[default]
    Forbidden,
    /// The modifier is not checked.
    Ignored,
}

impl Requirement {
    fn matches(self, held: bool) -> bool {
        match self {
            Requirement::Required => held,
            Requirement::Forbidden => !held,
            Requirement::Ignored => true,
        }
    }
}

/// Per-modifier matching policy of a chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierPolicy {
    pub ctrl: Requirement,
    pub shift: Requirement,
    pub alt: Requirement,
}

impl ModifierPolicy {
    pub fn matches(&self, modifiers: egui::Modifiers) -> bool {
        self.ctrl.matches(modifiers.command)
            && self.shift.matches(modifiers.shift)
            && self.alt.matches(modifiers.alt)
    }
}

/// An input chord: a key plus a modifier policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: egui::Key,
    pub modifiers: ModifierPolicy,
}

impl KeyChord {
    /// Bare key, all modifiers forbidden.
    pub fn key(key: egui::Key) -> Self {
        Self {
            key,
            modifiers: ModifierPolicy::default(),
        }
    }

    /// Key with Ctrl (Cmd on mac) required.
    pub fn ctrl(key: egui::Key) -> Self {
        Self {
            key,
            modifiers: ModifierPolicy {
                ctrl: Requirement::Required,
                ..ModifierPolicy::default()
            },
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifier(f, "Ctrl", self.modifiers.ctrl)?;
        write_modifier(f, "Shift", self.modifiers.shift)?;
        write_modifier(f, "Alt", self.modifiers.alt)?;
        write!(f, "{}", self.key.name())
    }
}

fn write_modifier(f: &mut fmt::Formatter<'_>, name: &str, requirement: Requirement) -> fmt::Result {
    match requirement {
        Requirement::Required => write!(f, "{name}+"),
        Requirement::Ignored => write!(f, "{name}*+"),
        Requirement::Forbidden => Ok(()),
    }
}

/// Chord string parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChordError(String);

impl fmt::Display for ParseChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid key chord: {}", self.0)
    }
}

impl std::error::Error for ParseChordError {}

impl FromStr for KeyChord {
    type Err = ParseChordError;

    /// Parse `"Modifier+...+Key"`. Modifiers: `Ctrl`/`Control`, `Shift`,
    /// `Alt`/`Option`; a trailing `*` on a modifier makes it ignored rather
    /// than required (e.g. `"Shift*+F1"` matches with or without Shift).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = ModifierPolicy::default();
        let mut key = None;

        for part in s.split('+').map(str::trim) {
            let (name, requirement) = match part.strip_suffix('*') {
                Some(name) => (name, Requirement::Ignored),
                None => (part, Requirement::Required),
            };

            match name.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" => modifiers.ctrl = requirement,
                "shift" => modifiers.shift = requirement,
                "alt" | "option" => modifiers.alt = requirement,
                _ => {
                    if key.is_some() {
                        return Err(ParseChordError(format!("multiple keys in {s:?}")));
                    }
                    key = Some(
                        egui::Key::from_name(name)
                            .ok_or_else(|| ParseChordError(format!("unknown key {name:?}")))?,
                    );
                }
            }
        }

        let key = key.ok_or_else(|| ParseChordError(format!("no key in {s:?}")))?;
        Ok(Self { key, modifiers })
    }
}

impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Polled input state, one check per frame.
///
/// The overlay only ever asks "was this chord newly pressed this frame" and
/// "does the host UI currently want raw text input".
pub trait InputSource {
    fn is_chord_pressed(&self, chord: &KeyChord) -> bool;
    fn wants_text_input(&self) -> bool;
}

/// [`InputSource`] over the host's egui context.
pub struct EguiInput<'a>(pub &'a egui::Context);

impl InputSource for EguiInput<'_> {
    fn is_chord_pressed(&self, chord: &KeyChord) -> bool {
        self.0
            .input(|i| i.key_pressed(chord.key) && chord.modifiers.matches(i.modifiers))
    }

    fn wants_text_input(&self) -> bool {
        self.0.wants_keyboard_input()
    }
}
