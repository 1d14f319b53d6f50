//! The binding table mapping key chords to palette intents.
//!
//! Bindings are textual and serializable, allowing hosts to ship their own
//! tables or load them from configuration files.

use ratatui::crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use super::chord::{parse_chord_pattern, ChordPattern};
use crate::action::PaletteAction;

/// A single binding from a key pattern to a palette intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+k", "p a"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+K", "Shift+Tab"
    pub hint: String,
    /// The intent this binding triggers
    pub action: PaletteAction,
}

impl KeyBinding {
    /// Create a new binding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, action: PaletteAction) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            action,
        }
    }
}

/// The keymap - a collection of bindings with matching logic.
///
/// Patterns are parsed once at construction; bindings whose pattern does not
/// parse are dropped with a warning. When several bindings match the same
/// key, the first one in the table wins.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ChordPattern)>,
}

impl Keymap {
    /// Create a keymap from a list of bindings
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed: Vec<_> = bindings
            .into_iter()
            .filter_map(|binding| match parse_chord_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("dropping binding with unparseable keys `{}`", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// First single-chord binding matching the event, if any
    pub fn match_single(&self, key: &KeyEvent) -> Option<PaletteAction> {
        self.bindings
            .iter()
            .find_map(|(binding, pattern)| match pattern {
                ChordPattern::Single(chord) if chord.matches(key) => Some(binding.action.clone()),
                _ => None,
            })
    }

    /// Sequence completion: a pending first chord plus the current key
    pub fn match_sequence(&self, first: &KeyEvent, second: &KeyEvent) -> Option<PaletteAction> {
        self.bindings
            .iter()
            .find_map(|(binding, pattern)| match pattern {
                ChordPattern::Sequence(a, b) if a.matches(first) && b.matches(second) => {
                    Some(binding.action.clone())
                }
                _ => None,
            })
    }

    /// Whether this key arms any two-chord sequence
    pub fn starts_sequence(&self, key: &KeyEvent) -> bool {
        self.bindings.iter().any(
            |(_, pattern)| matches!(pattern, ChordPattern::Sequence(first, _) if first.matches(key)),
        )
    }

    /// All bindings (for displaying in help surfaces)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Find the hint for an intent (returns first match)
    pub fn hint_for(&self, action: &PaletteAction) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(b, _)| b.action == *action)
            .map(|(b, _)| b.hint.as_str())
    }

    /// Find all hints for an intent
    pub fn hints_for(&self, action: &PaletteAction) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|(b, _)| b.action == *action)
            .map(|(b, _)| b.hint.as_str())
            .collect()
    }

    /// Get a compact hint string for an intent (e.g., "↑/Shift+Tab")
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for(&self, action: &PaletteAction) -> Option<String> {
        let hints = self.hints_for(action);
        if hints.is_empty() {
            return None;
        }

        // Deduplicate (e.g., backtab and shift+tab both have "Shift+Tab" hint)
        let mut unique_hints: Vec<&str> = Vec::new();
        for hint in hints {
            if !unique_hints.contains(&hint) {
                unique_hints.push(hint);
            }
        }

        Some(unique_hints.join("/"))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        default_keymap()
    }
}

/// The built-in binding table.
pub fn default_keymap() -> Keymap {
    use PaletteAction::*;
    Keymap::new(vec![
        // Visibility
        KeyBinding::new("ctrl+k", "Ctrl+K", Toggle),
        KeyBinding::new("cmd+k", "Cmd+K", Toggle),
        KeyBinding::new("esc", "Esc", Dismiss),
        // Navigation
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("backspace", "Backspace", Back),
        // Selection
        KeyBinding::new("down", "↓", SelectNext),
        KeyBinding::new("tab", "Tab", SelectNext),
        KeyBinding::new("up", "↑", SelectPrev),
        KeyBinding::new("shift+tab", "Shift+Tab", SelectPrev),
        KeyBinding::new("backtab", "Shift+Tab", SelectPrev), // Duplicate hint
        // Search
        KeyBinding::new("ctrl+u", "Ctrl+U", ClearSearch),
    ])
}
