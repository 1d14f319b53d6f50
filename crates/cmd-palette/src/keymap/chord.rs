//! Textual key chords and their parsed, matchable form.
//!
//! Chord patterns are plain strings ("ctrl+k", "G", "ctrl+g c"), so binding
//! tables and per-command hotkeys stay serializable and hosts can load them
//! from configuration files.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// How long the first half of a two-chord sequence stays armed.
pub const SEQUENCE_TIMEOUT_SECS: u64 = 2;

/// A single key press with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    /// Whether a key event satisfies this chord.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        // BackTab can come with or without SHIFT modifier depending on the
        // terminal, so it is matched loosely
        if self.code == KeyCode::BackTab {
            return key.code == KeyCode::BackTab;
        }
        key.code == self.code && key.modifiers == self.modifiers
    }
}

/// Parsed chord pattern for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordPattern {
    /// Single chord ("ctrl+k", "enter", "G").
    Single(KeyChord),
    /// Two chords pressed in order ("p a", "ctrl+g c").
    Sequence(KeyChord, KeyChord),
}

/// Parse a textual chord pattern into a matchable form.
///
/// Supported formats:
/// - Single char: "q", "a", "1", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+p", "shift+tab", "cmd+k", "alt+enter"
/// - Special keys: "tab", "enter", "esc", "backspace", "up", "down", ...
/// - Two-chord sequence: "p a", "ctrl+g c" (space-separated)
pub fn parse_chord_pattern(pattern: &str) -> Option<ChordPattern> {
    let pattern = pattern.trim();

    // Two-chord sequence: each half is a full chord of its own
    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        if parts.len() == 2 {
            let first = parse_chord(parts[0])?;
            let second = parse_chord(parts[1])?;
            return Some(ChordPattern::Sequence(first, second));
        }
        return None; // Longer sequences are not supported
    }

    parse_chord(pattern).map(ChordPattern::Single)
}

/// Parse one chord: modifiers joined with '+', then a key.
fn parse_chord(pattern: &str) -> Option<KeyChord> {
    // For single characters, preserve case (e.g., "G" vs "g").
    // Uppercase letters come with SHIFT modifier from terminal
    if pattern.len() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyChord {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    // For everything else (modifiers, special keys), lowercase for matching
    let pattern_lower = pattern.to_lowercase();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    // Extract modifiers
    while key_part.contains('+') {
        if let Some((modifier, rest)) = key_part.split_once('+') {
            match modifier {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "cmd" | "super" | "meta" => modifiers |= KeyModifiers::SUPER,
                _ => break, // Not a modifier, might be the key itself
            }
            key_part = rest;
        } else {
            break;
        }
    }

    let code = parse_key_code(key_part)?;

    Some(KeyChord { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        // Special keys
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "insert" | "ins" => Some(KeyCode::Insert),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        // Function keys
        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        // Single character
        s if s.len() == 1 => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c))
        }

        _ => None,
    }
}

/// First half of a two-chord sequence, waiting for its completion.
#[derive(Debug, Clone)]
pub struct PendingChord {
    pub key: KeyEvent,
    pub pressed_at: Instant,
}

impl PendingChord {
    pub fn new(key: KeyEvent) -> Self {
        Self {
            key,
            pressed_at: Instant::now(),
        }
    }

    /// Whether the completion window is still open.
    pub fn is_live(&self) -> bool {
        self.pressed_at.elapsed().as_secs() < SEQUENCE_TIMEOUT_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn chord(code: KeyCode, modifiers: KeyModifiers) -> KeyChord {
        KeyChord { code, modifiers }
    }

    #[test]
    fn test_parse_single_char_preserves_case() {
        // Uppercase "G" comes with SHIFT from the terminal
        assert_eq!(
            parse_chord_pattern("G"),
            Some(ChordPattern::Single(chord(
                KeyCode::Char('G'),
                KeyModifiers::SHIFT
            )))
        );
        assert_eq!(
            parse_chord_pattern("g"),
            Some(ChordPattern::Single(chord(
                KeyCode::Char('g'),
                KeyModifiers::NONE
            )))
        );
    }

    #[test]
    fn test_parse_modifier_combinations() {
        assert_eq!(
            parse_chord_pattern("ctrl+k"),
            Some(ChordPattern::Single(chord(
                KeyCode::Char('k'),
                KeyModifiers::CONTROL
            )))
        );
        assert_eq!(
            parse_chord_pattern("cmd+k"),
            Some(ChordPattern::Single(chord(
                KeyCode::Char('k'),
                KeyModifiers::SUPER
            )))
        );
        assert_eq!(
            parse_chord_pattern("ctrl+shift+p"),
            Some(ChordPattern::Single(chord(
                KeyCode::Char('p'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )))
        );
        assert_eq!(
            parse_chord_pattern("alt+enter"),
            Some(ChordPattern::Single(chord(
                KeyCode::Enter,
                KeyModifiers::ALT
            )))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_chord_pattern("esc"),
            Some(ChordPattern::Single(chord(KeyCode::Esc, KeyModifiers::NONE)))
        );
        assert_eq!(
            parse_chord_pattern("f5"),
            Some(ChordPattern::Single(chord(
                KeyCode::F(5),
                KeyModifiers::NONE
            )))
        );
        assert_eq!(
            parse_chord_pattern("space"),
            Some(ChordPattern::Single(chord(
                KeyCode::Char(' '),
                KeyModifiers::NONE
            )))
        );
    }

    #[test]
    fn test_parse_sequences() {
        assert_eq!(
            parse_chord_pattern("p a"),
            Some(ChordPattern::Sequence(
                chord(KeyCode::Char('p'), KeyModifiers::NONE),
                chord(KeyCode::Char('a'), KeyModifiers::NONE)
            ))
        );
        // Each half of a sequence can carry modifiers
        assert_eq!(
            parse_chord_pattern("ctrl+g c"),
            Some(ChordPattern::Sequence(
                chord(KeyCode::Char('g'), KeyModifiers::CONTROL),
                chord(KeyCode::Char('c'), KeyModifiers::NONE)
            ))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_patterns() {
        assert_eq!(parse_chord_pattern(""), None);
        assert_eq!(parse_chord_pattern("ctrl+"), None);
        assert_eq!(parse_chord_pattern("a b c"), None);
        assert_eq!(parse_chord_pattern("notakey"), None);
    }

    #[test]
    fn test_backtab_matches_loosely() {
        let backtab = chord(KeyCode::BackTab, KeyModifiers::NONE);
        assert!(backtab.matches(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE)));
        assert!(backtab.matches(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));

        let tab = chord(KeyCode::Tab, KeyModifiers::NONE);
        assert!(!tab.matches(&KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_pending_chord_expires() {
        let key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        let live = PendingChord::new(key);
        assert!(live.is_live());

        let stale = PendingChord {
            key,
            pressed_at: Instant::now() - Duration::from_secs(SEQUENCE_TIMEOUT_SECS + 1),
        };
        assert!(!stale.is_live());
    }
}
