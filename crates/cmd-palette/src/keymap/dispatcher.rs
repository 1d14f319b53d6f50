//! Routing of raw key events to palette intents and command hotkeys.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::bindings::Keymap;
use super::chord::{parse_chord_pattern, ChordPattern, PendingChord};
use crate::action::PaletteAction;
use crate::model::{Catalog, CommandId};

/// Outcome of routing one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// The key maps to a palette intent.
    Action(PaletteAction),
    /// The key completes a per-command hotkey; invoke that command directly.
    Invoke(CommandId),
    /// Nothing matched (or the key armed a pending sequence).
    None,
}

/// A parsed per-command hotkey.
#[derive(Debug, Clone)]
struct CommandChord {
    pattern: ChordPattern,
    id: CommandId,
}

/// Routes key events in three layers: text input while the palette is
/// visible, then the keymap, then per-command hotkeys.
///
/// The keymap layer only fires [`PaletteAction::Toggle`] while the palette
/// is hidden; per-command hotkeys are live either way. Plain characters are
/// consumed by the search input whenever the palette is visible, which
/// shadows bare-char sequences there; chords with modifiers stay reachable.
#[derive(Debug)]
pub struct HotkeyDispatcher {
    keymap: Keymap,
    command_chords: Vec<CommandChord>,
    pending: Option<PendingChord>,
}

impl HotkeyDispatcher {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            command_chords: Vec::new(),
            pending: None,
        }
    }

    /// Rebuild the per-command chord table from a catalog.
    ///
    /// The table is replaced wholesale, so hotkeys of commands that are no
    /// longer in the catalog cannot linger. Unparseable hotkeys are logged
    /// and skipped; when two commands claim the same chord, the first one
    /// in catalog order wins at dispatch.
    pub fn rebind(&mut self, catalog: &Catalog, register_hotkeys: bool) {
        self.command_chords.clear();
        self.pending = None;
        if !register_hotkeys {
            return;
        }

        for command in catalog.commands() {
            let Some(hotkey) = command.hotkey.as_deref() else {
                continue;
            };
            let Some(pattern) = parse_chord_pattern(hotkey) else {
                log::warn!(
                    "command `{}` has unparseable hotkey `{hotkey}`",
                    command.id
                );
                continue;
            };
            if let Some(existing) = self.command_chords.iter().find(|c| c.pattern == pattern) {
                log::warn!(
                    "hotkey `{hotkey}` of `{}` is shadowed by `{}`",
                    command.id,
                    existing.id
                );
            }
            self.command_chords.push(CommandChord {
                pattern,
                id: command.id.clone(),
            });
        }
    }

    /// Replace the keymap.
    pub fn set_keymap(&mut self, keymap: Keymap) {
        self.keymap = keymap;
        self.pending = None;
    }

    /// The active keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Route one key event.
    pub fn route(&mut self, key: KeyEvent, visible: bool) -> Routed {
        // Plain characters feed the search while the palette is visible
        if visible {
            if let Some(c) = text_input_char(&key) {
                self.pending = None;
                return Routed::Action(PaletteAction::InsertChar(c));
            }
        }

        // A live pending chord gets the first shot at completing a sequence
        if let Some(pending) = self.pending.take() {
            if pending.is_live() {
                if let Some(action) = self.keymap.match_sequence(&pending.key, &key) {
                    if visible || action == PaletteAction::Toggle {
                        return Routed::Action(action);
                    }
                }
                if let Some(id) = self.complete_command_sequence(&pending.key, &key) {
                    return Routed::Invoke(id);
                }
            }
            // No completion: the key is treated as a fresh press below
        }

        if let Some(action) = self.keymap.match_single(&key) {
            if visible || action == PaletteAction::Toggle {
                return Routed::Action(action);
            }
        }

        for chord in &self.command_chords {
            match &chord.pattern {
                ChordPattern::Single(single) if single.matches(&key) => {
                    return Routed::Invoke(chord.id.clone());
                }
                ChordPattern::Sequence(first, _) if first.matches(&key) => {
                    self.pending = Some(PendingChord::new(key));
                    return Routed::None;
                }
                _ => {}
            }
        }

        if self.keymap.starts_sequence(&key) {
            self.pending = Some(PendingChord::new(key));
        }

        Routed::None
    }

    fn complete_command_sequence(&self, first: &KeyEvent, second: &KeyEvent) -> Option<CommandId> {
        self.command_chords
            .iter()
            .find_map(|chord| match &chord.pattern {
                ChordPattern::Sequence(a, b) if a.matches(first) && b.matches(second) => {
                    Some(chord.id.clone())
                }
                _ => None,
            })
    }
}

/// A character destined for the search input: plain or shift-only.
fn text_input_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
                && !key.modifiers.contains(KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyBinding;
    use crate::model::Command;
    use std::time::{Duration, Instant};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn keymod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn dispatcher_with_hotkeys() -> HotkeyDispatcher {
        let catalog = Catalog::new(vec![
            Command::new("build", "Build").hotkey("ctrl+b"),
            Command::new("git.commit", "Commit").hotkey("ctrl+g c"),
        ]);
        let mut dispatcher = HotkeyDispatcher::new(Keymap::default());
        dispatcher.rebind(&catalog, true);
        dispatcher
    }

    #[test]
    fn test_plain_chars_feed_search_while_visible() {
        let mut dispatcher = dispatcher_with_hotkeys();

        assert_eq!(
            dispatcher.route(key(KeyCode::Char('a')), true),
            Routed::Action(PaletteAction::InsertChar('a'))
        );
        // shifted characters are still text
        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('A'), KeyModifiers::SHIFT), true),
            Routed::Action(PaletteAction::InsertChar('A'))
        );
        // while hidden the same key matches nothing
        assert_eq!(dispatcher.route(key(KeyCode::Char('a')), false), Routed::None);
    }

    #[test]
    fn test_keymap_is_gated_to_toggle_while_hidden() {
        let mut dispatcher = dispatcher_with_hotkeys();

        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('k'), KeyModifiers::CONTROL), false),
            Routed::Action(PaletteAction::Toggle)
        );
        assert_eq!(dispatcher.route(key(KeyCode::Enter), false), Routed::None);
        assert_eq!(dispatcher.route(key(KeyCode::Esc), false), Routed::None);

        assert_eq!(
            dispatcher.route(key(KeyCode::Enter), true),
            Routed::Action(PaletteAction::Confirm)
        );
    }

    #[test]
    fn test_single_hotkey_fires_in_both_states() {
        let mut dispatcher = dispatcher_with_hotkeys();
        let ctrl_b = keymod(KeyCode::Char('b'), KeyModifiers::CONTROL);

        assert_eq!(
            dispatcher.route(ctrl_b, false),
            Routed::Invoke(CommandId::new("build"))
        );
        assert_eq!(
            dispatcher.route(ctrl_b, true),
            Routed::Invoke(CommandId::new("build"))
        );
    }

    #[test]
    fn test_sequence_hotkey_completes() {
        let mut dispatcher = dispatcher_with_hotkeys();

        let armed = dispatcher.route(keymod(KeyCode::Char('g'), KeyModifiers::CONTROL), false);
        assert_eq!(armed, Routed::None);
        assert_eq!(
            dispatcher.route(key(KeyCode::Char('c')), false),
            Routed::Invoke(CommandId::new("git.commit"))
        );
    }

    #[test]
    fn test_sequence_expires_after_timeout() {
        let mut dispatcher = dispatcher_with_hotkeys();

        dispatcher.route(keymod(KeyCode::Char('g'), KeyModifiers::CONTROL), false);
        dispatcher.pending = dispatcher.pending.take().map(|p| PendingChord {
            pressed_at: Instant::now() - Duration::from_secs(3),
            ..p
        });

        assert_eq!(dispatcher.route(key(KeyCode::Char('c')), false), Routed::None);
    }

    #[test]
    fn test_mismatched_second_chord_falls_through() {
        let mut dispatcher = dispatcher_with_hotkeys();

        dispatcher.route(keymod(KeyCode::Char('g'), KeyModifiers::CONTROL), false);
        // ctrl+b does not complete the sequence, but still fires on its own
        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('b'), KeyModifiers::CONTROL), false),
            Routed::Invoke(CommandId::new("build"))
        );
        // the pending chord was consumed by the fall-through
        assert!(dispatcher.pending.is_none());
    }

    #[test]
    fn test_keymap_sequences_route_to_actions() {
        let keymap = Keymap::new(vec![KeyBinding::new("g g", "g g", PaletteAction::Toggle)]);
        let mut dispatcher = HotkeyDispatcher::new(keymap);

        assert_eq!(dispatcher.route(key(KeyCode::Char('g')), false), Routed::None);
        assert_eq!(
            dispatcher.route(key(KeyCode::Char('g')), false),
            Routed::Action(PaletteAction::Toggle)
        );
    }

    #[test]
    fn test_rebind_replaces_table_wholesale() {
        let mut dispatcher = dispatcher_with_hotkeys();
        let ctrl_b = keymod(KeyCode::Char('b'), KeyModifiers::CONTROL);

        dispatcher.rebind(&Catalog::new(vec![]), true);
        assert_eq!(dispatcher.route(ctrl_b, false), Routed::None);
    }

    #[test]
    fn test_rebind_disabled_registers_nothing() {
        let catalog = Catalog::new(vec![Command::new("build", "Build").hotkey("ctrl+b")]);
        let mut dispatcher = HotkeyDispatcher::new(Keymap::default());
        dispatcher.rebind(&catalog, false);

        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('b'), KeyModifiers::CONTROL), false),
            Routed::None
        );
    }

    #[test]
    fn test_unparseable_hotkeys_are_skipped() {
        let catalog = Catalog::new(vec![
            Command::new("bad", "Bad").hotkey("ctrl+"),
            Command::new("good", "Good").hotkey("ctrl+t"),
        ]);
        let mut dispatcher = HotkeyDispatcher::new(Keymap::default());
        dispatcher.rebind(&catalog, true);

        assert_eq!(dispatcher.command_chords.len(), 1);
        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('t'), KeyModifiers::CONTROL), false),
            Routed::Invoke(CommandId::new("good"))
        );
    }

    #[test]
    fn test_shared_chord_first_command_wins() {
        let catalog = Catalog::new(vec![
            Command::new("first", "First").hotkey("ctrl+t"),
            Command::new("second", "Second").hotkey("ctrl+t"),
        ]);
        let mut dispatcher = HotkeyDispatcher::new(Keymap::default());
        dispatcher.rebind(&catalog, true);

        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('t'), KeyModifiers::CONTROL), false),
            Routed::Invoke(CommandId::new("first"))
        );
    }

    #[test]
    fn test_keymap_shadows_command_chords() {
        // a command claiming ctrl+k loses to the keymap's Toggle binding
        let catalog = Catalog::new(vec![Command::new("clash", "Clash").hotkey("ctrl+k")]);
        let mut dispatcher = HotkeyDispatcher::new(Keymap::default());
        dispatcher.rebind(&catalog, true);

        assert_eq!(
            dispatcher.route(keymod(KeyCode::Char('k'), KeyModifiers::CONTROL), false),
            Routed::Action(PaletteAction::Toggle)
        );
    }
}
