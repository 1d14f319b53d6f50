//! Key chords, the binding table and the hotkey dispatcher.

mod bindings;
mod chord;
mod dispatcher;

pub use bindings::{default_keymap, KeyBinding, Keymap};
pub use chord::{parse_chord_pattern, ChordPattern, KeyChord, PendingChord, SEQUENCE_TIMEOUT_SECS};
pub use dispatcher::{HotkeyDispatcher, Routed};
