//! Palette actions.
//!
//! Tagged intents that the palette reducer understands. The built-in
//! [`HotkeyDispatcher`](crate::keymap::HotkeyDispatcher) translates key
//! events into these, and hosts with their own key handling (or pointer
//! support) dispatch them directly via [`Palette::apply`].
//!
//! [`Palette::apply`]: crate::state::Palette::apply

use serde::{Deserialize, Serialize};

use crate::model::CommandId;

/// Actions that can be applied to the palette state.
///
/// Serializable so that key bindings resolving to actions can live in
/// configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteAction {
    // === Visibility ===
    /// Toggle the palette open/closed. The only action that works while
    /// the palette is hidden.
    Toggle,
    /// Close the palette, resetting root and search.
    Dismiss,

    // === Search ===
    /// Append a character to the search text.
    InsertChar(char),
    /// Delete the last character of the search text.
    DeleteChar,
    /// Clear the search text.
    ClearSearch,
    /// Replace the search text wholesale (input-field collaborators).
    SetSearch(String),

    // === Selection ===
    /// Move the selection down, wrapping past the end.
    SelectNext,
    /// Move the selection up, wrapping past the start.
    SelectPrev,
    /// Select a specific command (pointer hover).
    FocusCommand(CommandId),

    // === Navigation ===
    /// Confirm the selection: enter its sub-menu or invoke its handler.
    Confirm,
    /// Go one breadcrumb level up (bound to backspace on empty search).
    Back,
    /// Jump to a navigation root directly (breadcrumb click).
    SetRoot(Option<CommandId>),
    /// Confirm a specific command regardless of selection (item click).
    Activate(CommandId),
}

impl PaletteAction {
    /// Whether the action only makes sense while the palette is visible.
    ///
    /// The reducer ignores these while hidden; `Toggle` is the one way in.
    pub fn requires_visible(&self) -> bool {
        !matches!(self, PaletteAction::Toggle)
    }
}
