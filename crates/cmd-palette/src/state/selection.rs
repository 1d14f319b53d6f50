//! Selection cursor over the current match list.

use crate::model::CommandId;

/// The highlighted command, tracked by id against the visible match list.
///
/// The cursor wraps cyclically and re-anchors when the list changes under
/// it: a selection that survives the change is kept, anything else lands on
/// the first entry.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<CommandId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected command id, if any.
    pub fn selected(&self) -> Option<&CommandId> {
        self.selected.as_ref()
    }

    /// Position of the selection within the given list.
    pub fn selected_index(&self, list: &[CommandId]) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        list.iter().position(|id| id == selected)
    }

    /// Move down one entry, wrapping past the end.
    pub fn next(&mut self, list: &[CommandId]) {
        if list.is_empty() {
            return;
        }
        let index = match self.selected_index(list) {
            Some(index) if index + 1 < list.len() => index + 1,
            Some(_) => 0,
            None => 0,
        };
        self.selected = Some(list[index].clone());
    }

    /// Move up one entry, wrapping past the start.
    pub fn previous(&mut self, list: &[CommandId]) {
        if list.is_empty() {
            return;
        }
        let index = match self.selected_index(list) {
            Some(0) | None => list.len() - 1,
            Some(index) => index - 1,
        };
        self.selected = Some(list[index].clone());
    }

    /// Select a specific id; ignored when it is not in the list.
    pub fn focus(&mut self, id: CommandId, list: &[CommandId]) {
        if list.contains(&id) {
            self.selected = Some(id);
        }
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Re-anchor after the list changed: keep a surviving selection,
    /// otherwise take the first entry (or none on an empty list).
    pub fn reanchor(&mut self, list: &[CommandId]) {
        if self.selected_index(list).is_some() {
            return;
        }
        self.selected = list.first().cloned();
    }
}
