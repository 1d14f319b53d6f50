//! Navigation root and breadcrumb derivation.

use std::collections::HashSet;

use crate::model::{Catalog, CommandId};

/// The hierarchical navigation state: which sub-menu is active.
///
/// `None` is the top level. Entering a sub-menu node scopes the match list
/// to its children; `back` retreats along the breadcrumb trail.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    root: Option<CommandId>,
}

impl NavigationState {
    /// Create navigation state at the top level.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active root; `None` means top level.
    pub fn root(&self) -> Option<&CommandId> {
        self.root.as_ref()
    }

    /// Enter a sub-menu. Callers check the command's `children` flag.
    pub fn enter(&mut self, id: CommandId) {
        self.root = Some(id);
    }

    /// Retreat one level along the given breadcrumb trail: to its
    /// second-to-last entry, or to the top level for short trails.
    pub fn back(&mut self, trail: &[CommandId]) {
        self.root = if trail.len() > 1 {
            Some(trail[trail.len() - 2].clone())
        } else {
            None
        };
    }

    /// Jump to an arbitrary root ("breadcrumb click").
    pub fn set(&mut self, root: Option<CommandId>) {
        self.root = root;
    }

    /// Force the top level.
    pub fn reset(&mut self) {
        self.root = None;
    }
}

/// Ancestor chain of the selected command, outermost first.
///
/// The trail is derived from the *selection*, not from the navigation root:
/// it reflects where the highlighted command sits, which during a global
/// search can differ from the root. With no selection the trail is empty.
///
/// Malformed catalogs degrade instead of looping: a parent id missing from
/// the catalog still appears as the trail's outermost entry but stops the
/// walk, and a repeated id (parent cycle) stops the walk where the repeat
/// would start.
pub fn breadcrumbs(catalog: &Catalog, selected: Option<&CommandId>) -> Vec<CommandId> {
    let mut trail = Vec::new();
    let Some(command) = selected.and_then(|id| catalog.get(id)) else {
        return trail;
    };

    let mut seen: HashSet<&CommandId> = HashSet::new();
    seen.insert(&command.id);
    let mut cursor = command.parent.as_ref();
    while let Some(parent) = cursor {
        if !seen.insert(parent) {
            log::warn!("parent chain of `{}` contains a cycle", command.id);
            break;
        }
        trail.push(parent.clone());
        match catalog.get(parent) {
            Some(ancestor) => cursor = ancestor.parent.as_ref(),
            None => {
                log::warn!(
                    "breadcrumb walk for `{}` stopped at missing parent `{parent}`",
                    command.id
                );
                break;
            }
        }
    }

    trail.reverse();
    trail
}
