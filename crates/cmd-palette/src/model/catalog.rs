//! Catalog storage and validation.

use std::collections::HashSet;

use super::{Command, CommandId, HandlerOutcome};
use crate::error::{CatalogIssue, HandlerError};

/// The command catalog: insertion-ordered, wholesale-replaced storage.
///
/// Construction validates the commands and records every defect as a
/// [`CatalogIssue`] instead of failing: duplicate ids are dropped (first
/// occurrence wins), missing parents and parent cycles are reported and
/// later degrade the affected lookups. There is no incremental add/remove;
/// hosts replace the whole catalog through [`Palette::set_catalog`], which
/// keeps hotkey bindings in sync.
///
/// [`Palette::set_catalog`]: crate::state::Palette::set_catalog
#[derive(Debug, Default)]
pub struct Catalog {
    commands: Vec<Command>,
    issues: Vec<CatalogIssue>,
}

impl Catalog {
    /// Build a catalog, validating the commands.
    pub fn new(commands: Vec<Command>) -> Self {
        let mut issues = Vec::new();

        // Duplicate ids: keep the first occurrence, drop the rest
        let mut ids = HashSet::new();
        let mut kept: Vec<Command> = Vec::with_capacity(commands.len());
        for command in commands {
            if !ids.insert(command.id.clone()) {
                log::warn!(
                    "duplicate command id `{}`, keeping the first occurrence",
                    command.id
                );
                issues.push(CatalogIssue::DuplicateId(command.id.clone()));
                continue;
            }
            kept.push(command);
        }

        // Mark every command that others name as their parent
        let parents: HashSet<CommandId> = kept
            .iter()
            .filter_map(|command| command.parent.clone())
            .collect();
        for command in &mut kept {
            if parents.contains(&command.id) {
                command.children = true;
            }
        }

        for command in &kept {
            if let Some(parent) = &command.parent {
                if !ids.contains(parent) {
                    log::warn!(
                        "command `{}` references missing parent `{parent}`",
                        command.id
                    );
                    issues.push(CatalogIssue::MissingParent {
                        child: command.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        let mut catalog = Self {
            commands: kept,
            issues,
        };
        catalog.detect_cycles();
        catalog
    }

    /// Walk every parent chain and record the ones that never terminate.
    fn detect_cycles(&mut self) {
        for command in &self.commands {
            let mut visited = HashSet::new();
            visited.insert(&command.id);
            let mut cursor = command.parent.as_ref();
            while let Some(parent) = cursor {
                if !visited.insert(parent) {
                    log::warn!("parent chain of `{}` contains a cycle", command.id);
                    self.issues.push(CatalogIssue::ParentCycle(command.id.clone()));
                    break;
                }
                cursor = self
                    .commands
                    .iter()
                    .find(|c| c.id == *parent)
                    .and_then(|c| c.parent.as_ref());
            }
        }
    }

    /// Look up a command by id.
    pub fn get(&self, id: &CommandId) -> Option<&Command> {
        self.commands.iter().find(|command| command.id == *id)
    }

    /// All commands in insertion order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Defects recorded during validation.
    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Run the handler of the command with the given id.
    ///
    /// Returns `None` when the command is missing or has no handler.
    pub(crate) fn invoke(
        &mut self,
        id: &CommandId,
    ) -> Option<Result<HandlerOutcome, HandlerError>> {
        self.commands
            .iter_mut()
            .find(|command| command.id == *id)
            .and_then(|command| command.invoke())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> CommandId {
        CommandId::new(raw)
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.issues().is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            Command::new("b", "B"),
            Command::new("a", "A"),
            Command::new("c", "C"),
        ]);
        let order: Vec<&str> = catalog
            .commands()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let catalog = Catalog::new(vec![
            Command::new("x", "First"),
            Command::new("x", "Second"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&id("x")).map(|c| c.title.as_str()), Some("First"));
        assert_eq!(catalog.issues(), &[CatalogIssue::DuplicateId(id("x"))]);
    }

    #[test]
    fn test_children_derived_from_parent_references() {
        let catalog = Catalog::new(vec![
            Command::new("git", "Git"),
            Command::new("git.commit", "Commit").parent("git"),
        ]);
        assert!(catalog.get(&id("git")).is_some_and(|c| c.children));
        assert!(catalog.get(&id("git.commit")).is_some_and(|c| !c.children));
    }

    #[test]
    fn test_explicit_submenu_flag_survives() {
        let catalog = Catalog::new(vec![Command::new("empty", "Empty menu").submenu()]);
        assert!(catalog.get(&id("empty")).is_some_and(|c| c.children));
    }

    #[test]
    fn test_missing_parent_recorded() {
        let catalog = Catalog::new(vec![Command::new("orphan", "Orphan").parent("ghost")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.issues(),
            &[CatalogIssue::MissingParent {
                child: id("orphan"),
                parent: id("ghost"),
            }]
        );
    }

    #[test]
    fn test_parent_cycle_recorded() {
        let catalog = Catalog::new(vec![
            Command::new("a", "A").parent("b"),
            Command::new("b", "B").parent("a"),
        ]);
        assert!(catalog
            .issues()
            .contains(&CatalogIssue::ParentCycle(id("a"))));
        assert!(catalog
            .issues()
            .contains(&CatalogIssue::ParentCycle(id("b"))));
    }

    #[test]
    fn test_chain_into_cycle_recorded() {
        let catalog = Catalog::new(vec![
            Command::new("a", "A").parent("b"),
            Command::new("b", "B").parent("a"),
            Command::new("c", "C").parent("a"),
        ]);
        assert!(catalog
            .issues()
            .contains(&CatalogIssue::ParentCycle(id("c"))));
    }

    #[test]
    fn test_invoke_by_id() {
        let mut catalog = Catalog::new(vec![
            Command::new("noop", "No handler"),
            Command::new("ok", "Ok").on_invoke(|| Ok(HandlerOutcome::Close)),
        ]);
        assert_eq!(catalog.invoke(&id("noop")), None);
        assert_eq!(catalog.invoke(&id("missing")), None);
        assert_eq!(catalog.invoke(&id("ok")), Some(Ok(HandlerOutcome::Close)));
    }
}
