//! Error types for catalog validation and handler execution.

use thiserror::Error;

use crate::model::CommandId;

/// A defect found while validating a catalog.
///
/// Issues never abort catalog construction. The catalog keeps the commands
/// that make sense, records the issues, and the palette degrades (duplicate
/// ids are dropped first-wins, breadcrumb walks stop at missing parents and
/// cycles).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    /// Two commands share an id; the later one was dropped.
    #[error("duplicate command id `{0}`, keeping the first occurrence")]
    DuplicateId(CommandId),

    /// A command names a parent that is not in the catalog.
    #[error("command `{child}` references missing parent `{parent}`")]
    MissingParent {
        /// The command carrying the reference.
        child: CommandId,
        /// The id that could not be resolved.
        parent: CommandId,
    },

    /// Following parent references from this command revisits it.
    #[error("parent references of `{0}` form a cycle")]
    ParentCycle(CommandId),
}

/// Failure returned by a command handler.
///
/// Hosts wrap whatever went wrong into a message; the palette logs it,
/// reports it as an event and stays open so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Create an error from a display message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
