//! A single palette command and its invocation contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HandlerError;

/// Identifier of a command within a catalog.
///
/// Ids are host-chosen strings ("git.commit"). They double as parent
/// references, so they must be unique within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(String);

impl CommandId {
    /// Create an id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommandId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CommandId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What the palette should do after a handler ran successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerOutcome {
    /// Close the palette (the default after an invocation).
    #[default]
    Close,
    /// Keep the palette open, e.g. for commands that toggle something
    /// the user wants to keep adjusting.
    KeepOpen,
}

/// Host callback invoked when a command is confirmed or its hotkey fires.
pub type Handler = Box<dyn FnMut() -> Result<HandlerOutcome, HandlerError> + Send>;

/// A single entry in the command catalog.
///
/// Commands are plain data plus an optional handler. A command with
/// `children` set is a sub-menu node: confirming it enters the sub-menu
/// instead of invoking anything. Fields are public; the builder methods
/// exist for readable catalog literals.
pub struct Command {
    /// Unique id, also the parent-reference target for sub-menu entries.
    pub id: CommandId,
    /// Display label and primary match target.
    pub title: String,
    /// Commands sharing a section are rendered under one header.
    pub section: Option<String>,
    /// Secondary match target, never displayed.
    pub keywords: Option<String>,
    /// Id of the sub-menu this command lives in, if any.
    pub parent: Option<CommandId>,
    /// Marks a sub-menu node. Derived automatically for any command that
    /// other commands name as their parent.
    pub children: bool,
    /// Textual chord ("ctrl+g c") bound globally while the catalog is live.
    pub hotkey: Option<String>,
    handler: Option<Handler>,
}

impl Command {
    /// Create a command with the two mandatory fields.
    pub fn new(id: impl Into<CommandId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            section: None,
            keywords: None,
            parent: None,
            children: false,
            hotkey: None,
            handler: None,
        }
    }

    /// Place the command under a section header.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Add extra search terms that match but never display.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Attach the command to a sub-menu by its parent id.
    pub fn parent(mut self, parent: impl Into<CommandId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Mark the command as a sub-menu node even if no child names it yet.
    pub fn submenu(mut self) -> Self {
        self.children = true;
        self
    }

    /// Bind a global hotkey chord to the command.
    pub fn hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }

    /// Attach the handler to run when the command is invoked.
    pub fn on_invoke<F>(mut self, handler: F) -> Self
    where
        F: FnMut() -> Result<HandlerOutcome, HandlerError> + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Whether the command has a handler attached.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Run the handler, if any.
    pub(crate) fn invoke(&mut self) -> Option<Result<HandlerOutcome, HandlerError>> {
        self.handler.as_mut().map(|handler| handler())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("section", &self.section)
            .field("keywords", &self.keywords)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("hotkey", &self.hotkey)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let cmd = Command::new("git.commit", "Commit")
            .section("Git")
            .keywords("save record")
            .parent("git")
            .hotkey("ctrl+g c");

        assert_eq!(cmd.id, CommandId::new("git.commit"));
        assert_eq!(cmd.title, "Commit");
        assert_eq!(cmd.section.as_deref(), Some("Git"));
        assert_eq!(cmd.keywords.as_deref(), Some("save record"));
        assert_eq!(cmd.parent, Some(CommandId::new("git")));
        assert_eq!(cmd.hotkey.as_deref(), Some("ctrl+g c"));
        assert!(!cmd.children);
        assert!(!cmd.has_handler());
    }

    #[test]
    fn test_invoke_runs_handler() {
        let mut cmd = Command::new("x", "X").on_invoke(|| Ok(HandlerOutcome::KeepOpen));
        assert!(cmd.has_handler());
        assert_eq!(cmd.invoke(), Some(Ok(HandlerOutcome::KeepOpen)));
        // Handlers are FnMut, so a second invocation works too
        assert_eq!(cmd.invoke(), Some(Ok(HandlerOutcome::KeepOpen)));
    }

    #[test]
    fn test_invoke_without_handler_is_none() {
        let mut cmd = Command::new("x", "X");
        assert_eq!(cmd.invoke(), None);
    }

    #[test]
    fn test_debug_elides_handler() {
        let cmd = Command::new("x", "X").on_invoke(|| Ok(HandlerOutcome::Close));
        let rendered = format!("{cmd:?}");
        assert!(rendered.contains("handler: true"));
    }
}
