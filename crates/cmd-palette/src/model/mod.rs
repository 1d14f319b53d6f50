//! Data model for the command catalog.

mod catalog;
mod command;

pub use catalog::Catalog;
pub use command::{Command, CommandId, Handler, HandlerOutcome};
