//! Events emitted by the palette for the host application to handle.

use crate::model::CommandId;

/// Events emitted by the palette.
///
/// The palette is designed to be instrumented - it emits events instead of
/// performing side effects directly. The host application decides what an
/// invocation or a lifecycle change means for it.
///
/// # Example
///
/// ```ignore
/// for event in palette.handle_key(key) {
///     match event {
///         PaletteEvent::Invoked(id) => {
///             // The command's handler already ran; update surrounding UI
///             status_bar.flash(format!("ran {id}"));
///         }
///         PaletteEvent::HandlerFailed { id, message } => {
///             status_bar.error(format!("{id}: {message}"));
///         }
///         PaletteEvent::Opened | PaletteEvent::Closed => {
///             // e.g. pause/resume background redraws
///         }
///         PaletteEvent::RootChanged(_) => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// The palette became visible.
    Opened,

    /// The palette was closed (dismissed, or after an invocation).
    Closed,

    /// The navigation root changed; `None` means back at the top level.
    RootChanged(Option<CommandId>),

    /// A command's handler ran successfully.
    Invoked(CommandId),

    /// A command's handler returned an error. The palette stays open.
    HandlerFailed {
        /// The command whose handler failed.
        id: CommandId,
        /// Display message from the handler's error.
        message: String,
    },
}
