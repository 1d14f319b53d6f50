//! # cmd-palette
//!
//! A standalone, embeddable command palette widget for ratatui applications:
//! a searchable, keyboard-driven overlay for running host-defined commands,
//! with hierarchical sub-menus, breadcrumbs and global hotkeys.
//!
//! ## Design Principles
//!
//! This crate is designed to be **instrumented** — it receives a command
//! catalog and emits events without performing side effects itself. The core
//! (matching, navigation, selection, hotkey dispatch) is fully testable
//! without a terminal; the ratatui renderer in [`widget`] is a thin,
//! swappable layer on top.
//!
//! ## Action-Based Architecture
//!
//! All mutation flows through [`PaletteAction`] intents applied by a single
//! reducer on [`Palette`]. Key events are translated into intents by the
//! built-in [`HotkeyDispatcher`], but a host with its own key handling can
//! dispatch intents directly.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cmd_palette::{Catalog, Command, Palette, PaletteConfig, PaletteEvent, PaletteWidget};
//!
//! let catalog = Catalog::new(vec![
//!     Command::new("git", "Git").submenu(),
//!     Command::new("git.commit", "Commit")
//!         .parent("git")
//!         .hotkey("ctrl+g c")
//!         .on_invoke(|| { /* run it */ Ok(Default::default()) }),
//! ]);
//! let mut palette = Palette::new(PaletteConfig::default(), catalog);
//!
//! // In the event loop: feed every key press to the palette
//! for event in palette.handle_key(key) {
//!     match event {
//!         PaletteEvent::Invoked(id) => log::info!("ran {id}"),
//!         PaletteEvent::Closed => {}
//!         _ => {}
//!     }
//! }
//!
//! // When drawing: the widget renders nothing while the palette is hidden
//! frame.render_widget(PaletteWidget::new(&palette), frame.area());
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod keymap;
pub mod matcher;
pub mod model;
pub mod state;
pub mod view_model;
pub mod widget;

// Re-export commonly used types
pub use action::PaletteAction;
pub use config::PaletteConfig;
pub use error::{CatalogIssue, HandlerError};
pub use event::PaletteEvent;
pub use keymap::{HotkeyDispatcher, KeyBinding, Keymap};
pub use matcher::{group_into_sections, matches, SectionGroup};
pub use model::{Catalog, Command, CommandId, Handler, HandlerOutcome};
pub use state::{NavigationState, Palette, Selection};
pub use view_model::{CommandRow, FooterHints, PaletteViewModel, SectionViewModel};
pub use widget::{DefaultTheme, PaletteTheme, PaletteWidget};
