//! Ratatui widgets for rendering the palette.

mod palette_widget;
mod theme;

pub use palette_widget::PaletteWidget;
pub use theme::{DefaultTheme, PaletteTheme};
