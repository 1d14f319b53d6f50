//! State management for the palette.

mod navigation;
mod palette;
mod selection;

pub use navigation::{breadcrumbs, NavigationState};
pub use palette::Palette;
pub use selection::Selection;
