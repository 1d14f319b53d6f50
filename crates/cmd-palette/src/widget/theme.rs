//! Trait for providing theme configuration to the palette widget.

use ratatui::style::Color;

/// Provides colors for the palette widget.
///
/// Implement this trait to integrate the palette with your application's
/// theme system. Only the selection colors are required; everything else
/// has dark-mode defaults.
///
/// # Example
///
/// ```ignore
/// use cmd_palette::PaletteTheme;
/// use ratatui::style::Color;
///
/// struct MyAppTheme {
///     // ... your theme fields
/// }
///
/// impl PaletteTheme for MyAppTheme {
///     fn selected_foreground(&self) -> Color {
///         Color::Yellow
///     }
///
///     fn selected_background(&self) -> Color {
///         Color::Rgb(50, 50, 80)
///     }
/// }
/// ```
pub trait PaletteTheme: Send + Sync {
    /// Foreground color for the selected row.
    fn selected_foreground(&self) -> Color;

    /// Background color for the selected row.
    fn selected_background(&self) -> Color;

    /// Background color of the dimmed overlay behind the popup.
    fn overlay_background(&self) -> Color {
        Color::Black
    }

    /// Background color of the popup itself.
    fn panel_background(&self) -> Color {
        Color::Reset
    }

    /// Border color of the popup and the input box.
    fn border_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for the popup title.
    fn title_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for normal rows.
    fn text_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for placeholders and empty states.
    fn muted_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for section headings.
    fn section_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for the breadcrumb trail.
    fn breadcrumb_foreground(&self) -> Color {
        Color::Blue
    }

    /// Foreground color for hotkey hints next to commands.
    fn hotkey_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for key hints in the bottom border.
    fn hint_key_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for hint descriptions in the bottom border.
    fn hint_text_foreground(&self) -> Color {
        Color::DarkGray
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl PaletteTheme for DefaultTheme {
    fn selected_foreground(&self) -> Color {
        Color::Yellow
    }

    fn selected_background(&self) -> Color {
        Color::Rgb(50, 50, 80) // muted indigo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.selected_foreground(), Color::Yellow);
        assert_eq!(theme.selected_background(), Color::Rgb(50, 50, 80));
        assert_eq!(theme.panel_background(), Color::Reset);
    }
}
