//! The palette rendered as a centered floating panel.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Widget},
};

use super::theme::{DefaultTheme, PaletteTheme};
use crate::state::Palette;
use crate::view_model::PaletteViewModel;

/// Renders a [`Palette`] as a modal popup over the host application.
///
/// The widget is a pure renderer: it borrows the palette, draws nothing
/// while the palette is hidden, and never mutates state. Hosts drive input
/// through [`Palette::handle_key`] and simply render this widget last so it
/// overlays their own UI.
///
/// # Example
///
/// ```ignore
/// use cmd_palette::PaletteWidget;
///
/// terminal.draw(|frame| {
///     // ... render the host application first ...
///     frame.render_widget(PaletteWidget::new(&palette), frame.area());
/// })?;
/// ```
pub struct PaletteWidget<'a, T: PaletteTheme = DefaultTheme> {
    palette: &'a Palette,
    theme: &'a T,
}

impl<'a> PaletteWidget<'a, DefaultTheme> {
    /// Create a widget over a palette with the default theme.
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            theme: &DefaultTheme,
        }
    }
}

impl<'a, T: PaletteTheme> PaletteWidget<'a, T> {
    /// Swap in a custom theme.
    pub fn theme<U: PaletteTheme>(self, theme: &'a U) -> PaletteWidget<'a, U> {
        PaletteWidget {
            palette: self.palette,
            theme,
        }
    }
}

impl<T: PaletteTheme> Widget for PaletteWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.palette.is_visible() {
            return;
        }

        let theme = self.theme;
        let vm = PaletteViewModel::from_palette(self.palette);

        // Dim the entire screen to create the modal effect
        let overlay = Block::default().style(
            Style::default()
                .bg(theme.overlay_background())
                .add_modifier(Modifier::DIM),
        );
        overlay.render(area, buf);

        // Centered popup (70% width, 60% height)
        let popup_width = (area.width * 70 / 100).min(100);
        let popup_height = (area.height * 60 / 100).min(30);
        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2;

        let popup_area = Rect {
            x: area.x + popup_x,
            y: area.y + popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the popup area (removes the dim effect for the popup itself)
        Clear.render(popup_area, buf);

        let key_style = Style::default().fg(theme.hint_key_foreground()).bold();
        let hint_style = Style::default().fg(theme.hint_text_foreground());
        let muted_style = Style::default().fg(theme.muted_foreground());
        let text_style = Style::default().fg(theme.text_foreground());

        // Footer hints live in the bottom border
        let footer = Line::from(vec![
            Span::styled(format!(" {}", vm.footer_hints.confirm), key_style),
            Span::styled(" run  ", hint_style),
            Span::styled(
                format!(
                    "{}/{}",
                    vm.footer_hints.navigate_up, vm.footer_hints.navigate_down
                ),
                key_style,
            ),
            Span::styled(" navigate  ", hint_style),
            Span::styled(vm.footer_hints.back.clone(), key_style),
            Span::styled(" back  ", hint_style),
            Span::styled(vm.footer_hints.close.clone(), key_style),
            Span::styled(" close ", hint_style),
        ]);

        let title = format!(" Command Palette ({} commands) ", vm.match_count);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.title_foreground())
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(footer)
            .title_alignment(Alignment::Center)
            .border_style(
                Style::default()
                    .fg(theme.border_foreground())
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.panel_background()));
        block.render(popup_area, buf);

        let inner = popup_area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });

        // Split into breadcrumb trail, input box and results list
        let trail_height = if self.palette.config().hide_breadcrumbs {
            0
        } else {
            1
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(trail_height),
                Constraint::Length(3), // Input box
                Constraint::Min(4),    // Results list
            ])
            .split(inner);

        // Breadcrumb trail, rooted at "Home"
        if trail_height > 0 {
            let crumb_style = Style::default().fg(theme.breadcrumb_foreground());
            let mut spans = vec![Span::styled("Home", crumb_style)];
            for crumb in &vm.breadcrumbs {
                spans.push(Span::styled(" › ", muted_style));
                spans.push(Span::styled(crumb.as_str(), crumb_style));
            }
            Paragraph::new(Line::from(spans)).render(chunks[0], buf);
        }

        // Input box
        let input_line = if vm.input_is_empty {
            Line::from(vec![Span::styled(
                vm.placeholder.as_str(),
                muted_style.italic(),
            )])
        } else {
            Line::from(vec![Span::styled(vm.input_text.as_str(), text_style)])
        };
        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_foreground())),
        );
        input.render(chunks[1], buf);

        // Results list
        if vm.match_count == 0 {
            let no_results = Paragraph::new("No matching commands")
                .style(muted_style)
                .alignment(Alignment::Center);
            no_results.render(chunks[2], buf);
            return;
        }

        let hint_width = vm
            .sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .map(|row| row.hotkey_hint.len())
            .max()
            .unwrap_or(0) as u16;

        let section_style = Style::default()
            .fg(theme.section_foreground())
            .add_modifier(Modifier::BOLD);
        let selected_style = Style::default()
            .fg(theme.selected_foreground())
            .add_modifier(Modifier::BOLD);
        let hotkey_style = Style::default().fg(theme.hotkey_foreground());

        let mut rows: Vec<Row> = Vec::new();
        for section in &vm.sections {
            if let Some(title) = &section.title {
                rows.push(Row::new(vec![
                    Cell::from(""),
                    Cell::from(title.as_str()).style(section_style),
                    Cell::from(""),
                ]));
            }
            for row_vm in &section.rows {
                let style = if row_vm.is_selected {
                    selected_style
                } else {
                    text_style
                };
                let title = if row_vm.has_children {
                    format!("{} ›", row_vm.title)
                } else {
                    row_vm.title.clone()
                };
                let row = Row::new(vec![
                    Cell::from(row_vm.indicator.as_str()).style(style),
                    Cell::from(title).style(style),
                    Cell::from(Text::from(row_vm.hotkey_hint.as_str()).right_aligned())
                        .style(hotkey_style),
                ]);
                rows.push(if row_vm.is_selected {
                    row.style(Style::default().bg(theme.selected_background()))
                } else {
                    row
                });
            }
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(2), // Indicator
                Constraint::Min(10),   // Title
                Constraint::Length(hint_width),
            ],
        );
        table.render(chunks[2], buf);
    }
}
