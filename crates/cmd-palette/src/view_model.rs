//! View model for the palette widget.
//!
//! Pre-computes all display data for rendering, separating data preparation
//! from layout logic. Renderers other than the bundled widget can consume
//! this directly.

use crate::action::PaletteAction;
use crate::model::CommandId;
use crate::state::Palette;

/// View model for the palette
#[derive(Debug, Clone)]
pub struct PaletteViewModel {
    /// Pre-formatted input text for display
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    /// Placeholder shown while the input is empty
    pub placeholder: String,
    /// Resolved titles of the selection's ancestor trail, outermost first
    pub breadcrumbs: Vec<String>,
    /// Visible rows grouped by section, in catalog order
    pub sections: Vec<SectionViewModel>,
    /// Total number of visible commands across all sections
    pub match_count: usize,
    /// Footer hints for the bottom border
    pub footer_hints: FooterHints,
}

/// One section worth of rows
#[derive(Debug, Clone)]
pub struct SectionViewModel {
    /// Section heading; `None` collects commands without a section
    pub title: Option<String>,
    /// Rows of this section
    pub rows: Vec<CommandRow>,
}

/// A single row in the command list
#[derive(Debug, Clone)]
pub struct CommandRow {
    /// Id of the command behind this row
    pub id: CommandId,
    /// Is this row selected?
    pub is_selected: bool,
    /// Selection indicator ("> " or "  ")
    pub indicator: String,
    /// Command title
    pub title: String,
    /// Hotkey hint, empty for commands without one
    pub hotkey_hint: String,
    /// Whether confirming this row descends into a sub-menu
    pub has_children: bool,
}

/// Pre-computed footer hints for keyboard shortcuts
#[derive(Debug, Clone)]
pub struct FooterHints {
    /// Hint for moving the selection up (e.g., "↑/Shift+Tab")
    pub navigate_up: String,
    /// Hint for moving the selection down (e.g., "↓/Tab")
    pub navigate_down: String,
    /// Hint for confirming the selection
    pub confirm: String,
    /// Hint for navigating one level back
    pub back: String,
    /// Hint for closing the palette
    pub close: String,
}

impl PaletteViewModel {
    /// Build the view model from a palette snapshot
    pub fn from_palette(palette: &Palette) -> Self {
        let input_text = palette.search().to_string();
        let input_is_empty = input_text.is_empty();
        let placeholder = palette.config().placeholder.clone();

        let breadcrumbs = if palette.config().hide_breadcrumbs {
            Vec::new()
        } else {
            palette
                .breadcrumbs()
                .iter()
                .map(|id| {
                    // Dangling parent ids stay visible as their raw id
                    palette
                        .catalog()
                        .get(id)
                        .map(|command| command.title.clone())
                        .unwrap_or_else(|| id.to_string())
                })
                .collect()
        };

        let selected = palette.selected().map(|command| command.id.clone());

        let sections: Vec<SectionViewModel> = palette
            .grouped_matches()
            .into_iter()
            .map(|group| {
                let rows = group
                    .commands
                    .iter()
                    .map(|command| {
                        let is_selected = selected.as_ref() == Some(&command.id);
                        let indicator = if is_selected {
                            "> ".to_string()
                        } else {
                            "  ".to_string()
                        };
                        CommandRow {
                            id: command.id.clone(),
                            is_selected,
                            indicator,
                            title: command.title.clone(),
                            hotkey_hint: command.hotkey.clone().unwrap_or_default(),
                            has_children: command.children,
                        }
                    })
                    .collect();
                SectionViewModel {
                    title: group.name.map(|name| name.to_string()),
                    rows,
                }
            })
            .collect();

        let match_count = sections.iter().map(|section| section.rows.len()).sum();

        let keymap = palette.keymap();
        let footer_hints = FooterHints {
            navigate_up: keymap
                .compact_hint_for(&PaletteAction::SelectPrev)
                .unwrap_or_else(|| "↑".to_string()),
            navigate_down: keymap
                .compact_hint_for(&PaletteAction::SelectNext)
                .unwrap_or_else(|| "↓".to_string()),
            confirm: keymap
                .hint_for(&PaletteAction::Confirm)
                .unwrap_or("Enter")
                .to_string(),
            back: keymap
                .hint_for(&PaletteAction::Back)
                .unwrap_or("Backspace")
                .to_string(),
            close: keymap
                .hint_for(&PaletteAction::Dismiss)
                .unwrap_or("Esc")
                .to_string(),
        };

        Self {
            input_text,
            input_is_empty,
            placeholder,
            breadcrumbs,
            sections,
            match_count,
            footer_hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaletteConfig;
    use crate::model::{Catalog, Command};
    use pretty_assertions::assert_eq;

    fn sample_palette() -> Palette {
        let catalog = Catalog::new(vec![
            Command::new("git", "Git").section("Version control"),
            Command::new("git.commit", "Commit")
                .parent("git")
                .hotkey("ctrl+g c"),
            Command::new("view", "View").section("Display"),
            Command::new("quit", "Quit"),
        ]);
        let mut palette = Palette::new(PaletteConfig::default(), catalog);
        palette.open();
        palette
    }

    fn section_titles(vm: &PaletteViewModel) -> Vec<Option<String>> {
        vm.sections.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_rows_grouped_by_section() {
        let palette = sample_palette();
        let vm = PaletteViewModel::from_palette(&palette);

        assert_eq!(
            section_titles(&vm),
            vec![
                Some("Version control".to_string()),
                Some("Display".to_string()),
                None,
            ]
        );
        assert_eq!(vm.match_count, 3);
        assert_eq!(vm.sections[0].rows[0].title, "Git");
        assert!(vm.sections[0].rows[0].has_children);
        assert_eq!(vm.sections[2].rows[0].title, "Quit");
    }

    #[test]
    fn test_selection_indicator() {
        let mut palette = sample_palette();
        palette.apply(PaletteAction::SelectNext);
        let vm = PaletteViewModel::from_palette(&palette);

        // selection moved from Git to View
        assert_eq!(vm.sections[0].rows[0].indicator, "  ");
        assert!(!vm.sections[0].rows[0].is_selected);
        assert_eq!(vm.sections[1].rows[0].indicator, "> ");
        assert!(vm.sections[1].rows[0].is_selected);
    }

    #[test]
    fn test_input_and_placeholder() {
        let mut palette = sample_palette();
        let vm = PaletteViewModel::from_palette(&palette);
        assert!(vm.input_is_empty);
        assert_eq!(vm.placeholder, "Type a command or search...");

        palette.apply(PaletteAction::InsertChar('g'));
        let vm = PaletteViewModel::from_palette(&palette);
        assert_eq!(vm.input_text, "g");
        assert!(!vm.input_is_empty);
    }

    #[test]
    fn test_breadcrumbs_resolve_titles() {
        let mut palette = sample_palette();
        palette.apply(PaletteAction::Confirm); // enter Git
        let vm = PaletteViewModel::from_palette(&palette);

        assert_eq!(vm.breadcrumbs, vec!["Git".to_string()]);
        assert_eq!(vm.sections[0].rows[0].hotkey_hint, "ctrl+g c");
    }

    #[test]
    fn test_breadcrumbs_fall_back_to_raw_id() {
        let catalog = Catalog::new(vec![Command::new("orphan", "Orphan").parent("ghost")]);
        let mut palette = Palette::new(PaletteConfig::default(), catalog);
        palette.open();
        palette.apply(PaletteAction::SetSearch("orphan".to_string()));

        let vm = PaletteViewModel::from_palette(&palette);
        assert_eq!(vm.breadcrumbs, vec!["ghost".to_string()]);
    }

    #[test]
    fn test_hide_breadcrumbs() {
        let catalog = Catalog::new(vec![
            Command::new("git", "Git"),
            Command::new("git.commit", "Commit").parent("git"),
        ]);
        let config = PaletteConfig {
            hide_breadcrumbs: true,
            ..PaletteConfig::default()
        };
        let mut palette = Palette::new(config, catalog);
        palette.open();
        palette.apply(PaletteAction::Confirm);

        let vm = PaletteViewModel::from_palette(&palette);
        assert!(vm.breadcrumbs.is_empty());
    }

    #[test]
    fn test_footer_hints_come_from_keymap() {
        let palette = sample_palette();
        let vm = PaletteViewModel::from_palette(&palette);

        assert_eq!(vm.footer_hints.navigate_down, "↓/Tab");
        assert_eq!(vm.footer_hints.navigate_up, "↑/Shift+Tab");
        assert_eq!(vm.footer_hints.confirm, "Enter");
        assert_eq!(vm.footer_hints.back, "Backspace");
        assert_eq!(vm.footer_hints.close, "Esc");
    }
}
