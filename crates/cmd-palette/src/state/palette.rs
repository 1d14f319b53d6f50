//! The palette coordinator.

use ratatui::crossterm::event::KeyEvent;

use crate::action::PaletteAction;
use crate::config::PaletteConfig;
use crate::event::PaletteEvent;
use crate::keymap::{HotkeyDispatcher, Keymap, Routed};
use crate::matcher::{self, group_into_sections, SectionGroup};
use crate::model::{Catalog, Command, CommandId, HandlerOutcome};
use crate::state::{breadcrumbs, NavigationState, Selection};

/// The palette: catalog, search text, navigation root, selection and
/// visibility under a single owner.
///
/// All mutation flows through [`Palette::apply`]; [`Palette::handle_key`]
/// merely routes key events into intents first. Every mutation recomputes
/// the match list and re-anchors the selection, so readers always observe a
/// consistent snapshot.
#[derive(Debug)]
pub struct Palette {
    config: PaletteConfig,
    catalog: Catalog,
    dispatcher: HotkeyDispatcher,
    nav: NavigationState,
    selection: Selection,
    search: String,
    visible: bool,
    match_ids: Vec<CommandId>,
}

impl Palette {
    /// Create a palette over a catalog with the default key bindings.
    pub fn new(config: PaletteConfig, catalog: Catalog) -> Self {
        Self::with_keymap(config, catalog, Keymap::default())
    }

    /// Create a palette with a custom keymap replacing the default table.
    pub fn with_keymap(config: PaletteConfig, catalog: Catalog, keymap: Keymap) -> Self {
        let mut dispatcher = HotkeyDispatcher::new(keymap);
        dispatcher.rebind(&catalog, config.register_hotkeys);
        let mut palette = Self {
            visible: config.visible,
            config,
            catalog,
            dispatcher,
            nav: NavigationState::new(),
            selection: Selection::new(),
            search: String::new(),
            match_ids: Vec::new(),
        };
        palette.refresh();
        palette
    }

    /// Feed one key event through the dispatcher.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<PaletteEvent> {
        match self.dispatcher.route(key, self.visible) {
            // Backspace edits the search first; it only navigates once the
            // input is empty
            Routed::Action(PaletteAction::Back) if !self.search.is_empty() => {
                self.apply(PaletteAction::DeleteChar)
            }
            Routed::Action(action) => self.apply(action),
            Routed::Invoke(id) => self.invoke_direct(id),
            Routed::None => Vec::new(),
        }
    }

    /// Apply one intent. The single write path for all palette state.
    pub fn apply(&mut self, action: PaletteAction) -> Vec<PaletteEvent> {
        if action.requires_visible() && !self.visible {
            return Vec::new();
        }

        let mut events = Vec::new();
        match action {
            PaletteAction::Toggle => {
                if self.visible {
                    self.close_into(&mut events);
                } else {
                    self.open_into(&mut events);
                }
            }
            PaletteAction::Dismiss => self.close_into(&mut events),
            PaletteAction::InsertChar(c) => {
                self.search.push(c);
                self.refresh();
            }
            PaletteAction::DeleteChar => {
                self.search.pop();
                self.refresh();
            }
            PaletteAction::ClearSearch => {
                if !self.search.is_empty() {
                    self.search.clear();
                    self.refresh();
                }
            }
            PaletteAction::SetSearch(search) => {
                if self.search != search {
                    self.search = search;
                    self.refresh();
                }
            }
            PaletteAction::SelectNext => self.selection.next(&self.match_ids),
            PaletteAction::SelectPrev => self.selection.previous(&self.match_ids),
            PaletteAction::FocusCommand(id) => self.selection.focus(id, &self.match_ids),
            PaletteAction::Confirm => self.confirm_selected(&mut events),
            PaletteAction::Activate(id) => {
                if self.match_ids.contains(&id) {
                    self.selection.focus(id, &self.match_ids);
                    self.confirm_selected(&mut events);
                }
            }
            PaletteAction::Back => {
                let trail = breadcrumbs(&self.catalog, self.selection.selected());
                let previous = self.nav.root().cloned();
                self.nav.back(&trail);
                let changed = self.nav.root() != previous.as_ref();
                self.root_changed(changed, &mut events);
            }
            PaletteAction::SetRoot(root) => {
                let changed = self.nav.root() != root.as_ref();
                self.nav.set(root);
                self.root_changed(changed, &mut events);
            }
        }
        events
    }

    /// Open the palette; a no-op when already visible.
    pub fn open(&mut self) -> Vec<PaletteEvent> {
        let mut events = Vec::new();
        self.open_into(&mut events);
        events
    }

    /// Close the palette; a no-op when already hidden.
    pub fn close(&mut self) -> Vec<PaletteEvent> {
        let mut events = Vec::new();
        self.close_into(&mut events);
        events
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) -> Vec<PaletteEvent> {
        self.apply(PaletteAction::Toggle)
    }

    /// Replace the catalog wholesale.
    ///
    /// Per-command hotkeys are rebound from scratch, so chords from the
    /// previous catalog cannot linger. The navigation root is kept; when it
    /// no longer resolves, the scoped list simply comes up empty and backing
    /// out recovers.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.dispatcher
            .rebind(&self.catalog, self.config.register_hotkeys);
        self.refresh();
    }

    /// Replace the key bindings.
    pub fn set_keymap(&mut self, keymap: Keymap) {
        self.dispatcher.set_keymap(keymap);
    }

    // === Read accessors for renderers and hosts ===

    /// Whether the palette is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active navigation root; `None` is the top level.
    pub fn root(&self) -> Option<&CommandId> {
        self.nav.root()
    }

    /// The configuration the palette was built with.
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// The current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active key bindings.
    pub fn keymap(&self) -> &Keymap {
        self.dispatcher.keymap()
    }

    /// The current match list, in catalog order.
    pub fn matches(&self) -> Vec<&Command> {
        self.match_ids
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    /// The match list partitioned by section.
    pub fn grouped_matches(&self) -> Vec<SectionGroup<'_>> {
        group_into_sections(&self.matches())
    }

    /// The selected command, if any.
    pub fn selected(&self) -> Option<&Command> {
        self.selection
            .selected()
            .and_then(|id| self.catalog.get(id))
    }

    /// Position of the selection in the match list.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index(&self.match_ids)
    }

    /// Ancestor trail of the selected command, outermost first.
    pub fn breadcrumbs(&self) -> Vec<CommandId> {
        breadcrumbs(&self.catalog, self.selection.selected())
    }

    // === Internals ===

    fn open_into(&mut self, events: &mut Vec<PaletteEvent>) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.search.clear();
        self.selection.clear();
        self.refresh();
        events.push(PaletteEvent::Opened);
    }

    fn close_into(&mut self, events: &mut Vec<PaletteEvent>) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.nav.reset();
        self.search.clear();
        self.selection.clear();
        self.refresh();
        events.push(PaletteEvent::Closed);
    }

    /// Confirm the selection: sub-menu nodes are entered, handlers invoked.
    /// Doing either with no selection (empty match list) is a no-op.
    fn confirm_selected(&mut self, events: &mut Vec<PaletteEvent>) {
        let Some(id) = self.selection.selected().cloned() else {
            return;
        };
        let Some(command) = self.catalog.get(&id) else {
            return;
        };
        if command.children {
            log::debug!("entering sub-menu `{id}`");
            let changed = self.nav.root() != Some(&id);
            self.nav.enter(id);
            self.root_changed(changed, events);
        } else {
            self.invoke(id, events);
        }
    }

    /// Root transitions always clear the search and re-anchor the selection.
    fn root_changed(&mut self, changed: bool, events: &mut Vec<PaletteEvent>) {
        self.search.clear();
        self.selection.clear();
        self.refresh();
        if changed {
            events.push(PaletteEvent::RootChanged(self.nav.root().cloned()));
        }
    }

    /// Confirm-path invocation: success closes unless the handler asked to
    /// stay open; failure reports and keeps the palette open for a retry.
    fn invoke(&mut self, id: CommandId, events: &mut Vec<PaletteEvent>) {
        match self.catalog.invoke(&id) {
            None => {} // pure node without a handler
            Some(Ok(outcome)) => {
                log::debug!("invoked `{id}`");
                events.push(PaletteEvent::Invoked(id));
                if outcome == HandlerOutcome::Close {
                    self.close_into(events);
                }
            }
            Some(Err(error)) => {
                log::warn!("handler of `{id}` failed: {error}");
                events.push(PaletteEvent::HandlerFailed {
                    id,
                    message: error.to_string(),
                });
            }
        }
    }

    /// Hotkey-path invocation: runs the handler without touching
    /// visibility, navigation or search.
    fn invoke_direct(&mut self, id: CommandId) -> Vec<PaletteEvent> {
        let mut events = Vec::new();
        match self.catalog.invoke(&id) {
            None => {}
            Some(Ok(_)) => {
                log::debug!("invoked `{id}` via hotkey");
                events.push(PaletteEvent::Invoked(id));
            }
            Some(Err(error)) => {
                log::warn!("handler of `{id}` failed: {error}");
                events.push(PaletteEvent::HandlerFailed {
                    id,
                    message: error.to_string(),
                });
            }
        }
        events
    }

    /// Recompute the match list and re-anchor the selection.
    fn refresh(&mut self) {
        let ids: Vec<CommandId> = matcher::matches(&self.catalog, self.nav.root(), &self.search)
            .into_iter()
            .map(|command| command.id.clone())
            .collect();
        self.match_ids = ids;
        self.selection.reanchor(&self.match_ids);
    }
}
