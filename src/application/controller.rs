//! Intent handling for the menu board.
//!
//! [`ViewController`] owns the [`MenuStore`] together with the session
//! state and turns user intents into store calls. Every handler runs to
//! completion before the next intent is delivered.

use crate::application::state::{Draft, Mode, Notification};
use crate::domain::{format_items, DomainError, Menu, MenuId, MenuStore, Role};
use tracing::{debug, error, info, warn};

/// Session controller sitting between the presentation layer and the store.
///
/// Intents that do not apply to the current role or mode are ignored.
///
/// # Examples
///
/// ```
/// use menuboard::application::{Mode, ViewController};
/// use menuboard::domain::{MenuStore, Role};
///
/// let mut controller = ViewController::new(MenuStore::new(), Role::Chef);
/// controller.request_open_composer();
/// controller.set_draft("Lunch", "Soup, Salad");
/// controller.request_save();
///
/// assert_eq!(controller.mode(), Mode::Browsing);
/// assert_eq!(controller.menus()[0].items, vec!["Soup", "Salad"]);
/// ```
#[derive(Debug)]
pub struct ViewController {
    store: MenuStore,
    role: Role,
    mode: Mode,
    draft: Draft,
    notification: Option<Notification>,
    selected: usize,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(MenuStore::new(), Role::Chef)
    }
}

impl ViewController {
    /// Starts a session in the browsing state.
    pub fn new(store: MenuStore, role: Role) -> Self {
        Self {
            store,
            role,
            mode: Mode::Browsing,
            draft: Draft::default(),
            notification: None,
            selected: 0,
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn menus(&self) -> &[Menu] {
        self.store.list()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_modal_visible(&self) -> bool {
        self.mode.is_modal()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Index of the highlighted menu in the list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_menu(&self) -> Option<&Menu> {
        self.store.list().get(self.selected)
    }

    /// Opens the empty form for a new menu.
    pub fn request_open_composer(&mut self) {
        if self.role != Role::Chef || self.mode.is_modal() {
            debug!(role = %self.role, mode = ?self.mode, "ignored open composer");
            return;
        }
        self.draft.clear();
        self.mode = Mode::Composing;
    }

    /// Opens the form pre-filled with the given menu's current values.
    pub fn request_edit(&mut self, id: MenuId) {
        if self.role != Role::Chef || self.mode.is_modal() {
            debug!(role = %self.role, mode = ?self.mode, "ignored edit");
            return;
        }
        let Some(menu) = self.store.get(id) else {
            error!(%id, "edit requested for a menu that is not in the store");
            return;
        };
        self.draft = Draft::prefilled(&menu.name, &format_items(&menu.items));
        self.mode = Mode::Editing { target: id };
    }

    /// Saves the form according to the current mode.
    pub fn request_save(&mut self) {
        match self.mode {
            Mode::Browsing => {}
            Mode::Composing => self.request_create(),
            Mode::Editing { .. } => self.request_update(),
        }
    }

    /// Creates a menu from the draft.
    ///
    /// A rejected draft keeps the form open and raises a blocking
    /// notification.
    pub fn request_create(&mut self) {
        if self.mode != Mode::Composing {
            return;
        }
        match self.store.create(&self.draft.name, &self.draft.items) {
            Ok(menu) => {
                info!(id = %menu.id, menu_name = %menu.name, "menu added");
                self.selected = self.store.position(menu.id).unwrap_or(self.selected);
                self.close_form();
            }
            Err(err) => {
                debug!(error = %err, "menu draft rejected");
                self.notification = Some(Notification::ValidationFailed(err));
            }
        }
    }

    /// Writes the draft back to the menu being edited.
    pub fn request_update(&mut self) {
        let Mode::Editing { target } = self.mode else {
            return;
        };
        match self.store.update(target, &self.draft.name, &self.draft.items) {
            Ok(menu) => {
                info!(id = %menu.id, menu_name = %menu.name, "menu updated");
            }
            Err(DomainError::NotFound(id)) => {
                error!(%id, "edited menu vanished from the store, discarding draft");
            }
            Err(err) => {
                error!(error = %err, "unexpected error while updating menu");
            }
        }
        self.close_form();
    }

    /// Closes the form without touching the store.
    pub fn request_cancel(&mut self) {
        if !self.mode.is_modal() {
            return;
        }
        self.close_form();
    }

    /// Switches between chef and user views.
    ///
    /// Only honoured while browsing; an open form has to be saved or
    /// cancelled first.
    pub fn request_toggle_role(&mut self) {
        if self.mode.is_modal() {
            debug!(mode = ?self.mode, "role toggle ignored while form is open");
            return;
        }
        self.role = self.role.toggled();
        info!(role = %self.role, "switched view");
    }

    /// Acknowledges an order request for a menu.
    pub fn request_order(&mut self, id: MenuId) {
        if self.role != Role::User || self.mode.is_modal() {
            debug!(role = %self.role, mode = ?self.mode, "ignored order request");
            return;
        }
        let Some(menu) = self.store.get(id) else {
            warn!(%id, "order requested for unknown menu");
            return;
        };
        info!(%id, menu_name = %menu.name, "order requested");
        self.notification = Some(Notification::OrderRequested {
            menu_name: menu.name.clone(),
        });
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Replaces both draft fields, e.g. from an external form widget.
    pub fn set_draft(&mut self, name: &str, items: &str) {
        if !self.mode.is_modal() {
            return;
        }
        let focus = self.draft.focus;
        self.draft = Draft::prefilled(name, items);
        if focus != self.draft.focus {
            self.draft.focus_next();
        }
    }

    pub fn focus_next_field(&mut self) {
        if self.mode.is_modal() {
            self.draft.focus_next();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.mode.is_modal() {
            self.draft.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.mode.is_modal() {
            self.draft.backspace();
        }
    }

    pub fn delete(&mut self) {
        if self.mode.is_modal() {
            self.draft.delete();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.mode.is_modal() {
            self.draft.move_left();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.mode.is_modal() {
            self.draft.move_right();
        }
    }

    pub fn move_cursor_home(&mut self) {
        if self.mode.is_modal() {
            self.draft.move_home();
        }
    }

    pub fn move_cursor_end(&mut self) {
        if self.mode.is_modal() {
            self.draft.move_end();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn close_form(&mut self) {
        self.mode = Mode::Browsing;
        self.draft.clear();
    }
}
