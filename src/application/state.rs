//! Session state types for the menu board.
//!
//! These hold the transient, unsaved side of a session: which form is open,
//! what has been typed into it, and any message waiting to be acknowledged.

use crate::domain::{DomainError, MenuId};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Menu list is shown, no form open
    #[default]
    Browsing,
    /// Form is open for a brand-new menu
    Composing,
    /// Form is open for an existing menu
    Editing { target: MenuId },
}

impl Mode {
    pub fn is_modal(self) -> bool {
        !matches!(self, Mode::Browsing)
    }
}

/// Field of the menu form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Items,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            DraftField::Name => DraftField::Items,
            DraftField::Items => DraftField::Name,
        }
    }
}

/// Unsaved text of the menu form.
///
/// The cursor is a character index into the focused field, so multi-byte
/// input edits cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub items: String,
    pub focus: DraftField,
    pub cursor: usize,
}

impl Draft {
    /// Builds a draft pre-filled with existing values, cursor at the end of the name.
    pub fn prefilled(name: &str, items: &str) -> Self {
        Self {
            name: name.to_string(),
            items: items.to_string(),
            focus: DraftField::Name,
            cursor: name.chars().count(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn focused_text(&self) -> &str {
        match self.focus {
            DraftField::Name => &self.name,
            DraftField::Items => &self.items,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            DraftField::Name => &mut self.name,
            DraftField::Items => &mut self.items,
        }
    }

    /// Moves focus to the other field and parks the cursor at its end.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor = self.focused_text().chars().count();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.focused_text_mut().insert(at, c);
        self.cursor += 1;
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.focused_text_mut().remove(at);
        self.cursor -= 1;
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.focused_text().chars().count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.focused_text_mut().remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.focused_text().chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.focused_text().chars().count();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        let text = self.focused_text();
        text.char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(text.len())
    }
}

/// Blocking message the presentation layer shows until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A save was rejected by the store
    ValidationFailed(DomainError),
    /// A diner asked to order from a menu
    OrderRequested { menu_name: String },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::ValidationFailed(_) => "Error",
            Notification::OrderRequested { .. } => "Order Requested",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::ValidationFailed(err) => err.to_string(),
            Notification::OrderRequested { menu_name } => format!("You requested from {}", menu_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_browsing() {
        assert_eq!(Mode::default(), Mode::Browsing);
        assert!(!Mode::Browsing.is_modal());
        assert!(Mode::Composing.is_modal());
        assert!(Mode::Editing { target: MenuId::new(1) }.is_modal());
    }

    #[test]
    fn test_draft_typing_and_cursor() {
        let mut draft = Draft::default();
        for c in "Lunch".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.name, "Lunch");
        assert_eq!(draft.cursor, 5);

        draft.move_home();
        draft.insert_char('>');
        assert_eq!(draft.name, ">Lunch");

        draft.move_end();
        draft.backspace();
        assert_eq!(draft.name, ">Lunc");
        assert_eq!(draft.cursor, 5);
    }

    #[test]
    fn test_draft_backspace_in_middle() {
        let mut draft = Draft::prefilled("Lunch", "");
        draft.move_left();
        draft.move_left();
        draft.backspace();
        assert_eq!(draft.name, "Luch");
        assert_eq!(draft.cursor, 2);

        draft.insert_char('n');
        assert_eq!(draft.name, "Lunch");
        assert_eq!(draft.cursor, 3);
    }

    #[test]
    fn test_draft_delete_at_cursor() {
        let mut draft = Draft::prefilled("Soup", "");
        draft.move_home();
        draft.delete();
        assert_eq!(draft.name, "oup");
        assert_eq!(draft.cursor, 0);

        draft.move_end();
        draft.delete();
        assert_eq!(draft.name, "oup");
    }

    #[test]
    fn test_draft_backspace_at_start_is_noop() {
        let mut draft = Draft::prefilled("Soup", "");
        draft.move_home();
        draft.backspace();
        assert_eq!(draft.name, "Soup");
        draft.move_left();
        assert_eq!(draft.cursor, 0);
    }

    #[test]
    fn test_draft_focus_switch_targets_items() {
        let mut draft = Draft::prefilled("Lunch", "Soup");
        draft.focus_next();
        assert_eq!(draft.focus, DraftField::Items);
        assert_eq!(draft.cursor, 4);

        draft.insert_char(',');
        draft.insert_char(' ');
        for c in "Pie".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.items, "Soup, Pie");
        assert_eq!(draft.name, "Lunch");
    }

    #[test]
    fn test_draft_handles_multibyte_characters() {
        let mut draft = Draft::prefilled("Crème", "");
        draft.move_left();
        draft.insert_char('é');
        assert_eq!(draft.name, "Crèmée");
        draft.backspace();
        draft.backspace();
        assert_eq!(draft.name, "Crèe");
        draft.move_right();
        draft.move_right();
        assert_eq!(draft.cursor, 4);
    }

    #[test]
    fn test_notification_text() {
        let error = Notification::ValidationFailed(DomainError::ValidationFailed);
        assert_eq!(error.title(), "Error");
        assert_eq!(error.message(), "Please fill in all fields");

        let order = Notification::OrderRequested { menu_name: "Lunch".to_string() };
        assert_eq!(order.title(), "Order Requested");
        assert_eq!(order.message(), "You requested from Lunch");
    }
}
