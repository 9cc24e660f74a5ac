use crate::application::ViewController;
use crate::domain::Role;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(controller: &mut ViewController, key: KeyCode, modifiers: KeyModifiers) {
        if controller.notification().is_some() {
            Self::handle_notification(controller, key);
        } else if controller.is_modal_visible() {
            Self::handle_form_mode(controller, key, modifiers);
        } else {
            Self::handle_browsing_mode(controller, key);
        }
    }

    fn handle_notification(controller: &mut ViewController, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            controller.dismiss_notification();
        }
    }

    fn handle_browsing_mode(controller: &mut ViewController, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => controller.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => controller.select_next(),
            KeyCode::Tab | KeyCode::Char('r') => controller.request_toggle_role(),
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => match controller.role() {
                Role::Chef => Self::handle_chef_key(controller, key),
                Role::User => Self::handle_user_key(controller, key),
            },
        }
    }

    fn handle_chef_key(controller: &mut ViewController, key: KeyCode) {
        match key {
            KeyCode::Char('a') => controller.request_open_composer(),
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = controller.selected_menu().map(|menu| menu.id) {
                    controller.request_edit(id);
                }
            }
            _ => {}
        }
    }

    fn handle_user_key(controller: &mut ViewController, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Char('o')) {
            if let Some(id) = controller.selected_menu().map(|menu| menu.id) {
                controller.request_order(id);
            }
        }
    }

    fn handle_form_mode(controller: &mut ViewController, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => controller.request_save(),
            KeyCode::Esc => controller.request_cancel(),
            KeyCode::Tab | KeyCode::BackTab => controller.focus_next_field(),
            KeyCode::Backspace => controller.backspace(),
            KeyCode::Delete => controller.delete(),
            KeyCode::Left => controller.move_cursor_left(),
            KeyCode::Right => controller.move_cursor_right(),
            KeyCode::Home => controller.move_cursor_home(),
            KeyCode::End => controller.move_cursor_end(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => controller.insert_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{DraftField, Mode};
    use crate::domain::MenuStore;

    fn press(controller: &mut ViewController, key: KeyCode) {
        InputHandler::handle_key_event(controller, key, KeyModifiers::NONE);
    }

    fn type_text(controller: &mut ViewController, text: &str) {
        for c in text.chars() {
            press(controller, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_menu_with_keys() {
        let mut controller = ViewController::default();

        press(&mut controller, KeyCode::Char('a'));
        assert_eq!(controller.mode(), Mode::Composing);

        type_text(&mut controller, "Lunch");
        press(&mut controller, KeyCode::Tab);
        assert_eq!(controller.draft().focus, DraftField::Items);
        type_text(&mut controller, "Soup, Salad");
        press(&mut controller, KeyCode::Enter);

        assert_eq!(controller.mode(), Mode::Browsing);
        assert_eq!(controller.menus()[0].name, "Lunch");
        assert_eq!(controller.menus()[0].items, vec!["Soup", "Salad"]);
    }

    #[test]
    fn test_letters_type_into_form_instead_of_shortcuts() {
        let mut controller = ViewController::default();
        press(&mut controller, KeyCode::Char('a'));
        type_text(&mut controller, "qrjk");

        assert_eq!(controller.draft().name, "qrjk");
        assert_eq!(controller.role(), Role::Chef);
        assert_eq!(controller.mode(), Mode::Composing);
    }

    #[test]
    fn test_validation_popup_blocks_until_dismissed() {
        let mut controller = ViewController::default();
        press(&mut controller, KeyCode::Char('a'));
        press(&mut controller, KeyCode::Enter);
        assert!(controller.notification().is_some());

        type_text(&mut controller, "xyz");
        assert!(controller.draft().name.is_empty());

        press(&mut controller, KeyCode::Enter);
        assert!(controller.notification().is_none());
        assert_eq!(controller.mode(), Mode::Composing);
    }

    #[test]
    fn test_escape_cancels_form() {
        let mut controller = ViewController::default();
        press(&mut controller, KeyCode::Char('a'));
        type_text(&mut controller, "Draft");
        press(&mut controller, KeyCode::Esc);

        assert_eq!(controller.mode(), Mode::Browsing);
        assert!(controller.menus().is_empty());
    }

    #[test]
    fn test_edit_selected_menu() {
        let mut store = MenuStore::new();
        store.create("Breakfast", "Eggs").unwrap();
        let lunch = store.create("Lunch", "Soup").unwrap();
        let mut controller = ViewController::new(store, Role::Chef);

        press(&mut controller, KeyCode::Down);
        press(&mut controller, KeyCode::Char('e'));
        assert_eq!(controller.mode(), Mode::Editing { target: lunch.id });
        assert_eq!(controller.draft().name, "Lunch");

        press(&mut controller, KeyCode::End);
        type_text(&mut controller, " Special");
        press(&mut controller, KeyCode::Enter);

        assert_eq!(controller.menus()[1].name, "Lunch Special");
        assert_eq!(controller.menus()[1].id, lunch.id);
    }

    #[test]
    fn test_toggle_role_and_request_order() {
        let mut store = MenuStore::new();
        store.create("Lunch", "Soup").unwrap();
        let mut controller = ViewController::new(store, Role::Chef);

        press(&mut controller, KeyCode::Tab);
        assert_eq!(controller.role(), Role::User);

        press(&mut controller, KeyCode::Char('a'));
        assert_eq!(controller.mode(), Mode::Browsing);

        press(&mut controller, KeyCode::Enter);
        let notification = controller.notification().unwrap();
        assert_eq!(notification.message(), "You requested from Lunch");

        press(&mut controller, KeyCode::Esc);
        assert!(controller.notification().is_none());

        press(&mut controller, KeyCode::Char('r'));
        assert_eq!(controller.role(), Role::Chef);
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut controller = ViewController::default();
        press(&mut controller, KeyCode::Enter);
        assert_eq!(controller.mode(), Mode::Browsing);

        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Enter);
        assert!(controller.notification().is_none());
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut controller = ViewController::default();
        press(&mut controller, KeyCode::Char('a'));
        InputHandler::handle_key_event(&mut controller, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(controller.draft().name.is_empty());
    }
}
