//! In-memory menu catalog.
//!
//! The store owns the ordered collection of menus for a session. Display
//! order is insertion order, oldest first. Nothing is written to disk.

use super::errors::{DomainError, DomainResult};
use super::models::{parse_items, Menu, MenuId};
use tracing::{debug, warn};

/// Ordered, session-scoped collection of menus.
///
/// # Examples
///
/// ```
/// use menuboard::domain::MenuStore;
///
/// let mut store = MenuStore::new();
/// let lunch = store.create("Lunch", "Soup, Salad").unwrap();
/// assert_eq!(lunch.items, vec!["Soup", "Salad"]);
/// assert_eq!(store.list().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MenuStore {
    menus: Vec<Menu>,
    next_id: u64,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self {
            menus: Vec::new(),
            next_id: 1,
        }
    }
}

impl MenuStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new menu at the end of the collection.
    ///
    /// The name is trimmed and the items draft is split on commas.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationFailed`] when either the name or the
    /// items draft is blank. The store is left untouched in that case.
    pub fn create(&mut self, name: &str, items_draft: &str) -> DomainResult<Menu> {
        if name.trim().is_empty() || items_draft.trim().is_empty() {
            debug!(menu_name = %name, items_draft = %items_draft, "rejected menu with blank fields");
            return Err(DomainError::ValidationFailed);
        }

        let menu = Menu {
            id: self.allocate_id(),
            name: name.trim().to_string(),
            items: parse_items(items_draft),
        };
        debug!(id = %menu.id, menu_name = %menu.name, items = menu.items.len(), "menu created");
        self.menus.push(menu.clone());
        Ok(menu)
    }

    /// Replaces the name and items of an existing menu in place.
    ///
    /// The menu keeps its id and its position. Unlike [`MenuStore::create`],
    /// blank values are accepted and the name is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if no menu has the given id.
    pub fn update(&mut self, id: MenuId, name: &str, items_draft: &str) -> DomainResult<Menu> {
        let Some(menu) = self.menus.iter_mut().find(|menu| menu.id == id) else {
            warn!(%id, "update for unknown menu");
            return Err(DomainError::NotFound(id));
        };

        menu.name = name.to_string();
        menu.items = parse_items(items_draft);
        debug!(%id, menu_name = %menu.name, items = menu.items.len(), "menu updated");
        Ok(menu.clone())
    }

    /// Current menus in display order.
    pub fn list(&self) -> &[Menu] {
        &self.menus
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.id == id)
    }

    pub fn position(&self, id: MenuId) -> Option<usize> {
        self.menus.iter().position(|menu| menu.id == id)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    fn allocate_id(&mut self) -> MenuId {
        let id = MenuId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
