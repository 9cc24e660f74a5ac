use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier assigned to a menu when the store creates it.
///
/// Ids are handed out from a per-store counter, so they are unique within
/// a session and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuId(u64);

impl MenuId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered list of dishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub items: Vec<String>,
}

impl Menu {
    /// Items joined the same way the edit form shows them.
    pub fn items_text(&self) -> String {
        format_items(&self.items)
    }
}

/// Splits a comma-separated draft into trimmed items.
///
/// No filtering happens after trimming, so blank entries and duplicates
/// are kept as typed.
///
/// # Examples
///
/// ```
/// use menuboard::domain::parse_items;
///
/// assert_eq!(parse_items("Soup, Salad"), vec!["Soup", "Salad"]);
/// assert_eq!(parse_items("a,,b"), vec!["a", "", "b"]);
/// ```
pub fn parse_items(draft: &str) -> Vec<String> {
    draft.split(',').map(|item| item.trim().to_string()).collect()
}

/// Joins items back into the draft form used by the editor.
pub fn format_items(items: &[String]) -> String {
    items.join(", ")
}

/// Which side of the restaurant the session is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Chef,
    User,
}

impl Role {
    pub fn toggled(self) -> Self {
        match self {
            Role::Chef => Role::User,
            Role::User => Role::Chef,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Chef => "chef",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}', expected 'chef' or 'user'")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chef" => Ok(Role::Chef),
            "user" => Ok(Role::User),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
