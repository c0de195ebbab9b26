//! Entities held by the list store.

use checklist_id::{ItemId, ListId};
use chrono::{DateTime, Utc};

/// A named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Last change to the list or any of its items.
    pub updated_at: DateTime<Utc>,
    /// Items in insertion order.
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub(crate) fn item_mut(&mut self, item_id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }
}

/// A labeled, checkable unit belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub checked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A list without its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for an item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub label: Option<String>,
    pub checked: Option<bool>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.checked.is_none()
    }
}
