//! In-memory list repository.
//!
//! The [`ListStore`] is the single authority over lists and their items.
//! Every operation runs under one `RwLock`: mutations hold the write lock for
//! the duration of the in-memory change and nothing else, reads hold the read
//! lock and hand back cloned snapshots. Names and labels are trimmed and
//! validated here, before the lock is taken, so a rejected call never touches
//! the store.
//!
//! Nothing is persisted; a new store starts empty.

mod clock;
mod error;
mod model;

use std::collections::BTreeMap;
use std::sync::Arc;

use checklist_id::{IdGenerator, ItemId, ListId};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use model::{Item, ItemPatch, ListSummary, TodoList};

/// Shared list repository.
pub struct ListStore {
    inner: RwLock<StoreInner>,
    clock: Arc<dyn Clock>,
}

struct StoreInner {
    /// Keyed by id; generator ids increase strictly, so key order is
    /// creation order.
    lists: BTreeMap<ListId, TodoList>,
    ids: IdGenerator,
}

impl StoreInner {
    fn list_mut(&mut self, id: ListId) -> Result<&mut TodoList, StoreError> {
        self.lists.get_mut(&id).ok_or(StoreError::ListNotFound(id))
    }
}

impl ListStore {
    /// Create an empty store stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                lists: BTreeMap::new(),
                ids: IdGenerator::new(),
            }),
            clock,
        }
    }

    /// Returns a stamp no earlier than any of `floors`.
    fn stamp(&self, floors: &[DateTime<Utc>]) -> DateTime<Utc> {
        floors
            .iter()
            .fold(self.clock.now(), |latest, floor| latest.max(*floor))
    }

    /// Number of lists currently held.
    pub async fn len(&self) -> usize {
        self.inner.read().await.lists.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Create a new, empty list.
    pub async fn create_list(&self, name: &str) -> Result<TodoList, StoreError> {
        let name = required("name", name)?;

        let mut inner = self.inner.write().await;
        let id: ListId = inner.ids.next();
        let now = self.stamp(&[]);
        let list = TodoList {
            id,
            name,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        };
        inner.lists.insert(id, list.clone());

        debug!(list_id = %id, "list created");
        Ok(list)
    }

    /// Summaries of every list, oldest first.
    pub async fn list_summaries(&self) -> Vec<ListSummary> {
        let inner = self.inner.read().await;
        inner.lists.values().map(TodoList::summary).collect()
    }

    /// Fetch a list with all of its items.
    pub async fn get_list(&self, id: ListId) -> Result<TodoList, StoreError> {
        let inner = self.inner.read().await;
        inner
            .lists
            .get(&id)
            .cloned()
            .ok_or(StoreError::ListNotFound(id))
    }

    /// Rename a list.
    pub async fn rename_list(&self, id: ListId, name: &str) -> Result<TodoList, StoreError> {
        let name = required("name", name)?;

        let mut inner = self.inner.write().await;
        let list = inner.list_mut(id)?;
        list.updated_at = self.stamp(&[list.updated_at]);
        list.name = name;

        debug!(list_id = %id, "list renamed");
        Ok(list.clone())
    }

    /// Remove a list together with all of its items.
    pub async fn delete_list(&self, id: ListId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let removed = inner
            .lists
            .remove(&id)
            .ok_or(StoreError::ListNotFound(id))?;

        debug!(list_id = %id, items = removed.items.len(), "list deleted");
        Ok(())
    }

    /// Append a new unchecked item to a list.
    pub async fn add_item(&self, list_id: ListId, label: &str) -> Result<Item, StoreError> {
        let label = required("label", label)?;

        let mut inner = self.inner.write().await;
        // Look the list up before drawing an id so a miss consumes nothing.
        inner.list_mut(list_id)?;
        let item_id: ItemId = inner.ids.next();
        let list = inner.list_mut(list_id)?;

        let now = self.stamp(&[list.updated_at]);
        let item = Item {
            id: item_id,
            label,
            checked: false,
            created_at: now,
            updated_at: now,
        };
        list.items.push(item.clone());
        list.updated_at = now;

        debug!(list_id = %list_id, item_id = %item_id, "item added");
        Ok(item)
    }

    /// Apply a partial update to an item.
    ///
    /// An empty patch changes nothing, timestamps included.
    pub async fn update_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<Item, StoreError> {
        let label = patch
            .label
            .as_deref()
            .map(|label| required("label", label))
            .transpose()?;

        let mut inner = self.inner.write().await;
        let list = inner.list_mut(list_id)?;
        let list_updated_at = list.updated_at;
        let item = list
            .item_mut(item_id)
            .ok_or(StoreError::ItemNotFound { list_id, item_id })?;

        if patch.is_empty() {
            return Ok(item.clone());
        }

        let now = self.stamp(&[list_updated_at, item.updated_at]);
        if let Some(label) = label {
            item.label = label;
        }
        if let Some(checked) = patch.checked {
            item.checked = checked;
        }
        item.updated_at = now;
        let updated = item.clone();
        list.updated_at = now;

        debug!(list_id = %list_id, item_id = %item_id, "item updated");
        Ok(updated)
    }

    /// Remove one item from a list.
    pub async fn delete_item(&self, list_id: ListId, item_id: ItemId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let list = inner.list_mut(list_id)?;
        let position = list
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(StoreError::ItemNotFound { list_id, item_id })?;

        list.items.remove(position);
        list.updated_at = self.stamp(&[list.updated_at]);

        debug!(list_id = %list_id, item_id = %item_id, "item deleted");
        Ok(())
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Trims `value`, rejecting it if nothing is left.
fn required(field: &'static str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation { field });
    }
    Ok(trimmed.to_string())
}
