//! List store error types.

use checklist_id::{ItemId, ListId};
use thiserror::Error;

/// Rejections produced by [`ListStore`](super::ListStore) operations.
///
/// A failed operation never leaves a partial change behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required text field was empty after trimming.
    #[error("{field} cannot be empty")]
    Validation { field: &'static str },

    /// No list with this id exists.
    #[error("list {0} not found")]
    ListNotFound(ListId),

    /// The list exists but holds no item with this id.
    #[error("item {item_id} not found in list {list_id}")]
    ItemNotFound { list_id: ListId, item_id: ItemId },
}

impl StoreError {
    /// Returns true for either not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ListNotFound(_) | StoreError::ItemNotFound { .. }
        )
    }
}
