use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::Item;

/// Access to the replicated item table.
///
/// Writes are upserts keyed by `ItemId`. There are no conditional writes and
/// no transactions; conflicting writes are resolved by the table itself.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns every item currently in the table.
    async fn scan(&self) -> Result<Vec<Item>, StoreError>;

    /// Inserts the item or overwrites the one with the same `ItemId`.
    async fn put(&self, item: Item) -> Result<(), StoreError>;
}
