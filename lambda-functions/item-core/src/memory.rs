use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::Item;
use crate::store::ItemStore;

/// In-process store for local runs and tests. Scans return items ordered by
/// `ItemId`.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|item| (item.item_id, item.data))
                    .collect(),
            ),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .map(|(item_id, data)| Item::new(item_id.clone(), data.clone()))
            .collect())
    }

    async fn put(&self, item: Item) -> Result<(), StoreError> {
        self.items.write().await.insert(item.item_id, item.data);
        Ok(())
    }
}
