use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client as DynamoClient};
use serde_dynamo::{from_items, to_item};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::Item;
use crate::store::ItemStore;

pub type AttributeMap = HashMap<String, AttributeValue>;

/// [`ItemStore`] backed by a DynamoDB (Global) table with a string
/// partition key named `ItemId`.
#[derive(Debug, Clone)]
pub struct DynamoItemStore {
    dynamo_client: DynamoClient,
    table_name: String,
}

impl DynamoItemStore {
    pub fn new(dynamo_client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            dynamo_client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut last_evaluated_key = None;
        let mut pages = 0;

        // A single Scan call stops at 1 MB, keep going until the table is exhausted
        loop {
            let result = self
                .dynamo_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(last_evaluated_key)
                .send()
                .await
                .map_err(|e| service_error("Scan", e))?;

            pages += 1;

            if let Some(page) = result.items {
                items.extend(from_attributes(page)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => last_evaluated_key = Some(key),
                _ => break,
            }
        }

        info!(
            "Scanned {} items from {} in {} page(s)",
            items.len(),
            self.table_name,
            pages
        );

        Ok(items)
    }

    async fn put(&self, item: Item) -> Result<(), StoreError> {
        let attributes = to_attributes(&item)?;

        self.dynamo_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| service_error("PutItem", e))?;

        debug!("Put item {} into {}", item.item_id, self.table_name);

        Ok(())
    }
}

pub fn to_attributes(item: &Item) -> Result<AttributeMap, StoreError> {
    Ok(to_item(item)?)
}

pub fn from_attributes(items: Vec<AttributeMap>) -> Result<Vec<Item>, StoreError> {
    Ok(from_items(items)?)
}

fn service_error<E>(operation: &'static str, err: E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::Service {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}
