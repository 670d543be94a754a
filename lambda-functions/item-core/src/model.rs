use serde::{Deserialize, Serialize};

use crate::error::ItemApiError;

pub const SAVED_MESSAGE: &str = "Item saved successfully";

/// A stored record. Field names match the table's attribute names, so the
/// same shape is used for DynamoDB items and for the `/read` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "ItemId")]
    pub item_id: String,
    #[serde(rename = "Data")]
    pub data: String,
}

impl Item {
    pub fn new(item_id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            data: data.into(),
        }
    }
}

/// Body of `POST /write`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WriteItemRequest {
    #[serde(rename = "ItemId", alias = "itemId")]
    pub item_id: String,
    #[serde(rename = "Data", alias = "data")]
    pub data: String,
}

impl WriteItemRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, ItemApiError> {
        if body.is_empty() {
            return Err(ItemApiError::ClientInput("request body is empty".to_string()));
        }

        let request: Self = serde_json::from_slice(body)
            .map_err(|e| ItemApiError::ClientInput(e.to_string()))?;

        // DynamoDB refuses empty strings in key attributes
        if request.item_id.is_empty() {
            return Err(ItemApiError::ClientInput(
                "ItemId must not be empty".to_string(),
            ));
        }

        Ok(request)
    }
}

impl From<WriteItemRequest> for Item {
    fn from(request: WriteItemRequest) -> Self {
        Self {
            item_id: request.item_id,
            data: request.data,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn saved() -> Self {
        Self {
            message: SAVED_MESSAGE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&ItemApiError> for ErrorBody {
    fn from(err: &ItemApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
