/// Failures surfaced by an [`ItemStore`](crate::ItemStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DynamoDB {operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },

    #[error("Malformed item in table: {0}")]
    Malformed(#[from] serde_dynamo::Error),
}

/// Everything a handler can fail with. Both kinds end up as a 500.
#[derive(Debug, thiserror::Error)]
pub enum ItemApiError {
    #[error("Invalid request: {0}")]
    ClientInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
