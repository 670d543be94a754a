//! Shared pieces of the item API: the item model, the store abstraction and
//! its DynamoDB backend, and the HTTP response conventions both functions use.

pub mod config;
pub mod context;
pub mod dynamo;
pub mod error;
pub mod http;
pub mod memory;
pub mod metrics;
pub mod model;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use context::AppContext;
pub use dynamo::DynamoItemStore;
pub use error::{ItemApiError, StoreError};
pub use memory::MemoryItemStore;
pub use metrics::MetricsPublisher;
pub use model::{ErrorBody, Item, MessageBody, WriteItemRequest};
pub use store::ItemStore;
