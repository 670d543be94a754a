use aws_sdk_cloudwatch::{
    primitives::DateTime,
    types::{MetricDatum, StandardUnit},
    Client as CloudWatchClient,
};
use chrono::Utc;
use tracing::{debug, error};

pub const ITEMS_READ: &str = "ItemsRead";
pub const ITEMS_WRITTEN: &str = "ItemsWritten";
pub const HANDLER_ERRORS: &str = "HandlerErrors";

/// Publishes per-invocation counters to CloudWatch. Publishing is best
/// effort: failures are logged and never reach the caller.
#[derive(Debug, Clone)]
pub struct MetricsPublisher {
    cloudwatch_client: CloudWatchClient,
    namespace: String,
}

impl MetricsPublisher {
    pub fn new(cloudwatch_client: CloudWatchClient, namespace: impl Into<String>) -> Self {
        Self {
            cloudwatch_client,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub async fn publish_count(&self, metric_name: &str, value: f64) {
        let metric = count_datum(metric_name, value);

        match self
            .cloudwatch_client
            .put_metric_data()
            .namespace(&self.namespace)
            .metric_data(metric)
            .send()
            .await
        {
            Ok(_) => debug!("Published metric {} = {}", metric_name, value),
            Err(e) => error!("Failed to publish metric {}: {}", metric_name, e),
        }
    }
}

fn count_datum(metric_name: &str, value: f64) -> MetricDatum {
    MetricDatum::builder()
        .metric_name(metric_name)
        .value(value)
        .unit(StandardUnit::Count)
        .timestamp(DateTime::from_millis(Utc::now().timestamp_millis()))
        .build()
}
