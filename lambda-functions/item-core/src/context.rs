use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::Client as CloudWatchClient;
use aws_sdk_dynamodb::Client as DynamoClient;
use tracing::info;

use crate::config::Config;
use crate::dynamo::DynamoItemStore;
use crate::metrics::MetricsPublisher;
use crate::store::ItemStore;

/// Dependencies handed to every invocation. Built once per Lambda process so
/// the SDK clients are reused across warm invocations.
pub struct AppContext<S> {
    pub store: S,
    pub metrics: Option<MetricsPublisher>,
}

impl<S: ItemStore> AppContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: MetricsPublisher) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn record(&self, metric_name: &str, value: f64) {
        if let Some(metrics) = &self.metrics {
            metrics.publish_count(metric_name, value).await;
        }
    }
}

impl AppContext<DynamoItemStore> {
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            dynamo_config = dynamo_config.endpoint_url(endpoint_url);
        }

        let store = DynamoItemStore::new(
            DynamoClient::from_conf(dynamo_config.build()),
            &config.table_name,
        );

        info!(
            "Using table {} in region {}",
            config.table_name,
            sdk_config
                .region()
                .map(|region| region.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        let context = Self::new(store);
        if config.publish_metrics {
            let metrics =
                MetricsPublisher::new(CloudWatchClient::new(&sdk_config), &config.metrics_namespace);
            context.with_metrics(metrics)
        } else {
            context
        }
    }
}
