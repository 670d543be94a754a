use anyhow::{bail, Context, Result};
use bon::Builder;

pub const DEFAULT_TABLE_NAME: &str = "HighAvailabilityTable";
pub const DEFAULT_METRICS_NAMESPACE: &str = "HighAvailabilityApi";

/// Runtime settings shared by both functions, read from the Lambda
/// environment.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(on(String, into))]
pub struct Config {
    #[builder(default = DEFAULT_TABLE_NAME.to_string())]
    pub table_name: String,

    /// Overrides the region resolved by the SDK (normally `AWS_REGION`).
    pub region: Option<String>,

    /// Points the DynamoDB client at another endpoint, e.g. DynamoDB Local.
    pub endpoint_url: Option<String>,

    #[builder(default = false)]
    pub publish_metrics: bool,

    #[builder(default = DEFAULT_METRICS_NAMESPACE.to_string())]
    pub metrics_namespace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let publish_metrics = match var("PUBLISH_METRICS") {
            Some(value) => parse_flag(&value).context("invalid PUBLISH_METRICS")?,
            None => false,
        };

        Ok(Self::builder()
            .table_name(var("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()))
            .maybe_region(var("DYNAMODB_REGION"))
            .maybe_endpoint_url(var("DYNAMODB_ENDPOINT_URL"))
            .publish_metrics(publish_metrics)
            .metrics_namespace(
                var("METRICS_NAMESPACE").unwrap_or_else(|| DEFAULT_METRICS_NAMESPACE.to_string()),
            )
            .build())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
