use anyhow::Context;
use item_core::{telemetry, AppContext, Config};
use lambda_http::{run, service_fn, Error, Request};
use read_items::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let config = Config::from_env().context("failed to load read-items configuration")?;
    let context = AppContext::from_config(&config).await;

    run(service_fn(|event: Request| function_handler(&context, event))).await
}
