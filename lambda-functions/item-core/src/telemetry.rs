/// JSON logs filtered by `RUST_LOG`, which CloudWatch Logs indexes per field.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();
}
