use async_trait::async_trait;
use item_core::{AppContext, Item, ItemStore, MemoryItemStore, StoreError};
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Request, Response};
use mockall::mock;
use serde_json::{json, Value};

mock! {
    pub Store {}

    #[async_trait]
    impl ItemStore for Store {
        async fn scan(&self) -> Result<Vec<Item>, StoreError>;
        async fn put(&self, item: Item) -> Result<(), StoreError>;
    }
}

fn request(method: Method, uri: &str, body: Body) -> Request {
    lambda_http::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

fn body_json(response: &Response<Body>) -> Value {
    serde_json::from_slice(response.body()).unwrap()
}

#[tokio::test]
async fn test_store_connectivity_error_returns_500() {
    let mut store = MockStore::new();
    store.expect_scan().times(1).returning(|| {
        Err(StoreError::Service {
            operation: "Scan",
            message: "dispatch failure: connection refused".to_string(),
        })
    });
    store.expect_put().never();

    let ctx = AppContext::new(store);
    let response = read_items::function_handler(&ctx, request(Method::GET, "/read", Body::Empty))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(&response),
        json!({"error": "DynamoDB Scan failed: dispatch failure: connection refused"})
    );
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn test_preflight_does_not_touch_store() {
    let mut store = MockStore::new();
    store.expect_scan().never();

    let ctx = AppContext::new(store);
    let response =
        read_items::function_handler(&ctx, request(Method::OPTIONS, "/read", Body::Empty))
            .await
            .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_read_items_propagates_store_error() {
    let mut store = MockStore::new();
    store
        .expect_scan()
        .returning(|| Err(StoreError::Service {
            operation: "Scan",
            message: "AccessDeniedException".to_string(),
        }));

    let err = read_items::read_items(&store).await.unwrap_err();
    assert!(err.to_string().contains("AccessDeniedException"));
}

#[cfg(test)]
mod metrics_tests {
    use super::*;
    use aws_sdk_cloudwatch::config::{retry::RetryConfig, BehaviorVersion, Credentials, Region};
    use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
    use aws_smithy_types::body::SdkBody;
    use item_core::MetricsPublisher;

    #[tokio::test]
    async fn test_metrics_failure_keeps_200() {
        let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
            http::Request::builder()
                .uri("https://monitoring.us-east-1.amazonaws.com/")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(500)
                .body(SdkBody::empty())
                .unwrap(),
        )]);
        let config = aws_sdk_cloudwatch::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("akid", "secret", None, None, "replay"))
            .retry_config(RetryConfig::disabled())
            .http_client(http_client.clone())
            .build();
        let metrics = MetricsPublisher::new(
            aws_sdk_cloudwatch::Client::from_conf(config),
            "HighAvailabilityApi",
        );

        let ctx = AppContext::new(MemoryItemStore::with_items([Item::new("1", "hello")]))
            .with_metrics(metrics);
        let response =
            read_items::function_handler(&ctx, request(Method::GET, "/read", Body::Empty))
                .await
                .unwrap();

        assert_eq!(http_client.actual_requests().count(), 1);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response), json!([{"ItemId": "1", "Data": "hello"}]));
    }
}

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    async fn write(ctx: &AppContext<MemoryItemStore>, body: &'static str) -> Response<Body> {
        write_item::function_handler(ctx, request(Method::POST, "/write", Body::from(body)))
            .await
            .unwrap()
    }

    async fn read(ctx: &AppContext<MemoryItemStore>) -> Response<Body> {
        read_items::function_handler(ctx, request(Method::GET, "/read", Body::Empty))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let ctx = AppContext::new(MemoryItemStore::new());

        let response = write(&ctx, r#"{"ItemId":"1","Data":"hello"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response), json!({"message": "Item saved successfully"}));

        let response = read(&ctx).await;
        assert_eq!(response.status(), StatusCode::OK);
        let items = body_json(&response);
        assert!(items
            .as_array()
            .unwrap()
            .contains(&json!({"ItemId": "1", "Data": "hello"})));
    }

    #[tokio::test]
    async fn test_overwrite_keeps_single_latest_item() {
        let ctx = AppContext::new(MemoryItemStore::new());

        write(&ctx, r#"{"ItemId":"1","Data":"first"}"#).await;
        write(&ctx, r#"{"ItemId":"1","Data":"second"}"#).await;

        let items = body_json(&read(&ctx).await);
        assert_eq!(items, json!([{"ItemId": "1", "Data": "second"}]));
    }

    #[tokio::test]
    async fn test_every_written_pair_is_readable() {
        let ctx = AppContext::new(MemoryItemStore::new());
        let pairs = [("a", "alpha"), ("b", ""), ("c", "with \"quotes\""), ("d", "ünïcödé")];

        for (item_id, data) in pairs {
            let body = serde_json::to_string(&json!({"ItemId": item_id, "Data": data})).unwrap();
            let response = write_item::function_handler(
                &ctx,
                request(Method::POST, "/write", Body::from(body)),
            )
            .await
            .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let items: Vec<Item> = serde_json::from_value(body_json(&read(&ctx).await)).unwrap();
        for (item_id, data) in pairs {
            assert!(items.contains(&Item::new(item_id, data)));
        }
        assert_eq!(items.len(), pairs.len());
    }

    #[tokio::test]
    async fn test_rejected_write_leaves_table_unchanged() {
        let ctx = AppContext::new(MemoryItemStore::with_items([Item::new("1", "kept")]));

        let response = write(&ctx, r#"{"ItemId":"1"}"#).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let items = body_json(&read(&ctx).await);
        assert_eq!(items, json!([{"ItemId": "1", "Data": "kept"}]));
    }
}

#[cfg(test)]
mod frontend_tests {
    use super::*;

    const INDEX_HTML: &str = include_str!("../../../frontend/index.html");

    #[tokio::test]
    async fn test_page_alerts_read_errors_before_clearing_list() {
        // the page alerts `error` whenever /read does not return an array
        let mut store = MockStore::new();
        store.expect_scan().returning(|| {
            Err(StoreError::Service {
                operation: "Scan",
                message: "timed out".to_string(),
            })
        });
        let ctx = AppContext::new(store);
        let response = read_items::function_handler(&ctx, request(Method::GET, "/read", Body::Empty))
            .await
            .unwrap();
        let body = body_json(&response);
        assert!(!body.is_array());
        assert!(body["error"].is_string());

        let guard = INDEX_HTML
            .find("if (!Array.isArray(items))")
            .expect("read path must check for an array");
        let clear = INDEX_HTML
            .find(r#"list.innerHTML = "";"#)
            .expect("read path clears the list");
        assert!(guard < clear);
        assert!(INDEX_HTML[guard..clear].contains("alert(items.error)"));
    }
}
