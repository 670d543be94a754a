use item_core::http::{error_response, is_preflight, json_response, preflight_response};
use item_core::metrics::{HANDLER_ERRORS, ITEMS_READ};
use item_core::{AppContext, Item, ItemApiError, ItemStore};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use tracing::{error, info};

/// `GET /read`: every item in the table as a JSON array.
///
/// Route 53 health checks probe this path, so a store failure must come back
/// as a 500 response rather than a function error.
pub async fn function_handler<S: ItemStore>(
    ctx: &AppContext<S>,
    event: Request,
) -> Result<Response<Body>, Error> {
    if is_preflight(&event) {
        return preflight_response();
    }

    match read_items(&ctx.store).await {
        Ok(items) => {
            info!("Returning {} items", items.len());
            ctx.record(ITEMS_READ, items.len() as f64).await;
            json_response(StatusCode::OK, &items)
        }
        Err(e) => {
            error!("Failed to read items: {}", e);
            ctx.record(HANDLER_ERRORS, 1.0).await;
            error_response(&e)
        }
    }
}

pub async fn read_items<S: ItemStore + ?Sized>(store: &S) -> Result<Vec<Item>, ItemApiError> {
    Ok(store.scan().await?)
}
