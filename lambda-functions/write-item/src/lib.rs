use item_core::http::{error_response, is_preflight, json_response, preflight_response};
use item_core::metrics::{HANDLER_ERRORS, ITEMS_WRITTEN};
use item_core::{AppContext, Item, ItemApiError, ItemStore, MessageBody, WriteItemRequest};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use tracing::{error, info, warn};

/// `POST /write`: upserts `{"ItemId", "Data"}` into the table.
pub async fn function_handler<S: ItemStore>(
    ctx: &AppContext<S>,
    event: Request,
) -> Result<Response<Body>, Error> {
    if is_preflight(&event) {
        return preflight_response();
    }

    match write_item(&ctx.store, event.body()).await {
        Ok(item) => {
            info!("Saved item {}", item.item_id);
            ctx.record(ITEMS_WRITTEN, 1.0).await;
            json_response(StatusCode::OK, &MessageBody::saved())
        }
        Err(e) => {
            match &e {
                ItemApiError::ClientInput(reason) => warn!("Rejected write: {}", reason),
                ItemApiError::Store(_) => error!("Failed to save item: {}", e),
            }
            ctx.record(HANDLER_ERRORS, 1.0).await;
            error_response(&e)
        }
    }
}

/// Parses the body and stores the item, returning what was written.
pub async fn write_item<S: ItemStore + ?Sized>(
    store: &S,
    body: &[u8],
) -> Result<Item, ItemApiError> {
    let item = Item::from(WriteItemRequest::from_slice(body)?);
    store.put(item.clone()).await?;
    Ok(item)
}
