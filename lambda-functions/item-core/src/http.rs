//! Response construction shared by both routes.
//!
//! Every response, success or failure, carries the same JSON content type and
//! open CORS headers so the browser page can call either route from any
//! origin.

use lambda_http::http::{
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        CONTENT_TYPE,
    },
    response::Builder,
    Method, StatusCode,
};
use lambda_http::{Body, Error, Request, Response};
use serde::Serialize;

use crate::error::ItemApiError;
use crate::model::ErrorBody;

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_HEADERS: &str = "Content-Type";
pub const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";

fn builder(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN)
        .header(ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS)
        .header(ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)
}

pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(body)?;
    Ok(builder(status).body(Body::from(body))?)
}

/// Every failure maps to a 500 carrying the error message.
pub fn error_response(err: &ItemApiError) -> Result<Response<Body>, Error> {
    json_response(StatusCode::INTERNAL_SERVER_ERROR, &ErrorBody::from(err))
}

pub fn preflight_response() -> Result<Response<Body>, Error> {
    Ok(builder(StatusCode::OK).body(Body::Empty)?)
}

pub fn is_preflight(event: &Request) -> bool {
    *event.method() == Method::OPTIONS
}
