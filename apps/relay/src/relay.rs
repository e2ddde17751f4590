//! The relay route: decode a descriptor, perform the call, copy the result back
//!
//! Steps run strictly in order for each request:
//! 1. decode method, URL and headers from the `x-za-*` headers
//! 2. perform the outbound call with those values and no body
//! 3. copy headers, status and text body onto the inbound response
//!
//! The inbound request body is never read.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Response,
};
use reqwest::{Client, Method};
use tracing::{debug, info};
use za_relay_common::{RelayError, RequestDescriptor, Result, pairs_to_headers};

use crate::error::RelayFault;
use crate::server::RelayState;

/// Response of the outbound call as received from the target
#[derive(Debug)]
pub struct OutboundResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Handler for `POST /za`
pub async fn relay_handler(
    State(state): State<RelayState>,
    headers: HeaderMap,
) -> std::result::Result<Response, RelayFault> {
    let descriptor = RequestDescriptor::from_headers(&headers)?;

    info!("Relaying {} {}", descriptor.method(), descriptor.url());
    debug!("Outbound headers: {:?}", descriptor.headers());

    let outbound = forward(&state.client, descriptor).await?;

    debug!(
        "Target responded {} with {} headers",
        outbound.status,
        outbound.headers.len()
    );

    Ok(relay_back(outbound))
}

/// Perform the outbound call described by `descriptor`
///
/// The descriptor is consumed; its headers are only read from here on.
pub async fn forward(client: &Client, descriptor: RequestDescriptor) -> Result<OutboundResponse> {
    let (method, url, headers) = descriptor.into_parts();

    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| RelayError::InvalidMethod(method.clone()))?;
    let headers = pairs_to_headers(headers.iter())?;

    let response = client
        .request(method, &url)
        .headers(headers)
        .send()
        .await
        .map_err(|e| RelayError::HttpError(e.to_string()))?;

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RelayError::HttpError(e.to_string()))?;
    // Always UTF-8, whatever charset the target declares
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(OutboundResponse {
        status,
        headers,
        body,
    })
}

/// Build the inbound response from the outbound one
///
/// Headers are copied verbatim except framing: the body is a single buffer
/// here, so `transfer-encoding` is dropped and `content-length` is the
/// length of that buffer.
pub fn relay_back(outbound: OutboundResponse) -> Response {
    let length = outbound.body.len();
    let mut response = Response::new(Body::from(outbound.body));

    let headers = response.headers_mut();
    copy_headers(outbound.headers, headers);
    headers.remove(header::TRANSFER_ENCODING);
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));

    *response.status_mut() = outbound.status;
    response
}

/// Copy every header from `from` onto `to`
///
/// A name present in `from` replaces all of its values in `to`; multiple
/// values for one name in `from` are all kept.
pub fn copy_headers(from: HeaderMap, to: &mut HeaderMap) {
    let mut current = None;

    for (name, value) in from {
        match name {
            Some(name) => {
                to.insert(name.clone(), value);
                current = Some(name);
            }
            None => {
                if let Some(name) = &current {
                    to.append(name.clone(), value);
                }
            }
        }
    }
}
