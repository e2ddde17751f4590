//! Fault boundary for the relay route
//!
//! Any failure while decoding, calling out or relaying back ends here. The
//! full error is logged; the caller only sees a generic 500.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use za_relay_common::RelayError;
use za_relay_common::constants::FAULT_BODY;

/// Unrecovered failure of a single relay request
#[derive(Debug)]
pub struct RelayFault(pub RelayError);

impl From<RelayError> for RelayFault {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RelayFault {
    fn into_response(self) -> Response {
        error!("Relay fault: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            FAULT_BODY,
        )
            .into_response()
    }
}
