//! Client side of the za relay
//!
//! Encodes a [`RequestDescriptor`] into `x-za-*` headers and POSTs it to a
//! relay, which performs the request and answers with the target's response.

use reqwest::header::{ACCEPT, HOST, HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use za_relay_common::constants::{CLIENT_USER_AGENT, DEFAULT_RELAY_HOST, RELAY_PATH};
use za_relay_common::{RelayError, RelayedResponse, RequestDescriptor, Result, headers_to_pairs};

/// Sends requests through a relay at `http://<host>/za`
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    host: String,
    endpoint: String,
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_RELAY_HOST)
    }
}

impl RelayClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), host)
    }

    pub fn with_client(http: reqwest::Client, host: impl Into<String>) -> Self {
        let host = host.into();
        let endpoint = format!("http://{}{}", host, RELAY_PATH);
        Self {
            http,
            host,
            endpoint,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Headers for the relay request: fixed client headers plus the encoded descriptor
    pub fn prepare_headers(&self, descriptor: &RequestDescriptor) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HOST,
            HeaderValue::from_str(&self.host)
                .map_err(|_| RelayError::InvalidOutboundHeader(self.host.clone()))?,
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.extend(descriptor.to_headers()?);
        Ok(headers)
    }

    /// Relay `descriptor` and collect the target's response
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<RelayedResponse> {
        debug!(
            "Relaying {} {} via {}",
            descriptor.method(),
            descriptor.url(),
            self.endpoint
        );

        let response = self
            .http
            .post(&self.endpoint)
            .headers(self.prepare_headers(descriptor)?)
            .send()
            .await
            .map_err(|e| RelayError::HttpError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = headers_to_pairs(response.headers());
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::HttpError(e.to_string()))?;

        debug!("Relay answered {}", status);

        Ok(RelayedResponse {
            status,
            headers,
            body,
        })
    }
}
