//! Per-request access logging in Apache combined log format
//!
//! ```text
//! 127.0.0.1 - - [10/Oct/2026:13:55:36 +0000] "POST /za HTTP/1.1" 200 2 "-" "za"
//! ```

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request},
    http::{HeaderMap, HeaderName, Method, Uri, Version, header},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use tracing::info;

/// One access log record
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub remote_addr: Option<SocketAddr>,
    pub time: DateTime<Utc>,
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub status: u16,
    pub content_length: Option<u64>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl AccessEntry {
    /// Render the entry as a combined log format line
    pub fn combined(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} {:?}\" {} {} \"{}\" \"{}\"",
            self.remote_addr
                .map(|addr| addr.ip().to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.uri,
            self.version,
            self.status,
            self.content_length
                .map(|len| len.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

/// Middleware emitting one access log line per inbound request
pub async fn access_log(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let time = Utc::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();
    let referer = header_text(request.headers(), &header::REFERER);
    let user_agent = header_text(request.headers(), &header::USER_AGENT);

    let response = next.run(request).await;

    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or_else(|| response.body().size_hint().exact());

    let entry = AccessEntry {
        remote_addr,
        time,
        method,
        uri,
        version,
        status: response.status().as_u16(),
        content_length,
        referer,
        user_agent,
    };
    info!(target: "za_relay::access", "{}", entry.combined());

    response
}

fn header_text(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}
