//! za relay
//!
//! A single-endpoint HTTP relay. Callers POST to `/za` with a request
//! descriptor encoded in `x-za-*` headers; the relay performs that request and
//! returns the target's status, headers and body as its own response.
//!
//! ```text
//! caller ──POST /za──▶ relay ──METHOD url──▶ target
//! caller ◀─status/headers/body── relay ◀────── target
//! ```

pub mod access_log;
pub mod config;
pub mod error;
pub mod relay;
pub mod server;

pub use config::{Args, Config};
pub use error::RelayFault;
pub use server::{RelayServer, RelayState, router};
