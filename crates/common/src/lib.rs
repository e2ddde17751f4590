//! Common types and utilities for the za relay
//!
//! This crate provides the request descriptor codec, the relayed response type and
//! the encoding helpers shared by the relay server and its clients.

pub mod constants;
pub mod error;
pub mod protocol;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{RelayError, Result};
pub use protocol::{OutboundHeaders, RelayedResponse, RequestDescriptor};
pub use utils::{decode_text, encode_text, headers_to_pairs, pairs_to_headers};
