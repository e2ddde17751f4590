mod encoding;
mod headers;

pub use encoding::{TextDecodeError, decode_text, encode_text};
pub use headers::{headers_to_pairs, pairs_to_headers};
