use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Failure to turn a base64 header value back into text
#[derive(Error, Debug)]
pub enum TextDecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode UTF-8 text to a Base64 string
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a Base64 string back to UTF-8 text
pub fn decode_text(encoded: &str) -> Result<String, TextDecodeError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_text(""), "");
        assert_eq!(decode_text("").unwrap(), "");
    }

    #[test]
    fn test_encode_method_and_url() {
        assert_eq!(encode_text("GET"), "R0VU");
        assert_eq!(
            encode_text("http://example.test/hello"),
            "aHR0cDovL2V4YW1wbGUudGVzdC9oZWxsbw=="
        );
    }

    #[test]
    fn test_decode_simple_text() {
        let decoded = decode_text("SGVsbG8sIFdvcmxkIQ==").unwrap();
        assert_eq!(decoded, "Hello, World!");
    }

    #[test]
    fn test_text_survives_encoding() {
        let samples = [
            "POST",
            "https://example.test/search?q=a b&lang=en#top",
            "value with  double  spaces and trailing ",
            "Hello 世界 🌍",
            "text/html; charset=utf-8",
        ];

        for sample in samples {
            assert_eq!(decode_text(&encode_text(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = decode_text("This is not valid base64!!!");
        assert!(matches!(result, Err(TextDecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_invalid_padding() {
        let result = decode_text("SGVsbG8"); // Missing padding
        assert!(matches!(result, Err(TextDecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_non_utf8() {
        // "//4=" is 0xFF 0xFE
        let result = decode_text("//4=");
        assert!(matches!(result, Err(TextDecodeError::Utf8(_))));
    }
}
