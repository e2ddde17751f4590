use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{RelayError, Result};

/// Flatten a HeaderMap into ordered name/value pairs
/// Every value of a multi-valued header is kept, in order
pub fn headers_to_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// Build a HeaderMap from name/value pairs
/// Repeated names are appended rather than replaced
pub fn pairs_to_headers<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<HeaderMap>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderMap::new();

    for (name, value) in pairs {
        let (name, value) = (name.as_ref(), value.as_ref());
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| RelayError::InvalidOutboundHeader(name.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| RelayError::InvalidOutboundHeader(format!("{}: {}", name, value)))?;
        headers.append(header_name, header_value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_to_pairs_empty() {
        let headers = HeaderMap::new();
        assert!(headers_to_pairs(&headers).is_empty());
    }

    #[test]
    fn test_headers_to_pairs_multiple_values() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "text/plain".parse().unwrap());
        headers.insert("set-cookie", "session=abc".parse().unwrap());
        headers.append("set-cookie", "token=xyz".parse().unwrap());

        let pairs = headers_to_pairs(&headers);
        assert_eq!(pairs.len(), 3);

        let cookies: Vec<_> = pairs
            .iter()
            .filter(|(k, _)| k == "set-cookie")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(cookies, vec!["session=abc", "token=xyz"]);
    }

    #[test]
    fn test_headers_to_pairs_non_utf8_handling() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-binary-header",
            HeaderValue::from_bytes(&[b'a', 0xFF]).unwrap(),
        );

        let pairs = headers_to_pairs(&headers);
        assert_eq!(pairs[0].1, "a\u{FFFD}");
    }

    #[test]
    fn test_pairs_to_headers_multiple() {
        let pairs = vec![
            ("Content-Type", "text/plain"),
            ("Accept", "text/html"),
            ("accept", "application/json"),
        ];

        let headers = pairs_to_headers(pairs).unwrap();
        assert_eq!(headers.get("content-type").unwrap(), "text/plain");

        let accept: Vec<_> = headers
            .get_all("accept")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(accept, vec!["text/html", "application/json"]);
    }

    #[test]
    fn test_pairs_to_headers_invalid_header_name() {
        let pairs = vec![("valid-header", "value"), ("invalid header", "value")];

        let result = pairs_to_headers(pairs);
        assert!(matches!(
            result,
            Err(RelayError::InvalidOutboundHeader(name)) if name == "invalid header"
        ));
    }

    #[test]
    fn test_pairs_to_headers_invalid_value() {
        let result = pairs_to_headers([("x-test", "line\nbreak")]);
        assert!(result.is_err());
    }
}
