use serde::{Deserialize, Serialize};

/// Result of the outbound call, relayed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayedResponse {
    /// HTTP status code (200, 404, 500, etc.)
    pub status: u16,

    /// Response headers in the order they were received
    /// Multi-valued headers appear once per value
    #[serde(default)]
    pub headers: Vec<(String, String)>,

    /// Response body decoded as text
    #[serde(default)]
    pub body: String,
}

impl RelayedResponse {
    /// Create a new response with no headers and an empty body
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// First value of a header, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if the response is a server error (5xx status code)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relayed_response_creation() {
        let res = RelayedResponse::new(200);

        assert_eq!(res.status, 200);
        assert!(res.headers.is_empty());
        assert!(res.body.is_empty());
    }

    #[test]
    fn test_header_lookup() {
        let mut res = RelayedResponse::new(200);
        res.headers.push(("content-type".to_string(), "text/plain".to_string()));
        res.headers.push(("set-cookie".to_string(), "a=1".to_string()));
        res.headers.push(("set-cookie".to_string(), "b=2".to_string()));

        assert_eq!(res.header("Content-Type"), Some("text/plain"));
        assert_eq!(res.header("set-cookie"), Some("a=1"));
        assert_eq!(res.header("x-missing"), None);
    }

    #[test]
    fn test_relayed_response_serialization() {
        let res = RelayedResponse {
            status: 201,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: "héllo".to_string(),
        };

        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains(r#""status":201"#));
        assert!(json.contains(r#""headers":[["content-type","text/plain"]]"#));

        let parsed: RelayedResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, res);
    }

    #[test]
    fn test_relayed_response_defaults() {
        let parsed: RelayedResponse = serde_json::from_str(r#"{"status":204}"#).unwrap();
        assert!(parsed.headers.is_empty());
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_status_code_ranges() {
        let codes = vec![
            (100, false),
            (200, false),
            (301, false),
            (404, false),
            (500, true),
            (599, true),
            (600, false),
        ];

        for (code, is_server_err) in codes {
            let res = RelayedResponse::new(code);
            assert_eq!(
                res.is_server_error(),
                is_server_err,
                "Failed for status code {}",
                code
            );
        }
    }
}
