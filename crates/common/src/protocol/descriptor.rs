//! Request descriptor carried inside `x-za-*` headers
//!
//! A descriptor names the outbound call a relay should make: method, absolute
//! URL and an ordered set of headers. On the wire every value is base64 text
//! except the pair count, which is plain decimal:
//!
//! ```text
//! x-za-method:      base64(method)
//! x-za-url:         base64(url)
//! x-za-headercount: n
//! x-za-hk-0 .. x-za-hk-{n-1}: base64(header name)
//! x-za-hv-0 .. x-za-hv-{n-1}: base64(header value)
//! ```

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::constants::{
    HEADER_COUNT_HEADER, HEADER_KEY_PREFIX, HEADER_VALUE_PREFIX, METHOD_HEADER, URL_HEADER,
};
use crate::error::{RelayError, Result};
use crate::utils::{decode_text, encode_text};

/// Name of the header carrying the i-th outbound header name
pub fn header_key_name(index: usize) -> String {
    format!("{}{}", HEADER_KEY_PREFIX, index)
}

/// Name of the header carrying the i-th outbound header value
pub fn header_value_name(index: usize) -> String {
    format!("{}{}", HEADER_VALUE_PREFIX, index)
}

/// Ordered outbound headers with last-write-wins on identical names
///
/// Names compare exactly (case-sensitive). Overwriting a name keeps the
/// position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundHeaders(Vec<(String, String)>);

impl OutboundHeaders {
    fn insert(&mut self, name: String, value: String) {
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for OutboundHeaders {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut headers = Self::default();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<'a> IntoIterator for &'a OutboundHeaders {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Decoded description of the outbound call
///
/// There is no mutable access once built; the relay consumes it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: String,
    url: String,
    headers: OutboundHeaders,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>, url: impl Into<String>, headers: OutboundHeaders) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &OutboundHeaders {
        &self.headers
    }

    pub fn into_parts(self) -> (String, String, OutboundHeaders) {
        (self.method, self.url, self.headers)
    }

    /// Decode a descriptor from inbound request headers
    ///
    /// Fails on the first missing header, malformed base64, non-UTF-8 text or
    /// a pair count that is not a non-negative decimal integer.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let method = decoded_header(headers, METHOD_HEADER)?;
        let url = decoded_header(headers, URL_HEADER)?;

        let raw_count = header_str(headers, HEADER_COUNT_HEADER)?;
        let count: usize = raw_count
            .parse()
            .map_err(|_| RelayError::InvalidHeaderCount(raw_count.to_string()))?;

        let mut outbound = OutboundHeaders::default();
        for index in 0..count {
            let name = decoded_header(headers, &header_key_name(index))?;
            let value = decoded_header(headers, &header_value_name(index))?;
            outbound.insert(name, value);
        }

        Ok(Self {
            method,
            url,
            headers: outbound,
        })
    }

    /// Encode this descriptor into the `x-za-*` request headers
    pub fn to_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            HeaderName::from_static(METHOD_HEADER),
            encoded_value(&self.method)?,
        );
        headers.insert(HeaderName::from_static(URL_HEADER), encoded_value(&self.url)?);

        for (index, (name, value)) in self.headers.iter().enumerate() {
            headers.insert(header_name(&header_key_name(index))?, encoded_value(name)?);
            headers.insert(header_name(&header_value_name(index))?, encoded_value(value)?);
        }

        headers.insert(
            HeaderName::from_static(HEADER_COUNT_HEADER),
            HeaderValue::from(self.headers.len()),
        );

        Ok(headers)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str> {
    headers
        .get(name)
        .ok_or_else(|| RelayError::MissingHeader(name.to_string()))?
        .to_str()
        .map_err(|_| RelayError::InvalidHeader(name.to_string()))
}

fn decoded_header(headers: &HeaderMap, name: &str) -> Result<String> {
    decode_text(header_str(headers, name)?).map_err(|source| RelayError::Decode {
        header: name.to_string(),
        source,
    })
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| RelayError::InvalidOutboundHeader(name.to_string()))
}

fn encoded_value(text: &str) -> Result<HeaderValue> {
    let encoded = encode_text(text);
    HeaderValue::from_str(&encoded).map_err(|_| RelayError::InvalidOutboundHeader(encoded))
}
