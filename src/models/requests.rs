//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::cache::{Decoder, Scalar};

/// A scalar as it arrives in JSON.
///
/// Integers are tried before floats so `42` stays an integer; an array of
/// numbers is taken as raw bytes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarInput {
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<ScalarInput> for Scalar {
    fn from(input: ScalarInput) -> Self {
        match input {
            ScalarInput::Int(i) => Scalar::Int(i),
            ScalarInput::Float(f) => Scalar::Float(f),
            ScalarInput::Text(s) => Scalar::Str(s),
            ScalarInput::Bytes(b) => Scalar::Bytes(b),
        }
    }
}

/// Request body for the STORE operation (PUT /store)
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The value to store
    pub value: ScalarInput,
}

/// Decoding requested on GET /get/:key via `?as=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeAs {
    Raw,
    #[default]
    String,
    Int,
}

impl From<DecodeAs> for Decoder {
    fn from(value: DecodeAs) -> Self {
        match value {
            DecodeAs::Raw => Decoder::Raw,
            DecodeAs::String => Decoder::Utf8,
            DecodeAs::Int => Decoder::Integer,
        }
    }
}

/// Query string for GET /get/:key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetQuery {
    #[serde(rename = "as", default)]
    pub decode_as: DecodeAs,
}

/// Query string for GET /page and GET /page/count
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// Page URL
    pub url: String,
    /// Optional TTL override in seconds (ignored by /page/count)
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl PageQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.trim().is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        if self.ttl == Some(0) {
            return Some("TTL must be at least 1 second".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_request_scalar_kinds() {
        let cases = [
            (r#"{"value": "hello"}"#, Scalar::Str("hello".to_string())),
            (r#"{"value": 42}"#, Scalar::Int(42)),
            (r#"{"value": -3.5}"#, Scalar::Float(-3.5)),
            (r#"{"value": [0, 255]}"#, Scalar::Bytes(vec![0, 255])),
        ];

        for (json, expected) in cases {
            let req: StoreRequest = serde_json::from_str(json).unwrap();
            assert_eq!(Scalar::from(req.value), expected, "for {}", json);
        }
    }

    #[test]
    fn test_store_request_rejects_objects() {
        let result = serde_json::from_str::<StoreRequest>(r#"{"value": {"a": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_as_default_and_mapping() {
        assert_eq!(GetQuery::default().decode_as, DecodeAs::String);
        assert_eq!(Decoder::from(DecodeAs::Raw), Decoder::Raw);
        assert_eq!(Decoder::from(DecodeAs::String), Decoder::Utf8);
        assert_eq!(Decoder::from(DecodeAs::Int), Decoder::Integer);
    }

    #[test]
    fn test_page_query_validate() {
        let valid = PageQuery {
            url: "http://example.com".to_string(),
            ttl: Some(5),
        };
        assert!(valid.validate().is_none());

        let empty = PageQuery {
            url: " ".to_string(),
            ttl: None,
        };
        assert!(empty.validate().is_some());

        let zero_ttl = PageQuery {
            url: "http://example.com".to_string(),
            ttl: Some(0),
        };
        assert!(zero_ttl.validate().is_some());
    }
}
