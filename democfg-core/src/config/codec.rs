//! JSON document codec
//!
//! Records implement [`JsonRecord`] to convert to and from a
//! [`serde_json::Value`] object. Unlike the serde derive, decoding through
//! this trait reports *which* key was missing or mistyped as a typed
//! [`Error`] variant, so callers can tell structural problems apart.

use crate::config::types::{ConfigHeader, IMPNAME_KEY, INSTNAME_KEY};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// A record with a fixed-shape JSON object representation
pub trait JsonRecord: Sized {
    /// Build the document for this record
    fn to_json(&self) -> Value;

    /// Populate a record from a document.
    ///
    /// Unknown keys are ignored. Fails on the first missing or mistyped key.
    fn from_json(doc: &Value) -> Result<Self>;

    /// Print the document as JSON text
    fn to_json_string(&self, pretty: bool) -> Result<String> {
        let doc = self.to_json();
        let text = if pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(text)
    }

    /// Parse JSON text and decode it
    fn from_json_str(input: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(input)?;
        Self::from_json(&doc)
    }

    /// Decode the record stored under `key` of a larger object document
    fn from_json_section(doc: &Value, key: &str) -> Result<Self> {
        let section = as_object(doc)?.get(key).ok_or_else(|| Error::MissingField {
            field: key.to_string(),
        })?;
        Self::from_json(section)
    }
}

/// Name of the JSON kind of `value`, as used in error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object(doc: &Value) -> Result<&Map<String, Value>> {
    doc.as_object().ok_or(Error::NotAnObject { found: kind_of(doc) })
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::TypeMismatch {
            field: key.to_string(),
            expected: "string",
            found: kind_of(other),
        }),
        None => Err(Error::MissingField { field: key.to_string() }),
    }
}

impl JsonRecord for ConfigHeader {
    fn to_json(&self) -> Value {
        let mut obj = Map::with_capacity(2);
        obj.insert(IMPNAME_KEY.to_string(), Value::String(self.impname.clone()));
        obj.insert(INSTNAME_KEY.to_string(), Value::String(self.instname.clone()));
        Value::Object(obj)
    }

    fn from_json(doc: &Value) -> Result<Self> {
        let obj = as_object(doc)?;
        let header = Self {
            impname: required_str(obj, IMPNAME_KEY)?,
            instname: required_str(obj, INSTNAME_KEY)?,
        };
        tracing::debug!("Decoded config header {}", header);
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize() {
        let header = ConfigHeader::new("democfg", "headA");
        let doc = header.to_json();
        assert_eq!(doc, json!({"impname": "democfg", "instname": "headA"}));
        assert_eq!(doc.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let header = ConfigHeader::new("démo \"cfg\"\n", "");
        let back = ConfigHeader::from_json(&header.to_json()).unwrap();
        assert_eq!(back, header);

        let text = header.to_json_string(false).unwrap();
        assert_eq!(ConfigHeader::from_json_str(&text).unwrap(), header);
    }

    #[test]
    fn test_matches_serde_derive() {
        let header = ConfigHeader::new("a", "b");
        assert_eq!(header.to_json(), serde_json::to_value(&header).unwrap());
    }

    #[test]
    fn test_field_order_independent() {
        let a = ConfigHeader::from_json_str(r#"{"impname": "x", "instname": "y"}"#).unwrap();
        let b = ConfigHeader::from_json_str(r#"{"instname": "y", "impname": "x"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extra_keys_ignored() {
        let doc = json!({"impname": "x", "instname": "y", "version": 3, "extra": {"a": 1}});
        assert_eq!(ConfigHeader::from_json(&doc).unwrap(), ConfigHeader::new("x", "y"));
    }

    #[test]
    fn test_missing_impname() {
        let err = ConfigHeader::from_json(&json!({"instname": "y"})).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "impname"));
    }

    #[test]
    fn test_missing_instname() {
        let err = ConfigHeader::from_json(&json!({"impname": "x"})).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "instname"));
    }

    #[test]
    fn test_missing_both_reports_impname() {
        let err = ConfigHeader::from_json(&json!({})).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "impname"));
    }

    #[test]
    fn test_type_mismatch() {
        let err = ConfigHeader::from_json(&json!({"impname": 42, "instname": "y"})).unwrap_err();
        match err {
            Error::TypeMismatch { field, expected, found } => {
                assert_eq!(field, "impname");
                assert_eq!(expected, "string");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = ConfigHeader::from_json(&json!({"impname": "x", "instname": null})).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { found: "null", .. }));
    }

    #[test]
    fn test_not_an_object() {
        let err = ConfigHeader::from_json(&json!(["impname", "instname"])).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_syntax_error() {
        let err = ConfigHeader::from_json_str(r#"{"impname": "x""#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_section() {
        let doc = json!({"header": {"impname": "x", "instname": "y"}, "other": 1});
        let header = ConfigHeader::from_json_section(&doc, "header").unwrap();
        assert_eq!(header, ConfigHeader::new("x", "y"));

        let err = ConfigHeader::from_json_section(&doc, "head").unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "head"));

        let err = ConfigHeader::from_json_section(&json!([1]), "header").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "array" }));

        let err = ConfigHeader::from_json_section(&json!({"header": 3}), "header").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "number" }));
    }
}
