//! JSON configuration adapter

use democfg_core::error::Result;
use democfg_core::{ConfigHeader, JsonRecord};
use serde_json::Value;

/// JSON configuration adapter
pub struct JsonAdapter;

impl JsonAdapter {
    /// Parse a JSON document into its generic form
    pub fn parse_document(input: &str) -> Result<Value> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a JSON header document
    pub fn parse(input: &str) -> Result<ConfigHeader> {
        ConfigHeader::from_json_str(input)
    }

    /// Serialize a header to pretty-printed JSON
    pub fn serialize(header: &ConfigHeader) -> Result<String> {
        header.to_json_string(true)
    }
}
