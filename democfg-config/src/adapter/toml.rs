//! TOML configuration adapter
//!
//! TOML documents are read into a `serde_json::Value` and decoded through
//! the same codec as JSON, so both formats report identical errors.

use democfg_core::error::{Error, Result};
use democfg_core::{ConfigHeader, JsonRecord};
use serde_json::Value;

/// TOML configuration adapter
pub struct TomlAdapter;

impl TomlAdapter {
    /// Parse a TOML document into its generic form
    pub fn parse_document(input: &str) -> Result<Value> {
        ::toml::from_str(input).map_err(|e| Error::Toml(e.to_string()))
    }

    /// Parse a TOML header document
    pub fn parse(input: &str) -> Result<ConfigHeader> {
        ConfigHeader::from_json(&Self::parse_document(input)?)
    }

    /// Serialize a header to TOML
    pub fn serialize(header: &ConfigHeader) -> Result<String> {
        ::toml::to_string(&header.to_json()).map_err(|e| Error::Toml(e.to_string()))
    }
}
