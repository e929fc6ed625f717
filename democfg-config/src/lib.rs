//! democfg Configuration Loader
//!
//! This crate loads [`ConfigHeader`] records from JSON or TOML documents,
//! either at the document root or nested under a named section.
//!
//! # Example
//!
//! ```rust
//! use democfg_config::{load_str, Format};
//!
//! # fn main() -> democfg_config::Result<()> {
//! let header = load_str(r#"{"impname": "democfg", "instname": "headA"}"#, Format::Json, None)?;
//! assert_eq!(header.instname, "headA");
//! # Ok(())
//! # }
//! ```

pub mod adapter;

pub use adapter::{JsonAdapter, TomlAdapter};
pub use democfg_core::{ConfigHeader, Error, JsonRecord, Result};

use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path.as_ref().extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(Error::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Parse text in this format into a generic document
    pub fn parse_document(self, input: &str) -> Result<Value> {
        match self {
            Format::Json => JsonAdapter::parse_document(input),
            Format::Toml => TomlAdapter::parse_document(input),
        }
    }

    /// Serialize a header in this format
    pub fn serialize(self, header: &ConfigHeader) -> Result<String> {
        match self {
            Format::Json => JsonAdapter::serialize(header),
            Format::Toml => TomlAdapter::serialize(header),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Toml => f.write_str("toml"),
        }
    }
}

/// Decode a header from text, at the root or under `section`
pub fn load_str(input: &str, format: Format, section: Option<&str>) -> Result<ConfigHeader> {
    let doc = format.parse_document(input)?;
    match section {
        Some(key) => ConfigHeader::from_json_section(&doc, key),
        None => ConfigHeader::from_json(&doc),
    }
}

/// Load a header from the root of a JSON or TOML file
pub fn load_file(path: impl AsRef<Path>) -> Result<ConfigHeader> {
    load_file_section(path, None)
}

/// Load a header from a file, optionally from a named section
pub fn load_file_section(path: impl AsRef<Path>, section: Option<&str>) -> Result<ConfigHeader> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    tracing::debug!("Loading {} config from {}", format, path.display());

    let source = std::fs::read_to_string(path)?;
    load_str(&source, format, section)
}
