//! Configuration adapters

mod json;
mod toml;

pub use self::json::JsonAdapter;
pub use self::toml::TomlAdapter;
