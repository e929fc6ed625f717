//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document key holding the implementation name
pub const IMPNAME_KEY: &str = "impname";

/// Document key holding the instance name
pub const INSTNAME_KEY: &str = "instname";

/// Header record identifying which implementation a configuration targets
/// and which instance of it.
///
/// The serde derive produces the same two-key object as
/// [`JsonRecord::to_json`](crate::JsonRecord::to_json), so the header can sit
/// as a plain field inside a larger serde-derived configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigHeader {
    /// Implementation / module name
    pub impname: String,

    /// Instance name
    pub instname: String,
}

impl ConfigHeader {
    /// Create a header from its two names
    pub fn new(impname: impl Into<String>, instname: impl Into<String>) -> Self {
        Self {
            impname: impname.into(),
            instname: instname.into(),
        }
    }
}

impl fmt::Display for ConfigHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.impname, self.instname)
    }
}
