//! Configuration records and their document codec

mod codec;
mod types;

pub use codec::{JsonRecord, kind_of};
pub use types::{ConfigHeader, IMPNAME_KEY, INSTNAME_KEY};
