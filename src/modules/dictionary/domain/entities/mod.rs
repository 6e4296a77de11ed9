pub mod dictionary_config;
pub mod lookup_result;

pub use dictionary_config::{DictionaryConfig, TransportKind};
pub use lookup_result::LookupResult;
