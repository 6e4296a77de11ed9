pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{DictionaryConfig, LookupResult, TransportKind};
pub use services::{fill_template, normalize, validate_response, IntoCanonical, UrlTemplates};
pub use value_objects::{
    CanonicalOptions, CanonicalSort, ExtraFields, LookupOperation, LookupOptions, SortOption,
};
