pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::RemoteDictionary;
pub use domain::{
    fill_template, normalize, validate_response, CanonicalOptions, CanonicalSort,
    DictionaryConfig, ExtraFields, IntoCanonical, LookupOperation, LookupOptions, LookupResult,
    SortOption, TransportKind, UrlTemplates,
};
pub use infrastructure::{create_transport, BlockingTransport, ReqwestTransport};
pub use traits::{Dictionary, HttpTransport, ItemContext, ItemMapper};
