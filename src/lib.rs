//! Client adapter binding the dictionary lookup contract to a URL-templated
//! REST service.
//!
//! Lookup options are normalized, substituted into the operation's URL
//! template, fetched with a single GET, and the JSON array answer is handed
//! back as `{ items }`.
//!
//! ```no_run
//! use dictionary_remote_lib::{DictionaryConfig, LookupOptions, RemoteDictionary};
//!
//! # async fn run() -> dictionary_remote_lib::AppResult<()> {
//! let dict = RemoteDictionary::new(DictionaryConfig::new("http://localhost:8080"))?;
//! let options = LookupOptions::new().with_filter("dictID", ["GO"]).with_per_page(10);
//! let result = dict.find_matches_for_string("cell b", &options).await?;
//! println!("{} matches", result.items.len());
//! # Ok(())
//! # }
//! ```

pub mod modules;
pub mod shared;

pub use modules::dictionary::{
    Dictionary, DictionaryConfig, ExtraFields, HttpTransport, ItemContext, ItemMapper,
    LookupOperation, LookupOptions, LookupResult, RemoteDictionary, SortOption, TransportKind,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::{init_logger, init_tracing};
