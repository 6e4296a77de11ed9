use async_trait::async_trait;
use serde_json::Value;

use crate::modules::dictionary::domain::{LookupOperation, LookupOptions, LookupResult};
use crate::shared::errors::AppResult;

/// One GET request against the remote service.
///
/// Implementations resolve exactly once per call: with the response body for
/// HTTP 200, with `AppError::TransportError(status)` for any other status, or
/// with `AppError::ConnectionError` when no status was received.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> AppResult<String>;
}

/// The dictionary lookup contract a remote binding fulfils
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// List dictionary descriptions matching `options.filter` (`id`, `name`)
    async fn list_dictionaries(&self, options: &LookupOptions) -> AppResult<LookupResult>;

    /// List entries matching `options.filter` (`id`, `dictID`)
    async fn list_entries(&self, options: &LookupOptions) -> AppResult<LookupResult>;

    /// Find entries whose terms match `query`
    async fn find_matches_for_string(
        &self,
        query: &str,
        options: &LookupOptions,
    ) -> AppResult<LookupResult>;
}

/// What a backend item mapper knows about the lookup that produced an item
#[derive(Debug, Clone)]
pub struct ItemContext {
    pub operation: LookupOperation,
    /// The raw search string, for string-match lookups
    pub query: Option<String>,
    /// Options as the caller passed them, before normalization
    pub options: LookupOptions,
}

/// Backend-specific conversion of raw server items into dictionary items
pub trait ItemMapper: Send + Sync {
    fn map_item(&self, item: Value, context: &ItemContext) -> AppResult<Value>;
}

impl<F> ItemMapper for F
where
    F: Fn(Value, &ItemContext) -> AppResult<Value> + Send + Sync,
{
    fn map_item(&self, item: Value, context: &ItemContext) -> AppResult<Value> {
        self(item, context)
    }
}
