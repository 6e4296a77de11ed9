use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::modules::dictionary::{
    domain::{
        fill_template, normalize, validate_response, DictionaryConfig, LookupOperation,
        LookupOptions, LookupResult, UrlTemplates,
    },
    infrastructure::transport_for_config,
    traits::{Dictionary, HttpTransport, ItemContext, ItemMapper},
};
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};

/// Dictionary lookups answered by a URL-templated REST service.
///
/// Every lookup runs the same pipeline: normalize the options, fill the
/// operation's template, issue one GET, require a JSON array back, map the
/// items if a backend mapper is set, and wrap them as `{ items }`.
/// Nothing is retried or cached, and no state is shared between calls.
pub struct RemoteDictionary {
    templates: UrlTemplates,
    transport: Arc<dyn HttpTransport>,
    item_mapper: Option<Arc<dyn ItemMapper>>,
}

impl RemoteDictionary {
    /// Create a dictionary using the transport selected in `config`
    pub fn new(config: DictionaryConfig) -> AppResult<Self> {
        config.validate()?;
        let transport = transport_for_config(&config);
        Ok(Self::with_transport(&config, transport))
    }

    /// Create a dictionary over an explicitly provided transport (test doubles, custom clients)
    pub fn with_transport(config: &DictionaryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            templates: UrlTemplates::from_config(config),
            transport,
            item_mapper: None,
        }
    }

    /// Set the backend-specific mapping applied to every item received
    pub fn with_item_mapper(mut self, mapper: impl ItemMapper + 'static) -> Self {
        self.item_mapper = Some(Arc::new(mapper));
        self
    }

    pub fn templates(&self) -> &UrlTemplates {
        &self.templates
    }

    /// The URL a lookup would request, without requesting it
    pub fn build_url(
        &self,
        operation: LookupOperation,
        options: &LookupOptions,
        query: Option<&str>,
    ) -> String {
        let mut canonical = normalize(options, operation.filter_keys(), operation.sort_keys());
        if let Some(query) = query {
            canonical = canonical.with_query(query);
        }
        fill_template(self.templates.get(operation), &canonical)
    }

    pub async fn list_dictionaries(&self, options: &LookupOptions) -> AppResult<LookupResult> {
        self.lookup(LookupOperation::DictInfos, options, None).await
    }

    pub async fn list_entries(&self, options: &LookupOptions) -> AppResult<LookupResult> {
        self.lookup(LookupOperation::Entries, options, None).await
    }

    /// An empty `query` completes with no items and makes no request
    pub async fn find_matches_for_string(
        &self,
        query: &str,
        options: &LookupOptions,
    ) -> AppResult<LookupResult> {
        if query.is_empty() {
            log::debug!("Lookup: matches skipped for empty query");
            return Ok(LookupResult::empty());
        }

        self.lookup(LookupOperation::Matches, options, Some(query))
            .await
    }

    async fn lookup(
        &self,
        operation: LookupOperation,
        options: &LookupOptions,
        query: Option<&str>,
    ) -> AppResult<LookupResult> {
        let url = self.build_url(operation, options, query);
        LogContext::lookup_request(operation.as_str(), &url);
        let timer = TimedOperation::new(&format!("lookup {}", operation));

        let items = self
            .transport
            .get(&url)
            .await
            .and_then(|body| validate_response(&body))
            .and_then(|items| self.map_items(operation, options, query, items))
            .map_err(|e| {
                LogContext::error_with_context(&e, &format!("Lookup {} failed for {}", operation, url));
                e
            })?;

        timer.finish_with_info(&format!("{} items", items.len()));
        Ok(LookupResult::new(items))
    }

    fn map_items(
        &self,
        operation: LookupOperation,
        options: &LookupOptions,
        query: Option<&str>,
        items: Vec<Value>,
    ) -> AppResult<Vec<Value>> {
        let Some(mapper) = &self.item_mapper else {
            return Ok(items);
        };

        let context = ItemContext {
            operation,
            query: query.map(str::to_string),
            options: options.clone(),
        };

        items
            .into_iter()
            .map(|item| mapper.map_item(item, &context))
            .collect()
    }
}

#[async_trait]
impl Dictionary for RemoteDictionary {
    async fn list_dictionaries(&self, options: &LookupOptions) -> AppResult<LookupResult> {
        RemoteDictionary::list_dictionaries(self, options).await
    }

    async fn list_entries(&self, options: &LookupOptions) -> AppResult<LookupResult> {
        RemoteDictionary::list_entries(self, options).await
    }

    async fn find_matches_for_string(
        &self,
        query: &str,
        options: &LookupOptions,
    ) -> AppResult<LookupResult> {
        RemoteDictionary::find_matches_for_string(self, query, options).await
    }
}
