use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "http://test";
pub const DEFAULT_USER_AGENT: &str = "dictionary-remote/0.1";

/// Which HTTP transport the adapter drives its requests through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Event-driven async client, for async hosts
    #[default]
    Async,
    /// Blocking client run off the async executor, for synchronous embedders
    Blocking,
}

impl FromStr for TransportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "async" => Ok(TransportKind::Async),
            "blocking" => Ok(TransportKind::Blocking),
            other => Err(AppError::ConfigError(format!(
                "Unknown transport '{}', expected 'async' or 'blocking'",
                other
            ))),
        }
    }
}

/// Construction options of a remote dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DictionaryConfig {
    pub base: String,
    pub url_get_dict_infos: Option<String>,
    pub url_get_entries: Option<String>,
    pub url_get_ref_terms: Option<String>,
    pub url_get_matches: Option<String>,
    pub transport: TransportKind,
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
            url_get_dict_infos: None,
            url_get_entries: None,
            url_get_ref_terms: None,
            url_get_matches: None,
            transport: TransportKind::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl DictionaryConfig {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("Invalid dictionary config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `DICTIONARY_*` variables, after loading a `.env` file if one exists
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(base) = env_var("DICTIONARY_BASE_URL") {
            config.base = base;
        }
        config.url_get_dict_infos = env_var("DICTIONARY_URL_GET_DICT_INFOS");
        config.url_get_entries = env_var("DICTIONARY_URL_GET_ENTRIES");
        config.url_get_ref_terms = env_var("DICTIONARY_URL_GET_REF_TERMS");
        config.url_get_matches = env_var("DICTIONARY_URL_GET_MATCHES");
        if let Some(transport) = env_var("DICTIONARY_TRANSPORT") {
            config.transport = transport.parse()?;
        }
        if let Some(user_agent) = env_var("DICTIONARY_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_transport(mut self, transport: TransportKind) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_url_get_matches(mut self, template: &str) -> Self {
        self.url_get_matches = Some(template.to_string());
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        let overrides = [
            &self.url_get_dict_infos,
            &self.url_get_entries,
            &self.url_get_ref_terms,
            &self.url_get_matches,
        ];

        if overrides
            .iter()
            .any(|template| matches!(template, Some(t) if t.trim().is_empty()))
        {
            return Err(AppError::ConfigError(
                "URL template overrides must not be empty".to_string(),
            ));
        }

        if self.base.trim().is_empty() && overrides.iter().any(|t| t.is_none()) {
            return Err(AppError::ConfigError(
                "A base URL is required unless every URL template is given".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
