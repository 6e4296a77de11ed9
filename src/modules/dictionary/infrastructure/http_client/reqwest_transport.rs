//! Async HTTP transport on top of `reqwest`, for hosts running a tokio runtime.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::{debug, warn};

use crate::modules::dictionary::domain::entities::dictionary_config::DEFAULT_USER_AGENT;
use crate::modules::dictionary::traits::HttpTransport;
use crate::shared::errors::{AppError, AppResult};

/// Single-shot GET transport: no retries, no timeout beyond the client default
pub struct ReqwestTransport {
    client: Client,
    user_agent: String,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Self {
        Self::with_client(Client::new(), user_agent)
    }

    /// Create transport with a preconfigured client (proxies, TLS roots, ...)
    pub fn with_client(client: Client, user_agent: &str) -> Self {
        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("GET {} answered with status {}", url, status);
            return Err(AppError::TransportError(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let transport = ReqwestTransport::default();
        assert_eq!(transport.user_agent(), DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let transport = ReqwestTransport::default();
        // Port 9 (discard) on localhost is closed in test environments
        let err = transport.get("http://127.0.0.1:9/dic").await.unwrap_err();
        assert!(matches!(err, AppError::ConnectionError(_)));
        assert_eq!(err.status(), None);
    }
}
