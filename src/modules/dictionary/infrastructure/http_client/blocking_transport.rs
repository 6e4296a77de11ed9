//! Transport for hosts that cannot drive an async HTTP client themselves,
//! such as a synchronous script engine embedding the adapter.
//!
//! Requests go through `reqwest::blocking`. From async code they are moved
//! onto tokio's blocking pool, so the contract matches `ReqwestTransport`.

use async_trait::async_trait;
use reqwest::{blocking::Client, header, StatusCode};
use tracing::{debug, warn};

use crate::modules::dictionary::domain::entities::dictionary_config::DEFAULT_USER_AGENT;
use crate::modules::dictionary::traits::HttpTransport;
use crate::shared::errors::{AppError, AppResult};

pub struct BlockingTransport {
    user_agent: String,
}

impl BlockingTransport {
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Performs the request on the calling thread.
    /// Must not be called from inside an async task; use `get` there.
    pub fn get_blocking(&self, url: &str) -> AppResult<String> {
        fetch(url, &self.user_agent)
    }
}

impl Default for BlockingTransport {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

// The blocking client owns a runtime of its own, so it is built and dropped
// on the same blocking thread for every request.
fn fetch(url: &str, user_agent: &str) -> AppResult<String> {
    debug!("GET (blocking) {}", url);

    let client = Client::builder().user_agent(user_agent).build()?;

    let response = client
        .get(url)
        .header(header::ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!("GET (blocking) {} answered with status {}", url, status);
        return Err(AppError::TransportError(status.as_u16()));
    }

    Ok(response.text()?)
}

#[async_trait]
impl HttpTransport for BlockingTransport {
    async fn get(&self, url: &str) -> AppResult<String> {
        let url = url.to_string();
        let user_agent = self.user_agent.clone();

        tokio::task::spawn_blocking(move || fetch(&url, &user_agent))
            .await
            .map_err(|e| AppError::ConnectionError(format!("Blocking request task failed: {}", e)))?
    }
}
