//! In-memory transport that records every URL and answers with a fixed reply
use async_trait::async_trait;
use dictionary_remote_lib::{AppError, AppResult, HttpTransport};
use std::sync::Mutex;

pub struct RecordingTransport {
    reply: AppResult<String>,
    requests: Mutex<Vec<String>>,
}

impl RecordingTransport {
    /// Answers 200 with the JSON encoding of `items`
    pub fn replying_items(items: serde_json::Value) -> Self {
        Self::replying_body(&items.to_string())
    }

    /// Answers 200 with `body` verbatim
    pub fn replying_body(body: &str) -> Self {
        Self {
            reply: Ok(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with the given HTTP status
    pub fn failing_with_status(status: u16) -> Self {
        Self {
            reply: Err(AppError::TransportError(status)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: &str) -> AppResult<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.reply.clone()
    }
}
