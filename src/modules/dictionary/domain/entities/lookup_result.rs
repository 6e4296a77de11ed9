use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a remote lookup. Items are passed through as the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub items: Vec<Value>,
}

impl LookupResult {
    pub fn new(items: Vec<Value>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Value>> for LookupResult {
    fn from(items: Vec<Value>) -> Self {
        Self::new(items)
    }
}
