use std::sync::Arc;

use super::{BlockingTransport, ReqwestTransport};
use crate::modules::dictionary::domain::{DictionaryConfig, TransportKind};
use crate::modules::dictionary::traits::HttpTransport;

/// Builds the transport selected by configuration.
/// Callers that need a different implementation inject it directly instead.
pub fn create_transport(kind: TransportKind, user_agent: &str) -> Arc<dyn HttpTransport> {
    match kind {
        TransportKind::Async => Arc::new(ReqwestTransport::new(user_agent)),
        TransportKind::Blocking => Arc::new(BlockingTransport::new(user_agent)),
    }
}

pub fn transport_for_config(config: &DictionaryConfig) -> Arc<dyn HttpTransport> {
    log::debug!("Using {:?} transport", config.transport);
    create_transport(config.transport, &config.user_agent)
}
