pub mod http_client;

pub use http_client::{create_transport, transport_for_config, BlockingTransport, ReqwestTransport};
