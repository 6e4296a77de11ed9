pub mod blocking_transport;
pub mod reqwest_transport;
pub mod transport_factory;

pub use blocking_transport::BlockingTransport;
pub use reqwest_transport::ReqwestTransport;
pub use transport_factory::{create_transport, transport_for_config};
