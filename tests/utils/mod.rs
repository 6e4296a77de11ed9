#![allow(dead_code)]

pub mod fake_transport;
pub mod test_server;

#[allow(unused_imports)]
pub use fake_transport::RecordingTransport;
#[allow(unused_imports)]
pub use test_server::serve_once;
