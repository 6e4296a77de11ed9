pub mod service;

pub use service::RemoteDictionary;
