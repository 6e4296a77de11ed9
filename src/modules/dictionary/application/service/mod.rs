pub mod remote_dictionary;

pub use remote_dictionary::RemoteDictionary;
