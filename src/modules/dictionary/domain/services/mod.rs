pub mod options_normalizer;
pub mod response_validator;
pub mod url_template;

pub use options_normalizer::{normalize, IntoCanonical};
pub use response_validator::validate_response;
pub use url_template::{fill_template, UrlTemplates};
