pub mod canonical_options;
pub mod lookup_operation;
pub mod lookup_options;

pub use canonical_options::{CanonicalOptions, CanonicalSort};
pub use lookup_operation::LookupOperation;
pub use lookup_options::{ExtraFields, LookupOptions, SortOption};
