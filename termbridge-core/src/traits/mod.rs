//! Collaborator seams consumed and exposed by the mapping engine.

pub mod cache;
pub mod registry;
pub mod search;

pub use cache::IMappingCache;
pub use registry::ITermRegistry;
pub use search::IClassificationSearch;
