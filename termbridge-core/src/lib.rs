//! # termbridge-core
//!
//! Foundation crate for the termbridge terminology mapping system.
//! Defines the data model, collaborator traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MappingConfig;
pub use errors::{TermBridgeError, TermBridgeResult};
pub use models::{
    BulkMappingReport, Confidence, MappingMethod, MappingQuality, MappingResult, SourceTerm,
    TargetEntry,
};
