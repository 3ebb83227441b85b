//! Value objects exchanged between the registry, the classification search,
//! and the mapping engine.

pub mod bulk;
pub mod confidence;
pub mod mapping_result;
pub mod quality;
pub mod source_term;
pub mod target_entry;

pub use bulk::BulkMappingReport;
pub use confidence::Confidence;
pub use mapping_result::{MappingMethod, MappingResult};
pub use quality::MappingQuality;
pub use source_term::SourceTerm;
pub use target_entry::TargetEntry;
