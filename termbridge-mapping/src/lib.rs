//! # termbridge-mapping
//!
//! The mapping engine. Maps free-text traditional-medicine terms onto
//! entries of an external biomedical classification, returning ranked
//! candidates with calibrated confidence and a categorical method label.
//!
//! ## Architecture
//!
//! ```text
//! MappingEngine
//! ├── expansion        (label + synonym query list, fixed order)
//! ├── fan-out          (per-query tokio tasks, order-preserving join)
//! ├── ranking
//! │   ├── dedup        (first occurrence of a code wins)
//! │   ├── scoring      (lexical similarity + damped synonym cross-match)
//! │   └── rank         (descending, top-k)
//! ├── classification   (confidence → MappingMethod)
//! └── MemoryMappingCache (moka, keyed by source-term id)
//!
//! aggregate            (display-only multi-factor cross-ranking)
//! ```

pub mod aggregate;
pub mod cache;
pub mod engine;
pub mod expansion;
pub mod ranking;
pub mod similarity;

pub use aggregate::{cross_rank, AggregatorWeights, CrossRanked};
pub use cache::MemoryMappingCache;
pub use engine::MappingEngine;
