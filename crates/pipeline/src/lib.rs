//! Filter engine for movie candidates.
//!
//! This crate provides:
//! - FilterCriteria and its validation
//! - Filter trait and one implementation per filterable field
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! A request passes through the pipeline in stages:
//! 1. Criteria are validated (missing genre/year is rejected up front)
//! 2. Every corpus position starts as a candidate
//! 3. Each filter removes non-matching candidates, keeping corpus order
//! 4. An empty result is reported as `NoMatch`, distinct from validation
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, FilterPipeline};
//!
//! let pipeline = FilterPipeline::for_mode(corpus.clone(), corpus.mode());
//! let criteria = FilterCriteria::new().with_genre("action").with_year(2000);
//!
//! let candidates = pipeline.apply(&criteria)?;
//! ```

pub mod criteria;
pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use criteria::{FilterCriteria, ValidCriteria};
pub use error::{FilterError, Result};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
