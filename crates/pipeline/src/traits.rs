//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::criteria::ValidCriteria;
use data_loader::MovieIndex;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to serve concurrent requests
/// - Filters take ownership of the candidate list and return the survivors
///   in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - Corpus positions still in play, in corpus order
    /// * `criteria` - Validated request criteria
    ///
    /// # Returns
    /// The candidates that satisfy this filter, order preserved
    fn apply(&self, candidates: Vec<MovieIndex>, criteria: &ValidCriteria) -> Vec<MovieIndex>;
}
