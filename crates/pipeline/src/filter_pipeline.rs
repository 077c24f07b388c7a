//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and turns raw
//! request criteria into the ordered candidate set handed to a ranker.

use crate::criteria::{FilterCriteria, ValidCriteria};
use crate::error::Result;
use crate::filters::{DirectorFilter, GenreFilter, YearFilter};
use crate::traits::Filter;
use data_loader::{Corpus, MovieIndex, RankingMode};
use std::sync::Arc;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new(corpus.clone())
///     .add_filter(GenreFilter::new(corpus.clone()))
///     .add_filter(YearFilter::new(corpus.clone()));
///
/// let candidates = pipeline.apply(&criteria)?;
/// ```
pub struct FilterPipeline {
    corpus: Arc<Corpus>,
    filters: Vec<Box<dyn Filter>>,
    require_director: bool,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline over `corpus`.
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            filters: Vec::new(),
            require_director: false,
        }
    }

    /// The standard pipeline for a ranking mode.
    ///
    /// Genre and year always; director as well in content mode, where it is
    /// also a required criterion.
    pub fn for_mode(corpus: Arc<Corpus>, mode: RankingMode) -> Self {
        let pipeline = FilterPipeline::new(corpus.clone())
            .add_filter(GenreFilter::new(corpus.clone()))
            .add_filter(YearFilter::new(corpus.clone()));

        if mode.requires_director() {
            pipeline
                .add_filter(DirectorFilter::new(corpus))
                .with_required_director(true)
        } else {
            pipeline
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Make `director` a required criterion (default: false)
    pub fn with_required_director(mut self, required: bool) -> Self {
        self.require_director = required;
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Validate raw criteria against this pipeline's requirements
    pub fn validate(&self, criteria: &FilterCriteria) -> Result<ValidCriteria> {
        criteria.validate(self.require_director)
    }

    /// Validate `criteria` and select every matching movie, in corpus order.
    ///
    /// ## Errors
    /// * `Validation` - required criteria missing; no filtering was done
    /// * `NoMatch` - the criteria were fine but nothing matched
    pub fn apply(&self, criteria: &FilterCriteria) -> Result<Vec<MovieIndex>> {
        let valid = self.validate(criteria)?;
        let candidates = self.apply_to(self.corpus.indices().collect(), &valid);

        if candidates.is_empty() {
            return Err(valid.no_match_error());
        }
        Ok(candidates)
    }

    /// Apply all filters in sequence to the given candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply_to(&self, candidates: Vec<MovieIndex>, criteria: &ValidCriteria) -> Vec<MovieIndex> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}
