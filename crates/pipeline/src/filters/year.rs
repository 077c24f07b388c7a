//! Filter for the exact release year.

use crate::criteria::ValidCriteria;
use crate::traits::Filter;
use data_loader::{Corpus, MovieIndex};
use std::sync::Arc;

/// Keeps candidates released in exactly the requested year.
///
/// Movies with the unknown-year sentinel never match, since validated
/// criteria never carry `0`.
pub struct YearFilter {
    corpus: Arc<Corpus>,
}

impl YearFilter {
    /// Create a new YearFilter.
    ///
    /// # Arguments
    /// * `corpus` - Shared reference to the corpus for movie lookups
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn apply(&self, candidates: Vec<MovieIndex>, criteria: &ValidCriteria) -> Vec<MovieIndex> {
        candidates
            .into_iter()
            .filter(|&index| {
                self.corpus
                    .get(index)
                    .is_some_and(|movie| movie.year == criteria.year)
            })
            .collect()
    }
}
