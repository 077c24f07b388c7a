//! Filter by director, used only in content-similarity deployments.

use super::contains_words;
use crate::criteria::ValidCriteria;
use crate::traits::Filter;
use data_loader::{Corpus, MovieIndex};
use std::sync::Arc;

/// Keeps candidates whose director contains the requested name as whole words.
///
/// Criteria without a director pass every candidate through.
pub struct DirectorFilter {
    corpus: Arc<Corpus>,
}

impl DirectorFilter {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }
}

impl Filter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn apply(&self, candidates: Vec<MovieIndex>, criteria: &ValidCriteria) -> Vec<MovieIndex> {
        let Some(director) = criteria.director.as_deref() else {
            return candidates;
        };

        candidates
            .into_iter()
            .filter(|&index| {
                self.corpus
                    .get(index)
                    .is_some_and(|movie| contains_words(&movie.director, director))
            })
            .collect()
    }
}
