//! Popularity Ranker - order by vote count
//!
//! The most-voted candidates come first. Equal vote counts keep the order
//! they had in the candidate list; no other field breaks ties.

use crate::traits::Ranker;
use crate::DEFAULT_LIMIT;
use data_loader::{Corpus, MovieIndex};
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ranks candidates by `votes`, descending
#[derive(Clone)]
pub struct PopularityRanker {
    /// Shared reference to the corpus
    corpus: Arc<Corpus>,

    /// Maximum number of results
    limit: usize,
}

impl PopularityRanker {
    /// Create a new popularity ranker
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Configure the number of results (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Ranker for PopularityRanker {
    fn name(&self) -> &str {
        "PopularityRanker"
    }

    #[instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    fn rank(&self, candidates: &[MovieIndex]) -> Vec<MovieIndex> {
        let mut ranked: Vec<(MovieIndex, u64)> = candidates
            .iter()
            .filter_map(|&index| self.corpus.get(index).map(|movie| (index, movie.votes)))
            .collect();

        // sort_by_key is stable: ties keep their input order
        ranked.sort_by_key(|&(_, votes)| Reverse(votes));
        ranked.truncate(self.limit);

        debug!("Ranked {} candidates by popularity", ranked.len());
        ranked.into_iter().map(|(index, _)| index).collect()
    }
}
