//! Content Similarity Ranker - "more like this"
//!
//! Recommends the movies whose synopses are closest to a seed movie.
//!
//! ## Algorithm
//! 1. The first candidate in filter order is the seed. Any other candidates
//!    are not consulted.
//! 2. Score every movie in the corpus by cosine similarity to the seed, in
//!    one matrix-vector product over the vector space.
//! 3. Drop the seed, order by score descending. Equal scores put movies with
//!    synopsis terms ahead of empty ones, then fall back to corpus order.
//! 4. Return the top `limit` positions.

use crate::traits::Ranker;
use crate::vector_space::VectorSpace;
use crate::DEFAULT_LIMIT;
use data_loader::{Corpus, MovieIndex};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ranks the corpus by synopsis similarity to the first candidate
#[derive(Clone)]
pub struct ContentRanker {
    /// Shared reference to the corpus
    corpus: Arc<Corpus>,

    /// Vector space fit over the same corpus, row-aligned with it
    vector_space: Arc<VectorSpace>,

    /// Maximum number of results
    limit: usize,
}

impl ContentRanker {
    /// Create a ranker over a corpus and the vector space fit on it.
    ///
    /// Both must describe the same movies in the same order.
    pub fn new(corpus: Arc<Corpus>, vector_space: Arc<VectorSpace>) -> Self {
        debug_assert_eq!(corpus.len(), vector_space.len());
        Self {
            corpus,
            vector_space,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Fit a vector space over `corpus` and build a ranker on it
    pub fn fit(corpus: Arc<Corpus>) -> Self {
        let vector_space = Arc::new(VectorSpace::fit(&corpus));
        Self::new(corpus, vector_space)
    }

    /// Configure the number of results (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The vector space this ranker scores with
    pub fn vector_space(&self) -> &VectorSpace {
        &self.vector_space
    }

    /// Movies most similar to `seed`, best first, with their scores
    pub fn similar_to(&self, seed: MovieIndex) -> Vec<(MovieIndex, f32)> {
        let Some(scores) = self.vector_space.cosine_similarities(seed) else {
            return Vec::new();
        };

        let mut scored: Vec<(MovieIndex, f32)> = scores
            .iter()
            .enumerate()
            .filter_map(|(index, &score)| (index != seed).then_some((index, score)))
            .collect();

        scored.sort_by(|a, b| self.compare(*a, *b));
        scored.truncate(self.limit);
        scored
    }

    /// Score descending, then non-empty synopsis first, then corpus order
    fn compare(&self, (a, score_a): (MovieIndex, f32), (b, score_b): (MovieIndex, f32)) -> Ordering {
        score_b
            .total_cmp(&score_a)
            .then_with(|| {
                self.vector_space
                    .is_zero(a)
                    .cmp(&self.vector_space.is_zero(b))
            })
            .then(a.cmp(&b))
    }
}

impl Ranker for ContentRanker {
    fn name(&self) -> &str {
        "ContentRanker"
    }

    #[instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    fn rank(&self, candidates: &[MovieIndex]) -> Vec<MovieIndex> {
        let Some(&seed) = candidates.first() else {
            return Vec::new();
        };

        debug!(
            "Seeding similarity search with '{}' (position {})",
            self.corpus.title(seed).unwrap_or_default(),
            seed
        );

        let ranked: Vec<MovieIndex> = self
            .similar_to(seed)
            .into_iter()
            .map(|(index, _)| index)
            .collect();

        debug!("Ranked {} movies by content similarity", ranked.len());
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Movie, RankingMode};

    fn create_test_corpus(overviews: &[&str]) -> Arc<Corpus> {
        let movies = overviews
            .iter()
            .enumerate()
            .map(|(i, overview)| Movie {
                title: format!("Movie {}", i),
                genres: "drama".to_string(),
                year: 2000,
                overview: overview.to_string(),
                ..Default::default()
            })
            .collect();
        Arc::new(Corpus::new(movies, RankingMode::Content))
    }

    #[test]
    fn test_excludes_seed_and_orders_by_similarity() {
        let corpus = create_test_corpus(&[
            "pirates sail the caribbean sea hunting treasure",
            "lovers meet in paris",
            "pirates hunting treasure",
            "a caribbean sea voyage",
        ]);
        let ranker = ContentRanker::fit(corpus);

        let ranked = ranker.rank(&[0]);
        assert!(!ranked.contains(&0));
        assert_eq!(ranked[0], 2);
        assert_eq!(ranked[1], 3);
        // Paris shares nothing and trails
        assert_eq!(ranked[2], 1);
    }

    #[test]
    fn test_never_more_than_limit() {
        let corpus = create_test_corpus(&[
            "space", "space ship", "space war", "space crew", "space race", "space dust",
            "space probe", "space walk",
        ]);
        let ranker = ContentRanker::fit(corpus);

        let ranked = ranker.rank(&[0]);
        assert_eq!(ranked.len(), DEFAULT_LIMIT);
        assert!(!ranked.contains(&0));
    }

    #[test]
    fn test_small_corpus_returns_remainder() {
        let corpus = create_test_corpus(&["alpha beta", "beta gamma", "gamma delta"]);
        let ranker = ContentRanker::fit(corpus);

        let ranked = ranker.rank(&[1]);
        assert_eq!(ranked.len(), 2);
        assert!(!ranked.contains(&1));
    }

    #[test]
    fn test_first_candidate_seeds() {
        let corpus = create_test_corpus(&[
            "robots rebel against humans",
            "a chef opens a bakery",
            "robots and humans at war",
            "the bakery burns down",
        ]);
        let ranker = ContentRanker::fit(corpus);

        // Candidates 0 and 1 both matched; only 0 seeds the search
        let ranked = ranker.rank(&[0, 1]);
        assert_eq!(ranked[0], 2);
        assert!(!ranked.contains(&0));
        assert!(ranked.contains(&1));

        let ranked = ranker.rank(&[1, 0]);
        assert_eq!(ranked[0], 3);
    }

    #[test]
    fn test_ties_use_corpus_order_and_empty_synopses_trail() {
        let corpus = create_test_corpus(&[
            "",
            "detective solves a murder",
            "unrelated cooking show",
            "",
            "another unrelated gardening tale",
            "detective",
        ]);
        let ranker = ContentRanker::fit(corpus);

        let ranked = ranker.rank(&[1]);
        // 5 scores above zero; 2 and 4 score zero but have text, so they come
        // before the empty synopses 0 and 3
        assert_eq!(ranked, vec![5, 2, 4, 0, 3]);
    }

    #[test]
    fn test_empty_seed_scores_everything_zero() {
        let corpus = create_test_corpus(&["", "first story", "second story"]);
        let ranker = ContentRanker::fit(corpus);

        let scored = ranker.similar_to(0);
        assert_eq!(scored, vec![(1, 0.0), (2, 0.0)]);
    }

    #[test]
    fn test_no_candidates() {
        let corpus = create_test_corpus(&["anything at all"]);
        let ranker = ContentRanker::fit(corpus);

        assert!(ranker.rank(&[]).is_empty());
        assert!(ranker.rank(&[0]).is_empty());
    }
}
