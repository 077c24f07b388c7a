//! # Recommendation Orchestrator
//!
//! This module is the single entry point for recommendation requests:
//! 1. Validate the criteria
//! 2. Run the filter pipeline over the corpus
//! 3. Rank the surviving candidates with the mode's ranker
//! 4. Resolve positions to titles
//!
//! Everything it holds is immutable after construction, so one orchestrator
//! is cloned into every request handler and shared across threads.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use data_loader::{Corpus, MovieIndex, OptionValues, RankingMode};
use pipeline::{FilterCriteria, FilterPipeline};
use ranking::{ContentRanker, DEFAULT_LIMIT, PopularityRanker, Ranker, VectorSpace};

use crate::error::RecommendResult;

/// Coordinates filtering and ranking over one loaded corpus
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    corpus: Arc<Corpus>,
    filter_pipeline: Arc<FilterPipeline>,
    ranker: Arc<dyn Ranker>,
    /// Fit once in content mode; kept so the ranker can be rebuilt cheaply
    vector_space: Option<Arc<VectorSpace>>,
    limit: usize,
}

impl std::fmt::Debug for RecommendationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationOrchestrator")
            .field("corpus", &self.corpus)
            .field("ranker", &self.ranker.name())
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl RecommendationOrchestrator {
    /// Create an orchestrator for the corpus's ranking mode.
    ///
    /// In content mode this fits the vector space over every synopsis, which
    /// is the expensive part of startup.
    pub fn new(corpus: Arc<Corpus>) -> Self {
        let start_time = Instant::now();
        let mode = corpus.mode();

        let filter_pipeline = Arc::new(FilterPipeline::for_mode(corpus.clone(), mode));
        let vector_space = match mode {
            RankingMode::Content => Some(Arc::new(VectorSpace::fit(&corpus))),
            RankingMode::Popularity => None,
        };
        let ranker = build_ranker(&corpus, vector_space.as_ref(), DEFAULT_LIMIT);

        info!(
            "Orchestrator ready: {} mode, {} movies, ranker {} ({:?})",
            mode,
            corpus.len(),
            ranker.name(),
            start_time.elapsed()
        );

        Self {
            corpus,
            filter_pipeline,
            ranker,
            vector_space,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Configure the number of recommendations (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.ranker = build_ranker(&self.corpus, self.vector_space.as_ref(), limit);
        self.limit = limit;
        self
    }

    pub fn mode(&self) -> RankingMode {
        self.corpus.mode()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Distinct values for an option category, see [`Corpus::options`]
    pub fn options(&self, category: &str) -> RecommendResult<OptionValues> {
        Ok(self.corpus.options(category)?)
    }

    /// Recommend titles for `criteria`, best first.
    ///
    /// ## Errors
    /// * `Validation` - required criteria missing
    /// * `NoMatch` - nothing passed the filters
    ///
    /// A successful call can still return an empty list, e.g. when the only
    /// match in content mode is the seed itself.
    pub fn recommend(&self, criteria: &FilterCriteria) -> RecommendResult<Vec<String>> {
        let start_time = Instant::now();

        let candidates = self.filter_pipeline.apply(criteria)?;
        debug!("{} candidates passed the filters", candidates.len());

        let ranked = self.ranker.rank(&candidates);
        let titles = self.resolve_titles(&ranked);

        info!(
            "Recommended {} of {} candidates with {} in {:?}",
            titles.len(),
            candidates.len(),
            self.ranker.name(),
            start_time.elapsed()
        );
        Ok(titles)
    }

    fn resolve_titles(&self, ranked: &[MovieIndex]) -> Vec<String> {
        ranked
            .iter()
            .filter_map(|&index| self.corpus.title(index))
            .map(str::to_string)
            .collect()
    }
}

fn build_ranker(
    corpus: &Arc<Corpus>,
    vector_space: Option<&Arc<VectorSpace>>,
    limit: usize,
) -> Arc<dyn Ranker> {
    match vector_space {
        Some(space) => Arc::new(ContentRanker::new(corpus.clone(), space.clone()).with_limit(limit)),
        None => Arc::new(PopularityRanker::new(corpus.clone()).with_limit(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;
    use data_loader::Movie;

    fn movie(title: &str, genres: &str, director: &str, year: i32, votes: u64, overview: &str) -> Movie {
        Movie {
            title: title.to_string(),
            genres: genres.to_string(),
            director: director.to_string(),
            year,
            votes,
            overview: overview.to_string(),
        }
    }

    fn popularity_orchestrator() -> RecommendationOrchestrator {
        let corpus = Corpus::new(
            vec![
                movie("A", "action", "", 2000, 10, ""),
                movie("B", "action drama", "", 2000, 50, ""),
                movie("C", "comedy", "", 2000, 99, ""),
                movie("D", "action", "", 2001, 70, ""),
            ],
            RankingMode::Popularity,
        );
        RecommendationOrchestrator::new(Arc::new(corpus))
    }

    fn content_orchestrator() -> RecommendationOrchestrator {
        let corpus = Corpus::new(
            vec![
                movie("Heist", "crime", "jane doe", 2010, 0, "a crew of thieves plans a bank heist"),
                movie("Vault", "crime", "john roe", 2012, 0, "thieves crack a bank vault"),
                movie("Garden", "drama", "ann lee", 2010, 0, "an old man tends his garden"),
                movie("Casino", "crime", "ann lee", 2015, 0, "a crew robs a casino"),
            ],
            RankingMode::Content,
        );
        RecommendationOrchestrator::new(Arc::new(corpus))
    }

    #[test]
    fn test_popularity_recommendation() {
        let orchestrator = popularity_orchestrator();
        let criteria = FilterCriteria::new().with_genre("Action").with_year(2000);

        let titles = orchestrator.recommend(&criteria).unwrap();
        assert_eq!(titles, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_validation_before_matching() {
        let orchestrator = popularity_orchestrator();
        let criteria = FilterCriteria::new().with_genre("action");

        let err = orchestrator.recommend(&criteria).unwrap_err();
        assert!(matches!(err, RecommendError::Validation(_)));
    }

    #[test]
    fn test_no_match() {
        let orchestrator = popularity_orchestrator();
        let criteria = FilterCriteria::new().with_genre("western").with_year(2000);

        let err = orchestrator.recommend(&criteria).unwrap_err();
        assert!(matches!(err, RecommendError::NoMatch(_)));
    }

    #[test]
    fn test_limit() {
        let orchestrator = popularity_orchestrator().with_limit(1);
        let criteria = FilterCriteria::new().with_genre("action").with_year(2000);

        assert_eq!(orchestrator.recommend(&criteria).unwrap(), vec!["B".to_string()]);
        assert_eq!(orchestrator.limit(), 1);
    }

    #[test]
    fn test_content_recommendation_excludes_seed() {
        let orchestrator = content_orchestrator();
        let criteria = FilterCriteria::new()
            .with_genre("crime")
            .with_year(2010)
            .with_director("Jane Doe");

        let titles = orchestrator.recommend(&criteria).unwrap();
        assert_eq!(titles[0], "Vault");
        assert!(!titles.contains(&"Heist".to_string()));
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn test_content_requires_director() {
        let orchestrator = content_orchestrator();
        let criteria = FilterCriteria::new().with_genre("crime").with_year(2010);

        let err = orchestrator.recommend(&criteria).unwrap_err();
        assert!(matches!(err, RecommendError::Validation(_)));
    }

    #[test]
    fn test_options_passthrough() {
        let orchestrator = content_orchestrator();

        assert_eq!(
            orchestrator.options("year").unwrap(),
            OptionValues::Years(vec![2015, 2012, 2010])
        );
        let err = orchestrator.options("overview").unwrap_err();
        assert!(matches!(err, RecommendError::InvalidCategory(_)));
    }
}
