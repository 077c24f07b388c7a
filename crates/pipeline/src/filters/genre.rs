//! Filter to keep only movies carrying the requested genre.

use super::contains_words;
use crate::criteria::ValidCriteria;
use crate::traits::Filter;
use data_loader::{Corpus, MovieIndex};
use std::sync::Arc;

/// Keeps candidates whose genre list contains the requested genre as a whole word.
pub struct GenreFilter {
    corpus: Arc<Corpus>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `corpus` - Shared reference to the corpus for movie lookups
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<MovieIndex>, criteria: &ValidCriteria) -> Vec<MovieIndex> {
        candidates
            .into_iter()
            .filter(|&index| {
                self.corpus
                    .get(index)
                    .is_some_and(|movie| contains_words(&movie.genres, &criteria.genre))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Movie, RankingMode};

    fn create_test_corpus() -> Corpus {
        let movie = |title: &str, genres: &str| Movie {
            title: title.to_string(),
            genres: genres.to_string(),
            year: 2000,
            ..Default::default()
        };

        Corpus::new(
            vec![
                movie("Action Movie", "action adventure"),
                movie("Drama Movie", "drama"),
                movie("Interaction Movie", "interaction"),
                movie("Crime Action", "crime action"),
            ],
            RankingMode::Popularity,
        )
    }

    fn criteria(genre: &str) -> ValidCriteria {
        ValidCriteria {
            genre: genre.to_string(),
            year: 2000,
            director: None,
        }
    }

    #[test]
    fn test_genre_filter() {
        let filter = GenreFilter::new(Arc::new(create_test_corpus()));

        let filtered = filter.apply(vec![0, 1, 2, 3], &criteria("action"));

        // Whole-word only, corpus order kept
        assert_eq!(filtered, vec![0, 3]);
    }

    #[test]
    fn test_genre_filter_unknown_index_dropped() {
        let filter = GenreFilter::new(Arc::new(create_test_corpus()));

        let filtered = filter.apply(vec![1, 99], &criteria("drama"));
        assert_eq!(filtered, vec![1]);
    }
}
