//! Corpus loading and the option index.
//!
//! This module builds the `Corpus` from a dataset file and derives the
//! distinct filterable values clients use to populate their pickers:
//! - `genres`: distinct genre tokens, ascending
//! - `year`: distinct known years, newest first (the `0` sentinel never appears)
//! - `director`: distinct directors, ascending, only when the dataset has them

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

impl Corpus {
    /// Load and normalize the dataset at `path` for the given ranking mode.
    ///
    /// This is the main entry point for loading data. Either the whole
    /// corpus is returned or an error is; no partial corpus exists.
    pub fn load(path: &Path, mode: RankingMode) -> Result<Self> {
        info!("Loading movie dataset from {:?} ({} mode)", path, mode);

        let movies = parser::parse_movies(path, mode)?;
        let corpus = Corpus::new(movies, mode);

        info!(
            "Loaded {} movies (directors: {})",
            corpus.len(),
            if corpus.has_directors() { "yes" } else { "no" }
        );
        Ok(corpus)
    }

    /// Categories clients may request options for
    pub fn supported_categories(&self) -> Vec<OptionCategory> {
        let mut categories = vec![OptionCategory::Genres, OptionCategory::Year];
        if self.has_directors {
            categories.push(OptionCategory::Director);
        }
        categories
    }

    /// Ordered distinct values for the category named `category`.
    ///
    /// Fails with `InvalidCategory` for unknown names, and for `director`
    /// when the corpus carries no directors.
    pub fn options(&self, category: &str) -> Result<OptionValues> {
        let supported = self.supported_categories();
        let category = OptionCategory::parse(category)
            .filter(|c| supported.contains(c))
            .ok_or_else(|| DataLoadError::InvalidCategory {
                category: category.to_string(),
                supported: supported
                    .iter()
                    .map(|c| format!("'{}'", c))
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let set = self.option_set();
        let values = match category {
            OptionCategory::Genres => OptionValues::Text(set.genres.clone()),
            OptionCategory::Director => OptionValues::Text(set.directors.clone()),
            OptionCategory::Year => OptionValues::Years(set.years.clone()),
        };
        Ok(values)
    }

    /// Distinct values across the corpus, built on first use
    pub(crate) fn option_set(&self) -> &OptionSet {
        self.option_set.get_or_init(|| build_option_set(&self.movies))
    }
}

/// Collect distinct genres, directors and years from `movies`
fn build_option_set(movies: &[Movie]) -> OptionSet {
    let mut genres = BTreeSet::new();
    let mut directors = BTreeSet::new();
    let mut years = BTreeSet::new();

    for movie in movies {
        genres.extend(parser::field_tokens(&movie.genres).map(str::to_string));
        if !movie.director.is_empty() {
            directors.insert(movie.director.clone());
        }
        if movie.has_year() {
            years.insert(movie.year);
        }
    }

    OptionSet {
        genres: genres.into_iter().collect(),
        directors: directors.into_iter().collect(),
        // BTreeSet iterates ascending; years are listed newest first
        years: years.into_iter().rev().collect(),
    }
}
