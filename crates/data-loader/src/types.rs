//! Core domain types for the movie corpus.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Movie`: one normalized dataset row
//! - `Corpus`: the ordered, immutable collection of movies
//! - `RankingMode`: which ranker a deployment runs, and therefore which columns it needs
//! - `OptionCategory` / `OptionValues`: the filterable fields exposed to clients

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a movie in the corpus.
///
/// Stable for the lifetime of the process and shared with the vector space,
/// where row `i` describes movie `i`.
pub type MovieIndex = usize;

/// Release year. `0` is the "unknown" sentinel.
pub type Year = i32;

// =============================================================================
// Movie
// =============================================================================

/// One row of the dataset after normalization.
///
/// All string fields other than `title` are lower-cased. Numeric fields that
/// were missing or unparsable in the source hold `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title, not guaranteed unique
    pub title: String,
    /// Space-delimited genre tokens, e.g. `"action adventure"`
    pub genres: String,
    /// May be empty
    pub director: String,
    pub year: Year,
    /// Vote count used by popularity ranking
    pub votes: u64,
    /// Synopsis used by content ranking, may be empty
    pub overview: String,
}

impl Movie {
    /// True when the release year is known
    pub fn has_year(&self) -> bool {
        self.year > 0
    }

    /// True when there is synopsis text to vectorize
    pub fn has_overview(&self) -> bool {
        !self.overview.trim().is_empty()
    }
}

// =============================================================================
// Ranking mode
// =============================================================================

/// How a deployment ranks filtered candidates.
///
/// The mode is fixed at startup. It decides which dataset column is mandatory
/// and whether `director` takes part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Order by vote count, descending
    #[default]
    Popularity,
    /// Order by synopsis similarity to the first matching movie
    Content,
}

impl RankingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMode::Popularity => "popularity",
            RankingMode::Content => "content",
        }
    }

    /// Whether requests must carry a director criterion in this mode
    pub fn requires_director(&self) -> bool {
        matches!(self, RankingMode::Content)
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popularity" => Ok(RankingMode::Popularity),
            "content" => Ok(RankingMode::Content),
            other => Err(format!(
                "unknown ranking mode '{}', expected 'popularity' or 'content'",
                other
            )),
        }
    }
}

// =============================================================================
// Option categories
// =============================================================================

/// A filterable field whose distinct values can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionCategory {
    Genres,
    Year,
    Director,
}

impl OptionCategory {
    /// Name used in URLs and JSON response keys
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionCategory::Genres => "genres",
            OptionCategory::Year => "year",
            OptionCategory::Director => "director",
        }
    }

    /// Parse a category name exactly as clients send it
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "genres" => Some(OptionCategory::Genres),
            "year" => Some(OptionCategory::Year),
            "director" => Some(OptionCategory::Director),
            _ => None,
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered distinct values of one category.
///
/// Serializes as a bare JSON array of strings or of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValues {
    Text(Vec<String>),
    Years(Vec<Year>),
}

impl OptionValues {
    pub fn len(&self) -> usize {
        match self {
            OptionValues::Text(values) => values.len(),
            OptionValues::Years(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Distinct filterable values across the corpus, computed once
#[derive(Debug, Clone, Default)]
pub(crate) struct OptionSet {
    /// Distinct genre tokens, ascending
    pub(crate) genres: Vec<String>,
    /// Distinct non-empty directors, ascending
    pub(crate) directors: Vec<String>,
    /// Distinct positive years, newest first
    pub(crate) years: Vec<Year>,
}

// =============================================================================
// Corpus - the immutable in-memory dataset
// =============================================================================

/// Ordered sequence of movies, immutable once constructed.
///
/// A `Corpus` is built exactly once at startup and then shared behind an
/// `Arc` by every request handler. Nothing in its public API takes `&mut self`.
#[derive(Debug)]
pub struct Corpus {
    pub(crate) movies: Vec<Movie>,
    pub(crate) mode: RankingMode,
    pub(crate) has_directors: bool,
    pub(crate) option_set: OnceLock<OptionSet>,
}

impl Corpus {
    /// Wrap already-normalized movies into a corpus
    pub fn new(movies: Vec<Movie>, mode: RankingMode) -> Self {
        let has_directors = movies.iter().any(|m| !m.director.is_empty());
        Self {
            movies,
            mode,
            has_directors,
            option_set: OnceLock::new(),
        }
    }

    /// Get a movie by corpus position
    pub fn get(&self, index: MovieIndex) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// All movies in corpus order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Title of the movie at `index`, if any
    pub fn title(&self, index: MovieIndex) -> Option<&str> {
        self.movies.get(index).map(|m| m.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every corpus position, in order
    pub fn indices(&self) -> std::ops::Range<MovieIndex> {
        0..self.movies.len()
    }

    /// The ranking mode this corpus was loaded for
    pub fn mode(&self) -> RankingMode {
        self.mode
    }

    /// True when at least one movie has a director
    pub fn has_directors(&self) -> bool {
        self.has_directors
    }
}
