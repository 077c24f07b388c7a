//! # Data Loader Crate
//!
//! This crate loads the movie dataset into an immutable in-memory `Corpus`
//! and answers option queries over it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Corpus, RankingMode, OptionCategory)
//! - **parser**: Read the CSV file, rename columns, normalize cells
//! - **index**: Build the corpus and derive the option index
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Corpus, RankingMode};
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let corpus = Corpus::load(Path::new("datasets/movies.csv"), RankingMode::Popularity)?;
//!
//! // Query data
//! let first = corpus.get(0).unwrap();
//! let years = corpus.options("year")?;
//!
//! println!("{} has {} votes, {} years listed", first.title, first.votes, years.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::field_tokens;
pub use types::{
    // Type aliases
    MovieIndex,
    Year,
    // Core types
    Movie,
    Corpus,
    // Enums
    RankingMode,
    OptionCategory,
    OptionValues,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_creation() {
        // Test that we can create an empty Corpus
        let corpus = Corpus::new(Vec::new(), RankingMode::Popularity);

        assert_eq!(corpus.len(), 0);
        assert!(corpus.is_empty());
        assert!(!corpus.has_directors());
    }

    #[test]
    fn test_corpus_preserves_order() {
        let movies = vec![
            Movie {
                title: "First".to_string(),
                genres: "drama".to_string(),
                year: 1999,
                ..Default::default()
            },
            Movie {
                title: "Second".to_string(),
                genres: "comedy".to_string(),
                director: "someone".to_string(),
                year: 2001,
                ..Default::default()
            },
        ];

        let corpus = Corpus::new(movies, RankingMode::Content);

        assert_eq!(corpus.title(0), Some("First"));
        assert_eq!(corpus.title(1), Some("Second"));
        assert_eq!(corpus.indices(), 0..2);
        assert!(corpus.has_directors());
        assert_eq!(corpus.mode(), RankingMode::Content);
    }

    #[test]
    fn test_empty_queries() {
        let corpus = Corpus::new(Vec::new(), RankingMode::Popularity);

        // Querying non-existent positions returns None
        assert!(corpus.get(0).is_none());
        assert!(corpus.title(42).is_none());
    }

    #[test]
    fn test_ranking_mode_parsing() {
        assert_eq!("popularity".parse::<RankingMode>().unwrap(), RankingMode::Popularity);
        assert_eq!(" Content ".parse::<RankingMode>().unwrap(), RankingMode::Content);
        assert!("votes".parse::<RankingMode>().is_err());
        assert!(RankingMode::Content.requires_director());
        assert!(!RankingMode::Popularity.requires_director());
    }
}
