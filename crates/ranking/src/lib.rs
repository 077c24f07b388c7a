//! # Ranking Crate
//!
//! This crate orders filtered candidates into recommendation lists.
//!
//! ## Components
//!
//! ### Popularity Ranker
//! Most-voted first:
//! - Stable on ties, so equal vote counts keep their filter order
//!
//! ### Content Ranker
//! "More like this" over movie synopses:
//! - TF-IDF vector space fit once over the whole corpus
//! - Seeded by the first filter match
//! - Cosine similarity against every other movie in one matrix product
//!
//! ## Example Usage
//!
//! ```ignore
//! use ranking::{ContentRanker, PopularityRanker, Ranker};
//! use std::sync::Arc;
//!
//! let popularity = PopularityRanker::new(corpus.clone());
//! let top_voted = popularity.rank(&candidates);
//!
//! // Fitting the vector space is the expensive part; do it once at startup
//! let content = ContentRanker::fit(corpus.clone());
//! let similar = content.rank(&candidates);
//! ```

// Public modules
pub mod traits;
pub mod tokenizer;
pub mod vector_space;
pub mod popularity;
pub mod content;

// Re-export commonly used types
pub use traits::Ranker;
pub use vector_space::{VectorSpace, cosine_similarity};
pub use popularity::PopularityRanker;
pub use content::ContentRanker;

/// Number of recommendations returned unless configured otherwise
pub const DEFAULT_LIMIT: usize = 5;
