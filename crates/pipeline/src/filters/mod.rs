//! Filter implementations for the candidate pipeline.
//!
//! One filter per filterable field. String fields use whole-word matching,
//! so `"action"` matches `"action adventure"` but not `"interaction"`.

pub mod director;
pub mod genre;
pub mod year;

// Re-export for convenience
pub use director::DirectorFilter;
pub use genre::GenreFilter;
pub use year::YearFilter;

use data_loader::field_tokens;

/// True when `phrase` occurs in `field` as a contiguous run of whole tokens.
///
/// Both sides are expected to be lower-cased already.
pub fn contains_words(field: &str, phrase: &str) -> bool {
    let phrase: Vec<&str> = field_tokens(phrase).collect();
    if phrase.is_empty() {
        return false;
    }
    let tokens: Vec<&str> = field_tokens(field).collect();
    tokens
        .windows(phrase.len())
        .any(|window| window == phrase.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        assert!(contains_words("action", "action"));
        assert!(contains_words("action adventure", "action"));
        assert!(contains_words("crime action", "action"));
        assert!(!contains_words("interaction", "action"));
        assert!(!contains_words("action-packed", "action"));
    }

    #[test]
    fn test_phrase_match() {
        assert!(contains_words("christopher nolan", "nolan"));
        assert!(contains_words("christopher nolan", "christopher nolan"));
        assert!(!contains_words("christopher nolan", "nolan christopher"));
        assert!(!contains_words("nolan", "christopher nolan"));
    }

    #[test]
    fn test_empty_sides() {
        assert!(!contains_words("", "action"));
        assert!(!contains_words("action", ""));
    }
}
