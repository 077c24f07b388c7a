//! Request criteria and their validation.
//!
//! `FilterCriteria` is what a caller supplies; any field may be missing.
//! `ValidCriteria` is what filters consume. The only way to get one is
//! through `FilterCriteria::validate`, so filters never see an incomplete
//! request.

use crate::error::{FilterError, Result};
use data_loader::{Year, field_tokens};

/// Raw filter criteria as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub year: Option<Year>,
    pub director: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Check required fields and normalize them for matching.
    ///
    /// `genre` and `year` are always required; `director` only when
    /// `require_director` is set. When it is not, a supplied director is
    /// dropped rather than matched.
    pub fn validate(&self, require_director: bool) -> Result<ValidCriteria> {
        if self.year.is_some_and(|year| year < 0) {
            return Err(FilterError::Validation(
                "year must be a positive integer".to_string(),
            ));
        }

        let genre = self.genre.as_deref().and_then(normalize_phrase);
        // 0 is the "unknown year" sentinel and never a real filter value
        let year = self.year.filter(|&year| year > 0);
        let director = self.director.as_deref().and_then(normalize_phrase);

        let mut missing = Vec::new();
        if genre.is_none() {
            missing.push("genres");
        }
        if year.is_none() {
            missing.push("year");
        }
        if require_director && director.is_none() {
            missing.push("director");
        }

        match (genre, year) {
            (Some(genre), Some(year)) if missing.is_empty() => Ok(ValidCriteria {
                genre,
                year,
                director: if require_director { director } else { None },
            }),
            _ => Err(FilterError::Validation(format!(
                "missing required parameter(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Lower-case a criterion and collapse it to single-spaced tokens.
/// Blank input counts as missing.
fn normalize_phrase(s: &str) -> Option<String> {
    let lowered = s.to_lowercase();
    let phrase = field_tokens(&lowered).collect::<Vec<_>>().join(" ");
    if phrase.is_empty() { None } else { Some(phrase) }
}

/// Criteria that passed validation, normalized for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCriteria {
    pub genre: String,
    pub year: Year,
    /// Present only when the deployment filters by director
    pub director: Option<String>,
}

impl ValidCriteria {
    /// The no-match error naming these criteria
    pub fn no_match_error(&self) -> FilterError {
        FilterError::no_match(&self.genre, self.year, self.director.as_deref())
    }
}
