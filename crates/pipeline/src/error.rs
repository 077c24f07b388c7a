//! Error types for the filter engine.
//!
//! Both variants are caller-facing: `Validation` means the request was
//! incomplete, `NoMatch` means it was valid but nothing in the corpus fits.

use data_loader::Year;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Required criteria are missing or malformed; raised before filtering runs
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The criteria were valid but no movie satisfies all of them
    #[error("No movies match the selected filters ({summary})")]
    NoMatch { summary: String },
}

impl FilterError {
    pub(crate) fn no_match(genre: &str, year: Year, director: Option<&str>) -> Self {
        let summary = match director {
            Some(director) => format!("genre '{}', year {}, director '{}'", genre, year, director),
            None => format!("genre '{}', year {}", genre, year),
        };
        FilterError::NoMatch { summary }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
