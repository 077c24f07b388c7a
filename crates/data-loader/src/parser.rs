//! Parser for the tabular movie dataset.
//!
//! The dataset is a CSV file with a header row. Source headers are renamed to
//! the canonical field names and every cell is normalized:
//! - text fields are trimmed and lower-cased (`title` keeps its casing)
//! - genre separators (`,`, `|`) become single spaces
//! - numeric fields that fail to parse become `0`
//!
//! Only missing files and missing columns are errors. Bad cell values never
//! are; they degrade to the sentinel instead.

use crate::error::{DataLoadError, Result};
use crate::types::{Movie, RankingMode, Year};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Source header → canonical field name
const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("Series_Title", "title"),
    ("Genre", "genres"),
    ("Released_Year", "year"),
    ("No_of_Votes", "votes"),
    ("Director", "director"),
    ("Overview", "overview"),
];

/// Canonical field name for a header cell, if it is one we use
fn canonical_name(header: &str) -> Option<&'static str> {
    let header = header.trim();
    COLUMN_ALIASES
        .iter()
        .find(|(source, canonical)| header == *source || header == *canonical)
        .map(|(_, canonical)| *canonical)
}

/// Source header for a canonical field, for error messages
fn source_header(canonical: &str) -> &'static str {
    COLUMN_ALIASES
        .iter()
        .find(|(_, c)| *c == canonical)
        .map(|(source, _)| *source)
        .unwrap_or("")
}

/// Where each canonical field lives in a record
#[derive(Debug, Default)]
struct ColumnMap {
    title: Option<usize>,
    genres: Option<usize>,
    year: Option<usize>,
    votes: Option<usize>,
    director: Option<usize>,
    overview: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut map = ColumnMap::default();
        for (position, header) in headers.iter().enumerate() {
            // First occurrence wins when a header is duplicated
            let slot = match canonical_name(header) {
                Some("title") => &mut map.title,
                Some("genres") => &mut map.genres,
                Some("year") => &mut map.year,
                Some("votes") => &mut map.votes,
                Some("director") => &mut map.director,
                Some("overview") => &mut map.overview,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(position);
            }
        }
        map
    }

    /// Check that every column the mode depends on is present
    fn require(&self, mode: RankingMode) -> Result<()> {
        let mut required = vec![
            ("title", self.title),
            ("genres", self.genres),
            ("year", self.year),
        ];
        match mode {
            RankingMode::Popularity => required.push(("votes", self.votes)),
            RankingMode::Content => {
                required.push(("overview", self.overview));
                // Content mode filters on director, so requests need the column
                required.push(("director", self.director));
            }
        }

        for (column, position) in required {
            if position.is_none() {
                return Err(DataLoadError::MissingColumn {
                    column,
                    source_header: source_header(column),
                    mode,
                });
            }
        }
        Ok(())
    }
}

/// Text of one cell, or `""` when the column or the cell is absent
fn cell(record: &StringRecord, column: Option<usize>) -> &str {
    column.and_then(|i| record.get(i)).unwrap_or("")
}

/// Parse the dataset at `path` into normalized movies, in file order.
///
/// Fails with `FileNotFound` when there is no file and with `MissingColumn`
/// when a column needed by `mode` is absent after renaming.
pub fn parse_movies(path: &Path, mode: RankingMode) -> Result<Vec<Movie>> {
    if !path.is_file() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let columns = ColumnMap::from_headers(reader.headers()?);
    columns.require(mode)?;

    let mut movies = Vec::new();
    for result in reader.records() {
        let record = result?;

        let movie = Movie {
            title: cell(&record, columns.title).trim().to_string(),
            genres: normalize_genres(cell(&record, columns.genres)),
            director: normalize_text(cell(&record, columns.director)),
            year: coerce_year(cell(&record, columns.year)),
            votes: coerce_votes(cell(&record, columns.votes)),
            overview: normalize_text(cell(&record, columns.overview)),
        };

        movies.push(movie);
    }
    Ok(movies)
}

// =============================================================================
// Normalization
// =============================================================================

/// Trim and lower-case free text
///
/// Example: "  Christopher Nolan " -> "christopher nolan"
pub fn normalize_text(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Lower-case a genre list and join its tokens with single spaces
///
/// Example: "Action, Adventure" -> "action adventure"
///          "Crime|Drama"       -> "crime drama"
pub fn normalize_genres(s: &str) -> String {
    let lowered = s.to_lowercase();
    field_tokens(&lowered).collect::<Vec<_>>().join(" ")
}

/// Split a normalized field into whole-word tokens.
///
/// Whitespace, commas and pipes separate tokens; everything else (hyphens,
/// apostrophes) stays inside the token, so `"sci-fi"` is one token.
pub fn field_tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == ',' || c == '|')
        .filter(|t| !t.is_empty())
}

/// Parse an integer cell, accepting float notation like "2000.0".
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(value) = s.parse::<i64>() {
        return Some(value);
    }
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() < i64::MAX as f64 => Some(value.trunc() as i64),
        _ => None,
    }
}

/// Release year, or `0` when missing, unparsable or not positive
///
/// Example: "1994" -> 1994, "PG" -> 0, "" -> 0
pub fn coerce_year(s: &str) -> Year {
    parse_integer(s)
        .filter(|&year| year > 0)
        .and_then(|year| Year::try_from(year).ok())
        .unwrap_or(0)
}

/// Vote count, or `0` when missing, unparsable or negative
///
/// Thousands separators are accepted: "1,234" -> 1234
pub fn coerce_votes(s: &str) -> u64 {
    let digits: String = s.chars().filter(|&c| c != ',').collect();
    parse_integer(&digits)
        .and_then(|votes| u64::try_from(votes).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_normalize_genres() {
        assert_eq!(normalize_genres("Action, Adventure"), "action adventure");
        assert_eq!(normalize_genres("Crime|Drama"), "crime drama");
        assert_eq!(normalize_genres("  Sci-Fi  "), "sci-fi");
        assert_eq!(normalize_genres(""), "");
    }

    #[test]
    fn test_coerce_year() {
        assert_eq!(coerce_year("1994"), 1994);
        assert_eq!(coerce_year(" 2000.0 "), 2000);
        assert_eq!(coerce_year("PG"), 0);
        assert_eq!(coerce_year(""), 0);
        assert_eq!(coerce_year("-5"), 0);
    }

    #[test]
    fn test_coerce_votes() {
        assert_eq!(coerce_votes("2343110"), 2343110);
        assert_eq!(coerce_votes("1,234"), 1234);
        assert_eq!(coerce_votes("lots"), 0);
        assert_eq!(coerce_votes("-3"), 0);
    }

    #[test]
    fn test_parse_popularity_dataset() {
        let file = write_csv(
            "Series_Title,Genre,Released_Year,No_of_Votes\n\
             The Dark Knight,\"Action, Crime, Drama\",2008,2303232\n\
             Apollo 13,\"Adventure, Drama\",PG,269197\n\
             Unrated,Drama,1999,\n",
        );

        let movies = parse_movies(file.path(), RankingMode::Popularity).unwrap();
        assert_eq!(movies.len(), 3);

        assert_eq!(movies[0].title, "The Dark Knight");
        assert_eq!(movies[0].genres, "action crime drama");
        assert_eq!(movies[0].year, 2008);
        assert_eq!(movies[0].votes, 2303232);
        assert_eq!(movies[0].director, "");

        // Invalid year degrades to the sentinel
        assert_eq!(movies[1].year, 0);
        // Missing votes degrade to zero
        assert_eq!(movies[2].votes, 0);
    }

    #[test]
    fn test_parse_content_dataset() {
        let file = write_csv(
            "Series_Title,Genre,Released_Year,Director,Overview\n\
             Inception,\"Action, Sci-Fi\",2010,Christopher Nolan,A thief who steals Corporate Secrets.\n\
             Short Row,Drama,2001\n",
        );

        let movies = parse_movies(file.path(), RankingMode::Content).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].director, "christopher nolan");
        assert_eq!(movies[0].overview, "a thief who steals corporate secrets.");
        // Cells missing from a short row are empty, not errors
        assert_eq!(movies[1].director, "");
        assert_eq!(movies[1].overview, "");
    }

    #[test]
    fn test_canonical_headers_accepted() {
        let file = write_csv("title,genres,year,votes\nA,Action,2000,10\n");
        let movies = parse_movies(file.path(), RankingMode::Popularity).unwrap();
        assert_eq!(movies[0].votes, 10);
    }

    #[test]
    fn test_missing_mode_column() {
        let file = write_csv("Series_Title,Genre,Released_Year\nA,Action,2000\n");

        let err = parse_movies(file.path(), RankingMode::Popularity).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { column: "votes", .. }
        ));

        let err = parse_movies(file.path(), RankingMode::Content).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { column: "overview", .. }
        ));

        let file = write_csv("Series_Title,Genre,Released_Year,Overview\nA,Action,2000,A plot.\n");
        let err = parse_movies(file.path(), RankingMode::Content).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { column: "director", source_header: "Director", .. }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_malformed_dataset() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Series_Title,Genre,Released_Year,No_of_Votes\nA\xff,Action,2000,10\n")
            .unwrap();
        file.flush().unwrap();

        let err = parse_movies(file.path(), RankingMode::Popularity).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));

        // The csv error is the source, not part of the message
        assert_eq!(err.to_string(), "Malformed dataset");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_movies(Path::new("does/not/exist.csv"), RankingMode::Popularity)
            .unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
