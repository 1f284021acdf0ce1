use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const MIN_YEAR: i32 = 1800;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// A single catalog entry.
///
/// `title` is the record's identity and is compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub rating: f64,
    /// Minutes.
    pub duration: i32,
    pub available: bool,
}

/// The field rule a candidate record broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MovieValidationError {
    #[error("title cannot be empty or whitespace-only")]
    BlankTitle,

    #[error("genre cannot be empty or whitespace-only")]
    BlankGenre,

    #[error("year {0} is earlier than 1800")]
    YearTooEarly(i32),

    #[error("rating {0} is outside 0..=10")]
    RatingOutOfRange(f64),

    #[error("duration {0} must be greater than zero")]
    NonPositiveDuration(i32),
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        rating: f64,
        duration: i32,
        available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
            rating,
            duration,
            available,
        }
    }

    /// Checks every field rule, title included.
    pub fn validate(&self) -> Result<(), MovieValidationError> {
        if self.title.trim().is_empty() {
            return Err(MovieValidationError::BlankTitle);
        }
        validate_details(&self.genre, self.year, self.rating, self.duration)
    }

    /// True when `other` names this record, ignoring case.
    pub fn has_title(&self, other: &str) -> bool {
        titles_match(&self.title, other)
    }
}

/// Rules for the mutable part of a record. Updates never touch the title,
/// so they are checked with this alone.
pub fn validate_details(
    genre: &str,
    year: i32,
    rating: f64,
    duration: i32,
) -> Result<(), MovieValidationError> {
    if genre.trim().is_empty() {
        return Err(MovieValidationError::BlankGenre);
    }
    if year < MIN_YEAR {
        return Err(MovieValidationError::YearTooEarly(year));
    }
    // NaN fails `contains`, so it is rejected here as well.
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(MovieValidationError::RatingOutOfRange(rating));
    }
    if duration <= 0 {
        return Err(MovieValidationError::NonPositiveDuration(duration));
    }
    Ok(())
}

pub fn titles_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | {} | rating {:.1} | {} min | {}",
            self.title,
            self.year,
            self.genre,
            self.rating,
            self.duration,
            if self.available {
                "available"
            } else {
                "unavailable"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Movie {
        Movie::new("Dune", "Sci-Fi", 1984, 8.0, 137, true)
    }

    #[test]
    fn valid_movie_passes() {
        assert_eq!(dune().validate(), Ok(()));
    }

    #[test]
    fn each_rule_reports_its_own_error() {
        let mut m = dune();
        m.title = "   ".to_string();
        assert_eq!(m.validate(), Err(MovieValidationError::BlankTitle));

        assert_eq!(
            validate_details("\t", 1984, 8.0, 137),
            Err(MovieValidationError::BlankGenre)
        );
        assert_eq!(
            validate_details("Drama", 1799, 8.0, 137),
            Err(MovieValidationError::YearTooEarly(1799))
        );
        assert_eq!(
            validate_details("Drama", 1984, 10.5, 137),
            Err(MovieValidationError::RatingOutOfRange(10.5))
        );
        assert_eq!(
            validate_details("Drama", 1984, 8.0, 0),
            Err(MovieValidationError::NonPositiveDuration(0))
        );
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(validate_details("Drama", 1800, 0.0, 1).is_ok());
        assert!(validate_details("Drama", 1800, 10.0, 1).is_ok());
        assert!(validate_details("Drama", 1800, -0.1, 1).is_err());
    }

    #[test]
    fn nan_rating_is_rejected() {
        assert!(validate_details("Drama", 1984, f64::NAN, 90).is_err());
    }

    #[test]
    fn title_match_ignores_case() {
        let m = dune();
        assert!(m.has_title("dune"));
        assert!(m.has_title("DUNE"));
        assert!(!m.has_title("Dune 2"));
        assert!(!m.has_title(" dune"));
        assert!(titles_match("ÉCLAIR", "éclair"));
    }

    #[test]
    fn display_is_one_line() {
        assert_eq!(
            dune().to_string(),
            "Dune (1984) | Sci-Fi | rating 8.0 | 137 min | available"
        );
    }
}
