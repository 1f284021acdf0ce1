use crate::core::import::{import_records, ImportSummary};
use crate::domain::model::{validate_details, Movie, MovieValidationError};
use crate::domain::ports::MovieRepository;
use crate::utils::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// In-memory movie catalog.
///
/// Records keep insertion order. Every stored record has passed
/// [`Movie::validate`]. Duplicate titles are not rejected: `find` and
/// `update` see the first match, `delete` removes all of them.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Appends `movie` if it satisfies every field rule.
    pub fn insert(&mut self, movie: Movie) -> std::result::Result<(), MovieValidationError> {
        movie.validate()?;
        tracing::debug!("Added movie '{}'", movie.title);
        self.movies.push(movie);
        Ok(())
    }

    /// Same as [`MovieRepository::import_from`] but also reports how many
    /// lines were skipped.
    pub fn import_with_summary<R: Read>(&mut self, reader: R) -> Result<ImportSummary> {
        import_records(reader, |movie| self.insert(movie))
    }
}

impl MovieRepository for MovieStore {
    fn create(
        &mut self,
        title: &str,
        genre: &str,
        year: i32,
        rating: f64,
        duration: i32,
        available: bool,
    ) -> bool {
        match self.insert(Movie::new(title, genre, year, rating, duration, available)) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Rejected movie '{}': {}", title, e);
                false
            }
        }
    }

    fn update(
        &mut self,
        title: &str,
        new_genre: &str,
        new_year: i32,
        new_rating: f64,
        new_duration: i32,
        new_available: bool,
    ) -> bool {
        let Some(movie) = self.movies.iter_mut().find(|m| m.has_title(title)) else {
            tracing::debug!("Update skipped, no movie titled '{}'", title);
            return false;
        };

        if let Err(e) = validate_details(new_genre, new_year, new_rating, new_duration) {
            tracing::debug!("Rejected update of '{}': {}", title, e);
            return false;
        }

        movie.genre = new_genre.to_string();
        movie.year = new_year;
        movie.rating = new_rating;
        movie.duration = new_duration;
        movie.available = new_available;
        tracing::debug!("Updated movie '{}'", movie.title);
        true
    }

    fn delete(&mut self, title: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| !m.has_title(title));
        let removed = before - self.movies.len();
        if removed > 0 {
            tracing::debug!("Deleted {} movie(s) titled '{}'", removed, title);
        }
        removed > 0
    }

    fn find(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.has_title(title))
    }

    fn list_all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn average_duration(&self) -> f64 {
        if self.movies.is_empty() {
            return 0.0;
        }
        let total: f64 = self.movies.iter().map(|m| f64::from(m.duration)).sum();
        total / self.movies.len() as f64
    }

    fn import_from<R: Read>(&mut self, reader: R) -> Result<usize> {
        self.import_with_summary(reader).map(|summary| summary.imported)
    }

    fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let unavailable = |source| CatalogError::SourceUnavailable {
            path: path.display().to_string(),
            source,
        };

        let mut reader = BufReader::new(File::open(path).map_err(unavailable)?);
        // Some paths open fine and only fail on read, directories among them.
        reader.fill_buf().map_err(unavailable)?;

        tracing::info!("Importing movies from {}", path.display());
        self.import_from(reader)
    }
}
