use crate::domain::model::Movie;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

/// Contract the presentation layer drives.
///
/// Mutations report success as a plain `bool`; the caller cannot tell a
/// validation failure from a missing title. Only the import entry points
/// return errors, and only when the source itself cannot be read.
pub trait MovieRepository {
    fn create(
        &mut self,
        title: &str,
        genre: &str,
        year: i32,
        rating: f64,
        duration: i32,
        available: bool,
    ) -> bool;

    fn update(
        &mut self,
        title: &str,
        new_genre: &str,
        new_year: i32,
        new_rating: f64,
        new_duration: i32,
        new_available: bool,
    ) -> bool;

    fn delete(&mut self, title: &str) -> bool;

    fn find(&self, title: &str) -> Option<&Movie>;

    fn list_all(&self) -> Vec<Movie>;

    fn average_duration(&self) -> f64;

    fn import_from<R: Read>(&mut self, reader: R) -> Result<usize>;

    fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize>;
}

/// Resolved settings the app layer reads, whatever their origin.
pub trait ConfigProvider {
    fn catalog_name(&self) -> &str;
    fn seed_files(&self) -> &[String];
    fn strict_seed(&self) -> bool;
    fn json_output(&self) -> bool;
    fn precision(&self) -> usize;
    fn verbose(&self) -> bool;
}
