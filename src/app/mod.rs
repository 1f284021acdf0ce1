pub mod shell;

use crate::core::{ConfigProvider, MovieRepository};
use crate::utils::error::Result;

/// Imports every configured seed file into `repo`.
///
/// A file that cannot be opened is logged and skipped, unless the config
/// asks for strict seeding, in which case the error is returned.
pub fn seed_store<R: MovieRepository, C: ConfigProvider>(repo: &mut R, config: &C) -> Result<usize> {
    let mut total = 0;
    for path in config.seed_files() {
        match repo.import_file(path) {
            Ok(count) => {
                tracing::info!("Seeded {} movies from {}", count, path);
                total += count;
            }
            Err(e) if e.is_source_unavailable() && !config.strict_seed() => {
                tracing::warn!("Skipping seed file: {}", e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
