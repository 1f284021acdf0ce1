pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{seed_store, shell::Shell};
pub use config::CatalogConfig;
pub use crate::core::{import::ImportSummary, store::MovieStore};
pub use domain::model::{Movie, MovieValidationError};
pub use domain::ports::{ConfigProvider, MovieRepository};
pub use utils::error::{CatalogError, Result};
