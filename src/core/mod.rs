pub mod import;
pub mod store;

pub use crate::domain::model::Movie;
pub use crate::domain::ports::{ConfigProvider, MovieRepository};
pub use crate::utils::error::Result;
