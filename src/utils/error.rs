use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Import source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading import source: {0}")]
    SourceRead(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, CatalogError::SourceUnavailable { .. })
    }

    /// Short message meant for the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::SourceUnavailable { path, .. } => format!("File not found: {}", path),
            CatalogError::SourceRead(_) => "Error reading file.".to_string(),
            CatalogError::IoError(e) => format!("I/O failure: {}", e),
            CatalogError::SerializationError(_) => "Could not render movies as JSON.".to_string(),
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::SourceUnavailable { .. } => {
                "Check that the path exists and is readable"
            }
            CatalogError::SourceRead(_) | CatalogError::IoError(_) => {
                "Retry the operation or check the file system"
            }
            CatalogError::SerializationError(_) => "Switch the display format to text",
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and start again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
