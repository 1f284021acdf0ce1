use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATALOG_NAME: &str = "Movie catalog";
pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 6;
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_CATALOG_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub files: Vec<String>,
    /// Abort start-up when a seed file cannot be opened.
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;

        for file in &self.import.files {
            validate_path("import.files", file)?;
        }

        if let Some(format) = &self.display.format {
            validate_one_of("display.format", format, &OUTPUT_FORMATS)?;
        }

        if let Some(precision) = self.display.precision {
            validate_range("display.precision", precision, 0, MAX_PRECISION)?;
        }

        Ok(())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for CatalogConfig {
    fn catalog_name(&self) -> &str {
        &self.catalog.name
    }

    fn seed_files(&self) -> &[String] {
        &self.import.files
    }

    fn strict_seed(&self) -> bool {
        self.import.strict.unwrap_or(false)
    }

    fn json_output(&self) -> bool {
        self.display.format.as_deref() == Some("json")
    }

    fn precision(&self) -> usize {
        self.display.precision.unwrap_or(DEFAULT_PRECISION)
    }

    fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}
