use crate::config::toml_config::CatalogConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "movie-store")]
#[command(about = "An in-memory movie catalog with a small command shell")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Files imported before the shell starts
    #[arg(short, long, value_delimiter = ',')]
    pub import: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Render list and find output as JSON")]
    pub json: bool,

    #[arg(long, help = "Abort when a seed file cannot be opened")]
    pub strict: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults) and lays the command-line flags
    /// over it. Flags only ever switch options on; seed files are appended.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        config.import.files.extend(self.import.iter().cloned());
        if self.strict {
            config.import.strict = Some(true);
        }
        if self.json {
            config.display.format = Some("json".to_string());
        }
        if self.verbose {
            config.logging.verbose = Some(true);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_flags() {
        let cli = CliConfig::parse_from([
            "movie-store",
            "--import",
            "a.csv,b.csv",
            "-i",
            "c.csv",
            "--json",
            "-v",
        ]);
        assert_eq!(cli.import, vec!["a.csv", "b.csv", "c.csv"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(!cli.strict);
        assert!(cli.config.is_none());
    }

    #[test]
    fn flags_override_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[import]\nfiles = [\"seed.csv\"]\n[display]\nformat = \"text\"\nprecision = 3"
        )
        .unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_str().unwrap().to_string()),
            import: vec!["extra.csv".to_string()],
            json: true,
            strict: true,
            ..Default::default()
        };

        let config = cli.resolve().unwrap();
        assert_eq!(config.seed_files(), ["seed.csv", "extra.csv"]);
        assert!(config.json_output());
        assert!(config.strict_seed());
        assert_eq!(config.precision(), 3);
        assert!(!config.verbose());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = CliConfig {
            config: Some("/definitely/not/here.toml".to_string()),
            ..Default::default()
        };
        assert!(cli.resolve().is_err());
    }
}
