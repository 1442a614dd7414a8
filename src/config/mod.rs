pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_allowed_values, validate_directory, validate_non_empty_string, validate_path,
    validate_positive_number, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_FORMATS: &[&str] = &["yaml", "json", "dot", "csv"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "tf-diagram"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Scan Terraform files and generate an infrastructure diagram")
)]
pub struct CliConfig {
    /// Directory to scan for Terraform files
    pub directory: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', default_value = "yaml")
    )]
    pub formats: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "infrastructure"))]
    pub diagram_name: String,

    #[cfg_attr(feature = "cli", arg(long))]
    pub max_files: Option<usize>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Bundle outputs into a single ZIP archive")
    )]
    pub archive: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable system monitoring"))]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn scan_dir(&self) -> &str {
        &self.directory
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn diagram_name(&self) -> &str {
        &self.diagram_name
    }

    fn max_files(&self) -> Option<usize> {
        self.max_files
    }

    fn archive(&self) -> bool {
        self.archive
    }

    fn include_edges(&self) -> bool {
        true
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_directory("directory", &self.directory)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("diagram_name", &self.diagram_name)?;
        validate_allowed_values("formats", &self.formats, SUPPORTED_FORMATS)?;

        if let Some(max_files) = self.max_files {
            validate_positive_number("max_files", max_files, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(directory: &str) -> CliConfig {
        CliConfig {
            directory: directory.to_string(),
            output_path: "./output".to_string(),
            formats: vec!["yaml".to_string()],
            diagram_name: "infrastructure".to_string(),
            max_files: None,
            archive: false,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_validate_accepts_existing_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = base_config(temp_dir.path().to_str().unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let config = base_config("/no/such/dir/at/all");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = base_config(temp_dir.path().to_str().unwrap());
        config.formats = vec!["svg".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_max_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = base_config(temp_dir.path().to_str().unwrap());
        config.max_files = Some(0);
        assert!(config.validate().is_err());
    }
}
