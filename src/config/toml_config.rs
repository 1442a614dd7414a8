use crate::config::SUPPORTED_FORMATS;
use crate::core::ConfigProvider;
use crate::utils::error::{DiagramError, Result};
use crate::utils::validation::{
    validate_allowed_values, validate_non_empty_string, validate_path, validate_positive_number,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub extract: ExtractConfig,
    pub transform: TransformConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub root: String,
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    pub include_edges: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub diagram_name: Option<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DiagramError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DiagramError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCAN_ROOT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_path("source.root", &self.source.root)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_allowed_values(
            "load.output_formats",
            &self.load.output_formats,
            SUPPORTED_FORMATS,
        )?;

        if let Some(extensions) = &self.source.extensions {
            validate_allowed_values("source.extensions", extensions, &["tf", "tfvars"])?;
        }

        if let Some(max_files) = self.extract.max_files {
            validate_positive_number("extract.max_files", max_files, 1)?;
        }

        Ok(())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn compression_enabled(&self) -> bool {
        self.load
            .compression
            .as_ref()
            .map(|c| c.enabled)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn scan_dir(&self) -> &str {
        &self.source.root
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn diagram_name(&self) -> &str {
        self.load.diagram_name.as_deref().unwrap_or("infrastructure")
    }

    fn max_files(&self) -> Option<usize> {
        self.extract.max_files
    }

    fn archive(&self) -> bool {
        self.compression_enabled()
    }

    fn include_edges(&self) -> bool {
        self.transform.include_edges.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "infra-diagram"
description = "Terraform diagram pipeline"
version = "1.0.0"

[source]
type = "directory"
root = "./infra"

[extract]
max_files = 100

[transform]
include_edges = true

[load]
output_path = "./diagram-output"
output_formats = ["yaml", "dot"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "infra-diagram");
        assert_eq!(config.scan_dir(), "./infra");
        assert_eq!(config.max_files(), Some(100));
        assert_eq!(config.diagram_name(), "infrastructure");
        assert!(config.include_edges());
        assert!(!config.archive());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SCAN_ROOT", "/srv/terraform");

        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
type = "directory"
root = "${TEST_SCAN_ROOT}"

[extract]

[transform]

[load]
output_path = "./output"
output_formats = ["yaml"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.root, "/srv/terraform");

        std::env::remove_var("TEST_SCAN_ROOT");
    }

    #[test]
    fn test_config_validation_rejects_bad_format() {
        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
type = "directory"
root = "./infra"

[extract]

[transform]

[load]
output_path = "./output"
output_formats = ["svg"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"
description = "File test"
version = "1.0"

[source]
type = "directory"
root = "./infra"

[extract]

[transform]

[load]
output_path = "./output"
output_formats = ["yaml"]
diagram_name = "network"

[load.compression]
enabled = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
        assert_eq!(config.diagram_name(), "network");
        assert!(config.archive());
    }
}
