use crate::core::document::DiagramDocument;
use crate::core::mappings::{create_diagram_edges, create_diagram_nodes};
use crate::core::parser::extract_resource_blocks;
use crate::core::render::DiagramRenderer;
use crate::core::scanner::FileScanner;
use crate::core::{ConfigProvider, DiagramResult, Pipeline, Storage, TerraformFile};
use crate::domain::model::FileSummary;
use crate::utils::error::{DiagramError, Result};
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

pub struct DiagramPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    scanner: FileScanner,
}

impl<S: Storage, C: ConfigProvider> DiagramPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            scanner: FileScanner::with_default_handlers(),
        }
    }

    // 依設定的格式產生輸出檔案 (檔名, 內容)
    fn render_outputs(&self, result: &DiagramResult) -> Result<Vec<(String, Vec<u8>)>> {
        let document = DiagramDocument::new(result.nodes.clone(), result.edges.clone());
        let name = self.config.diagram_name();
        let mut outputs = Vec::new();

        for format in self.config.output_formats() {
            match format.as_str() {
                "yaml" => {
                    outputs.push((format!("{}.yaml", name), document.to_yaml()?.into_bytes()));
                }
                "json" => {
                    outputs.push((format!("{}.json", name), document.to_json()?.into_bytes()));
                }
                "dot" => {
                    let dot = DiagramRenderer::new(document.clone()).generate("AWS Infrastructure");
                    outputs.push((format!("{}.dot", name), dot.into_bytes()));
                }
                "csv" => {
                    outputs.push(("inventory.csv".to_string(), inventory_csv(&result.inventory)?));
                }
                other => {
                    tracing::warn!("Skipping unsupported output format: {}", other);
                }
            }
        }

        Ok(outputs)
    }
}

fn inventory_csv(inventory: &[FileSummary]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for summary in inventory {
        writer.serialize(summary)?;
    }
    writer
        .into_inner()
        .map_err(|e| DiagramError::ProcessingError {
            message: format!("Failed to finalize inventory report: {}", e),
        })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DiagramPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<TerraformFile>> {
        let scan_dir = Path::new(self.config.scan_dir());
        if !scan_dir.is_dir() {
            return Err(DiagramError::ConfigError {
                message: format!("{} is not a directory", self.config.scan_dir()),
            });
        }

        tracing::debug!("Scanning directory: {}", scan_dir.display());
        let mut files = self.scanner.scan_directory(scan_dir)?;

        if let Some(max_files) = self.config.max_files() {
            if files.len() > max_files {
                tracing::warn!(
                    "Found {} files, truncating to configured maximum of {}",
                    files.len(),
                    max_files
                );
                files.truncate(max_files);
            }
        }

        if files.is_empty() {
            tracing::warn!("No Terraform files found in {}", scan_dir.display());
        }

        Ok(files)
    }

    async fn transform(&self, files: Vec<TerraformFile>) -> Result<DiagramResult> {
        let mut resources = Vec::new();
        let mut inventory = Vec::new();

        for file in &files {
            let blocks = extract_resource_blocks(&file.content);
            tracing::debug!(
                "{}: {} resource block(s)",
                file.path.display(),
                blocks.len()
            );

            inventory.push(FileSummary {
                path: file.path.display().to_string(),
                size: file.size,
                modified: file.modified,
                resource_count: blocks.len(),
            });
            resources.extend(blocks);
        }

        let nodes = create_diagram_nodes(&resources);
        let edges = if self.config.include_edges() {
            create_diagram_edges(&resources)
        } else {
            Vec::new()
        };

        Ok(DiagramResult {
            nodes,
            edges,
            resources,
            inventory,
        })
    }

    async fn load(&self, result: DiagramResult) -> Result<String> {
        let outputs = self.render_outputs(&result)?;
        if outputs.is_empty() {
            return Err(DiagramError::ConfigError {
                message: "No output formats configured".to_string(),
            });
        }

        if self.config.archive() {
            let archive_name = format!("{}.zip", self.config.diagram_name());
            tracing::debug!("Creating ZIP archive with {} file(s)", outputs.len());

            // 建立ZIP檔案
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                for (filename, data) in &outputs {
                    zip.start_file::<_, ()>(filename.as_str(), FileOptions::default())?;
                    zip.write_all(data)?;
                }

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            self.storage.write_file(&archive_name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for (filename, data) in &outputs {
            tracing::debug!("Writing {} ({} bytes)", filename, data.len());
            self.storage.write_file(filename, data).await?;
        }

        // 主要輸出優先回報 YAML 圖表
        let primary = outputs
            .iter()
            .find(|(filename, _)| filename.ends_with(".yaml"))
            .unwrap_or(&outputs[0]);

        Ok(format!("{}/{}", self.config.output_path(), primary.0))
    }
}
