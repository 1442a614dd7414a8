use crate::domain::model::{DiagramResult, TerraformFile};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn scan_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn diagram_name(&self) -> &str;
    fn max_files(&self) -> Option<usize>;
    fn archive(&self) -> bool;
    fn include_edges(&self) -> bool;
}

/// One handler per recognized file kind; the scanner asks each handler
/// in order and the first match processes the file.
pub trait FileHandler: Send + Sync {
    fn can_handle(&self, path: &Path) -> bool;
    fn process(&self, path: &Path) -> Result<TerraformFile>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TerraformFile>>;
    async fn transform(&self, files: Vec<TerraformFile>) -> Result<DiagramResult>;
    async fn load(&self, result: DiagramResult) -> Result<String>;
}
