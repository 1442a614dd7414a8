use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting diagram pipeline");

        tracing::info!("Scanning for Terraform files...");
        let files = self.pipeline.extract().await?;
        tracing::info!("Found {} file(s)", files.len());
        self.monitor.log_stats("extract");

        tracing::info!("Building diagram graph...");
        let result = self.pipeline.transform(files).await?;
        tracing::info!(
            "Mapped {} resource(s) into {} node(s) and {} edge(s)",
            result.resources.len(),
            result.nodes.len(),
            result.edges.len()
        );
        self.monitor.log_stats("transform");

        tracing::info!("Writing diagram outputs...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
