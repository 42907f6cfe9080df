use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct VizEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> VizEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<PathBuf> {
        tracing::info!("Starting chart pipeline...");

        // Extract
        tracing::info!("Extracting data...");
        let rows = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows", rows.len());

        // Transform
        tracing::info!("Transforming data...");
        let data = self.pipeline.transform(rows)?;
        tracing::info!(
            "Prepared {} Mexico and {} Argentina observations",
            data.mexico.series.len(),
            data.argentina.series.len()
        );

        // Load
        tracing::info!("Rendering charts...");
        let output_path = self.pipeline.load(data)?;
        tracing::info!("Output saved to: {}", output_path.display());

        Ok(output_path)
    }
}
