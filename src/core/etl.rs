use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct MappingEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MappingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting mapping job");

        tracing::info!("Extracting source records...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        tracing::info!("Mapping records...");
        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Mapped {} {} records",
            result.records.len(),
            result.source_kind
        );

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!(
            "Output saved to: {} ({} ms)",
            output_path,
            started.elapsed().as_millis()
        );

        Ok(output_path)
    }
}
