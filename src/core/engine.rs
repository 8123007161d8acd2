use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct DigestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DigestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load; returns where the digest went.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting digest run");

        // Extract
        let catalog = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} events for {} in {}",
            catalog.events.len(),
            catalog.customer.name,
            catalog.customer.city
        );

        // Transform
        let digest = self.pipeline.transform(catalog).await?;
        tracing::info!(
            "Ranked {} lines across {} passes",
            digest.line_count(),
            digest.sections.len()
        );

        // Load
        let destination = self.pipeline.load(digest).await?;
        tracing::info!("Digest written to {} in {:?}", destination, started.elapsed());

        Ok(destination)
    }
}
