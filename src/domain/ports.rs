use crate::domain::model::{Catalog, Digest, Distance};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of city-to-city distances.
pub trait DistanceProvider: Send + Sync {
    fn distance(&self, from: &str, to: &str) -> Distance;
}

/// Decides, per lookup, whether a distance lookup went through.
pub trait FaultInjector: Send {
    fn lookup_succeeded(&mut self) -> bool;
}

pub trait DigestSink: Send + Sync {
    fn write_digest(&self, rendered: &str)
        -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> Option<&str>;
    fn customer_name(&self) -> Option<&str>;
    fn customer_city(&self) -> Option<&str>;
    fn top_k(&self) -> usize;
    fn failure_one_in(&self) -> u32;
    fn fault_seed(&self) -> Option<u64>;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Catalog>;
    async fn transform(&self, catalog: Catalog) -> Result<Digest>;
    async fn load(&self, digest: Digest) -> Result<String>;
}
