pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{FileSink, OutputSink, StdoutSink};
pub use core::{engine::DigestEngine, pipeline::DigestPipeline};
pub use domain::model::{Catalog, Customer, Digest, Event};
pub use utils::error::{DigestError, Result};
