pub mod cache;
pub mod distance;
pub mod engine;
pub mod faults;
pub mod pipeline;
pub mod ranking;
pub mod report;

pub use crate::domain::model::{Catalog, Customer, Digest, Event};
pub use crate::domain::ports::{
    ConfigProvider, DigestSink, DistanceProvider, FaultInjector, OutputFormat, Pipeline,
};
pub use crate::utils::error::Result;
