use crate::config::catalog_file::CatalogFile;
use crate::core::cache::DistanceCache;
use crate::core::distance::{effective_price, AlphabeticalDistance};
use crate::core::faults::RandomFaults;
use crate::core::ranking::{by_price, nearest, nearest_cached, nearest_failsafe, same_city};
use crate::core::report::{digest_line, render, section};
use crate::core::{
    Catalog, ConfigProvider, DigestSink, DistanceProvider, FaultInjector, Pipeline,
};
use crate::domain::model::{Digest, Pass};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::Utc;
use std::sync::Mutex;

pub struct DigestPipeline<S, C, D = AlphabeticalDistance, F = RandomFaults> {
    sink: S,
    config: C,
    provider: D,
    faults: Mutex<F>,
}

impl<S: DigestSink, C: ConfigProvider> DigestPipeline<S, C> {
    /// Pipeline with the alphabetical distance and random lookup failures
    /// configured by `config`.
    pub fn new(sink: S, config: C) -> Self {
        let faults = match config.fault_seed() {
            Some(seed) => RandomFaults::new(config.failure_one_in(), seed),
            None => RandomFaults::from_clock(config.failure_one_in()),
        };
        Self::with_parts(sink, config, AlphabeticalDistance, faults)
    }
}

impl<S, C, D, F> DigestPipeline<S, C, D, F>
where
    S: DigestSink,
    C: ConfigProvider,
    D: DistanceProvider,
    F: FaultInjector,
{
    pub fn with_parts(sink: S, config: C, provider: D, faults: F) -> Self {
        Self {
            sink,
            config,
            provider,
            faults: Mutex::new(faults),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

/// Runs every pass over `catalog`, in digest order.
///
/// One cache serves the whole run, so each distinct city reaches `provider`
/// at most once outside the uncached pass.
pub fn run_passes<D, F>(catalog: &Catalog, k: usize, provider: &D, faults: &mut F) -> Digest
where
    D: DistanceProvider + ?Sized,
    F: FaultInjector + ?Sized,
{
    let customer = &catalog.customer;
    let events = &catalog.events;
    let mut cache = DistanceCache::new(customer.city.as_str());

    let local = same_city(events, customer)
        .into_iter()
        .map(|event| {
            let distance = cache.distance_to(&event.city, provider);
            digest_line(customer, event, Some(distance), None)
        })
        .collect();

    let uncached = nearest(events, customer, k, provider)
        .into_iter()
        .map(|r| digest_line(customer, r.event, Some(r.key), None))
        .collect();

    let cached = nearest_cached(events, k, provider, &mut cache)
        .into_iter()
        .map(|r| digest_line(customer, r.event, Some(r.key), None))
        .collect();

    let failsafe = nearest_failsafe(events, k, provider, &mut cache, faults)
        .into_iter()
        .map(|r| digest_line(customer, r.event, r.key.distance(), None))
        .collect();

    let priced = by_price(events)
        .into_iter()
        .map(|r| {
            let distance = cache.distance_to(&r.event.city, provider);
            digest_line(customer, r.event, Some(distance), Some(effective_price(r.event)))
        })
        .collect();

    tracing::debug!(
        "Distance cache for {} holds {} cities after {} provider lookups",
        cache.origin(),
        cache.len(),
        cache.misses()
    );

    Digest {
        customer: customer.clone(),
        generated_at: Utc::now(),
        sections: vec![
            section(Pass::SameCity, local),
            section(Pass::Nearest, uncached),
            section(Pass::NearestCached, cached),
            section(Pass::NearestFailsafe, failsafe),
            section(Pass::ByPrice, priced),
        ],
    }
}

#[async_trait::async_trait]
impl<S, C, D, F> Pipeline for DigestPipeline<S, C, D, F>
where
    S: DigestSink,
    C: ConfigProvider,
    D: DistanceProvider,
    F: FaultInjector,
{
    async fn extract(&self) -> Result<Catalog> {
        let mut catalog = match self.config.catalog_path() {
            Some(path) => {
                tracing::debug!("Loading catalog from: {}", path);
                CatalogFile::from_file(path)?.into_catalog(Catalog::sample().customer)
            }
            None => {
                tracing::debug!("No catalog file given, using the built-in sample");
                Catalog::sample()
            }
        };

        if let Some(name) = self.config.customer_name() {
            catalog.customer.name = name.to_string();
        }
        if let Some(city) = self.config.customer_city() {
            catalog.customer.city = city.to_string();
        }

        catalog.validate()?;
        Ok(catalog)
    }

    async fn transform(&self, catalog: Catalog) -> Result<Digest> {
        let mut faults = self
            .faults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(run_passes(&catalog, self.config.top_k(), &self.provider, &mut *faults))
    }

    async fn load(&self, digest: Digest) -> Result<String> {
        let rendered = render(&digest, self.config.output_format())?;
        tracing::debug!("Writing digest ({} bytes)", rendered.len());
        self.sink.write_digest(&rendered).await
    }
}
