//! The ranking passes over an event catalog.
//!
//! Every pass is total: an empty catalog or a city with no events gives an
//! empty result, and a failed distance lookup only demotes its event.
//! Sorting is stable throughout, so ties keep catalog order.

use crate::core::cache::DistanceCache;
use crate::core::distance::effective_price;
use crate::core::{Customer, DistanceProvider, Event, FaultInjector};
use crate::domain::model::{Distance, Lookup, Ranked};
use std::collections::HashMap;

pub const DEFAULT_TOP_K: usize = 5;

/// Events keyed by city, each group in catalog order.
pub fn group_by_city(events: &[Event]) -> HashMap<&str, Vec<&Event>> {
    let mut groups: HashMap<&str, Vec<&Event>> = HashMap::new();
    for event in events {
        groups.entry(event.city.as_str()).or_default().push(event);
    }
    groups
}

pub fn same_city<'a>(events: &'a [Event], customer: &Customer) -> Vec<&'a Event> {
    group_by_city(events)
        .remove(customer.city.as_str())
        .unwrap_or_default()
}

fn take_lowest<K: Ord + Copy>(mut ranked: Vec<Ranked<'_, K>>, k: usize) -> Vec<Ranked<'_, K>> {
    ranked.sort_by_key(|r| r.key);
    ranked.truncate(k);
    ranked
}

/// Nearest `k` events, asking the provider once per event.
pub fn nearest<'a, D: DistanceProvider + ?Sized>(
    events: &'a [Event],
    customer: &Customer,
    k: usize,
    provider: &D,
) -> Vec<Ranked<'a, Distance>> {
    let ranked = events
        .iter()
        .map(|event| Ranked {
            event,
            key: provider.distance(&customer.city, &event.city),
        })
        .collect();
    take_lowest(ranked, k)
}

/// Nearest `k` events, asking the provider at most once per distinct city.
pub fn nearest_cached<'a, D: DistanceProvider + ?Sized>(
    events: &'a [Event],
    k: usize,
    provider: &D,
    cache: &mut DistanceCache,
) -> Vec<Ranked<'a, Distance>> {
    cache.warm(events, provider);
    let ranked = events
        .iter()
        .map(|event| Ranked {
            event,
            key: cache.distance_to(&event.city, provider),
        })
        .collect();
    take_lowest(ranked, k)
}

/// Nearest `k` events when any single lookup may fail.
///
/// Each event gets its own trial from `faults`. A failed trial ranks the
/// event as [`Lookup::Failed`], after every event whose lookup went through.
pub fn nearest_failsafe<'a, D, F>(
    events: &'a [Event],
    k: usize,
    provider: &D,
    cache: &mut DistanceCache,
    faults: &mut F,
) -> Vec<Ranked<'a, Lookup>>
where
    D: DistanceProvider + ?Sized,
    F: FaultInjector + ?Sized,
{
    cache.warm(events, provider);
    let mut failed = 0;
    let ranked = events
        .iter()
        .map(|event| {
            let key = if faults.lookup_succeeded() {
                Lookup::Found(cache.distance_to(&event.city, provider))
            } else {
                failed += 1;
                tracing::debug!("Distance lookup for {} in {} failed", event.name, event.city);
                Lookup::Failed
            };
            Ranked { event, key }
        })
        .collect();

    if failed > 0 {
        tracing::warn!("{} of {} distance lookups failed, demoting those events", failed, events.len());
    }
    take_lowest(ranked, k)
}

/// All events, cheapest first.
pub fn by_price(events: &[Event]) -> Vec<Ranked<'_, u32>> {
    let ranked = events
        .iter()
        .map(|event| Ranked {
            event,
            key: effective_price(event),
        })
        .collect();
    take_lowest(ranked, events.len())
}
