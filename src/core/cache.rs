use crate::core::{DistanceProvider, Event};
use crate::domain::model::Distance;
use std::collections::HashMap;

/// Distances from one origin city, filled on first lookup and kept for the
/// lifetime of the cache.
#[derive(Debug, Clone)]
pub struct DistanceCache {
    origin: String,
    distances: HashMap<String, Distance>,
    misses: usize,
}

impl DistanceCache {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            distances: HashMap::new(),
            misses: 0,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn get(&self, city: &str) -> Option<Distance> {
        self.distances.get(city).copied()
    }

    pub fn distance_to<D: DistanceProvider + ?Sized>(&mut self, city: &str, provider: &D) -> Distance {
        if let Some(distance) = self.get(city) {
            return distance;
        }

        let distance = provider.distance(&self.origin, city);
        tracing::debug!("Cached distance {} -> {} = {}", self.origin, city, distance);
        self.distances.insert(city.to_string(), distance);
        self.misses += 1;
        distance
    }

    /// Makes sure every city in `events` has an entry.
    pub fn warm<D: DistanceProvider + ?Sized>(&mut self, events: &[Event], provider: &D) {
        for event in events {
            self.distance_to(&event.city, provider);
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of lookups that had to go to the provider.
    pub fn misses(&self) -> usize {
        self.misses
    }
}
