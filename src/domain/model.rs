use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Distance = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

impl Event {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            price: None,
        }
    }

    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub city: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub customer: Customer,
    pub events: Vec<Event>,
}

impl Catalog {
    /// The built-in catalog used when no catalog file is given.
    pub fn sample() -> Self {
        Self {
            customer: Customer::new("Mr. Fake", "New York"),
            events: vec![
                Event::new("Phantom of the Opera", "New York").with_price(1),
                Event::new("Metallica", "Los Angeles").with_price(6),
                Event::new("Metallica", "New York").with_price(7),
                Event::new("Metallica", "Boston").with_price(9),
                Event::new("LadyGaGa", "New York").with_price(8),
                Event::new("LadyGaGa", "Boston").with_price(5),
                Event::new("LadyGaGa", "Chicago").with_price(3),
                Event::new("LadyGaGa", "San Francisco").with_price(2),
                Event::new("LadyGaGa", "Washington").with_price(5),
            ],
        }
    }
}

/// Outcome of a distance lookup that is allowed to fail.
///
/// Variant order matters: the derived `Ord` places every `Found` before
/// `Failed`, so a failed lookup always ranks last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lookup {
    Found(Distance),
    Failed,
}

impl Lookup {
    pub fn distance(self) -> Option<Distance> {
        match self {
            Lookup::Found(distance) => Some(distance),
            Lookup::Failed => None,
        }
    }

    pub fn is_failed(self) -> bool {
        matches!(self, Lookup::Failed)
    }
}

/// An event paired with the value it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a, K> {
    pub event: &'a Event,
    pub key: K,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    SameCity,
    Nearest,
    NearestCached,
    NearestFailsafe,
    ByPrice,
}

impl Pass {
    pub fn label(self) -> &'static str {
        match self {
            Pass::SameCity => "same city",
            Pass::Nearest => "nearest",
            Pass::NearestCached => "nearest (cached)",
            Pass::NearestFailsafe => "nearest (failsafe)",
            Pass::ByPrice => "by price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestLine {
    pub customer: String,
    pub event: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

impl fmt::Display for DigestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} in {}", self.customer, self.event, self.city)?;
        if let Some(distance) = self.distance.filter(|d| *d > 0) {
            write!(f, " ({} miles away)", distance)?;
        }
        if let Some(price) = self.price {
            write!(f, " for ${}", price)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSection {
    pub pass: Pass,
    pub lines: Vec<DigestLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    pub customer: Customer,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<DigestSection>,
}

impl Digest {
    pub fn section(&self, pass: Pass) -> Option<&DigestSection> {
        self.sections.iter().find(|s| s.pass == pass)
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }
}
