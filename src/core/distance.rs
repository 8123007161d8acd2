use crate::core::{DistanceProvider, Event};
use crate::domain::model::Distance;

/// Character-code distance between two city names.
///
/// Sums `|a[i] - b[i]|` over the shared prefix length, then the raw code of
/// every character the longer name has beyond it. Codes are UTF-16 units.
/// This is a stand-in for a real geographic lookup and has no meaning in miles.
pub fn alphabetical_distance(a: &str, b: &str) -> Distance {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();
    let shared = a.len().min(b.len());
    let longer = if a.len() > b.len() { &a } else { &b };

    let prefix = a
        .iter()
        .zip(&b)
        .map(|(x, y)| Distance::from(x.abs_diff(*y)));
    let tail = longer[shared..].iter().map(|c| Distance::from(*c));

    prefix.chain(tail).fold(0, Distance::saturating_add)
}

/// Price used for events whose catalog entry carries none.
pub fn estimated_price(event: &Event) -> u32 {
    (alphabetical_distance(&event.city, "").saturating_add(alphabetical_distance(&event.name, "")))
        / 10
}

pub fn effective_price(event: &Event) -> u32 {
    event.price.unwrap_or_else(|| estimated_price(event))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticalDistance;

impl DistanceProvider for AlphabeticalDistance {
    fn distance(&self, from: &str, to: &str) -> Distance {
        alphabetical_distance(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        for city in ["New York", "", "San Francisco", "Zürich"] {
            assert_eq!(alphabetical_distance(city, city), 0);
        }
    }

    #[test]
    fn test_distance_from_new_york() {
        assert_eq!(alphabetical_distance("New York", "Chicago"), 221);
        assert_eq!(alphabetical_distance("New York", "Washington"), 347);
        assert_eq!(alphabetical_distance("New York", "Boston"), 354);
        assert_eq!(alphabetical_distance("New York", "Los Angeles"), 382);
        assert_eq!(alphabetical_distance("New York", "San Francisco"), 589);
    }

    #[test]
    fn test_empty_side_sums_raw_codes() {
        // 'a' + 'b' + 'c'
        assert_eq!(alphabetical_distance("", "abc"), 294);
        assert_eq!(alphabetical_distance("abc", ""), 294);
    }

    #[test]
    fn test_equal_length_names_are_symmetric() {
        assert_eq!(alphabetical_distance("Boston", "Austin"), 13);
        assert_eq!(alphabetical_distance("Austin", "Boston"), 13);
    }

    #[test]
    fn test_tail_is_charged_from_longer_name_either_way() {
        // Only the trailing 'c' differs, and it is charged at its raw code
        // regardless of which argument is longer.
        assert_eq!(alphabetical_distance("ab", "abc"), 99);
        assert_eq!(alphabetical_distance("abc", "ab"), 99);
        // Same for a prefix mismatch: |'a' - 'b'| + 'c'.
        assert_eq!(alphabetical_distance("a", "bc"), 100);
        assert_eq!(alphabetical_distance("bc", "a"), 100);
    }

    #[test]
    fn test_estimated_price() {
        let event = Event::new("Metallica", "Boston");
        assert_eq!(estimated_price(&event), 153);
        assert_eq!(effective_price(&event), 153);
        assert_eq!(effective_price(&event.with_price(9)), 9);
    }
}
