//! Flight model.
//!
//! A flight is a scheduled route between two cities, identified by its
//! flight number. Multi-stop flights carry an ordered list of segments
//! (legs); a direct flight has none.
//!
//! # Cities served
//!
//! The cities served by a flight are its endpoints followed by every
//! segment's endpoints, deduplicated in first-seen order:
//!
//! | Flight | Segments | Cities served |
//! |--------|----------|---------------|
//! | Paris → Montreal | Paris → Gander, Gander → Montreal | Paris, Montreal, Gander |
//! | Lyon → Nice | (none) | Lyon, Nice |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A scheduled flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight number (unique key, e.g. "AF123").
    pub number: String,
    /// Origin city.
    pub city_departure: String,
    /// Destination city.
    pub city_arrival: String,
    /// Scheduled departure time (e.g. "08:00").
    pub time_departure: String,
    /// Scheduled arrival time.
    pub time_arrival: String,
    /// Total route distance (km).
    pub distance_km: f64,
    /// Operating frequency (e.g. "daily").
    pub frequency: String,
    /// Intermediate legs, in flight order.
    #[serde(default)]
    pub segments: Vec<FlightSegment>,
}

/// One leg of a multi-stop flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSegment {
    /// Position of the leg within its flight.
    pub order: u32,
    /// Leg origin city.
    pub city_departure: String,
    /// Leg destination city.
    pub city_arrival: String,
    /// Leg distance (km).
    pub distance_km: f64,
}

impl Flight {
    /// Creates a direct flight between two cities.
    ///
    /// Schedule times, distance and frequency are left empty; set them
    /// with the `with_*` builders.
    pub fn new(
        number: impl Into<String>,
        city_departure: impl Into<String>,
        city_arrival: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            city_departure: city_departure.into(),
            city_arrival: city_arrival.into(),
            time_departure: String::new(),
            time_arrival: String::new(),
            distance_km: 0.0,
            frequency: String::new(),
            segments: Vec::new(),
        }
    }

    /// Sets the scheduled departure and arrival times.
    pub fn with_times(
        mut self,
        time_departure: impl Into<String>,
        time_arrival: impl Into<String>,
    ) -> Self {
        self.time_departure = time_departure.into();
        self.time_arrival = time_arrival.into();
        self
    }

    /// Sets the total distance.
    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Sets the operating frequency.
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Appends a segment.
    pub fn with_segment(mut self, segment: FlightSegment) -> Self {
        self.add_segment(segment);
        self
    }

    /// Appends a segment.
    ///
    /// No ordering check is made; the caller supplies segments in order.
    pub fn add_segment(&mut self, segment: FlightSegment) {
        self.segments.push(segment);
    }

    /// Cities served, endpoints first, without duplicates.
    pub fn cities_served(&self) -> Vec<&str> {
        let stops = [self.city_departure.as_str(), self.city_arrival.as_str()]
            .into_iter()
            .chain(
                self.segments
                    .iter()
                    .flat_map(|s| [s.city_departure.as_str(), s.city_arrival.as_str()]),
            );

        let mut seen = HashSet::new();
        stops.filter(|city| seen.insert(*city)).collect()
    }

    /// Whether the flight stops at (or starts/ends in) a city.
    pub fn serves(&self, city: &str) -> bool {
        self.cities_served().iter().any(|c| *c == city)
    }

    /// Whether segment order values strictly increase.
    pub fn segments_in_order(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].order < w[1].order)
    }

    /// Sum of segment distances (km). Zero for a direct flight.
    pub fn segment_distance_km(&self) -> f64 {
        self.segments.iter().map(|s| s.distance_km).sum()
    }

    /// Whether the flight has no intermediate segments.
    pub fn is_direct(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Lets queries take both `[Flight]` and `[Arc<Flight>]`.
impl AsRef<Flight> for Flight {
    fn as_ref(&self) -> &Flight {
        self
    }
}

impl FlightSegment {
    /// Creates a new segment.
    pub fn new(
        order: u32,
        city_departure: impl Into<String>,
        city_arrival: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self {
            order,
            city_departure: city_departure.into(),
            city_arrival: city_arrival.into(),
            distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn af123() -> Flight {
        Flight::new("AF123", "Paris", "Montreal")
            .with_times("08:00", "10:00")
            .with_distance(5500.0)
            .with_frequency("daily")
            .with_segment(FlightSegment::new(1, "Paris", "Gander", 4000.0))
            .with_segment(FlightSegment::new(2, "Gander", "Montreal", 1500.0))
    }

    #[test]
    fn test_flight_builder() {
        let f = af123();
        assert_eq!(f.number, "AF123");
        assert_eq!(f.time_departure, "08:00");
        assert_eq!(f.time_arrival, "10:00");
        assert_eq!(f.frequency, "daily");
        assert_eq!(f.segment_count(), 2);
        assert!(!f.is_direct());
        assert!((f.segment_distance_km() - 5500.0).abs() < 1e-10);
    }

    #[test]
    fn test_cities_served_multi_stop() {
        let f = af123();
        assert_eq!(f.cities_served(), vec!["Paris", "Montreal", "Gander"]);
    }

    #[test]
    fn test_cities_served_direct() {
        let f = Flight::new("AF7700", "Lyon", "Nice");
        assert_eq!(f.cities_served(), vec!["Lyon", "Nice"]);
        assert!(f.is_direct());
        assert!((f.segment_distance_km() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_cities_served_is_stable() {
        let f = af123();
        assert_eq!(f.cities_served(), f.cities_served());
    }

    #[test]
    fn test_add_segment_keeps_call_order() {
        let mut f = Flight::new("X1", "A", "D");
        f.add_segment(FlightSegment::new(2, "B", "D", 10.0));
        f.add_segment(FlightSegment::new(1, "A", "B", 10.0));

        assert_eq!(f.segments[0].order, 2);
        assert_eq!(f.cities_served(), vec!["A", "D", "B"]);
        assert!(!f.segments_in_order());
    }

    #[test]
    fn test_segments_in_order() {
        assert!(af123().segments_in_order());
        assert!(Flight::new("X1", "A", "B").segments_in_order());

        let dup = Flight::new("X2", "A", "C")
            .with_segment(FlightSegment::new(1, "A", "B", 1.0))
            .with_segment(FlightSegment::new(1, "B", "C", 1.0));
        assert!(!dup.segments_in_order());
    }

    #[test]
    fn test_serves_is_exact_match() {
        let f = af123();
        assert!(f.serves("Gander"));
        assert!(!f.serves("gander"));
        assert!(!f.serves("Toronto"));
    }
}
