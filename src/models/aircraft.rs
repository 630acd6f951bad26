//! Aircraft model.
//!
//! An aircraft is identified by its tail number and carries a fixed
//! passenger capacity. Many departures may share the same aircraft.

use serde::{Deserialize, Serialize};

/// A physical aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Tail number (unique key, e.g. "F-ABCD").
    pub number: String,
    /// Aircraft type (e.g. "A350").
    pub type_name: String,
    /// Maximum number of passengers per departure.
    pub capacity: u32,
}

impl Aircraft {
    /// Creates a new aircraft.
    pub fn new(number: impl Into<String>, type_name: impl Into<String>, capacity: u32) -> Self {
        Self {
            number: number.into(),
            type_name: type_name.into(),
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_new() {
        let a = Aircraft::new("F-ABCD", "A350", 3);
        assert_eq!(a.number, "F-ABCD");
        assert_eq!(a.type_name, "A350");
        assert_eq!(a.capacity, 3);
    }
}
