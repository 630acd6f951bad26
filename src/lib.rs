//! Airline schedule and departure rosters.
//!
//! Models flights (direct or multi-stop), aircraft, passengers and staff,
//! and the dated departures that bind them together.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Flight`, `FlightSegment`, `Aircraft`,
//!   `Person`, `Passenger`, `Staff`, `Departure`
//! - **`query`**: Filters over departures and flights (by flight, aircraft, city)
//! - **`roster`**: Container sharing flights and aircraft across departures
//! - **`validation`**: Roster diagnostics (duplicate keys, segment order, staff tags)
//! - **`report`**: Per-departure load, crew and fuel indicators
//! - **`config`**: TOML roster files
//!
//! # Example
//!
//! ```
//! use airline_roster::models::{Aircraft, Flight, FlightSegment, Passenger};
//! use airline_roster::Roster;
//!
//! let mut roster = Roster::new();
//! roster.add_flight(
//!     Flight::new("AF123", "Paris", "Montreal")
//!         .with_segment(FlightSegment::new(1, "Paris", "Gander", 4000.0))
//!         .with_segment(FlightSegment::new(2, "Gander", "Montreal", 1500.0)),
//! );
//! roster.add_aircraft(Aircraft::new("F-ABCD", "A350", 1));
//!
//! let departure = roster.schedule_departure("AF123", "F-ABCD", "2026-02-10").unwrap();
//! departure.add_passenger(Passenger::new("Alice", "Paris", "0700000001")).unwrap();
//! assert!(departure.add_passenger(Passenger::new("Bob", "Lyon", "0700000002")).is_err());
//!
//! assert_eq!(roster.flights[0].cities_served(), vec!["Paris", "Montreal", "Gander"]);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod report;
pub mod roster;
pub mod validation;

pub use config::{ConfigError, RosterConfig};
pub use error::RosterError;
pub use roster::Roster;
