//! TOML roster files.
//!
//! A roster file lists aircraft and flights, then departures that refer to
//! them by number:
//!
//! ```toml
//! [[aircraft]]
//! number = "F-ABCD"
//! type_name = "A350"
//! capacity = 3
//!
//! [[flights]]
//! number = "AF123"
//! city_departure = "Paris"
//! city_arrival = "Montreal"
//! time_departure = "08:00"
//! time_arrival = "10:00"
//! distance_km = 5500.0
//! frequency = "daily"
//!
//! [[flights.segments]]
//! order = 1
//! city_departure = "Paris"
//! city_arrival = "Gander"
//! distance_km = 4000.0
//!
//! [[departures]]
//! flight = "AF123"
//! aircraft = "F-ABCD"
//! date = "2026-02-10"
//! staff = [{ name = "Camille", address = "", phone = "", category = "navigant", role = "pilot" }]
//! passengers = [{ name = "Alice", address = "Paris", phone = "0700000001" }]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::RosterError;
use crate::models::{Aircraft, Flight, Passenger, Staff};
use crate::roster::Roster;

/// Failure to load or save a roster file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

/// Deserialized roster file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub aircraft: Vec<Aircraft>,
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub departures: Vec<DepartureConfig>,
}

/// A departure entry, referring to a flight and an aircraft by number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureConfig {
    pub flight: String,
    pub aircraft: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_used_liters: Option<f64>,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
}

impl RosterConfig {
    /// Parses a roster from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a roster file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "roster file read");
        Self::from_toml_str(&content)
    }

    /// Renders the roster as TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Resolves references and boards everyone.
    ///
    /// # Errors
    /// Fails on the first unknown flight or aircraft number, or on the
    /// first passenger that does not fit.
    pub fn build(self) -> Result<Roster, ConfigError> {
        let mut roster = Roster::new();
        for aircraft in self.aircraft {
            roster.add_aircraft(aircraft);
        }
        for flight in self.flights {
            roster.add_flight(flight);
        }

        for entry in self.departures {
            let (flight, aircraft) = (entry.flight.as_str(), entry.aircraft.as_str());
            let departure = roster.schedule_departure(flight, aircraft, entry.date)?;
            departure.fuel_used_liters = entry.fuel_used_liters;
            for staff in entry.staff {
                departure.assign_staff(staff);
            }
            for passenger in entry.passengers {
                departure.add_passenger(passenger)?;
            }
        }

        tracing::info!(
            flights = roster.flights.len(),
            aircraft = roster.aircraft.len(),
            departures = roster.departures.len(),
            "roster loaded"
        );
        Ok(roster)
    }
}

impl From<&Roster> for RosterConfig {
    /// Each flight and aircraft is written once; departures keep only
    /// their numbers.
    fn from(roster: &Roster) -> Self {
        let departures = roster
            .departures
            .iter()
            .map(|d| DepartureConfig {
                flight: d.flight.number.clone(),
                aircraft: d.aircraft.number.clone(),
                date: d.date.clone(),
                fuel_used_liters: d.fuel_used_liters,
                staff: d.staff.clone(),
                passengers: d.passengers.clone(),
            })
            .collect();

        let aircraft = roster.aircraft.iter().map(|a| Aircraft::clone(a));
        let flights = roster.flights.iter().map(|f| Flight::clone(f));

        Self {
            aircraft: aircraft.collect(),
            flights: flights.collect(),
            departures,
        }
    }
}
