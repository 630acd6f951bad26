//! Roster: the flights, aircraft and departures of one airline.
//!
//! Flights and aircraft are registered once and shared with every
//! departure that uses them. Lookups by key return the first match;
//! duplicate keys are reported by [`crate::validation::validate_roster`].
//!
//! A roster is saved and restored through [`crate::config::RosterConfig`],
//! which keeps departures pointing at flights and aircraft by number.

use std::sync::Arc;

use crate::error::{Result, RosterError};
use crate::models::{Aircraft, Departure, Flight};
use crate::query;

/// Container of shared flights and aircraft plus their departures.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub flights: Vec<Arc<Flight>>,
    pub aircraft: Vec<Arc<Aircraft>>,
    pub departures: Vec<Departure>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flight and returns the shared handle.
    pub fn add_flight(&mut self, flight: Flight) -> Arc<Flight> {
        let flight = Arc::new(flight);
        self.flights.push(Arc::clone(&flight));
        flight
    }

    /// Registers an aircraft and returns the shared handle.
    pub fn add_aircraft(&mut self, aircraft: Aircraft) -> Arc<Aircraft> {
        let aircraft = Arc::new(aircraft);
        self.aircraft.push(Arc::clone(&aircraft));
        aircraft
    }

    /// Adds an already built departure.
    pub fn add_departure(&mut self, departure: Departure) -> &mut Departure {
        self.departures.push(departure);
        let last = self.departures.len() - 1;
        &mut self.departures[last]
    }

    /// Creates a departure from registered flight and aircraft numbers.
    ///
    /// # Errors
    /// [`RosterError::UnknownFlight`] or [`RosterError::UnknownAircraft`]
    /// when a number is not registered. The roster is unchanged on error.
    pub fn schedule_departure(
        &mut self,
        flight_number: &str,
        aircraft_number: &str,
        date: impl Into<String>,
    ) -> Result<&mut Departure> {
        let flight = self
            .flight(flight_number)
            .ok_or_else(|| RosterError::UnknownFlight(flight_number.to_string()))?;
        let aircraft = self
            .aircraft(aircraft_number)
            .ok_or_else(|| RosterError::UnknownAircraft(aircraft_number.to_string()))?;

        let departure = Departure::new(flight, date, aircraft);
        tracing::debug!(
            flight = %flight_number,
            aircraft = %aircraft_number,
            date = %departure.date,
            "departure scheduled"
        );
        Ok(self.add_departure(departure))
    }

    /// Finds a flight by number.
    pub fn flight(&self, number: &str) -> Option<Arc<Flight>> {
        self.flights.iter().find(|f| f.number == number).cloned()
    }

    /// Finds an aircraft by tail number.
    pub fn aircraft(&self, number: &str) -> Option<Arc<Aircraft>> {
        self.aircraft.iter().find(|a| a.number == number).cloned()
    }

    /// Departures operating a flight number.
    pub fn departures_for_flight(&self, flight_number: &str) -> Vec<&Departure> {
        query::departures_for_flight(&self.departures, flight_number)
    }

    /// Departures using an aircraft.
    pub fn departures_for_aircraft(&self, aircraft_number: &str) -> Vec<&Departure> {
        query::departures_for_aircraft(&self.departures, aircraft_number)
    }

    /// Flights originating in a city.
    pub fn flights_from_city(&self, city: &str) -> Vec<&Flight> {
        query::flights_from_city(&self.flights, city)
    }

    /// Flights ending in a city.
    pub fn flights_to_city(&self, city: &str) -> Vec<&Flight> {
        query::flights_to_city(&self.flights, city)
    }

    /// Flights stopping in a city.
    pub fn flights_serving_city(&self, city: &str) -> Vec<&Flight> {
        query::flights_serving_city(&self.flights, city)
    }

    /// Total boarded passengers across all departures.
    pub fn passenger_count(&self) -> usize {
        self.departures.iter().map(Departure::passenger_count).sum()
    }
}
