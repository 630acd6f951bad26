//! Lookups over collections of departures and flights.
//!
//! Every query is a linear scan with exact, case-sensitive string
//! comparison. No match yields an empty vector.

use crate::models::{Departure, Flight};

/// Departures operating the given flight number.
pub fn departures_for_flight<'a>(
    departures: &'a [Departure],
    flight_number: &str,
) -> Vec<&'a Departure> {
    departures
        .iter()
        .filter(|d| d.flight.number == flight_number)
        .collect()
}

/// Departures using the given aircraft tail number.
pub fn departures_for_aircraft<'a>(
    departures: &'a [Departure],
    aircraft_number: &str,
) -> Vec<&'a Departure> {
    departures
        .iter()
        .filter(|d| d.aircraft.number == aircraft_number)
        .collect()
}

/// Flights whose origin is `city`.
pub fn flights_from_city<'a, F>(flights: &'a [F], city: &str) -> Vec<&'a Flight>
where
    F: AsRef<Flight>,
{
    flights
        .iter()
        .map(F::as_ref)
        .filter(|f| f.city_departure == city)
        .collect()
}

/// Flights whose final destination is `city`.
pub fn flights_to_city<'a, F>(flights: &'a [F], city: &str) -> Vec<&'a Flight>
where
    F: AsRef<Flight>,
{
    flights
        .iter()
        .map(F::as_ref)
        .filter(|f| f.city_arrival == city)
        .collect()
}

/// Flights serving `city` at either end or at any intermediate stop.
pub fn flights_serving_city<'a, F>(flights: &'a [F], city: &str) -> Vec<&'a Flight>
where
    F: AsRef<Flight>,
{
    flights
        .iter()
        .map(F::as_ref)
        .filter(|f| f.serves(city))
        .collect()
}
