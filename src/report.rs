//! Departure indicators.
//!
//! Summarizes how full a departure is, who is on board, and how much
//! fuel it burned relative to its load and route.
//!
//! | Indicator | Definition |
//! |-----------|-----------|
//! | Load factor | passengers / capacity |
//! | Remaining seats | capacity - passengers |
//! | Fuel per passenger | fuel / passengers |
//! | Fuel per km | fuel / flight distance |

use std::collections::HashMap;

use crate::models::{Departure, StaffCategory, StaffRole};

/// Indicators for one departure.
#[derive(Debug, Clone)]
pub struct DepartureReport {
    /// Flight number.
    pub flight_number: String,
    /// Operating date.
    pub date: String,
    /// Boarded passengers.
    pub passengers: usize,
    /// Aircraft seats.
    pub capacity: u32,
    /// Fraction of seats taken (0.0 when the aircraft has no seats).
    pub load_factor: f64,
    /// Free seats.
    pub remaining_seats: usize,
    /// Assigned staff per role.
    pub staff_by_role: HashMap<StaffRole, usize>,
    /// Staff tagged navigant.
    pub navigant_count: usize,
    /// Liters per passenger, when fuel is known and someone boarded.
    pub fuel_per_passenger: Option<f64>,
    /// Liters per km, when fuel is known and the distance is positive.
    pub fuel_per_km: Option<f64>,
}

impl DepartureReport {
    /// Computes indicators for a departure.
    pub fn calculate(departure: &Departure) -> Self {
        let passengers = departure.passenger_count();
        let capacity = departure.aircraft.capacity;

        let load_factor = if capacity > 0 {
            passengers as f64 / capacity as f64
        } else {
            0.0
        };

        let mut staff_by_role: HashMap<StaffRole, usize> = HashMap::new();
        for s in &departure.staff {
            *staff_by_role.entry(s.role).or_insert(0) += 1;
        }

        let fuel_per_passenger = departure
            .fuel_used_liters
            .filter(|_| passengers > 0)
            .map(|fuel| fuel / passengers as f64);

        let navigants = departure.staff_by_category(StaffCategory::Navigant);
        let distance = departure.flight.distance_km;
        let fuel_per_km = departure
            .fuel_used_liters
            .filter(|_| distance > 0.0)
            .map(|fuel| fuel / distance);

        Self {
            flight_number: departure.flight.number.clone(),
            date: departure.date.clone(),
            passengers,
            capacity,
            load_factor,
            remaining_seats: departure.remaining_seats(),
            staff_by_role,
            navigant_count: navigants.len(),
            fuel_per_passenger,
            fuel_per_km,
        }
    }

    /// Staff count for a role (0 if none).
    pub fn role_count(&self, role: StaffRole) -> usize {
        self.staff_by_role.get(&role).copied().unwrap_or(0)
    }
}
