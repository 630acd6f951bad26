//! Departure model.
//!
//! A departure is one operation of a [`Flight`] on a given date with a given
//! [`Aircraft`]. Flights and aircraft are shared between departures; the
//! passenger and staff lists belong to the departure alone.
//!
//! # Capacity
//! [`Departure::add_passenger`] rejects a passenger once the list holds
//! `aircraft.capacity` entries. The bound is checked only when adding.

use std::sync::Arc;

use super::{Aircraft, Flight, Passenger, Staff, StaffCategory, StaffRole};
use crate::error::{Result, RosterError};

/// One dated operation of a flight.
///
/// Not serializable on its own: the shared flight and aircraft would be
/// copied per departure. Roster files refer to them by number instead.
#[derive(Debug, Clone)]
pub struct Departure {
    /// Flight operated.
    pub flight: Arc<Flight>,
    /// Operating date (e.g. "2026-02-10").
    pub date: String,
    /// Aircraft used.
    pub aircraft: Arc<Aircraft>,
    /// Boarded passengers, in boarding order.
    pub passengers: Vec<Passenger>,
    /// Assigned staff, in assignment order.
    pub staff: Vec<Staff>,
    /// Fuel burned (liters), once known.
    pub fuel_used_liters: Option<f64>,
}

impl Departure {
    /// Creates a departure with no passengers or staff.
    pub fn new(flight: Arc<Flight>, date: impl Into<String>, aircraft: Arc<Aircraft>) -> Self {
        Self {
            flight,
            date: date.into(),
            aircraft,
            passengers: Vec::new(),
            staff: Vec::new(),
            fuel_used_liters: None,
        }
    }

    /// Sets the fuel burned.
    pub fn with_fuel_used(mut self, liters: f64) -> Self {
        self.fuel_used_liters = Some(liters);
        self
    }

    /// Boards a passenger.
    ///
    /// # Errors
    /// [`RosterError::CapacityReached`] when every seat is taken; the
    /// passenger list is left unchanged.
    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<()> {
        if self.is_full() {
            tracing::warn!(
                flight = %self.flight.number,
                date = %self.date,
                passenger = %passenger.name(),
                "aircraft capacity reached"
            );
            return Err(RosterError::CapacityReached {
                aircraft: self.aircraft.number.clone(),
                capacity: self.aircraft.capacity,
            });
        }
        tracing::debug!(
            flight = %self.flight.number,
            date = %self.date,
            passenger = %passenger.name(),
            "passenger added"
        );
        self.passengers.push(passenger);
        Ok(())
    }

    /// Assigns a staff member. Duplicates and any role mix are accepted.
    pub fn assign_staff(&mut self, staff: Staff) {
        tracing::debug!(
            flight = %self.flight.number,
            date = %self.date,
            staff = %staff.name(),
            role = %staff.role,
            "staff assigned"
        );
        self.staff.push(staff);
    }

    /// Staff holding a role, in assignment order.
    pub fn staff_by_role(&self, role: StaffRole) -> Vec<&Staff> {
        self.staff.iter().filter(|s| s.role == role).collect()
    }

    /// Staff in a category, in assignment order.
    pub fn staff_by_category(&self, category: StaffCategory) -> Vec<&Staff> {
        self.staff
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Number of boarded passengers.
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Free seats left (0 if the list was overfilled out of band).
    pub fn remaining_seats(&self) -> usize {
        (self.aircraft.capacity as usize).saturating_sub(self.passengers.len())
    }

    /// Whether no seat is left.
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.aircraft.capacity as usize
    }
}
