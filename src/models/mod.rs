//! Airline domain models.
//!
//! Static entities ([`Flight`], [`Aircraft`], [`Passenger`], [`Staff`]) are
//! built first; a [`Departure`] then binds a flight to an aircraft on a date
//! and accumulates passengers and staff.
//!
//! # Ownership
//!
//! | Type | Owned by | Shared across |
//! |------|----------|---------------|
//! | Flight | Roster | Departures (`Arc`) |
//! | FlightSegment | Flight | - |
//! | Aircraft | Roster | Departures (`Arc`) |
//! | Passenger, Staff | Departure | - |

mod aircraft;
mod departure;
mod flight;
mod person;

pub use aircraft::Aircraft;
pub use departure::Departure;
pub use flight::{Flight, FlightSegment};
pub use person::{Passenger, Person, Staff, StaffCategory, StaffRole};
