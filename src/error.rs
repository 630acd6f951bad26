//! Error types for roster mutations.

use thiserror::Error;

/// Rejection of a roster operation. The offending mutation never takes effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The departure's aircraft has no free seat left.
    #[error("aircraft {aircraft} is at capacity ({capacity} passengers)")]
    CapacityReached { aircraft: String, capacity: u32 },

    /// No flight with this number is registered.
    #[error("unknown flight: {0}")]
    UnknownFlight(String),

    /// No aircraft with this tail number is registered.
    #[error("unknown aircraft: {0}")]
    UnknownAircraft(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
