//! Structural checks for a roster.
//!
//! Roster operations accept inputs that are unusual but harmless:
//! duplicate keys, out-of-order segments, staff whose category differs
//! from their role's usual one. This module reports them on demand:
//! - Duplicate flight numbers
//! - Duplicate aircraft tail numbers
//! - Segment order values not strictly increasing
//! - Staff category inconsistent with role
//! - Departures holding more passengers than seats

use crate::roster::Roster;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two flights or two aircraft share the same number.
    DuplicateId,
    /// A flight's segments are not in strictly increasing order.
    SegmentOrder,
    /// A staff member's category is not the usual one for their role.
    InconsistentStaff,
    /// A departure has more passengers than its aircraft seats.
    OverCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. No duplicate flight numbers
/// 2. No duplicate aircraft numbers
/// 3. Segment order values strictly increase within each flight
/// 4. Every assigned staff member has the category usual for their role
/// 5. No departure exceeds its aircraft capacity
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut flight_numbers = HashSet::new();
    for f in &roster.flights {
        if !flight_numbers.insert(f.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate flight number: {}", f.number),
            ));
        }
        if !f.segments_in_order() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SegmentOrder,
                format!("Flight '{}' has segments out of order", f.number),
            ));
        }
    }

    let mut aircraft_numbers = HashSet::new();
    for a in &roster.aircraft {
        if !aircraft_numbers.insert(a.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate aircraft number: {}", a.number),
            ));
        }
    }

    for d in &roster.departures {
        if d.passengers.len() > d.aircraft.capacity as usize {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverCapacity,
                format!(
                    "Departure {} on {} carries {} passengers for {} seats",
                    d.flight.number,
                    d.date,
                    d.passengers.len(),
                    d.aircraft.capacity
                ),
            ));
        }

        for s in d.staff.iter().filter(|s| !s.is_consistent()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentStaff,
                format!(
                    "Staff '{}' on {} ({}) is {} with role {}",
                    s.name(),
                    d.flight.number,
                    d.date,
                    s.category,
                    s.role
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
