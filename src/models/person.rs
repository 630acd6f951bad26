//! People on a departure: passengers and staff.
//!
//! Staff carry two independent classifications: a category (flying or
//! ground staff) and a functional role. Nothing ties one to the other at
//! assignment time; [`StaffRole::usual_category`] gives the conventional
//! pairing used by validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact record shared by passengers and staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// A travelling passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(flatten)]
    pub person: Person,
}

/// An airline employee assigned to departures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(flatten)]
    pub person: Person,
    /// Flying or ground staff.
    pub category: StaffCategory,
    /// Job on the departure.
    pub role: StaffRole,
}

/// Staff category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// Flying staff (flight deck and cabin).
    Navigant,
    /// Staff working on the ground.
    NonNavigant,
}

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Pilot,
    CabinCrew,
    Ground,
}

impl Person {
    /// Creates a new person.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

impl Passenger {
    /// Creates a new passenger.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, address, phone),
        }
    }

    /// Passenger name.
    pub fn name(&self) -> &str {
        &self.person.name
    }
}

impl Staff {
    /// Creates a new staff member.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        category: StaffCategory,
        role: StaffRole,
    ) -> Self {
        Self {
            person: Person::new(name, address, phone),
            category,
            role,
        }
    }

    /// Staff member name.
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Whether the category matches the role's usual category.
    pub fn is_consistent(&self) -> bool {
        self.category == self.role.usual_category()
    }
}

impl StaffRole {
    /// Category this role normally belongs to.
    pub fn usual_category(self) -> StaffCategory {
        match self {
            StaffRole::Pilot | StaffRole::CabinCrew => StaffCategory::Navigant,
            StaffRole::Ground => StaffCategory::NonNavigant,
        }
    }

    /// Snake-case name, as used in roster files.
    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Pilot => "pilot",
            StaffRole::CabinCrew => "cabin_crew",
            StaffRole::Ground => "ground",
        }
    }
}

impl StaffCategory {
    /// Snake-case name, as used in roster files.
    pub fn as_str(self) -> &'static str {
        match self {
            StaffCategory::Navigant => "navigant",
            StaffCategory::NonNavigant => "non_navigant",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_equality_is_by_fields() {
        let a = Passenger::new("Alice", "Paris", "0700000001");
        let b = Passenger::new("Alice", "Paris", "0700000001");
        let c = Passenger::new("Alice", "Lyon", "0700000001");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.name(), "Alice");
    }

    #[test]
    fn test_staff_consistency() {
        let pilot = Staff::new("Camille", "", "", StaffCategory::Navigant, StaffRole::Pilot);
        assert!(pilot.is_consistent());

        // Accepted by construction, flagged only on inspection.
        let odd = Staff::new("Nora", "", "", StaffCategory::Navigant, StaffRole::Ground);
        assert!(!odd.is_consistent());
    }

    #[test]
    fn test_usual_category() {
        use StaffCategory::{Navigant, NonNavigant};
        assert_eq!(StaffRole::Pilot.usual_category(), Navigant);
        assert_eq!(StaffRole::CabinCrew.usual_category(), Navigant);
        assert_eq!(StaffRole::Ground.usual_category(), NonNavigant);
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(
            serde_json::to_string(&StaffRole::CabinCrew).unwrap(),
            "\"cabin_crew\""
        );
        assert_eq!(
            serde_json::to_string(&StaffCategory::NonNavigant).unwrap(),
            "\"non_navigant\""
        );
        assert_eq!(StaffRole::CabinCrew.to_string(), "cabin_crew");
        assert_eq!(StaffCategory::NonNavigant.to_string(), "non_navigant");
    }

    #[test]
    fn test_staff_serializes_flat() {
        let s = Staff::new(
            "Luc",
            "2 rue des Cabines",
            "0102030406",
            StaffCategory::Navigant,
            StaffRole::CabinCrew,
        );
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["name"], "Luc");
        assert_eq!(v["role"], "cabin_crew");
        assert_eq!(v["category"], "navigant");
    }
}
