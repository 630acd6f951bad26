use airline_roster::models::{Passenger, StaffCategory, StaffRole};
use airline_roster::report::DepartureReport;
use airline_roster::validation::{validate_roster, ValidationErrorKind};
use airline_roster::{ConfigError, Roster, RosterConfig, RosterError};
use std::io::Write;
use tempfile::NamedTempFile;

const ROSTER: &str = r#"
[[aircraft]]
number = "F-ABCD"
type_name = "A350"
capacity = 3

[[aircraft]]
number = "F-WXYZ"
type_name = "A320"
capacity = 180

[[flights]]
number = "AF123"
city_departure = "Paris"
city_arrival = "Montreal"
time_departure = "08:00"
time_arrival = "10:00"
distance_km = 5500.0
frequency = "daily"

[[flights.segments]]
order = 1
city_departure = "Paris"
city_arrival = "Gander"
distance_km = 4000.0

[[flights.segments]]
order = 2
city_departure = "Gander"
city_arrival = "Montreal"
distance_km = 1500.0

[[flights]]
number = "AF456"
city_departure = "Montreal"
city_arrival = "Paris"
time_departure = "18:00"
time_arrival = "07:00"
distance_km = 5500.0
frequency = "daily"

[[departures]]
flight = "AF123"
aircraft = "F-ABCD"
date = "2026-02-10"
fuel_used_liters = 66000.0
staff = [
    { name = "Camille", address = "1 rue des Pilotes", phone = "0102030405", category = "navigant", role = "pilot" },
    { name = "Luc", address = "2 rue des Cabines", phone = "0102030406", category = "navigant", role = "cabin_crew" },
    { name = "Nora", address = "3 rue du Terminal", phone = "0102030407", category = "non_navigant", role = "ground" },
]
passengers = [
    { name = "Alice", address = "Paris", phone = "0700000001" },
    { name = "Bob", address = "Lyon", phone = "0700000002" },
    { name = "Charlie", address = "Paris", phone = "0700000003" },
]

[[departures]]
flight = "AF456"
aircraft = "F-WXYZ"
date = "2026-02-11"
"#;

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn load_roster(content: &str) -> Roster {
    let file = write_roster(content);
    let config = RosterConfig::from_file(file.path()).unwrap();
    config.build().unwrap()
}

#[test]
fn test_load_roster_from_file() {
    let mut roster = load_roster(ROSTER);

    assert!(validate_roster(&roster).is_ok());
    assert_eq!(roster.departures.len(), 2);

    let dep = &mut roster.departures[0];
    let names: Vec<&str> = dep.passengers.iter().map(Passenger::name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    let navigants: Vec<&str> = dep
        .staff_by_category(StaffCategory::Navigant)
        .into_iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(navigants, vec!["Camille", "Luc"]);
    assert_eq!(dep.staff_by_role(StaffRole::Pilot).len(), 1);

    // Fourth passenger on a 3-seat aircraft.
    let extra = Passenger::new("Dana", "", "");
    let err = dep.add_passenger(extra).unwrap_err();
    assert_eq!(
        err,
        RosterError::CapacityReached {
            aircraft: "F-ABCD".into(),
            capacity: 3
        }
    );
    assert_eq!(dep.passenger_count(), 3);

    let report = DepartureReport::calculate(&roster.departures[0]);
    assert!((report.load_factor - 1.0).abs() < 1e-10);
    let per_passenger = report.fuel_per_passenger.unwrap();
    assert!((per_passenger - 22_000.0).abs() < 1e-10);
    assert!((report.fuel_per_km.unwrap() - 12.0).abs() < 1e-10);
}

#[test]
fn test_queries_on_loaded_roster() {
    let roster = load_roster(ROSTER);

    let af123 = roster.flight("AF123").unwrap();
    assert_eq!(af123.cities_served(), vec!["Paris", "Montreal", "Gander"]);

    let dates: Vec<&str> = roster
        .departures_for_flight("AF123")
        .into_iter()
        .map(|d| d.date.as_str())
        .collect();
    assert_eq!(dates, vec!["2026-02-10"]);
    assert!(roster.departures_for_flight("ZZ000").is_empty());
    assert_eq!(roster.departures_for_aircraft("F-WXYZ").len(), 1);

    let from_paris: Vec<&str> = roster
        .flights_from_city("Paris")
        .into_iter()
        .map(|f| f.number.as_str())
        .collect();
    assert_eq!(from_paris, vec!["AF123"]);

    let to_paris: Vec<&str> = roster
        .flights_to_city("Paris")
        .into_iter()
        .map(|f| f.number.as_str())
        .collect();
    assert_eq!(to_paris, vec!["AF456"]);
}

#[test]
fn test_inconsistent_staff_is_loaded_but_reported() {
    let content = ROSTER.replace(
        r#"category = "non_navigant", role = "ground""#,
        r#"category = "navigant", role = "ground""#,
    );
    let roster = load_roster(&content);

    assert_eq!(roster.departures[0].staff.len(), 3);
    let errors = validate_roster(&roster).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::InconsistentStaff);
}

#[test]
fn test_missing_file() {
    let err = RosterConfig::from_file("/nonexistent/roster.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_malformed_file() {
    let file = write_roster("[[aircraft]]\nnumber = ");
    let err = RosterConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
