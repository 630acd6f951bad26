use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use airline_roster::models::{
    Aircraft, Departure, Flight, FlightSegment, Passenger, Staff, StaffCategory, StaffRole,
};
use airline_roster::report::DepartureReport;
use airline_roster::validation::validate_roster;
use airline_roster::{Roster, RosterConfig};

/// Prints a departure roster summary.
#[derive(Parser, Debug)]
#[command(name = "airline-roster", version, about)]
struct Cli {
    /// Roster file (TOML). The built-in sample is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "airline_roster=debug,info"
    } else {
        "airline_roster=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

fn sample_roster() -> anyhow::Result<Roster> {
    let mut roster = Roster::new();
    roster.add_flight(
        Flight::new("AF123", "Paris", "Montreal")
            .with_times("08:00", "10:00")
            .with_distance(5500.0)
            .with_frequency("daily")
            .with_segment(FlightSegment::new(1, "Paris", "Gander", 4000.0))
            .with_segment(FlightSegment::new(2, "Gander", "Montreal", 1500.0)),
    );
    roster.add_aircraft(Aircraft::new("F-ABCD", "A350", 3));

    let date = "2026-02-10";
    let departure = roster.schedule_departure("AF123", "F-ABCD", date)?;
    departure.assign_staff(Staff::new(
        "Camille",
        "1 rue des Pilotes",
        "0102030405",
        StaffCategory::Navigant,
        StaffRole::Pilot,
    ));
    departure.assign_staff(Staff::new(
        "Luc",
        "2 rue des Cabines",
        "0102030406",
        StaffCategory::Navigant,
        StaffRole::CabinCrew,
    ));
    departure.assign_staff(Staff::new(
        "Nora",
        "3 rue du Terminal",
        "0102030407",
        StaffCategory::NonNavigant,
        StaffRole::Ground,
    ));

    for (name, address, phone) in [
        ("Alice", "Paris", "0700000001"),
        ("Bob", "Lyon", "0700000002"),
        ("Charlie", "Paris", "0700000003"),
    ] {
        departure.add_passenger(Passenger::new(name, address, phone))?;
    }

    Ok(roster)
}

fn names<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items.into_iter().collect::<Vec<_>>().join(", ")
}

fn flight_numbers(flights: Vec<&Flight>) -> String {
    names(flights.into_iter().map(|f| f.number.as_str()))
}

fn staff_names(staff: Vec<&Staff>) -> String {
    names(staff.into_iter().map(Staff::name))
}

fn dates(departures: Vec<&Departure>) -> String {
    names(departures.into_iter().map(|d| d.date.as_str()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let roster = match &cli.config {
        Some(path) => RosterConfig::from_file(path)
            .and_then(RosterConfig::build)
            .with_context(|| format!("failed to load roster from {}", path.display()))?,
        None => sample_roster()?,
    };

    if let Err(errors) = validate_roster(&roster) {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
    }

    for d in &roster.departures {
        let navigants = d.staff_by_category(StaffCategory::Navigant);
        let pilots = d.staff_by_role(StaffRole::Pilot);
        info!(
            "Departure {} on {}: passengers [{}]",
            d.flight.number,
            d.date,
            names(d.passengers.iter().map(Passenger::name))
        );
        info!("  navigant staff [{}]", staff_names(navigants));
        info!("  pilots [{}]", staff_names(pilots));

        let report = DepartureReport::calculate(d);
        info!(
            "  load {:.0}% ({} of {} seats)",
            report.load_factor * 100.0,
            report.passengers,
            report.capacity
        );
    }

    for f in &roster.flights {
        info!(
            "Flight {}: cities served [{}]",
            f.number,
            names(f.cities_served())
        );
        info!(
            "  departures on [{}]",
            dates(roster.departures_for_flight(&f.number))
        );
        info!(
            "  flights from {} [{}], flights to {} [{}]",
            f.city_departure,
            flight_numbers(roster.flights_from_city(&f.city_departure)),
            f.city_arrival,
            flight_numbers(roster.flights_to_city(&f.city_arrival))
        );
    }

    for a in &roster.aircraft {
        info!(
            "Aircraft {} ({}): departures on [{}]",
            a.number,
            a.type_name,
            dates(roster.departures_for_aircraft(&a.number))
        );
    }

    Ok(())
}
