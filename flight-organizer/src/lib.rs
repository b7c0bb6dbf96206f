//! In-memory registry of airports and directed flight edges, backed by
//! the `linked-list` crate, plus the path search and route enumeration
//! built on top of it.

pub mod errors;
pub mod paths;
pub mod routes;
pub mod types;

pub use errors::OrganizerError;
pub use types::airport::Airport;
pub use types::flight::Flight;

use linked_list::{DeepCopy, LinkedList};
use logger::Logger;

use paths::PathFinder;
use types::eq_ignore_case;

/// The registry: one linked list of airports, each owning its outgoing
/// flight list. Airports are appended and never reordered; codes are
/// unique at insertion time.
pub struct FlightOrganizer {
    airports: LinkedList<Airport>,
    logger: Logger,
}

impl FlightOrganizer {
    /// Creates the registry seeded with the five predefined airports.
    pub fn new() -> Self {
        let mut organizer = FlightOrganizer {
            airports: LinkedList::new(),
            logger: Logger::new(false, None),
        };
        organizer.seed_airports();
        organizer
    }

    fn seed_airports(&mut self) {
        self.airports.add_last(Airport::new("Belo Horizonte", "CNF"));
        self.airports.add_last(Airport::new("Brasília", "BSB"));
        self.airports.add_last(Airport::new("Rio de Janeiro", "GIG"));
        self.airports.add_last(Airport::new("Salvador", "SSA"));
        self.airports.add_last(Airport::new("São Paulo", "GRU"));
    }

    fn has_airport(&self, code: &str) -> bool {
        self.airports
            .find_map(|a| if a.matches_code(code) { Some(()) } else { None })
            .is_some()
    }

    /// Looks up the registered name for a code, case-insensitively.
    pub fn airport_name(&self, code: &str) -> Option<String> {
        self.airports.find_map(|a| {
            if a.matches_code(code) {
                Some(a.name.clone())
            } else {
                None
            }
        })
    }

    fn flight_number_exists(&self, flight_number: i32) -> bool {
        self.airports
            .find_map(|a| {
                if a.has_flight(flight_number) {
                    Some(())
                } else {
                    None
                }
            })
            .is_some()
    }

    /// Registers a new airport; the code must not collide with any
    /// registered one (case-insensitively).
    pub fn add_airport(&mut self, name: &str, code: &str) -> Result<(), OrganizerError> {
        if self.has_airport(code) {
            return Err(OrganizerError::DuplicateAirportCode(code.to_uppercase()));
        }
        self.airports.add_last(Airport::new(name, code));
        self.logger
            .info(&format!("airport registered: {} ({})", name, code.to_uppercase()));
        Ok(())
    }

    /// Registers a flight edge from `source_code` to `dest_code`. Flight
    /// numbers are unique across the whole registry.
    pub fn add_flight(
        &mut self,
        source_code: &str,
        dest_code: &str,
        flight_number: i32,
    ) -> Result<(), OrganizerError> {
        if !self.has_airport(source_code) {
            return Err(OrganizerError::SourceNotFound(source_code.to_uppercase()));
        }
        if !self.has_airport(dest_code) {
            return Err(OrganizerError::DestinationNotFound(dest_code.to_uppercase()));
        }
        if self.flight_number_exists(flight_number) {
            return Err(OrganizerError::DuplicateFlightNumber(flight_number));
        }
        let _ = self.airports.update_first_match(
            |a| a.matches_code(source_code),
            |a| a.flights.add_last(Flight::new(dest_code, flight_number)),
        );
        self.logger.info(&format!(
            "flight {} registered: {} -> {}",
            flight_number,
            source_code.to_uppercase(),
            dest_code.to_uppercase()
        ));
        Ok(())
    }

    /// Removes a flight by number from whichever airport holds it.
    pub fn remove_flight(&mut self, flight_number: i32) -> Result<(), OrganizerError> {
        let removed = self.airports.update_first_match(
            |a| a.has_flight(flight_number),
            |a| {
                a.flights
                    .remove_first_match(|f| f.flight_number() == flight_number)
            },
        );
        match removed {
            Some(true) => {
                self.logger
                    .info(&format!("flight {} removed", flight_number));
                Ok(())
            }
            _ => Err(OrganizerError::FlightNotFound(flight_number)),
        }
    }

    /// Registered airports as (name, code) pairs, in registration order.
    pub fn list_airports(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.airports
            .for_each(|a| out.push((a.name.clone(), a.code.clone())));
        out
    }

    /// Outgoing flights of an airport as (number, destination code,
    /// destination name) tuples; an unregistered destination is reported
    /// as "unknown".
    pub fn flights_from(
        &self,
        code: &str,
    ) -> Result<Vec<(i32, String, String)>, OrganizerError> {
        let mut cursor = self
            .airports
            .find_map(|a| {
                if a.matches_code(code) {
                    Some(a.flights.head())
                } else {
                    None
                }
            })
            .ok_or_else(|| OrganizerError::AirportNotFound(code.to_uppercase()))?;

        let mut out = Vec::new();
        while let Some((number, dest_code)) = cursor.with(|f| {
            (f.flight_number(), f.destination_code().to_string())
        }) {
            let dest_name = self
                .airport_name(&dest_code)
                .unwrap_or_else(|| "unknown".to_string());
            out.push((number, dest_code, dest_name));
            cursor.advance();
        }
        Ok(out)
    }

    /// All simple paths between two registered airports, in first-found
    /// order. Performs no traversal when either code is unknown.
    pub fn find_simple_paths(
        &self,
        source_code: &str,
        dest_code: &str,
    ) -> Result<Vec<Vec<String>>, OrganizerError> {
        if !self.has_airport(source_code) {
            return Err(OrganizerError::AirportNotFound(source_code.to_uppercase()));
        }
        if !self.has_airport(dest_code) {
            return Err(OrganizerError::AirportNotFound(dest_code.to_uppercase()));
        }
        Ok(PathFinder::new(&self.airports).find_simple_paths(source_code, dest_code))
    }

    /// Every possible route between two distinct registered airports,
    /// through every ordering of every subset of the other registered
    /// airports, regardless of real edges.
    pub fn enumerate_all_routes(
        &self,
        source_code: &str,
        dest_code: &str,
    ) -> Result<Vec<Vec<String>>, OrganizerError> {
        if eq_ignore_case(source_code, dest_code) {
            return Err(OrganizerError::SameAirport(source_code.to_uppercase()));
        }
        if !self.has_airport(source_code) {
            return Err(OrganizerError::AirportNotFound(source_code.to_uppercase()));
        }
        if !self.has_airport(dest_code) {
            return Err(OrganizerError::AirportNotFound(dest_code.to_uppercase()));
        }

        let mut pool = Vec::new();
        self.airports.for_each(|a| {
            if !a.matches_code(source_code) && !a.matches_code(dest_code) {
                pool.push(a.code.to_uppercase());
            }
        });
        Ok(routes::enumerate_routes(source_code, dest_code, &pool))
    }

    /// Deep copy of the whole registry. A degraded copy (one that had to
    /// share references) is still returned, but logged as a warning.
    pub fn snapshot(&mut self) -> LinkedList<Airport> {
        let copied = self.airports.deep_copy();
        if copied.is_degraded() {
            self.logger
                .warn("registry snapshot degraded to shared references");
        }
        copied.into_value()
    }
}

impl Default for FlightOrganizer {
    fn default() -> Self {
        FlightOrganizer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_airports_are_registered_in_order() {
        let organizer = FlightOrganizer::new();
        let codes: Vec<String> = organizer
            .list_airports()
            .into_iter()
            .map(|(_, code)| code)
            .collect();
        assert_eq!(codes, vec!["CNF", "BSB", "GIG", "SSA", "GRU"]);
    }

    #[test]
    fn test_duplicate_airport_code_is_rejected() {
        let mut organizer = FlightOrganizer::new();
        assert_eq!(
            organizer.add_airport("Congonhas", "gru"),
            Err(OrganizerError::DuplicateAirportCode("GRU".to_string()))
        );
        assert_eq!(organizer.list_airports().len(), 5);
    }

    #[test]
    fn test_add_flight_validates_both_endpoints() {
        let mut organizer = FlightOrganizer::new();
        assert_eq!(
            organizer.add_flight("XXX", "GIG", 100),
            Err(OrganizerError::SourceNotFound("XXX".to_string()))
        );
        assert_eq!(
            organizer.add_flight("CNF", "YYY", 100),
            Err(OrganizerError::DestinationNotFound("YYY".to_string()))
        );
        assert!(organizer.add_flight("CNF", "GIG", 100).is_ok());
    }

    #[test]
    fn test_flight_numbers_are_unique_across_airports() {
        let mut organizer = FlightOrganizer::new();
        organizer.add_flight("CNF", "GIG", 100).unwrap();
        assert_eq!(
            organizer.add_flight("GRU", "SSA", 100),
            Err(OrganizerError::DuplicateFlightNumber(100))
        );
    }

    #[test]
    fn test_remove_flight() {
        let mut organizer = FlightOrganizer::new();
        organizer.add_flight("CNF", "GIG", 100).unwrap();
        assert!(organizer.remove_flight(100).is_ok());
        assert_eq!(
            organizer.remove_flight(100),
            Err(OrganizerError::FlightNotFound(100))
        );
        assert!(organizer.flights_from("CNF").unwrap().is_empty());
    }

    #[test]
    fn test_flights_from_reports_destination_names() {
        let mut organizer = FlightOrganizer::new();
        organizer.add_flight("CNF", "GIG", 100).unwrap();
        let flights = organizer.flights_from("cnf").unwrap();
        assert_eq!(
            flights,
            vec![(100, "GIG".to_string(), "Rio de Janeiro".to_string())]
        );
    }

    #[test]
    fn test_flights_from_unknown_airport_is_an_error() {
        let organizer = FlightOrganizer::new();
        assert_eq!(
            organizer.flights_from("XXX"),
            Err(OrganizerError::AirportNotFound("XXX".to_string()))
        );
    }

    #[test]
    fn test_enumerate_all_routes_rejects_identical_codes() {
        let organizer = FlightOrganizer::new();
        assert_eq!(
            organizer.enumerate_all_routes("GRU", "gru"),
            Err(OrganizerError::SameAirport("GRU".to_string()))
        );
    }

    #[test]
    fn test_find_simple_paths_requires_registered_codes() {
        let organizer = FlightOrganizer::new();
        assert_eq!(
            organizer.find_simple_paths("GRU", "XXX"),
            Err(OrganizerError::AirportNotFound("XXX".to_string()))
        );
    }

    #[test]
    fn test_snapshot_is_independent_of_the_registry() {
        let mut organizer = FlightOrganizer::new();
        organizer.add_flight("CNF", "GIG", 100).unwrap();

        let mut snapshot = organizer.snapshot();
        let _ = snapshot.update_first_match(
            |a| a.matches_code("CNF"),
            |a| a.flights.add_last(Flight::new("SSA", 200)),
        );

        assert_eq!(organizer.flights_from("CNF").unwrap().len(), 1);
    }
}
