use flight_organizer::{FlightOrganizer, OrganizerError};

fn codes(path: &[&str]) -> Vec<String> {
    path.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_seeded_registry_single_direct_path() {
    let mut organizer = FlightOrganizer::new();
    organizer.add_flight("CNF", "GIG", 100).unwrap();

    let paths = organizer.find_simple_paths("CNF", "GIG").unwrap();
    assert_eq!(paths, vec![codes(&["CNF", "GIG"])]);

    organizer.remove_flight(100).unwrap();
    let paths = organizer.find_simple_paths("CNF", "GIG").unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_cycle_search_terminates_without_a_path() {
    let mut organizer = FlightOrganizer::new();
    organizer.add_flight("CNF", "BSB", 1).unwrap();
    organizer.add_flight("BSB", "GIG", 2).unwrap();
    organizer.add_flight("GIG", "CNF", 3).unwrap();

    // SSA has no incoming edge; the cycle must not loop the search.
    let paths = organizer.find_simple_paths("CNF", "SSA").unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_multi_hop_paths_are_found_in_edge_order() {
    let mut organizer = FlightOrganizer::new();
    organizer.add_flight("GRU", "CNF", 10).unwrap();
    organizer.add_flight("GRU", "GIG", 11).unwrap();
    organizer.add_flight("CNF", "GIG", 12).unwrap();

    let paths = organizer.find_simple_paths("GRU", "GIG").unwrap();
    assert_eq!(
        paths,
        vec![codes(&["GRU", "CNF", "GIG"]), codes(&["GRU", "GIG"])]
    );
}

#[test]
fn test_route_enumeration_over_the_seed_registry() {
    let organizer = FlightOrganizer::new();
    let routes = organizer.enumerate_all_routes("GRU", "GIG").unwrap();

    // Three intermediates (CNF, BSB, SSA): 1 + 3 + 6 + 6 routes.
    assert_eq!(routes.len(), 16);
    assert_eq!(routes[0], codes(&["GRU", "GIG"]));

    // All six orderings of the full intermediate set, each exactly once.
    let full: Vec<_> = routes.iter().filter(|r| r.len() == 5).collect();
    assert_eq!(full.len(), 6);
    let target = codes(&["GRU", "CNF", "BSB", "SSA", "GIG"]);
    assert_eq!(routes.iter().filter(|r| **r == target).count(), 1);
}

#[test]
fn test_route_enumeration_ignores_real_edges() {
    // No flights registered at all; the enumeration is unaffected.
    let organizer = FlightOrganizer::new();
    let routes = organizer.enumerate_all_routes("CNF", "BSB").unwrap();
    assert_eq!(routes.len(), 16);
}

#[test]
fn test_registered_airport_joins_the_intermediate_pool() {
    let mut organizer = FlightOrganizer::new();
    organizer.add_airport("Curitiba", "CWB").unwrap();
    let routes = organizer.enumerate_all_routes("GRU", "GIG").unwrap();
    // Four intermediates: 1 + 4 + 12 + 24 + 24.
    assert_eq!(routes.len(), 65);
}

#[test]
fn test_errors_leave_the_registry_unchanged() {
    let mut organizer = FlightOrganizer::new();
    organizer.add_flight("CNF", "GIG", 100).unwrap();

    assert_eq!(
        organizer.add_flight("CNF", "GIG", 100),
        Err(OrganizerError::DuplicateFlightNumber(100))
    );
    assert_eq!(
        organizer.add_airport("Galeão", "gig"),
        Err(OrganizerError::DuplicateAirportCode("GIG".to_string()))
    );

    assert_eq!(organizer.list_airports().len(), 5);
    assert_eq!(organizer.flights_from("CNF").unwrap().len(), 1);
}

#[test]
fn test_codes_are_matched_case_insensitively_end_to_end() {
    let mut organizer = FlightOrganizer::new();
    organizer.add_flight("cnf", "gig", 100).unwrap();

    let flights = organizer.flights_from("CNF").unwrap();
    assert_eq!(flights[0].0, 100);

    let paths = organizer.find_simple_paths("cnf", "GIG").unwrap();
    assert_eq!(paths, vec![codes(&["CNF", "GIG"])]);
}
