mod input;

use flight_organizer::FlightOrganizer;
use input::{get_int, get_non_empty_string};

fn main() {
    let mut organizer = FlightOrganizer::new();
    loop {
        let option = display_menu();
        if option == 0 {
            eprintln!("Exiting...");
            break;
        }
        handle_option(&mut organizer, option);
    }
}

fn display_menu() -> i32 {
    println!("\nMenu:");
    println!("1. Register airport");
    println!("2. Register flight");
    println!("3. Remove flight");
    println!("4. List flights from an airport");
    println!("5. List paths between airports");
    println!("6. List airports");
    println!("7. List every possible route between two airports");
    println!("0. Exit");
    get_int("Choose an option: ")
}

fn handle_option(organizer: &mut FlightOrganizer, option: i32) {
    match option {
        1 => register_airport(organizer),
        2 => register_flight(organizer),
        3 => remove_flight(organizer),
        4 => list_flights(organizer),
        5 => list_paths(organizer),
        6 => list_airports(organizer),
        7 => list_all_routes(organizer),
        _ => eprintln!("Invalid option."),
    }
}

fn register_airport(organizer: &mut FlightOrganizer) {
    let name = get_non_empty_string("Enter the airport name: ");
    let code = get_non_empty_string("Enter the airport code: ");
    match organizer.add_airport(&name, &code) {
        Ok(()) => println!("Airport registered."),
        Err(e) => eprintln!("{}", e),
    }
}

fn register_flight(organizer: &mut FlightOrganizer) {
    let source = get_non_empty_string("Enter the source airport code: ");
    let dest = get_non_empty_string("Enter the destination airport code: ");
    let number = get_int("Enter the flight number: ");
    match organizer.add_flight(&source, &dest, number) {
        Ok(()) => println!("Flight registered."),
        Err(e) => eprintln!("{}", e),
    }
}

fn remove_flight(organizer: &mut FlightOrganizer) {
    let number = get_int("Enter the flight number to remove: ");
    match organizer.remove_flight(number) {
        Ok(()) => println!("Flight removed."),
        Err(e) => eprintln!("{}", e),
    }
}

fn list_flights(organizer: &FlightOrganizer) {
    let code = get_non_empty_string("Enter the airport code: ");
    match organizer.flights_from(&code) {
        Ok(flights) => {
            let name = organizer.airport_name(&code).unwrap_or_default();
            println!("Flights from {}:", name);
            if flights.is_empty() {
                println!("No flights registered.");
            }
            for (number, dest_code, dest_name) in flights {
                println!("Flight {} to {} ({})", number, dest_name, dest_code);
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}

fn list_paths(organizer: &FlightOrganizer) {
    let source = get_non_empty_string("Enter the source airport code: ");
    let dest = get_non_empty_string("Enter the destination airport code: ");
    match organizer.find_simple_paths(&source, &dest) {
        Ok(paths) => {
            if paths.is_empty() {
                println!("No paths found.");
                return;
            }
            println!(
                "Possible paths from {} to {}:",
                source.to_uppercase(),
                dest.to_uppercase()
            );
            for path in paths {
                println!("{}", path.join(" -> "));
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}

fn list_airports(organizer: &FlightOrganizer) {
    println!("Registered airports:");
    for (name, code) in organizer.list_airports() {
        println!("{} ({})", name, code);
    }
}

fn list_all_routes(organizer: &FlightOrganizer) {
    let source = get_non_empty_string("Enter the source airport code: ");
    let dest = get_non_empty_string("Enter the destination airport code: ");
    match organizer.enumerate_all_routes(&source, &dest) {
        Ok(routes) => {
            println!(
                "Listing every possible route from {} to {}:\n",
                source.to_uppercase(),
                dest.to_uppercase()
            );
            for (i, route) in routes.iter().enumerate() {
                println!("Route {}: {}", i + 1, route.join(" -> "));
            }
            println!("\nTotal possible routes: {}", routes.len());
        }
        Err(e) => eprintln!("{}", e),
    }
}
