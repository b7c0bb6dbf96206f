use std::fmt;

/// Errors reported by the registry operations. Every variant leaves the
/// registry unchanged; the console layer keeps running after any of
/// them.
#[derive(Debug, PartialEq, Eq)]
pub enum OrganizerError {
    AirportNotFound(String),
    SourceNotFound(String),
    DestinationNotFound(String),
    DuplicateAirportCode(String),
    DuplicateFlightNumber(i32),
    FlightNotFound(i32),
    SameAirport(String),
}

impl fmt::Display for OrganizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizerError::AirportNotFound(code) => {
                write!(f, "Airport not found: {}", code)
            }
            OrganizerError::SourceNotFound(code) => {
                write!(f, "Source airport not found: {}", code)
            }
            OrganizerError::DestinationNotFound(code) => {
                write!(f, "Destination airport not found: {}", code)
            }
            OrganizerError::DuplicateAirportCode(code) => {
                write!(f, "Airport code already exists: {}", code)
            }
            OrganizerError::DuplicateFlightNumber(number) => {
                write!(f, "Flight number already exists: {}", number)
            }
            OrganizerError::FlightNotFound(number) => {
                write!(f, "Flight not found: {}", number)
            }
            OrganizerError::SameAirport(code) => {
                write!(
                    f,
                    "Source and destination airports must be distinct: {}",
                    code
                )
            }
        }
    }
}
