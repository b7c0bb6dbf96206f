use std::fmt;

use linked_list::{hashing, CopyOutcome, DeepCopy, HashCode, LinkedList};

use crate::types::eq_ignore_case;
use crate::types::flight::Flight;

/// An airport plus its outgoing flight edges.
///
/// Equality considers only the name and the code, both
/// case-insensitively; the outgoing list is identity data, not part of
/// the airport's value.
#[derive(Debug)]
pub struct Airport {
    pub name: String,
    pub code: String,
    pub flights: LinkedList<Flight>,
}

impl Airport {
    pub fn new(name: &str, code: &str) -> Self {
        Airport {
            name: name.to_string(),
            code: code.to_string(),
            flights: LinkedList::new(),
        }
    }

    pub fn matches_code(&self, code: &str) -> bool {
        eq_ignore_case(&self.code, code)
    }

    pub fn has_flight(&self, flight_number: i32) -> bool {
        self.flights
            .find_map(|flight| {
                if flight.flight_number() == flight_number {
                    Some(())
                } else {
                    None
                }
            })
            .is_some()
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.code, &other.code) && eq_ignore_case(&self.name, &other.name)
    }
}

impl HashCode for Airport {
    fn hash_code(&self) -> i64 {
        let mut hash: i64 = 1;
        hash = hash
            .wrapping_mul(31)
            .wrapping_add(self.code.to_lowercase().hash_code());
        hash = hash
            .wrapping_mul(31)
            .wrapping_add(self.name.to_lowercase().hash_code());
        hashing::non_negative(hash)
    }
}

impl DeepCopy for Airport {
    fn deep_copy(&self) -> CopyOutcome<Self> {
        let name = self.name.deep_copy();
        let code = self.code.deep_copy();
        let flights = self.flights.deep_copy();
        let fidelity = name
            .fidelity
            .combine(code.fidelity)
            .combine(flights.fidelity);
        CopyOutcome {
            value: Airport {
                name: name.value,
                code: code.value,
                flights: flights.value,
            },
            fidelity,
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_case() {
        assert_eq!(
            Airport::new("São Paulo", "GRU"),
            Airport::new("SÃO PAULO", "gru")
        );
        assert_ne!(
            Airport::new("São Paulo", "GRU"),
            Airport::new("Rio de Janeiro", "GIG")
        );
    }

    #[test]
    fn test_equality_ignores_flight_lists() {
        let mut a = Airport::new("São Paulo", "GRU");
        let b = Airport::new("São Paulo", "GRU");
        a.flights.add_last(Flight::new("GIG", 100));
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_airports_hash_equal() {
        assert_eq!(
            Airport::new("São Paulo", "GRU").hash_code(),
            Airport::new("são paulo", "gru").hash_code()
        );
        assert!(Airport::new("São Paulo", "GRU").hash_code() >= 0);
    }

    #[test]
    fn test_deep_copy_detaches_the_flight_list() {
        let mut airport = Airport::new("São Paulo", "GRU");
        airport.flights.add_last(Flight::new("GIG", 100));

        let mut copied = airport.deep_copy().into_value();
        copied.flights.add_last(Flight::new("SSA", 200));

        assert_eq!(airport.flights.len(), 1);
        assert_eq!(copied.flights.len(), 2);
    }

    #[test]
    fn test_has_flight() {
        let mut airport = Airport::new("São Paulo", "GRU");
        airport.flights.add_last(Flight::new("GIG", 100));
        assert!(airport.has_flight(100));
        assert!(!airport.has_flight(200));
    }
}
