use std::fmt;

use linked_list::{hashing, CopyOutcome, DeepCopy, HashCode};

use crate::types::eq_ignore_case;

/// A directed flight edge: destination airport code plus flight number.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Flight {
    destination_code: String,
    flight_number: i32,
}

impl Flight {
    pub fn new(destination_code: &str, flight_number: i32) -> Self {
        Flight {
            destination_code: destination_code.to_string(),
            flight_number,
        }
    }

    pub fn destination_code(&self) -> &str {
        &self.destination_code
    }

    pub fn flight_number(&self) -> i32 {
        self.flight_number
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.flight_number == other.flight_number
            && eq_ignore_case(&self.destination_code, &other.destination_code)
    }
}

impl HashCode for Flight {
    fn hash_code(&self) -> i64 {
        let mut hash: i64 = 1;
        hash = hash
            .wrapping_mul(31)
            .wrapping_add(self.destination_code.to_lowercase().hash_code());
        hash = hash.wrapping_mul(31).wrapping_add(self.flight_number as i64);
        hashing::non_negative(hash)
    }
}

impl DeepCopy for Flight {
    fn deep_copy(&self) -> CopyOutcome<Self> {
        let destination_code = self.destination_code.deep_copy();
        CopyOutcome {
            value: Flight {
                destination_code: destination_code.value,
                flight_number: self.flight_number,
            },
            fidelity: destination_code.fidelity,
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flight {} to {}", self.flight_number, self.destination_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_destination_case() {
        assert_eq!(Flight::new("gig", 100), Flight::new("GIG", 100));
        assert_ne!(Flight::new("GIG", 100), Flight::new("GIG", 101));
        assert_ne!(Flight::new("GIG", 100), Flight::new("SSA", 100));
    }

    #[test]
    fn test_equal_flights_hash_equal() {
        assert_eq!(
            Flight::new("gig", 100).hash_code(),
            Flight::new("GIG", 100).hash_code()
        );
    }

    #[test]
    fn test_hash_is_non_negative() {
        assert!(Flight::new("GIG", i32::MIN).hash_code() >= 0);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let flight = Flight::new("GIG", 100);
        let copied = flight.deep_copy();
        assert!(!copied.is_degraded());
        assert_eq!(copied.value, flight);
    }
}
