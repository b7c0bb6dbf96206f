//! Depth-first discovery of simple paths over real flight edges.

use linked_list::{Cursor, LinkedList};

use crate::types::airport::Airport;
use crate::types::flight::Flight;

/// Walks the flight graph held in a registry's airport list and collects
/// every simple path (no repeated airport) between two codes.
///
/// The search backtracks over an explicit (path, visited) pair; outgoing
/// edges are explored in their list's traversal order, so the discovered
/// paths come out in a deterministic first-found order.
pub struct PathFinder<'a> {
    airports: &'a LinkedList<Airport>,
}

impl<'a> PathFinder<'a> {
    pub fn new(airports: &'a LinkedList<Airport>) -> Self {
        PathFinder { airports }
    }

    /// All simple paths from `source` to `dest`, each as a sequence of
    /// upper-cased airport codes. Callers must have validated that both
    /// codes exist.
    pub fn find_simple_paths(&self, source: &str, dest: &str) -> Vec<Vec<String>> {
        let mut path = LinkedList::new();
        let mut visited = LinkedList::new();
        let mut found = Vec::new();
        self.explore(
            &source.to_uppercase(),
            &dest.to_uppercase(),
            &mut path,
            &mut visited,
            &mut found,
        );
        found
    }

    fn explore(
        &self,
        current: &str,
        dest: &str,
        path: &mut LinkedList<String>,
        visited: &mut LinkedList<String>,
        found: &mut Vec<Vec<String>>,
    ) {
        path.add_last(current.to_string());
        visited.add_last(current.to_string());

        if current == dest {
            found.push(path.to_vec());
        } else if let Some(mut flights) = self.outgoing(current) {
            // A dead end simply falls through to the backtrack below.
            while let Some(next) = flights.with(|f| f.destination_code().to_uppercase()) {
                if !visited.contains(&next) {
                    self.explore(&next, dest, path, visited, found);
                }
                flights.advance();
            }
        }

        path.remove_last();
        visited.remove_last();
    }

    fn outgoing(&self, code: &str) -> Option<Cursor<Flight>> {
        self.airports.find_map(|airport| {
            if airport.matches_code(code) {
                Some(airport.flights.head())
            } else {
                None
            }
        })
    }
}
