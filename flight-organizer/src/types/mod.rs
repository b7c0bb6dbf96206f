pub mod airport;
pub mod flight;

/// Case-insensitive text comparison used for airport names and codes.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
