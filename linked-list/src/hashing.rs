//! Structural hashing.
//!
//! [`HashCode`] produces an `i64` hash that agrees with structural
//! equality: equal values hash equal. Unequal values are allowed to
//! collide. Strings use the classic 31-based rolling hash so that two
//! texts compare and hash consistently; lists accumulate element hashes
//! in traversal order (see [`LinkedList::hash_code`]).

use crate::LinkedList;

pub trait HashCode {
    fn hash_code(&self) -> i64;
}

/// 31-based rolling hash over the characters of `s`, with wrapping
/// arithmetic.
pub fn string_hash(s: &str) -> i64 {
    s.chars()
        .fold(0i64, |hash, c| hash.wrapping_mul(31).wrapping_add(c as i64))
}

/// Clamps a hash to a non-negative value by negating it.
pub fn non_negative(hash: i64) -> i64 {
    if hash < 0 {
        hash.wrapping_neg()
    } else {
        hash
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i64 {
        string_hash(self)
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i64 {
        string_hash(self)
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i64 {
        if *self {
            1
        } else {
            0
        }
    }
}

macro_rules! impl_hash_code_for_integers {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                fn hash_code(&self) -> i64 {
                    *self as i64
                }
            }
        )*
    };
}

impl_hash_code_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, usize);

impl<T: HashCode> HashCode for LinkedList<T> {
    fn hash_code(&self) -> i64 {
        LinkedList::hash_code(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_matches_the_rolling_formula() {
        // 97 * 31^2 + 98 * 31 + 99
        assert_eq!(string_hash("abc"), 96354);
        assert_eq!(string_hash(""), 0);
    }

    #[test]
    fn test_equal_strings_hash_equal() {
        assert_eq!("gru".hash_code(), String::from("gru").hash_code());
    }

    #[test]
    fn test_non_negative_clamp() {
        assert_eq!(non_negative(-5), 5);
        assert_eq!(non_negative(5), 5);
        assert_eq!(non_negative(0), 0);
    }

    #[test]
    fn test_integer_hash_is_identity() {
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!((-3i64).hash_code(), -3);
    }
}
