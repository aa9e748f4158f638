//! Password generation via rejection sampling.

use std::fmt;

use zeroize::Zeroize;

use super::charset::Selection;
use crate::rng;

/// Why a generation request was refused before sampling started.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// No character classes selected, so there is nothing to draw from.
    EmptyPool,
    /// Fewer positions than required classes: no candidate of this length
    /// can contain one character from each class, so the sampling loop
    /// could never terminate.
    ImpossibleLength { length: usize, required: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::EmptyPool => write!(f, "character pool is empty"),
            GenerateError::ImpossibleLength { length, required } => write!(
                f,
                "length {length} is too short to include all {required} chosen character types"
            ),
        }
    }
}

/// Generate a password of `length` characters drawn uniformly from `pool`,
/// redrawing until every class in `required` is represented.
///
/// `pool` must be the pool built from `required` (see `charset::build`).
/// Rejected candidates are zeroized before the redraw.
pub fn generate(length: usize, pool: &[u8], required: Selection) -> Result<String, GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }
    let required_count = required.count();
    if length < required_count {
        return Err(GenerateError::ImpossibleLength { length, required: required_count });
    }

    loop {
        let mut candidate: Vec<u8> =
            (0..length).map(|_| pool[rng::index(pool.len())]).collect();
        if satisfies(&candidate, required) {
            // Safety: the pool is ASCII only
            return Ok(unsafe { String::from_utf8_unchecked(candidate) });
        }
        candidate.zeroize();
    }
}

/// True when every required class has at least one character in the candidate.
fn satisfies(candidate: &[u8], required: Selection) -> bool {
    required.classes().all(|class| candidate.iter().any(|&b| class.contains(b)))
}

#[cfg(test)]
mod tests {
    use super::super::charset::{self, CharClass, Selection};
    use super::*;

    const ALL: Selection = Selection { letters: true, digits: true, symbols: true };
    const LETTERS_DIGITS: Selection = Selection { letters: true, digits: true, symbols: false };
    const LETTERS_ONLY: Selection = Selection { letters: true, digits: false, symbols: false };

    #[test]
    fn test_letters_and_digits_length_eight() {
        let pool = charset::build(LETTERS_DIGITS);
        for _ in 0..64 {
            let password = generate(8, &pool, LETTERS_DIGITS).unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.bytes().any(|b| b.is_ascii_alphabetic()));
            assert!(password.bytes().any(|b| b.is_ascii_digit()));
            // Symbols were not selected, so the pool contains none.
            assert!(password.bytes().all(|b| !b.is_ascii_punctuation()));
            assert!(password.bytes().all(|b| pool.contains(&b)));
        }
    }

    #[test]
    fn test_all_classes_length_twelve() {
        let pool = charset::build(ALL);
        for _ in 0..64 {
            let password = generate(12, &pool, ALL).unwrap();
            assert_eq!(password.len(), 12);
            for class in CharClass::ALL {
                assert!(
                    password.bytes().any(|b| class.contains(b)),
                    "{:?} missing from {:?}",
                    class,
                    password
                );
            }
        }
    }

    #[test]
    fn test_single_letter() {
        let pool = charset::build(LETTERS_ONLY);
        let password = generate(1, &pool, LETTERS_ONLY).unwrap();
        assert_eq!(password.len(), 1);
        assert!(password.bytes().all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn test_length_equal_to_class_count() {
        // Tightest satisfiable case: three positions, three required classes.
        let pool = charset::build(ALL);
        let password = generate(3, &pool, ALL).unwrap();
        assert_eq!(password.len(), 3);
        for class in CharClass::ALL {
            assert!(password.bytes().any(|b| class.contains(b)));
        }
    }

    #[test]
    fn test_length_below_class_count_is_refused() {
        let pool = charset::build(LETTERS_DIGITS);
        assert_eq!(
            generate(1, &pool, LETTERS_DIGITS),
            Err(GenerateError::ImpossibleLength { length: 1, required: 2 })
        );
    }

    #[test]
    fn test_empty_pool_is_refused() {
        assert_eq!(
            generate(8, &[], Selection::default()),
            Err(GenerateError::EmptyPool)
        );
    }
}
