//! This module provides the static element table used throughout the library.
//!
//! It maps atomic numbers to the lower-case element symbols under which basis
//! sets index their entries, covering hydrogen (1) through curium (96). All
//! lookups go through fallible accessors so an out-of-range atomic number or
//! an unrecognized symbol surfaces as a `BasisError` instead of an undefined
//! lookup.

use crate::error::BasisError;

/// The number of elements covered by the table.
pub const ELEMENT_COUNT: usize = 96;

/// Lower-case element symbols indexed by atomic number minus one.
///
/// Basis-set data files key their entries by these symbols, so the table uses
/// the lower-case spelling rather than the conventional capitalized one.
const SYMBOLS: [&str; ELEMENT_COUNT] = [
    "h", "he", "li", "be", "b", "c", "n", "o", "f", "ne", "na", "mg", "al", "si", "p", "s", "cl",
    "ar", "k", "ca", "sc", "ti", "v", "cr", "mn", "fe", "co", "ni", "cu", "zn", "ga", "ge", "as",
    "se", "br", "kr", "rb", "sr", "y", "zr", "nb", "mo", "tc", "ru", "rh", "pd", "ag", "cd", "in",
    "sn", "sb", "te", "i", "xe", "cs", "ba", "la", "ce", "pr", "nd", "pm", "sm", "eu", "gd", "tb",
    "dy", "ho", "er", "tm", "yb", "lu", "hf", "ta", "w", "re", "os", "ir", "pt", "au", "hg", "tl",
    "pb", "bi", "po", "at", "rn", "fr", "ra", "ac", "th", "pa", "u", "np", "pu", "am", "cm",
];

/// Returns the lower-case symbol for the given atomic number.
///
/// # Arguments
///
/// * `atomic_number` - The atomic number of the element (1 for hydrogen).
///
/// # Errors
///
/// Returns `BasisError::UnknownElement` if the atomic number is zero or
/// greater than 96.
///
/// # Examples
///
/// ```
/// use gbasis::elements;
///
/// assert_eq!(elements::symbol(6).unwrap(), "c");
/// assert!(elements::symbol(0).is_err());
/// ```
pub fn symbol(atomic_number: u8) -> Result<&'static str, BasisError> {
    SYMBOLS
        .get(atomic_number.wrapping_sub(1) as usize)
        .copied()
        .ok_or(BasisError::UnknownElement(atomic_number))
}

/// Returns the atomic number for the given element symbol.
///
/// The lookup is case-insensitive, so `"Fe"`, `"fe"`, and `"FE"` all resolve
/// to 26.
///
/// # Arguments
///
/// * `symbol` - The element symbol to resolve.
///
/// # Errors
///
/// Returns `BasisError::UnknownSymbol` if the symbol does not name any of the
/// 96 supported elements.
///
/// # Examples
///
/// ```
/// use gbasis::elements;
///
/// assert_eq!(elements::atomic_number("Fe").unwrap(), 26);
/// assert!(elements::atomic_number("xx").is_err());
/// ```
pub fn atomic_number(symbol: &str) -> Result<u8, BasisError> {
    let normalized = symbol.to_ascii_lowercase();
    SYMBOLS
        .iter()
        .position(|&s| s == normalized)
        .map(|index| (index + 1) as u8)
        .ok_or_else(|| BasisError::UnknownSymbol(symbol.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_known_elements() {
        assert_eq!(symbol(1).unwrap(), "h");
        assert_eq!(symbol(8).unwrap(), "o");
        assert_eq!(symbol(26).unwrap(), "fe");
        assert_eq!(symbol(96).unwrap(), "cm");
    }

    #[test]
    fn test_symbol_out_of_range() {
        assert!(matches!(symbol(0), Err(BasisError::UnknownElement(0))));
        assert!(matches!(symbol(97), Err(BasisError::UnknownElement(97))));
        assert!(matches!(symbol(255), Err(BasisError::UnknownElement(255))));
    }

    #[test]
    fn test_atomic_number_case_insensitive() {
        assert_eq!(atomic_number("fe").unwrap(), 26);
        assert_eq!(atomic_number("Fe").unwrap(), 26);
        assert_eq!(atomic_number("FE").unwrap(), 26);
    }

    #[test]
    fn test_atomic_number_unknown_symbol() {
        assert!(matches!(
            atomic_number("xx"),
            Err(BasisError::UnknownSymbol(_))
        ));
        assert!(matches!(
            atomic_number(""),
            Err(BasisError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_table_round_trip() {
        for z in 1..=ELEMENT_COUNT as u8 {
            let s = symbol(z).unwrap();
            assert_eq!(atomic_number(s).unwrap(), z);
        }
    }
}
