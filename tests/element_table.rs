use gbasis::elements::{self, ELEMENT_COUNT};
use gbasis::BasisError;
use std::collections::HashSet;

#[test]
fn test_table_covers_hydrogen_through_curium() {
    assert_eq!(ELEMENT_COUNT, 96);
    assert_eq!(elements::symbol(1).unwrap(), "h");
    assert_eq!(elements::symbol(96).unwrap(), "cm");
}

#[test]
fn test_symbols_are_lowercase_ascii() {
    for z in 1..=ELEMENT_COUNT as u8 {
        let symbol = elements::symbol(z).unwrap();
        assert!(!symbol.is_empty());
        assert!(symbol.len() <= 2, "symbol '{}' is unexpectedly long", symbol);
        assert!(
            symbol.chars().all(|c| c.is_ascii_lowercase()),
            "symbol '{}' for Z = {} is not lower-case ASCII",
            symbol,
            z
        );
    }
}

#[test]
fn test_symbols_are_pairwise_distinct() {
    let mut seen = HashSet::new();
    for z in 1..=ELEMENT_COUNT as u8 {
        let symbol = elements::symbol(z).unwrap();
        assert!(
            seen.insert(symbol),
            "symbol '{}' appears more than once in the table",
            symbol
        );
    }
    assert_eq!(seen.len(), ELEMENT_COUNT);
}

#[test]
fn test_lookup_round_trip() {
    for z in 1..=ELEMENT_COUNT as u8 {
        let symbol = elements::symbol(z).unwrap();
        assert_eq!(elements::atomic_number(symbol).unwrap(), z);
    }
}

#[test]
fn test_out_of_range_lookups_fail() {
    assert!(matches!(
        elements::symbol(0),
        Err(BasisError::UnknownElement(0))
    ));
    assert!(matches!(
        elements::symbol(97),
        Err(BasisError::UnknownElement(97))
    ));
    assert!(matches!(
        elements::atomic_number("bk"),
        Err(BasisError::UnknownSymbol(_))
    ));
}

#[test]
fn test_well_known_elements() {
    let spot_checks = [
        (6u8, "c"),
        (14, "si"),
        (26, "fe"),
        (53, "i"),
        (79, "au"),
        (92, "u"),
    ];
    for (z, expected) in spot_checks {
        assert_eq!(elements::symbol(z).unwrap(), expected);
        assert_eq!(elements::atomic_number(expected).unwrap(), z);
    }
}
