use gbasis::{elements, BasisAtom, BasisSet};

/// Builds a small two-element basis set (h and o) with hand-written data.
pub fn water_like_basis() -> BasisSet {
    let mut basis = BasisSet::new();
    basis.atoms.insert(
        1,
        BasisAtom::new(
            "h",
            vec![vec![0.39, 0.61], vec![0.16, 0.85]],
            vec![1.309756377, 0.233135974],
            vec![0, 1],
        )
        .expect("hand-written hydrogen entry must be valid"),
    );
    basis.atoms.insert(
        8,
        BasisAtom::new(
            "o",
            vec![
                vec![0.368662, 0.147148, 0.481431],
                vec![0.030351, 0.011709, 0.052715],
            ],
            vec![12.015954, 3.849621, 1.388401],
            vec![0, 1],
        )
        .expect("hand-written oxygen entry must be valid"),
    );
    basis
}

/// Asserts that every entry of a basis set is structurally valid and that its
/// symbol matches the element table for the atomic number it is keyed under.
pub fn assert_well_formed(basis: &BasisSet) {
    for (&z, atom) in &basis.atoms {
        atom.validate().unwrap_or_else(|e| {
            panic!("basis entry for atomic number {} is malformed: {}", z, e)
        });
        assert_eq!(
            atom.symbol,
            elements::symbol(z).expect("atomic number within table range"),
            "symbol of entry {} disagrees with the element table",
            z
        );
    }
}
