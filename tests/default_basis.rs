use gbasis::{elements, get_default_basis};

#[test]
fn test_default_basis_loads_and_is_well_formed() {
    let basis = get_default_basis();
    for (&z, atom) in &basis.atoms {
        atom.validate()
            .unwrap_or_else(|e| panic!("default entry for atomic number {} is malformed: {}", z, e));
        assert_eq!(atom.symbol, elements::symbol(z).unwrap());
    }
}

#[test]
fn test_default_basis_covers_light_elements() {
    let basis = get_default_basis();
    for z in [1u8, 6, 7, 8] {
        assert!(
            basis.get(z).is_ok(),
            "default basis should contain atomic number {}",
            z
        );
    }
}

#[test]
fn test_default_hydrogen_shape() {
    let hydrogen = get_default_basis().get(1).unwrap();
    assert_eq!(hydrogen.symbol, "h");
    assert_eq!(hydrogen.shell_count(), 3);
    assert_eq!(hydrogen.primitive_count(), 7);
    assert_eq!(hydrogen.basis_format, vec![0, 0, 1]);
}

#[test]
fn test_default_second_row_shape() {
    let basis = get_default_basis();
    for z in [6u8, 7, 8] {
        let atom = basis.get(z).unwrap();
        assert_eq!(atom.shell_count(), 5, "Z = {}", z);
        assert_eq!(atom.primitive_count(), 6, "Z = {}", z);
        assert_eq!(atom.basis_format, vec![0, 0, 1, 1, 2], "Z = {}", z);
    }
}

#[test]
fn test_default_exponents_are_positive_and_descending() {
    let basis = get_default_basis();
    for (z, atom) in &basis.atoms {
        assert!(
            atom.exponents.iter().all(|&e| e > 0.0),
            "Z = {} has a non-positive exponent",
            z
        );
        assert!(
            atom.exponents.windows(2).all(|pair| pair[0] > pair[1]),
            "Z = {} exponents are not strictly descending",
            z
        );
    }
}
