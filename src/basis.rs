//! This module provides basis-set collections and utilities for loading them from TOML files.
//!
//! It defines the `BasisSet` struct, a mapping from atomic number to `BasisAtom`
//! entries. The module includes deserialization logic to support flexible key
//! formats (atomic numbers or element symbols) in TOML basis files, and it
//! validates the structural invariants of every entry after parsing so that
//! downstream consumers can rely on well-formed data.

use crate::elements;
use crate::error::BasisError;
use crate::types::BasisAtom;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{self, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// A collection of basis-set entries for multiple elements.
///
/// Entries are indexed by atomic number for efficient lookup. The collection
/// is populated by the TOML loader (or programmatically) and is intended to be
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisSet {
    /// A mapping from atomic number to the corresponding basis entry.
    #[serde(
        serialize_with = "serialize_atom_map",
        deserialize_with = "deserialize_atom_map"
    )]
    pub atoms: HashMap<u8, BasisAtom>,
}

impl BasisSet {
    /// Loads a basis set from a TOML file.
    ///
    /// The file should contain an `[atoms]` table with one entry per element,
    /// keyed by atomic number or element symbol.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the TOML file containing the basis-set data.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::IoError` if the file cannot be read,
    /// `BasisError::DeserializationError` if the TOML content is invalid, or a
    /// structural error if any entry violates the basis invariants.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gbasis::BasisSet;
    /// use std::path::Path;
    ///
    /// let basis = BasisSet::load_from_file(Path::new("dzvp.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, BasisError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| BasisError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses a basis set from a TOML string.
    ///
    /// Entries may be keyed by atomic number (as a string) or by element
    /// symbol; symbols are resolved case-insensitively through the element
    /// table. An entry may omit its `symbol` field, in which case the symbol
    /// is filled in from the key; a symbol contradicting the key is rejected,
    /// and a matching one is normalized to the table's lower-case spelling.
    /// Every entry is validated against the structural basis invariants.
    ///
    /// # Arguments
    ///
    /// * `toml_str` - A string slice containing valid TOML basis-set data.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::DeserializationError` if the TOML content is
    /// invalid or contains unrecognized element keys,
    /// `BasisError::SymbolMismatch` if an entry's `symbol` field contradicts
    /// the key it is stored under, or a structural error
    /// (`ShellCountMismatch`, `PrimitiveCountMismatch`, `EmptyBasis`) if an
    /// entry is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbasis::BasisSet;
    ///
    /// let toml_data = r#"
    /// [atoms]
    /// h = { coefficients = [[0.39, 0.61]], exponents = [1.309, 0.233], basis_format = [0] }
    /// "#;
    ///
    /// let basis = BasisSet::load_from_str(toml_data).unwrap();
    /// assert_eq!(basis.get(1).unwrap().symbol, "h");
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, BasisError> {
        let mut basis: Self = toml::from_str(toml_str)?;

        for (&z, atom) in basis.atoms.iter_mut() {
            let canonical = elements::symbol(z)?;
            if atom.symbol.to_ascii_lowercase() != canonical {
                return Err(BasisError::SymbolMismatch {
                    expected: canonical.to_string(),
                    found: atom.symbol.clone(),
                });
            }
            atom.symbol = canonical.to_string();
            atom.validate()?;
        }

        Ok(basis)
    }

    /// Returns the basis entry for the given atomic number.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::UnknownElement` if the set contains no entry for
    /// that atomic number.
    pub fn get(&self, atomic_number: u8) -> Result<&BasisAtom, BasisError> {
        self.atoms
            .get(&atomic_number)
            .ok_or(BasisError::UnknownElement(atomic_number))
    }

    /// Creates a new empty `BasisSet`.
    ///
    /// Entries can be added programmatically or loaded from a file/string.
    pub fn new() -> Self {
        BasisSet {
            atoms: HashMap::new(),
        }
    }
}

impl Default for BasisSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserializes a map of basis entries with flexible key types.
///
/// Keys can be atomic numbers (as strings) or element symbols; symbols are
/// resolved through the element table. The entry's `symbol` field is filled in
/// from the key when omitted; consistency of a present symbol with its key is
/// checked by `load_from_str`, where the dedicated error variant is available.
fn deserialize_atom_map<'de, D>(deserializer: D) -> Result<HashMap<u8, BasisAtom>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AtomMapVisitor;

    impl<'de> Visitor<'de> for AtomMapVisitor {
        type Value = HashMap<u8, BasisAtom>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from atomic number or symbol to a basis entry")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut atoms = HashMap::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, mut atom)) = map.next_entry::<String, BasisAtom>()? {
                let atomic_number = key.parse::<u8>().or_else(|_| {
                    elements::atomic_number(&key).map_err(|_| {
                        de::Error::custom(format!("invalid element key: '{}'", key))
                    })
                })?;

                let canonical = elements::symbol(atomic_number).map_err(|_| {
                    de::Error::custom(format!("invalid element key: '{}'", key))
                })?;

                if atom.symbol.is_empty() {
                    atom.symbol = canonical.to_string();
                }

                atoms.insert(atomic_number, atom);
            }
            Ok(atoms)
        }
    }

    deserializer.deserialize_map(AtomMapVisitor)
}

/// Serializes the basis map with element symbols as keys, in atomic-number order.
fn serialize_atom_map<S>(atoms: &HashMap<u8, BasisAtom>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let ordered: BTreeMap<u8, &BasisAtom> = atoms.iter().map(|(&z, atom)| (z, atom)).collect();

    let mut map = serializer.serialize_map(Some(ordered.len()))?;
    for (z, atom) in ordered {
        let key = elements::symbol(z)
            .map_err(|_| ser::Error::custom(format!("atomic number {} has no symbol", z)))?;
        map.serialize_entry(key, atom)?;
    }
    map.end()
}
