//! This module defines the core types used in the gbasis library for representing
//! contracted Gaussian basis sets.
//!
//! It includes the `Real` and `Matrix` aliases that fix the scalar precision and
//! dense-matrix layout at the interface boundary, and the `BasisAtom` struct that
//! holds one element's basis specification. These types form the data scaffolding
//! consumed by integral engines and workflow code built on top of this crate.

use crate::error::BasisError;
use serde::{Deserialize, Serialize};

/// The scalar precision used for coefficients, exponents, and matrices.
pub type Real = f64;

/// A dense, dynamically sized matrix of `Real` with row-major storage.
///
/// Integral engines return their blocks with rows contiguous in memory, so the
/// crate standardizes on C-order (`ndarray`'s default) at the interface
/// boundary. Collaborating code should use this alias rather than naming the
/// backend type directly; swapping the linear-algebra backend then only
/// touches this definition.
pub type Matrix = ndarray::Array2<Real>;

/// The contracted Gaussian basis specification for one element.
///
/// A basis entry groups primitives into contracted shells. All shells of an
/// entry share one block of primitive exponents; each contracted shell
/// contributes one inner vector of `coefficients` (one weight per primitive)
/// and one angular-momentum code in `basis_format`. Entries are constructed by
/// a basis-set loader and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisAtom {
    /// The lower-case element symbol this basis belongs to.
    ///
    /// Loaders may fill this in from the key the entry is stored under; see
    /// `BasisSet::load_from_str`.
    #[serde(default)]
    pub symbol: String,
    /// Contraction coefficients, one inner vector per contracted shell.
    ///
    /// The outer index selects a shell; the inner vector holds the weight of
    /// each primitive in that shell, parallel-indexed to `exponents`.
    pub coefficients: Vec<Vec<f64>>,
    /// Decay exponents of the Gaussian primitives, shared by all shells.
    pub exponents: Vec<f64>,
    /// Angular-momentum codes, one per contracted shell (0 = s, 1 = p, 2 = d, ...).
    pub basis_format: Vec<i32>,
}

impl BasisAtom {
    /// Creates a new `BasisAtom` after checking its structural invariants.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The lower-case element symbol.
    /// * `coefficients` - Per-shell contraction coefficients.
    /// * `exponents` - Primitive exponents shared by all shells.
    /// * `basis_format` - One angular-momentum code per shell.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::EmptyBasis` if no shell is given,
    /// `BasisError::ShellCountMismatch` if the number of format codes differs
    /// from the number of shells, or `BasisError::PrimitiveCountMismatch` if
    /// any shell's coefficient count differs from the exponent count.
    ///
    /// # Examples
    ///
    /// ```
    /// use gbasis::BasisAtom;
    ///
    /// let atom = BasisAtom::new(
    ///     "h",
    ///     vec![vec![0.39, 0.61], vec![0.16, 0.85]],
    ///     vec![1.309, 0.233],
    ///     vec![0, 1],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(atom.shell_count(), 2);
    /// assert_eq!(atom.primitive_count(), 2);
    /// ```
    pub fn new(
        symbol: impl Into<String>,
        coefficients: Vec<Vec<f64>>,
        exponents: Vec<f64>,
        basis_format: Vec<i32>,
    ) -> Result<Self, BasisError> {
        let atom = Self {
            symbol: symbol.into(),
            coefficients,
            exponents,
            basis_format,
        };
        atom.validate()?;
        Ok(atom)
    }

    /// Checks the structural invariants of this basis entry.
    ///
    /// Deserialized entries bypass `new`, so loaders call this after parsing.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`BasisAtom::new`].
    pub fn validate(&self) -> Result<(), BasisError> {
        if self.coefficients.is_empty() {
            return Err(BasisError::EmptyBasis(self.symbol.clone()));
        }

        if self.basis_format.len() != self.coefficients.len() {
            return Err(BasisError::ShellCountMismatch {
                symbol: self.symbol.clone(),
                shells: self.coefficients.len(),
                format_codes: self.basis_format.len(),
            });
        }

        for (shell, coeffs) in self.coefficients.iter().enumerate() {
            if coeffs.len() != self.exponents.len() {
                return Err(BasisError::PrimitiveCountMismatch {
                    symbol: self.symbol.clone(),
                    shell,
                    coefficients: coeffs.len(),
                    exponents: self.exponents.len(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of contracted shells in this basis entry.
    #[inline]
    pub fn shell_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the number of Gaussian primitives shared by the shells.
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.exponents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_atom() -> BasisAtom {
        BasisAtom::new(
            "o",
            vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]],
            vec![10.2, 2.5, 0.7],
            vec![0, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_new_valid() {
        let atom = sample_atom();
        assert_eq!(atom.symbol, "o");
        assert_eq!(atom.shell_count(), 2);
        assert_eq!(atom.primitive_count(), 3);
    }

    #[test]
    fn test_new_rejects_empty_shells() {
        let result = BasisAtom::new("h", vec![], vec![1.0], vec![]);
        assert!(matches!(result, Err(BasisError::EmptyBasis(_))));
    }

    #[test]
    fn test_new_rejects_format_code_mismatch() {
        let result = BasisAtom::new("h", vec![vec![1.0]], vec![1.0], vec![0, 1]);
        assert!(matches!(
            result,
            Err(BasisError::ShellCountMismatch {
                shells: 1,
                format_codes: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_new_rejects_ragged_coefficients() {
        let result = BasisAtom::new(
            "h",
            vec![vec![1.0, 2.0], vec![1.0]],
            vec![1.3, 0.2],
            vec![0, 0],
        );
        assert!(matches!(
            result,
            Err(BasisError::PrimitiveCountMismatch { shell: 1, .. })
        ));
    }

    #[test]
    fn test_validate_after_field_mutation() {
        let mut atom = sample_atom();
        atom.exponents.pop();
        assert!(atom.validate().is_err());
    }
}
