pub mod basis;
pub mod elements;
pub mod error;
pub mod types;

pub use basis::BasisSet;
pub use error::BasisError;
pub use types::{BasisAtom, Matrix, Real};

use std::sync::OnceLock;

static DEFAULT_BASIS: OnceLock<BasisSet> = OnceLock::new();

/// Returns the embedded default basis set (DZVP-style data for h, c, n, o).
pub fn get_default_basis() -> &'static BasisSet {
    DEFAULT_BASIS.get_or_init(|| {
        const DEFAULT_BASIS_TOML: &str = include_str!("../resources/basis.dzvp.toml");
        BasisSet::load_from_str(DEFAULT_BASIS_TOML)
            .expect("Failed to parse embedded default basis set. This is a library bug.")
    })
}
