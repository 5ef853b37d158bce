use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `gbasis` library.
///
/// This enum covers every failure mode of the crate: out-of-range element
/// lookups, structural defects in basis-set data, and I/O or deserialization
/// problems while loading basis files. It implements `std::error::Error`,
/// allowing it to be composed with other error types in application code.
#[derive(Error, Debug)]
pub enum BasisError {
    /// The atomic number is outside the range covered by the element table.
    ///
    /// The table spans hydrogen (1) through curium (96); any other atomic
    /// number is rejected rather than producing an undefined lookup.
    #[error("Unknown element: atomic number {0} is outside the supported range 1-96")]
    UnknownElement(u8),

    /// The element symbol does not name any element in the table.
    #[error("Unknown element symbol: '{0}'")]
    UnknownSymbol(String),

    /// The number of angular-momentum format codes does not match the number
    /// of contracted shells.
    ///
    /// Each contracted shell (outer entry of `coefficients`) must carry
    /// exactly one format code in `basis_format`.
    #[error("Basis for '{symbol}' has {shells} contracted shells but {format_codes} format codes")]
    ShellCountMismatch {
        /// The element symbol of the offending basis entry.
        symbol: String,
        /// The number of contracted shells (outer length of `coefficients`).
        shells: usize,
        /// The number of entries in `basis_format`.
        format_codes: usize,
    },

    /// A contracted shell has a different number of coefficients than there
    /// are primitive exponents.
    ///
    /// All shells of a basis entry share one exponent block, so every inner
    /// coefficient vector must have the same length as `exponents`.
    #[error(
        "Shell {shell} of basis for '{symbol}' has {coefficients} coefficients but {exponents} exponents are defined"
    )]
    PrimitiveCountMismatch {
        /// The element symbol of the offending basis entry.
        symbol: String,
        /// The zero-based shell index.
        shell: usize,
        /// The number of coefficients in that shell.
        coefficients: usize,
        /// The number of primitive exponents defined for the entry.
        exponents: usize,
    },

    /// A basis entry declares no contracted shells at all.
    #[error("Basis for '{0}' contains no contracted shells")]
    EmptyBasis(String),

    /// The symbol stored inside a basis entry contradicts the element it is
    /// keyed under in the basis-set file.
    #[error("Basis entry keyed for '{expected}' declares symbol '{found}'")]
    SymbolMismatch {
        /// The symbol implied by the map key.
        expected: String,
        /// The symbol found inside the entry.
        found: String,
    },

    /// An I/O error that occurred while attempting to read a basis-set file.
    ///
    /// The path to the file and the underlying I/O error are provided for context.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error while parsing a basis-set file, typically indicating invalid
    /// TOML or a structural mismatch with the expected `BasisSet` format.
    #[error("Failed to deserialize TOML basis set: {0}")]
    DeserializationError(#[from] toml::de::Error),
}
