use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core gbasis library.
    #[error("Basis error: {0}")]
    Basis(#[from] gbasis::BasisError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// An element selector on the command line could not be resolved.
    #[error("Invalid element selector '{selector}': {details}")]
    Selector { selector: String, details: String },
}
