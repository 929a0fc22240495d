use thiserror::Error;
use wfcfg_core::ConfigurationError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the wfcfg CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// A property file or setting could not be updated.
    ///
    /// Wraps every failure of the configuration engine: invalid values,
    /// malformed property files, lock problems and file access errors.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The tool configuration file could not be loaded.
    #[error("Tool configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    ///
    /// Raised for values clap cannot check, such as a `--update` pair with
    /// an empty key.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The change report could not be written to standard output.
    #[error("Failed to write to std out.")]
    StdOutWriteFailed,
}
