//! Error types for the audio engine front end.
//!
//! Argument resolution only ever fails on malformed input, so the variants
//! here cover the command line itself and the configuration values it
//! produced. Nothing in this module prints; callers decide presentation.

use clap::error::ErrorKind;
use thiserror::Error;

/// Custom error type for argument resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// The command line could not be parsed, or help/version was requested
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// A flag parsed fine but its value is outside the accepted range
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true when the "error" is really a request to display help or
    /// version text rather than a failure.
    pub fn is_informational(&self) -> bool {
        match self {
            Error::Cli(err) => matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ),
            Error::Config(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::Config("channels must be 1 or 2, got 6".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: channels must be 1 or 2, got 6"
        );
        assert!(!err.is_informational());
    }

    #[test]
    fn test_version_is_informational() {
        let err = Error::from(clap::Error::new(ErrorKind::DisplayVersion));
        assert!(err.is_informational());

        let err = Error::from(clap::Error::new(ErrorKind::UnknownArgument));
        assert!(!err.is_informational());
    }
}
