// SPDX-License-Identifier: MPL-2.0
//! Application-level errors: startup, configuration and HTTP client setup.
//!
//! Failures of individual provider requests are
//! [`ResolutionError`](crate::domain::error::ResolutionError)s instead; they
//! never abort the application.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(
        "no Google Maps API key configured (use --api-key, PLACE_LENS_API_KEY \
         or [provider] api_key in settings.toml)"
    )]
    MissingApiKey,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_message_names_every_source() {
        let message = Error::MissingApiKey.to_string();
        assert!(message.contains("--api-key"));
        assert!(message.contains("PLACE_LENS_API_KEY"));
        assert!(message.contains("settings.toml"));
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        assert!(matches!(Error::from(err), Error::Config(_)));
    }

    #[test]
    fn io_errors_convert() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let converted: Error = err.into();
        assert!(converted.to_string().starts_with("I/O error"));
    }
}
