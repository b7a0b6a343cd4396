//! Error types for Pagekit
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// The outbound request could not complete (connectivity, DNS, TLS)
    #[snafu(display("Network error: {source}"))]
    Network { source: reqwest::Error },

    /// A response arrived but its status is outside 2xx
    #[snafu(display("HTTP error! status: {status}"))]
    HttpStatus { status: u16 },

    /// The body is not JSON of the expected shape
    #[snafu(display("Parse error: {source}"))]
    Parse { source: serde_json::Error },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

/// Classification of a failed user fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    HttpStatus,
    Parse,
}

impl Error {
    /// Fetch failure kind, `None` for errors that are not fetch failures
    pub fn fetch_kind(&self) -> Option<FetchErrorKind> {
        match self {
            Error::Network { .. } => Some(FetchErrorKind::Network),
            Error::HttpStatus { .. } => Some(FetchErrorKind::HttpStatus),
            Error::Parse { .. } => Some(FetchErrorKind::Parse),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
