//! Error types for fragment loading

use thiserror::Error;

/// Reasons a single fragment could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Could not read body: {0}")]
    Body(String),

    /// Local fragment file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Redirects kept going past the configured maximum
    #[error("Too many redirects: gave up after {0}")]
    TooManyRedirects(u8),

    /// The fragment uri could not be built from base url, prefix and file name
    #[error("Invalid fragment uri: {0}")]
    InvalidUri(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Container not found: {0}")]
    NotFound(String),
}

/// Errors surfaced by loader setup, never by individual fragments.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Loader was already initialized for this document")]
    AlreadyInitialized,

    #[error("Invalid loader configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_the_status() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn io_errors_convert_into_fetch_errors() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let fetch_error: FetchError = io_error.into();
        assert!(matches!(fetch_error, FetchError::Io(_)));
    }
}
