use thiserror::Error;

/// Workspace-wide error types for the MediMock API.
#[derive(Debug, Error)]
pub enum MockError {
    /// Configuration could not be loaded or is invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem or socket I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The listener could not be bound to the requested address.
    #[error("Bind error: {0}")]
    Bind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: MockError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, MockError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            MockError::Config("bad port".to_string()).to_string(),
            "Config error: bad port"
        );
        assert_eq!(
            MockError::Bind("0.0.0.0:3001: address in use".to_string()).to_string(),
            "Bind error: 0.0.0.0:3001: address in use"
        );
    }
}
