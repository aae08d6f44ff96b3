use thiserror::Error;

/// Top-level error type for the Dom Ojca site.
///
/// Feature crates define their own error types (chat, contact, API) and
/// convert into this one where a failure has to cross into the binary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DomOjcaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DomOjcaError {
    fn from(err: toml::de::Error) -> Self {
        DomOjcaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DomOjcaError {
    fn from(err: toml::ser::Error) -> Self {
        DomOjcaError::Config(err.to_string())
    }
}

/// A specialized `Result` type for site operations.
pub type Result<T> = std::result::Result<T, DomOjcaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomOjcaError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(DomOjcaError, &str)> = vec![
            (
                DomOjcaError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                DomOjcaError::UnknownLanguage("de".to_string()),
                "Unknown language code: de",
            ),
            (
                DomOjcaError::UnknownPage("blog".to_string()),
                "Unknown page: blog",
            ),
            (
                DomOjcaError::Api("bind failed".to_string()),
                "API error: bind failed",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DomOjcaError = io_err.into();
        assert!(matches!(err, DomOjcaError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let err: DomOjcaError = err.unwrap_err().into();
        assert!(matches!(err, DomOjcaError::Config(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
