use thiserror::Error;

/// Failures reported by the overlay view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The element isn't in the document yet (hot reload, DOM not ready).
    #[error("No element matches '{0}'")]
    MissingElement(String),

    #[error("View error: {0}")]
    Host(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Unknown setting '{0}'")]
    UnknownKey(String),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("Flight plan error: {0}")]
    FlightPlan(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Swallow a missing-element failure, pass every other outcome through.
pub fn ignore_missing(result: std::result::Result<(), ViewError>) -> std::result::Result<(), ViewError> {
    match result {
        Err(ViewError::MissingElement(selector)) => {
            tracing::trace!("Skipping view update, '{}' is not mounted", selector);
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("store unavailable".to_string());
        assert_eq!(err.to_string(), "Settings error: store unavailable");

        let err = AppError::InvalidValue { key: "font_size", value: "huge".to_string() };
        assert_eq!(err.to_string(), "Invalid value 'huge' for setting 'font_size'");

        let err = AppError::UnknownKey("colour".to_string());
        assert_eq!(err.to_string(), "Unknown setting 'colour'");

        let err: AppError = ViewError::Host("detached".to_string()).into();
        assert_eq!(err.to_string(), "View error: detached");
    }

    #[test]
    fn test_ignore_missing_swallows_only_missing_elements() {
        assert!(ignore_missing(Ok(())).is_ok());
        assert!(ignore_missing(Err(ViewError::MissingElement("#x".to_string()))).is_ok());

        let host = ignore_missing(Err(ViewError::Host("boom".to_string())));
        assert_eq!(host, Err(ViewError::Host("boom".to_string())));
    }
}
