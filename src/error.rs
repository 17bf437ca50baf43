use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File not found: {}. Please provide the correct file.", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{column}' column is missing.")]
    MissingColumn { column: String },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),
}

impl DashboardError {
    /// Errors that must halt the session instead of rendering a partial dashboard.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DashboardError::FileNotFound { .. }
                | DashboardError::MissingColumn { .. }
                | DashboardError::Io(_)
                | DashboardError::Csv(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = DashboardError::MissingColumn {
            column: "PM2.5 AQI Category".to_string(),
        };
        assert_eq!(err.to_string(), "'PM2.5 AQI Category' column is missing.");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_selection_errors_are_not_fatal() {
        let err = DashboardError::InvalidSelection("threshold 900".to_string());
        assert!(!err.is_fatal());
    }
}
