//! Error types and handling for the budget estimator

use thiserror::Error;

/// Main error type for the budget estimator
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// A trip, selection or request value the calculator cannot accept
    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },
}

impl BudgetError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn invalid_selection<S: Into<String>>(message: S) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BudgetError::Config { .. } => "config",
            BudgetError::Api { .. } => "api",
            BudgetError::InvalidSelection { .. } => "invalid_selection",
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BudgetError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            BudgetError::Api { .. } => {
                "Unable to reach an external service. Please try again later.".to_string()
            }
            BudgetError::InvalidSelection { message } => {
                format!("Invalid selection: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = BudgetError::config("missing port");
        assert!(matches!(config_err, BudgetError::Config { .. }));
        assert_eq!(config_err.kind(), "config");

        let api_err = BudgetError::api("connection failed");
        assert!(matches!(api_err, BudgetError::Api { .. }));
        assert_eq!(api_err.kind(), "api");

        let selection_err = BudgetError::invalid_selection("unknown city 'Paris'");
        assert!(matches!(selection_err, BudgetError::InvalidSelection { .. }));
        assert_eq!(selection_err.kind(), "invalid_selection");
    }

    #[test]
    fn test_user_messages() {
        let config_err = BudgetError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = BudgetError::api("secret upstream detail");
        assert!(api_err.user_message().contains("Unable to reach"));
        assert!(!api_err.user_message().contains("secret"));

        let selection_err = BudgetError::invalid_selection("travelers must be 1-20");
        assert!(selection_err.user_message().contains("travelers must be 1-20"));
    }
}
