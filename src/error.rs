//! Error types and handling for the `weathercast` crate

use thiserror::Error;

/// Main error type for the `weathercast` crate
#[derive(Error, Debug)]
pub enum WeathercastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeathercastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether this error was caused by the caller's input
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeathercastError::Config { .. } => {
                "Configuration error. Please check your config file and environment variables."
                    .to_string()
            }
            WeathercastError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            WeathercastError::Io { .. } => "Failed to write output.".to_string(),
        }
    }
}
