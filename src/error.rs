//! Routing error types

use thiserror::Error;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors raised by the routing engine and dispatch ledger
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Location selection was asked to choose from an empty snapshot
    #[error("no candidate locations available for routing")]
    NoLocationsAvailable,

    /// Configuration failed validation
    #[error("invalid routing configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },

    /// Configuration document could not be parsed
    #[error("failed to parse routing configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("failed to read routing configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Driver is not part of the ledger snapshot
    #[error("unknown driver '{driver}'")]
    UnknownDriver {
        /// Debug rendering of the driver id
        driver: String,
    },

    /// Driver was no longer available when the claim was attempted
    #[error("driver '{driver}' is not available")]
    DriverUnavailable {
        /// Debug rendering of the driver id
        driver: String,
    },

    /// Log subscriber could not be installed
    #[error("failed to initialize logging: {reason}")]
    Logging {
        /// Underlying subscriber or filter error
        reason: String,
    },
}

impl RoutingError {
    /// Create an InvalidConfig error
    #[inline]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an UnknownDriver error
    #[inline]
    pub fn unknown_driver(driver: &impl std::fmt::Debug) -> Self {
        Self::UnknownDriver {
            driver: format!("{:?}", driver),
        }
    }

    /// Create a DriverUnavailable error
    #[inline]
    pub fn driver_unavailable(driver: &impl std::fmt::Debug) -> Self {
        Self::DriverUnavailable {
            driver: format!("{:?}", driver),
        }
    }

    /// Create a Logging error
    #[inline]
    pub fn logging(err: impl std::fmt::Display) -> Self {
        Self::Logging {
            reason: err.to_string(),
        }
    }
}
