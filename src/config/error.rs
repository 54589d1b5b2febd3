//! Configuration error types

use thiserror::Error;

use crate::domain::membership::MembershipError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tier table could not be loaded: {0}")]
    TierTable(#[from] MembershipError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Request timeout {secs}s is outside 1..={max}s")]
    InvalidTimeout { secs: u64, max: u64 },

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool bounds min={min} max={max} are invalid (max must be 1..={ceiling} and not below min)")]
    InvalidPoolBounds { min: u32, max: u32, ceiling: u32 },

    #[error("Tier table file not found: {0}")]
    TierTableNotFound(String),
}
