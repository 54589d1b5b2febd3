//! Membership-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | CustomerNotFound | 404 |
//! | ValidationFailed | 400 |
//! | InvalidTierTable | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, ValidationError};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No customer record with this id.
    CustomerNotFound(CustomerId),

    /// The configured tier table violates its invariants.
    InvalidTierTable(String),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Data-access failure. Not retried by the core.
    Infrastructure(String),
}

impl MembershipError {
    pub fn customer_not_found(id: CustomerId) -> Self {
        MembershipError::CustomerNotFound(id)
    }

    pub fn invalid_tier_table(reason: impl Into<String>) -> Self {
        MembershipError::InvalidTierTable(reason.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::CustomerNotFound(_) => ErrorCode::CustomerNotFound,
            MembershipError::InvalidTierTable(_) => ErrorCode::InvalidTierTable,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::CustomerNotFound(id) => format!("Customer not found: {}", id),
            MembershipError::InvalidTierTable(reason) => {
                format!("Invalid tier table: {}", reason)
            }
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => {
                MembershipError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::InvalidTierTable => MembershipError::InvalidTierTable(err.message),
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}
