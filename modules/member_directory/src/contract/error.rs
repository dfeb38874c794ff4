//! Contract error types for member directory
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Member directory domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// Missing or malformed registration field
    Validation {
        /// Wire name of the offending field
        field: String,
        /// Caller-facing message
        message: String,
    },
    /// No member with the given ID number
    NotFound {
        /// Requested ID number
        id_number: String,
    },
    /// A member with the same ID number is already registered
    DuplicateIdNumber {
        /// Conflicting ID number
        id_number: String,
    },
    /// Missing, invalid or expired admin credential
    Unauthorized,
    /// Wrong admin password at login
    InvalidCredentials,
    /// Internal error
    Internal,
}

impl MemberError {
    /// Validation error for a required field that was not supplied
    pub fn missing_field(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("Missing required field: {}", field),
        }
    }

    /// Validation error for a field that was supplied but could not be parsed
    pub fn invalid_field(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("Invalid field {}: {}", field, reason),
        }
    }
}

impl std::fmt::Display for MemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message, .. } => {
                write!(f, "Validation error: {}", message)
            }
            Self::NotFound { id_number } => {
                write!(f, "Member not found: {}", id_number)
            }
            Self::DuplicateIdNumber { id_number } => {
                write!(f, "ID number already exists: {}", id_number)
            }
            Self::Unauthorized => {
                write!(f, "Unauthorized")
            }
            Self::InvalidCredentials => {
                write!(f, "Invalid password")
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for MemberError {}
