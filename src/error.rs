use thiserror::Error;

/// A single inline form error, keyed by the field the form highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure taxonomy shared by every gateway operation and slice.
///
/// Variants are `Clone + PartialEq` so a rejection can be stored on a
/// slice and asserted against in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable credential, or the server answered 401/403. Routed to
    /// the auth guard, never shown as an inline form error.
    #[error("Unauthorized. Redirecting to login.")]
    Unauthenticated,

    /// Required fields missing or malformed. Surfaced inline per field.
    #[error("Please fill in all required fields")]
    Validation { fields: Vec<FieldError> },

    /// Duplicate name reported by the server.
    #[error("{message}")]
    Conflict { message: String },

    /// Stale id on update/delete.
    #[error("{message}")]
    NotFound { message: String },

    /// Transport or decode failure. The collection is left untouched.
    #[error("{message}")]
    Network { message: String },
}

impl ApiError {
    /// Single-field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            fields: vec![FieldError::new(field, message)],
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    /// Whether this failure must force navigation back to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    /// Inline form errors carried by this failure, empty for every
    /// non-validation variant.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Validation { fields } => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_requires_login() {
        assert!(ApiError::Unauthenticated.requires_login());
        assert!(!ApiError::network("boom").requires_login());
    }

    #[test]
    fn validation_carries_field_errors() {
        let err = ApiError::validation("name", "Leave type name is required");
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "name");
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn conflict_displays_server_message() {
        let err = ApiError::Conflict {
            message: "Leave type already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Leave type already exists");
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn not_found_displays_message() {
        let err = ApiError::NotFound {
            message: "Leave request not found".to_string(),
        };
        assert_eq!(err.to_string(), "Leave request not found");
    }
}
