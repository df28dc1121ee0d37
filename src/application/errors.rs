//! Application-layer error type.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors surfaced by chat sessions and the proactive service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Store snapshot unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("Store snapshot invalid at '{field}': {message}")]
    SnapshotInvalid { field: String, message: String },

    #[error("Invalid widget state: {0}")]
    InvalidState(String),

    #[error("Prompt delivery failed: {0}")]
    PromptDelivery(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::SnapshotUnavailable(_) => ErrorCode::SnapshotUnavailable,
            SessionError::SnapshotInvalid { .. } => ErrorCode::SnapshotInvalid,
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SessionError::PromptDelivery(_) => ErrorCode::PromptDeliveryFailed,
            SessionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SnapshotUnavailable => SessionError::SnapshotUnavailable(err.message),
            ErrorCode::SnapshotInvalid => SessionError::SnapshotInvalid {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            ErrorCode::PromptDeliveryFailed => SessionError::PromptDelivery(err.message),
            ErrorCode::InvalidStateTransition => SessionError::InvalidState(err.message),
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

/// Widget transitions are validated by the state machine; a rejected one
/// means the host reported events out of order.
impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidState(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_invalid_keeps_field_detail() {
        let domain = DomainError::new(ErrorCode::SnapshotInvalid, "bad price")
            .with_detail("field", "featuredProducts[0].price");
        let err = SessionError::from(domain);
        assert_eq!(
            err,
            SessionError::SnapshotInvalid {
                field: "featuredProducts[0].price".to_string(),
                message: "bad price".to_string(),
            }
        );
        assert_eq!(err.code(), ErrorCode::SnapshotInvalid);
    }

    #[test]
    fn delivery_failure_maps_to_prompt_delivery() {
        let domain = DomainError::new(ErrorCode::PromptDeliveryFailed, "receiver dropped");
        assert_eq!(
            SessionError::from(domain),
            SessionError::PromptDelivery("receiver dropped".to_string())
        );
    }

    #[test]
    fn unexpected_codes_become_infrastructure() {
        let domain = DomainError::new(ErrorCode::InternalError, "boom");
        assert_eq!(SessionError::from(domain).code(), ErrorCode::InternalError);
    }

    #[test]
    fn rejected_transition_is_invalid_state() {
        let err = SessionError::from(ValidationError::invalid_format("widget", "open -> hidden"));
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn snapshot_invalid_display_names_field() {
        let err = SessionError::SnapshotInvalid {
            field: "cart.totalPrice".to_string(),
            message: "not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Store snapshot invalid at 'cart.totalPrice': not a number"
        );
    }
}
