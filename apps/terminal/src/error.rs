//! # API Error Type
//!
//! Unified error type for the session layer's responses to the GUI shell.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cedar POS                              │
//! │                                                                         │
//! │  GUI Shell                    Session Layer                             │
//! │  ─────────                    ─────────────                             │
//! │                                                                         │
//! │  product_pressed("Coffee")                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  PosSession method                                               │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  ValidationError ── "decimals not allowed" ──┐                  │  │
//! │  │         │                                     ▼                  │  │
//! │  │  CoreError ─────────────────────────────── ApiError ───────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The shell shows e.message verbatim; e.code picks the toast style.     │
//! │  Nothing here is fatal: the worst case is "nothing changes, the        │
//! │  cashier is told why".                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use cedar_core::CoreError;

/// Error returned from session-layer calls.
///
/// ## Serialization
/// This is what the GUI shell receives when a call fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "must be at least 0.01"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session-layer responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or line item not found
    NotFound,

    /// Numeric entry validation failed
    ValidationError,

    /// Order mutation refused (caps, unknown line)
    OrderError,

    /// Payment action refused (missing amount, bad tender value)
    PaymentError,

    /// Sign-in rejected
    Unauthorized,

    /// Any other business-rule violation
    BusinessLogic,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Validation failure with a user-facing reason.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Sign-in rejection.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::AmountRequired => ErrorCode::PaymentError,
            CoreError::UnknownProduct(_) | CoreError::ItemNotFound(_) => ErrorCode::NotFound,
            CoreError::OrderFull { .. } | CoreError::QuantityTooLarge { .. } => {
                ErrorCode::OrderError
            }
            CoreError::InvalidExchangeRate | CoreError::NoPendingDecision => {
                ErrorCode::BusinessLogic
            }
        };
        ApiError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cedar_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::AmountRequired.into();
        assert_eq!(err.code, ErrorCode::PaymentError);
        assert_eq!(err.message, "enter an amount first");

        let err: ApiError = CoreError::Validation(ValidationError::DecimalNotAllowed).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "decimals not allowed");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("must be at least 0.01");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "must be at least 0.01");
    }
}
