//! Transport-agnostic error payload returned to API consumers.
//!
//! Services surface expected domain conditions through their own typed error
//! enums; this type is the serialisable envelope the inbound adapter builds
//! from those conditions. It carries a stable machine-readable code alongside
//! the human-readable message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed, fails validation, or was rejected at create
    /// time by a domain rule.
    InvalidRequest,
    /// Credential lookup failed or the caller lacks the required role.
    Unauthorized,
    /// The requested resource does not exist, or a domain rule rejected a
    /// read/update/delete.
    NotFound,
    /// An unexpected failure occurred inside the service or its store.
    InternalError,
}

/// API error response payload.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "Booking not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "not_found")]
    code: ErrorCode,
    #[schema(example = "Booking not found")]
    message: String,
    /// Correlation identifier linking the response to server-side logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    /// Supplementary structured context, e.g. `{ "code": "slot_not_found" }`.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier when one is
    /// in scope so the payload correlates with logs automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, if one was in scope at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier explicitly.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "code": "invalid_slot_date" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_with_snake_case_code() {
        let err = Error::invalid_request("bad input");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value.get("code"), Some(&json!("invalid_request")));
        assert_eq!(value.get("message"), Some(&json!("bad input")));
    }

    #[test]
    fn omits_absent_optional_fields() {
        let err = Error::not_found("missing");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert!(value.get("details").is_none());
        assert!(value.get("traceId").is_none());
    }

    #[test]
    fn details_round_trip() {
        let err =
            Error::invalid_request("bad").with_details(json!({ "code": "slot_already_exists" }));
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(
            value.pointer("/details/code"),
            Some(&json!("slot_already_exists"))
        );
    }

    #[test]
    fn trace_id_serialises_camel_case() {
        let err = Error::internal("boom").with_trace_id("abc-123");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value.get("traceId"), Some(&json!("abc-123")));
        assert!(value.get("trace_id").is_none());
    }
}
