//! Error handling for the pitting modeler service.

use thiserror::Error;

/// The error type for the pitting modeler service.
///
/// Covers artifact loading, input validation, and inference failures.
/// Implements `std::error::Error` via thiserror and converts to an HTTP
/// response via axum's `IntoResponse`.
#[derive(Error, Debug)]
pub enum ModelerError {
    /// Configuration-related errors (invalid config, missing fields, etc.)
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors (artifact file reads, network IO, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Artifact errors (missing, corrupt, or inconsistent fitted artifacts)
    #[error("artifact error in '{name}': {reason}")]
    Artifact { name: String, reason: String },

    /// Invalid input validation errors
    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Inference errors (transform/predict failures against loaded artifacts)
    #[error("prediction error: {0}")]
    Prediction(String),

    /// Internal errors (bugs, unexpected states, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Type alias for Results using ModelerError
pub type Result<T> = std::result::Result<T, ModelerError>;

impl From<serde_json::Error> for ModelerError {
    fn from(err: serde_json::Error) -> Self {
        ModelerError::Serialization(err.to_string())
    }
}

impl ModelerError {
    /// Creates an artifact error for the named artifact
    pub fn artifact(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelerError::Artifact {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error for the named field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelerError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a prediction error
    pub fn prediction(reason: impl Into<String>) -> Self {
        ModelerError::Prediction(reason.into())
    }
}

impl axum::response::IntoResponse for ModelerError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;

        let (status, error_type) = match &self {
            ModelerError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            ModelerError::Config(_) => (StatusCode::BAD_REQUEST, "config_error"),
            ModelerError::Serialization(_) => (StatusCode::BAD_REQUEST, "serialization_error"),
            ModelerError::Artifact { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "artifact_error"),
            ModelerError::Prediction(_) => (StatusCode::INTERNAL_SERVER_ERROR, "prediction_error"),
            ModelerError::Io(_) | ModelerError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = Json(serde_json::json!({
            "error": error_type,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ModelerError::invalid_input("ph", "out of range");
        assert!(err.to_string().contains("ph"));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_artifact_message() {
        let err = ModelerError::artifact("scaler", "mean/scale length mismatch");
        assert!(err.to_string().contains("scaler"));
        assert!(err.to_string().contains("mismatch"));
    }

    #[test]
    fn test_prediction_message() {
        let err = ModelerError::prediction("tree node out of bounds");
        assert!(err.to_string().contains("prediction error"));
    }
}
