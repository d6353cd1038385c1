//! Error types for the claim service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prt_chain::ChainError;
use serde_json::json;
use thiserror::Error;

/// Fallback 500 message when the node reports no revert reason.
pub const GENERIC_SUBMISSION_ERROR: &str =
    "Failed to send transaction. Please check server logs.";

/// Claim endpoint errors
#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("Invalid wallet address.")]
    InvalidAddress,

    #[error("Amount must be between {0} and {1}.")]
    InvalidAmount(u64, u64),

    #[error("{0}")]
    Submission(String),
}

impl From<ChainError> for ClaimError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::InvalidAddress(_) => ClaimError::InvalidAddress,
            // Node errors carry the revert reason when one exists.
            ChainError::Rpc(msg) if !msg.is_empty() => ClaimError::Submission(msg),
            _ => ClaimError::Submission(GENERIC_SUBMISSION_ERROR.to_string()),
        }
    }
}

impl IntoResponse for ClaimError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClaimError::InvalidAddress | ClaimError::InvalidAmount(_, _) => {
                StatusCode::BAD_REQUEST
            }
            ClaimError::Submission(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type ClaimResult<T> = Result<T, ClaimError>;
