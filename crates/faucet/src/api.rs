//! HTTP API for the claim service

use crate::service::ClaimService;
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{error, info};

/// Claim request body
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub address: String,
    pub amount: String,
}

/// Claim success body
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub message: String,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

/// Claim handler
pub async fn claim_handler(
    State(service): State<Arc<ClaimService>>,
    Json(request): Json<ClaimRequest>,
) -> impl IntoResponse {
    info!(
        "Claim request: address={}, amount={}",
        request.address, request.amount
    );

    match service.claim(&request.address, &request.amount).await {
        Ok(tx_hash) => Json(ClaimResponse {
            message: "Transaction sent successfully!".to_string(),
            tx_hash,
        })
        .into_response(),
        Err(e) => {
            error!("Claiming failed: {}", e);
            e.into_response()
        }
    }
}

/// Build the application router: the claim endpoint plus the static claim UI.
pub fn router(service: Arc<ClaimService>, static_dir: &str) -> Router {
    Router::new()
        .route("/claim", post(claim_handler))
        .with_state(service)
        .fallback_service(ServeDir::new(static_dir))
}
