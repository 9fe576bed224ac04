//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payments_types::{
    AppError, ErrorResponse, PaymentRequest, PaymentResponse, TransactionId,
    TransactionListResponse, TransactionLookupResponse, TransactionStore,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<S: TransactionStore> {
    pub service: PaymentService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Health check endpoint. Also reports how many transactions are recorded.
pub async fn health<S: TransactionStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let count = state.service.transaction_count().await?;
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "transactions": count
    })))
}

/// Browsers request a favicon on every page load; answer with an empty body.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Process a simulated payment.
///
/// The body is decoded by hand so that a malformed payload is reported in
/// the same `{success, error}` envelope as every other failure.
#[tracing::instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn process_payment<S: TransactionStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: PaymentRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Internal(e.to_string()))?;

    let tx = state.service.process_payment(req).await?;
    Ok(Json(PaymentResponse::from(&tx)))
}

/// List all transactions.
#[tracing::instrument(skip(state))]
pub async fn list_transactions<S: TransactionStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state.service.list_transactions().await?;
    Ok(Json(TransactionListResponse::from(transactions)))
}

/// Get transaction by ID.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction<S: TransactionStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = state
        .service
        .get_transaction(&TransactionId::from(id))
        .await?;
    Ok(Json(TransactionLookupResponse::from(transaction)))
}
