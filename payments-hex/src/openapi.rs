//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::domain::{AmountInput, Transaction, TransactionId, TransactionStatus};
use payments_types::dto::{
    ErrorResponse, PaymentResponse, TransactionListResponse, TransactionLookupResponse,
};
use payments_types::PaymentRequest;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy; body carries `status` and the recorded `transactions` count")
    )
)]
async fn health() {}

/// Submit a simulated payment
///
/// Responds after an artificial processing delay (one second by default).
#[utoipa::path(
    post,
    path = "/api/payment",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment completed", body = PaymentResponse),
        (status = 400, description = "Missing field or invalid amount", body = ErrorResponse),
        (status = 500, description = "Malformed body or internal failure", body = ErrorResponse)
    )
)]
async fn process_payment() {}

/// List all transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "Transactions in the order they were recorded", body = TransactionListResponse)
    )
)]
async fn list_transactions() {}

/// Get transaction by ID
#[utoipa::path(
    get,
    path = "/api/transaction/{id}",
    tag = "transactions",
    params(
        ("id" = String, Path, description = "12-character transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction details", body = TransactionLookupResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
async fn get_transaction() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fake Payments API",
        version = "1.0.0",
        description = "Simulated payment processing for prototyping. No real cards are charged and nothing is persisted across restarts.",
        license(name = "MIT"),
    ),
    paths(health, process_payment, list_transactions, get_transaction),
    components(
        schemas(
            PaymentRequest,
            AmountInput,
            PaymentResponse,
            Transaction,
            TransactionId,
            TransactionStatus,
            TransactionListResponse,
            TransactionLookupResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Simulated payment submission"),
        (name = "transactions", description = "Transaction history"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_api_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/health",
            "/api/payment",
            "/api/transactions",
            "/api/transaction/{id}",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
