//! Data Transfer Objects (DTOs) for responses.
//!
//! Every response body carries a `success` flag so that browser clients can
//! branch on a single field regardless of status code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Transaction, TransactionId};

/// Response after a payment was accepted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = true)]
    pub success: bool,
    pub transaction_id: TransactionId,
    #[schema(example = 99.99)]
    pub amount: f64,
    #[schema(example = "USD")]
    pub currency: String,
    /// Creation time (ISO 8601)
    #[schema(value_type = String, example = "2024-01-01T12:00:00.000000Z")]
    pub timestamp: DateTime<Utc>,
}

impl From<&Transaction> for PaymentResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            success: true,
            transaction_id: tx.transaction_id.clone(),
            amount: tx.amount,
            currency: tx.currency.clone(),
            timestamp: tx.timestamp,
        }
    }
}

/// Every recorded transaction, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub transactions: Vec<Transaction>,
}

impl From<Vec<Transaction>> for TransactionListResponse {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self {
            success: true,
            transactions,
        }
    }
}

/// A single transaction looked up by id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionLookupResponse {
    #[schema(example = true)]
    pub success: bool,
    pub transaction: Transaction,
}

impl From<Transaction> for TransactionLookupResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            success: true,
            transaction,
        }
    }
}

/// Body returned with every 4xx/5xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Amount must be greater than zero.")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
