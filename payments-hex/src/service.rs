//! Payment Application Service
//!
//! Orchestrates domain operations through the store port.
//! Contains NO infrastructure logic - pure business orchestration.

use std::time::Duration;

use payments_types::{AppError, PaymentRequest, Transaction, TransactionId, TransactionStore};

/// Simulated gateway latency applied to every accepted payment.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(1);

/// Application service for payment operations.
///
/// Generic over `S: TransactionStore` - the adapter is injected at compile time.
pub struct PaymentService<S: TransactionStore> {
    store: S,
    processing_delay: Duration,
}

impl<S: TransactionStore> PaymentService<S> {
    /// Creates a new payment service with the given store and the default
    /// processing delay.
    pub fn new(store: S) -> Self {
        Self {
            store,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Overrides the simulated processing delay. `Duration::ZERO` disables it.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Validates and records a payment.
    ///
    /// The delay runs before the transaction is built, and the store is only
    /// touched for the final append.
    pub async fn process_payment(&self, req: PaymentRequest) -> Result<Transaction, AppError> {
        let payment = req.validate().inspect_err(|e| {
            tracing::info!(reason = %e, "payment rejected");
        })?;

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        let tx = Transaction::completed(payment);
        self.store.record(tx.clone()).await?;

        tracing::info!(
            transaction_id = %tx.transaction_id,
            amount = tx.amount,
            currency = %tx.currency,
            "payment completed"
        );

        Ok(tx)
    }

    /// Lists every recorded transaction, oldest first.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        self.store.list_all().await.map_err(Into::into)
    }

    /// Number of recorded transactions.
    pub async fn transaction_count(&self) -> Result<usize, AppError> {
        self.store.len().await.map_err(Into::into)
    }

    /// Gets a transaction by ID.
    pub async fn get_transaction(&self, id: &TransactionId) -> Result<Transaction, AppError> {
        self.store
            .find(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound("Transaction not found".into())))
    }
}
