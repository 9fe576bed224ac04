//! Transaction store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (the in-memory store, test doubles) implement this trait.

use crate::domain::{Transaction, TransactionId};
use crate::error::RepoError;

/// Append-only registry of recorded transactions.
///
/// Implementations must tolerate concurrent callers: appends must never be
/// lost or interleaved, and reads observe insertion order.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync + 'static {
    /// Appends a transaction. Duplicate ids are not rejected.
    async fn record(&self, transaction: Transaction) -> Result<(), RepoError>;

    /// Returns every transaction in insertion order.
    async fn list_all(&self) -> Result<Vec<Transaction>, RepoError>;

    /// Returns the first transaction (in insertion order) with the given id.
    async fn find(&self, id: &TransactionId) -> Result<Option<Transaction>, RepoError>;

    /// Number of recorded transactions.
    async fn len(&self) -> Result<usize, RepoError>;
}
