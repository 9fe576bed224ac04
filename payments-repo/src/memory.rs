//! In-memory transaction store.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use payments_types::{RepoError, Transaction, TransactionId, TransactionStore};

/// Append-only, process-lifetime store backed by a `Vec` behind a `RwLock`.
///
/// Appends take the write lock; reads take the read lock. The lock is never
/// held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepoError {
    RepoError::Storage("transaction store lock poisoned".into())
}

#[async_trait]
impl TransactionStore for InMemoryStore {
    async fn record(&self, transaction: Transaction) -> Result<(), RepoError> {
        let mut transactions = self.transactions.write().map_err(poisoned)?;
        transactions.push(transaction);
        tracing::debug!(count = transactions.len(), "transaction recorded");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Transaction>, RepoError> {
        Ok(self.transactions.read().map_err(poisoned)?.clone())
    }

    async fn find(&self, id: &TransactionId) -> Result<Option<Transaction>, RepoError> {
        Ok(self
            .transactions
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|t| &t.transaction_id == id)
            .cloned())
    }

    async fn len(&self) -> Result<usize, RepoError> {
        Ok(self.transactions.read().map_err(poisoned)?.len())
    }
}
