//! # Payments Repository
//!
//! Concrete store implementations (adapters) for the payments service.
//! This crate provides the adapter that implements the `TransactionStore` port.
//!
//! Transactions live for the lifetime of the process only; there is no
//! persistent backend.

pub mod memory;

pub use memory::InMemoryStore;

/// Builds the store used by the server binary.
pub fn build_store() -> InMemoryStore {
    InMemoryStore::new()
}
