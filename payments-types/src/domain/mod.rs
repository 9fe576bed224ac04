//! Domain models for the payment service.

pub mod payment;
pub mod transaction;

pub use payment::{AmountInput, DEFAULT_CURRENCY, PaymentRequest, ValidatedPayment};
pub use transaction::{Transaction, TransactionId, TransactionStatus};
