//! Transaction domain model.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::payment::ValidatedPayment;

/// Number of characters in a generated transaction identifier.
pub const TRANSACTION_ID_LEN: usize = 12;

const ID_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Identifier of a recorded transaction.
///
/// Generated ids are 12 uppercase alphanumeric characters. Uniqueness is
/// probabilistic only; collisions are neither checked nor prevented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(example = "K3V9QX0A7B2M")]
pub struct TransactionId(String);

impl TransactionId {
    /// Generates a new random TransactionId.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates an id using the given random source.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..TRANSACTION_ID_LEN)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a simulated payment. Only successful outcomes are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
}

/// A recorded payment.
///
/// Transactions are immutable once created. Only the last four characters
/// of the card number are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    #[schema(example = 99.99)]
    pub amount: f64,
    #[schema(example = "USD")]
    pub currency: String,
    #[schema(example = "6467")]
    pub card_last_four: String,
    #[schema(example = "TEST USER")]
    pub card_name: String,
    /// Creation time (ISO 8601)
    #[schema(value_type = String, example = "2024-01-01T12:00:00.000000Z")]
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Builds a completed transaction with a fresh id and the current time.
    pub fn completed(payment: ValidatedPayment) -> Self {
        Self::from_parts(TransactionId::generate(), payment, Utc::now())
    }

    /// Builds a completed transaction from explicit parts.
    pub fn from_parts(
        transaction_id: TransactionId,
        payment: ValidatedPayment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            transaction_id,
            amount: payment.amount(),
            currency: payment.currency().to_string(),
            card_last_four: last_four(payment.card_number()),
            card_name: payment.card_name().to_string(),
            timestamp,
            status: TransactionStatus::Completed,
        }
    }
}

/// Last four characters of `card_number`, or all of it when shorter.
fn last_four(card_number: &str) -> String {
    let start = card_number
        .char_indices()
        .rev()
        .nth(3)
        .map_or(0, |(idx, _)| idx);
    card_number[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentRequest;
    use rand::{SeedableRng, rngs::StdRng};

    fn payment(card_number: &str) -> ValidatedPayment {
        PaymentRequest::new(card_number, "TEST USER", "12/25", "123", 99.99)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_generated_id_shape() {
        for _ in 0..100 {
            let id = TransactionId::generate();
            assert_eq!(id.as_str().len(), TRANSACTION_ID_LEN);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn test_seeded_ids_are_deterministic() {
        let a = TransactionId::generate_with(&mut StdRng::seed_from_u64(7));
        let b = TransactionId::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_completed_transaction() {
        let tx = Transaction::completed(payment("4532148803436467"));

        assert_eq!(tx.amount, 99.99);
        assert_eq!(tx.currency, "USD");
        assert_eq!(tx.card_last_four, "6467");
        assert_eq!(tx.card_name, "TEST USER");
        assert_eq!(tx.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_short_card_number_kept_whole() {
        assert_eq!(last_four("12"), "12");
        assert_eq!(last_four(""), "");
        assert_eq!(last_four("1234"), "1234");
    }

    #[test]
    fn test_last_four_counts_characters() {
        assert_eq!(last_four("4111 1111 1111 1111"), "1111");
        assert_eq!(last_four("ab€cdé"), "€cdé");
    }

    #[test]
    fn test_serialized_record_has_no_card_number() {
        let tx = Transaction::completed(payment("4532148803436467"));
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["status"], "completed");
        assert_eq!(json["card_last_four"], "6467");
        assert!(json.get("card_number").is_none());
        assert!(!json.to_string().contains("4532148803436467"));
    }
}
