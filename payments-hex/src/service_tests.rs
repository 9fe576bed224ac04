//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use payments_repo::InMemoryStore;
    use payments_types::{
        AppError, PaymentRequest, RepoError, Transaction, TransactionId, TransactionStore,
    };

    use crate::PaymentService;

    /// Store double that counts appends and can be told to fail.
    pub struct MockStore {
        transactions: Mutex<Vec<Transaction>>,
        fail: bool,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self {
                transactions: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.fail {
                Err(RepoError::Storage("store unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl TransactionStore for MockStore {
        async fn record(&self, transaction: Transaction) -> Result<(), RepoError> {
            self.check()?;
            self.transactions.lock().unwrap().push(transaction);
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<Transaction>, RepoError> {
            self.check()?;
            Ok(self.transactions.lock().unwrap().clone())
        }

        async fn find(&self, id: &TransactionId) -> Result<Option<Transaction>, RepoError> {
            self.check()?;
            Ok(self
                .transactions
                .lock()
                .unwrap()
                .iter()
                .find(|t| &t.transaction_id == id)
                .cloned())
        }

        async fn len(&self) -> Result<usize, RepoError> {
            self.check()?;
            Ok(self.transactions.lock().unwrap().len())
        }
    }

    fn valid_request(amount: f64) -> PaymentRequest {
        PaymentRequest::new("4532148803436467", "TEST USER", "12/25", "123", amount)
            .with_currency("USD")
    }

    fn instant_service<S: TransactionStore>(store: S) -> PaymentService<S> {
        PaymentService::new(store).with_processing_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_process_payment_success() {
        let service = instant_service(MockStore::new());

        let tx = service.process_payment(valid_request(99.99)).await.unwrap();

        assert_eq!(tx.amount, 99.99);
        assert_eq!(tx.currency, "USD");
        assert_eq!(tx.card_last_four, "6467");
        assert_eq!(service.transaction_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_negative_amount_fails_without_recording() {
        let service = instant_service(MockStore::new());

        let result = service.process_payment(valid_request(-50.0)).await;

        assert!(
            matches!(result, Err(AppError::BadRequest(ref msg)) if msg.contains("greater than zero"))
        );
        assert_eq!(service.store().len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_amount_fails() {
        let service = instant_service(MockStore::new());

        let result = service.process_payment(valid_request(0.0)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_missing_field_fails() {
        let service = instant_service(MockStore::new());
        let mut req = valid_request(10.0);
        req.expiry_date = None;

        let result = service.process_payment(req).await;

        assert!(
            matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Missing field: expiryDate")
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let service = instant_service(MockStore::failing());

        let result = service.process_payment(valid_request(10.0)).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_transaction_not_found() {
        let service = instant_service(InMemoryStore::new());

        let result = service.get_transaction(&"NOPE00000000".into()).await;

        assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Transaction not found"));
    }

    #[tokio::test]
    async fn test_list_transactions_in_order() {
        let service = instant_service(InMemoryStore::new());

        for amount in [10.0, 25.5, 99.99] {
            service.process_payment(valid_request(amount)).await.unwrap();
        }

        let amounts: Vec<f64> = service
            .list_transactions()
            .await
            .unwrap()
            .iter()
            .map(|t| t.amount)
            .collect();
        assert_eq!(amounts, [10.0, 25.5, 99.99]);
    }

    #[tokio::test]
    async fn test_recorded_transaction_found_by_id() {
        let service = instant_service(InMemoryStore::new());

        let tx = service.process_payment(valid_request(42.0)).await.unwrap();
        let found = service.get_transaction(&tx.transaction_id).await.unwrap();

        assert_eq!(found, tx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_delay_applied() {
        let service = PaymentService::new(InMemoryStore::new());
        assert_eq!(service.processing_delay(), Duration::from_secs(1));

        let started = tokio::time::Instant::now();
        service.process_payment(valid_request(5.0)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_does_not_block_readers() {
        let service = Arc::new(
            PaymentService::new(InMemoryStore::new())
                .with_processing_delay(Duration::from_secs(1)),
        );

        let pending = tokio::spawn({
            let service = service.clone();
            async move { service.process_payment(valid_request(5.0)).await }
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(service.list_transactions().await.unwrap().is_empty());

        let tx = pending.await.unwrap().unwrap();
        assert_eq!(service.list_transactions().await.unwrap(), vec![tx]);
    }

    #[tokio::test]
    async fn test_rejected_payment_skips_delay() {
        let service = PaymentService::new(InMemoryStore::new())
            .with_processing_delay(Duration::from_secs(30));

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            service.process_payment(valid_request(-1.0)),
        )
        .await;

        assert!(matches!(result, Ok(Err(AppError::BadRequest(_)))));
    }
}
