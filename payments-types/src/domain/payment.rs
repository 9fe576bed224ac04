//! Payment request domain model and validation rules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Currency applied when a request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Amount as submitted by the client.
///
/// Browsers and scripts send either a JSON number or a numeric string,
/// so both are accepted and parsed during validation. Any other JSON value
/// is kept as-is and rejected by validation rather than by the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl AmountInput {
    /// Parses the amount into a finite decimal value.
    pub fn parse(&self) -> Result<f64, DomainError> {
        let value = match self {
            AmountInput::Number(n) => *n,
            AmountInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| DomainError::InvalidAmount)?,
            AmountInput::Other(_) => return Err(DomainError::InvalidAmount),
        };

        if !value.is_finite() {
            return Err(DomainError::InvalidAmount);
        }

        Ok(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// A payment as submitted to `POST /api/payment`.
///
/// Every field is optional at the type level so that a missing field is
/// reported as a validation failure naming that field, rather than as a
/// generic deserialization error.
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "4532148803436467")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "TEST USER")]
    pub card_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "12/25")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "123")]
    pub cvv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountInput>,
    /// Defaults to USD
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "USD")]
    pub currency: Option<String>,
}

impl PaymentRequest {
    /// Creates a request with every required field set.
    pub fn new(
        card_number: impl Into<String>,
        card_name: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
        amount: impl Into<AmountInput>,
    ) -> Self {
        Self {
            card_number: Some(card_number.into()),
            card_name: Some(card_name.into()),
            expiry_date: Some(expiry_date.into()),
            cvv: Some(cvv.into()),
            amount: Some(amount.into()),
            currency: None,
        }
    }

    /// Sets the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Checks required fields in order (cardNumber, cardName, expiryDate,
    /// cvv, amount) and then the amount itself.
    pub fn validate(self) -> Result<ValidatedPayment, DomainError> {
        let card_number = self
            .card_number
            .ok_or(DomainError::MissingField("cardNumber"))?;
        let card_name = self.card_name.ok_or(DomainError::MissingField("cardName"))?;
        // Expiry date and CVV are only checked for presence and then dropped.
        self.expiry_date
            .ok_or(DomainError::MissingField("expiryDate"))?;
        self.cvv.ok_or(DomainError::MissingField("cvv"))?;
        let amount = self.amount.ok_or(DomainError::MissingField("amount"))?;

        let amount = amount.parse()?;
        if amount <= 0.0 {
            return Err(DomainError::NonPositiveAmount);
        }

        Ok(ValidatedPayment {
            card_number,
            card_name,
            amount,
            currency: self
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}

impl std::fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("card_number", &self.card_number.as_ref().map(|_| "<redacted>"))
            .field("card_name", &self.card_name)
            .field("expiry_date", &self.expiry_date.as_ref().map(|_| "<redacted>"))
            .field("cvv", &self.cvv.as_ref().map(|_| "<redacted>"))
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .finish()
    }
}

/// A payment that passed validation.
///
/// Can only be obtained through [`PaymentRequest::validate`], so holding one
/// guarantees a positive amount and a resolved currency.
#[derive(Clone, PartialEq)]
pub struct ValidatedPayment {
    card_number: String,
    card_name: String,
    amount: f64,
    currency: String,
}

impl ValidatedPayment {
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl std::fmt::Debug for ValidatedPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedPayment")
            .field("card_number", &"<redacted>")
            .field("card_name", &self.card_name)
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .finish()
    }
}
