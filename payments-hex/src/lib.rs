//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the fake payments service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validate, simulate processing, record)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `S: TransactionStore`, allowing
//! different store implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentService;
