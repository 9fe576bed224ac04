//! Client example demonstrating the payment flow against a running server.
//!
//! Run with: cargo run -p payments-app --example client_example

use std::net::SocketAddr;
use std::time::Duration;

use payments_client::PaymentsClient;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_store;
use payments_types::PaymentRequest;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an ephemeral port and keep the listener for the server
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // Serve an empty static directory
    let static_dir = tempdir()?;

    println!("🚀 Starting server on {addr}...");

    // Short delay so the demo stays snappy
    let service = PaymentService::new(build_store()).with_processing_delay(Duration::from_millis(200));
    let router = HttpServer::new(service)
        .with_static_dir(static_dir.path())
        .router();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full payment flow
    // ─────────────────────────────────────────────────────────────────────────

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    for (card, amount) in [
        ("4532148803436467", 10.00),
        ("5425233430109903", 25.50),
        ("378282246310005", 99.99),
    ] {
        let req = PaymentRequest::new(card, "TEST CARDHOLDER", "12/25", "123", amount);
        let resp = client.pay(&req).await?;
        println!(
            "✅ Paid {:.2} {} (tx={})",
            resp.amount, resp.currency, resp.transaction_id
        );
    }

    // Rejected payment
    let req = PaymentRequest::new("4532148803436467", "TEST CARDHOLDER", "12/25", "123", -50.0);
    match client.pay(&req).await {
        Ok(resp) => println!("❌ Unexpectedly accepted: {}", resp.transaction_id),
        Err(e) => println!("✅ Negative amount rejected: {e}"),
    }

    // History
    let transactions = client.list_transactions().await?;
    println!("\n📋 All transactions:");
    for tx in &transactions {
        println!(
            "   - {} ****{} {:.2} {} [{:?}]",
            tx.transaction_id, tx.card_last_four, tx.amount, tx.currency, tx.status
        );
    }

    if let Some(first) = transactions.first() {
        let found = client.get_transaction(first.transaction_id.as_str()).await?;
        println!("\n🔎 Looked up {}: {}", found.transaction_id, found.card_name);
    }

    match client.get_transaction("DOESNOTEXIST").await {
        Ok(_) => println!("❌ Unknown id unexpectedly found"),
        Err(e) => println!("✅ Unknown id: {e}"),
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
