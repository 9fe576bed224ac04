//! Payments CLI
//!
//! Command-line interface for the fake Payments API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use payments_client::PaymentsClient;
use payments_types::PaymentRequest;

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Fake payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:5000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a simulated card payment
    Pay {
        /// Card number (any string; only the last four characters are kept)
        #[arg(long)]
        card_number: String,
        /// Cardholder name
        #[arg(long, default_value = "TEST CARDHOLDER")]
        card_name: String,
        /// Expiry date, e.g. 12/25
        #[arg(long, default_value = "12/25")]
        expiry: String,
        #[arg(long, default_value = "123")]
        cvv: String,
        /// Amount; passed through as text so the server performs the validation
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Transaction history
    Transaction {
        #[command(subcommand)]
        action: TransactionCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// List all transactions
    List,
    /// Get a transaction by ID
    Get {
        /// 12-character transaction ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Pay {
            card_number,
            card_name,
            expiry,
            cvv,
            amount,
            currency,
        } => {
            let mut req = PaymentRequest::new(card_number, card_name, expiry, cvv, amount.as_str());
            if let Some(currency) = currency {
                req = req.with_currency(currency);
            }
            let resp = client.pay(&req).await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }

        Commands::Transaction { action } => match action {
            TransactionCommands::List => {
                let transactions = client.list_transactions().await?;
                println!("{}", serde_json::to_string_pretty(&transactions)?);
            }
            TransactionCommands::Get { id } => {
                let tx = client.get_transaction(&id).await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pay_accepts_negative_amount() {
        let cli = Cli::try_parse_from([
            "payments",
            "pay",
            "--card-number",
            "4532148803436467",
            "--amount",
            "-50",
        ])
        .unwrap();

        match cli.command {
            Commands::Pay { amount, currency, .. } => {
                assert_eq!(amount, "-50");
                assert!(currency.is_none());
            }
            _ => panic!("expected pay command"),
        }
    }
}
