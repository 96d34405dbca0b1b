//! Terminal driver for the Essenza storefront logic.
//!
//! Exercises the same flow the web storefront runs: browse the catalog,
//! build a cart, price it with a discount code, and hand the order off as
//! a WhatsApp deep link.

mod order;
mod show;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use essenza_core::config::load_app_config;

#[derive(Debug, Parser)]
#[command(name = "essenza-cli")]
#[command(about = "Ruh Essenza storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the product catalog with sizes, prices, and availability
    Catalog,
    /// Show the order-cutoff countdown and estimated delivery window
    Delivery,
    /// Search for a delivery location by free text
    Geocode {
        /// Free-text query, e.g. "Dubai Marina"
        query: String,
    },
    /// Quote and place an order, printing the WhatsApp hand-off link
    Order(order::OrderArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog => show::run_catalog(&config),
        Commands::Delivery => {
            show::run_delivery(&config);
            Ok(())
        }
        Commands::Geocode { query } => show::run_geocode(&config, &query).await,
        Commands::Order(args) => order::run_order(&config, &args),
    }
}
