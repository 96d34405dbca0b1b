//! Read-only commands: catalog listing, delivery estimate, location
//! search.

use chrono::Local;

use essenza_checkout::{Countdown, DeliveryWindow};
use essenza_core::catalog::load_catalog;
use essenza_core::AppConfig;
use essenza_geocode::GeocodeClient;

/// Print the catalog: one block per product, blocked sizes flagged.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub(crate) fn run_catalog(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(&config.catalog_path)?;
    let currency = &config.currency_label;

    for product in &catalog.products {
        let blocked = catalog.blocked_sizes(&product.id);
        println!(
            "[{}] {} \u{2014} {} ({}% OFF)",
            product.id,
            product.name,
            product.category,
            product.discount_percent()
        );
        for variation in &product.variations {
            let marker = if blocked.contains(&variation.size.to_lowercase()) {
                "  (unavailable)"
            } else {
                ""
            };
            println!(
                "    {:<7}{currency} {} (was {currency} {}){marker}",
                variation.size, variation.price, variation.original_price
            );
        }
        println!();
    }

    Ok(())
}

/// Print the countdown to today's cutoff and the delivery window.
pub(crate) fn run_delivery(config: &AppConfig) {
    let now = Local::now().naive_local();
    let countdown = Countdown::at(now, config.cutoff);
    let window = DeliveryWindow::at(now, config.cutoff);

    println!("Order in {countdown}");
    println!("Get it delivered by {window}");
}

/// Search for a location and print each hit with its normalized
/// coordinates.
///
/// # Errors
///
/// Returns an error only if the client cannot be constructed; a failed
/// search degrades to "no results".
pub(crate) async fn run_geocode(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let client = GeocodeClient::with_base_url(
        config.geocode_timeout_secs,
        &config.geocode_user_agent,
        &config.geocode_base_url,
    )?;

    let places = client.search_or_empty(query).await;
    if places.is_empty() {
        println!("no results for '{query}'");
        return Ok(());
    }

    for place in &places {
        match place.location() {
            Ok(location) => println!("{location}  {}", place.display_name),
            Err(e) => tracing::warn!(display_name = %place.display_name, error = %e, "skipping result"),
        }
    }

    Ok(())
}
