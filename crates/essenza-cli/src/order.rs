//! The `order` command: build a cart from `--item` specs, price it, and
//! hand the order off as a WhatsApp deep link.

use clap::Args;

use essenza_checkout::{Checkout, DiscountOutcome, OrderForm, Quote};
use essenza_core::catalog::{load_catalog, Catalog};
use essenza_core::selector::Selector;
use essenza_core::{AppConfig, CartStore};

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Cart item as product[:size[:quantity]], e.g. "1:100ml:2";
    /// size defaults to the first available one, quantity to 1
    #[arg(long = "item", required = true)]
    items: Vec<String>,

    /// Discount code, e.g. SID10
    #[arg(long)]
    code: Option<String>,

    /// Quote only: print the totals without placing the order
    #[arg(long)]
    dry_run: bool,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    address: String,

    #[arg(long, default_value = "")]
    city: String,

    #[arg(long, default_value = "")]
    notes: String,

    /// "lat, lng" from the location picker, or freeform text
    #[arg(long, default_value = "")]
    location: String,
}

/// Run the order flow end to end.
///
/// # Errors
///
/// Returns an error for an unparseable `--item` spec, an unknown product
/// or size, or a checkout validation failure.
pub(crate) fn run_order(config: &AppConfig, args: &OrderArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&config.catalog_path)?;

    let mut cart = CartStore::new();
    for spec in &args.items {
        cart.add(parse_item(&catalog, spec)?);
    }

    let checkout = Checkout::new(
        config.vat_rate,
        config.whatsapp_phone.clone(),
        config.currency_label.clone(),
    );

    let entered_code = args.code.as_deref();
    let quote = checkout.quote(cart.items(), entered_code);
    print_quote(&cart, &quote, &config.currency_label);

    if args.dry_run {
        return Ok(());
    }

    let form = OrderForm {
        name: args.name.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
        address: args.address.clone(),
        city: args.city.clone(),
        notes: args.notes.clone(),
        location: args.location.clone(),
    };

    let placed = checkout.place_order(&form, &mut cart, entered_code)?;
    println!("\n{}", placed.message);
    println!("\nOpen to confirm: {}", placed.url);
    println!("Order sent via WhatsApp!");

    Ok(())
}

/// Parse a `product[:size[:quantity]]` spec into a cart line item.
fn parse_item(catalog: &Catalog, spec: &str) -> anyhow::Result<essenza_core::LineItem> {
    let mut parts = spec.splitn(3, ':');
    let product_id = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| anyhow::anyhow!("empty --item spec"))?;

    let mut selector = Selector::new(catalog, product_id)?;
    if let Some(size) = parts.next().filter(|s| !s.is_empty()) {
        selector.select_size(size)?;
    }
    if let Some(quantity) = parts.next() {
        let quantity: u32 = quantity
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid quantity '{quantity}' in --item '{spec}'"))?;
        selector.set_quantity(quantity);
    }

    Ok(selector.line_item())
}

fn print_quote(cart: &CartStore, quote: &Quote, currency: &str) {
    for item in cart.items() {
        println!("{} x{}", item.name, item.quantity);
    }
    println!("Items:    {}", quote.total_items);
    println!("Subtotal: {currency} {:.2}", quote.subtotal.round_dp(2));
    match &quote.discount {
        DiscountOutcome::Applied { code, .. } => println!(
            "Discount ({code}): -{currency} {:.2}",
            quote.discount_amount.round_dp(2)
        ),
        DiscountOutcome::Invalid { entered } => println!("Invalid discount code '{entered}'."),
        DiscountOutcome::None => {}
    }
    println!("VAT:      {currency} {:.2}", quote.vat_amount.round_dp(2));
    println!("Total:    {currency} {:.2}", quote.grand_total.round_dp(2));
}
