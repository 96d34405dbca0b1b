use std::path::PathBuf;

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Application configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the YAML product catalog.
    pub catalog_path: PathBuf,
    /// Fractional VAT rate applied to the discounted subtotal, e.g. 0.05.
    pub vat_rate: Decimal,
    /// Daily order cutoff; orders placed after it ship a day later.
    pub cutoff: NaiveTime,
    /// WhatsApp business number the order deep link is addressed to,
    /// digits only (wa.me format).
    pub whatsapp_phone: String,
    /// Currency label used in order summaries, e.g. `"AED"`.
    pub currency_label: String,
    /// Base URL of the geocode search service.
    pub geocode_base_url: String,
    pub geocode_timeout_secs: u64,
    pub geocode_user_agent: String,
    pub log_level: String,
}
