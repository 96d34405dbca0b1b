use crate::app_config::AppConfig;
use crate::error::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_decimal = |var: &str, default: &str| -> Result<Decimal, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let catalog_path = PathBuf::from(or_default("ESSENZA_CATALOG_PATH", "./config/catalog.yaml"));

    let vat_rate = parse_decimal("ESSENZA_VAT_RATE", "0.05")?;
    if vat_rate < Decimal::ZERO || vat_rate >= Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar {
            var: "ESSENZA_VAT_RATE".to_string(),
            reason: format!("{vat_rate} is not a fractional rate in [0, 1)"),
        });
    }

    let cutoff_hour = parse_u64("ESSENZA_CUTOFF_HOUR", "17")?;
    let cutoff_hour = u32::try_from(cutoff_hour)
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "ESSENZA_CUTOFF_HOUR".to_string(),
            reason: format!("{cutoff_hour} is not an hour of day"),
        })?;
    let cutoff =
        NaiveTime::from_hms_opt(cutoff_hour, 0, 0).ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "ESSENZA_CUTOFF_HOUR".to_string(),
            reason: format!("{cutoff_hour} is not an hour of day"),
        })?;

    let whatsapp_phone = or_default("ESSENZA_WHATSAPP_PHONE", "971509027555");
    if !whatsapp_phone.chars().all(|c| c.is_ascii_digit()) || whatsapp_phone.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "ESSENZA_WHATSAPP_PHONE".to_string(),
            reason: "must be digits only, wa.me format".to_string(),
        });
    }

    let currency_label = or_default("ESSENZA_CURRENCY_LABEL", "AED");
    let geocode_base_url = or_default(
        "ESSENZA_GEOCODE_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let geocode_timeout_secs = parse_u64("ESSENZA_GEOCODE_TIMEOUT_SECS", "30")?;
    let geocode_user_agent = or_default("ESSENZA_GEOCODE_USER_AGENT", "essenza/0.1 (storefront)");
    let log_level = or_default("ESSENZA_LOG_LEVEL", "info");

    Ok(AppConfig {
        catalog_path,
        vat_rate,
        cutoff,
        whatsapp_phone,
        currency_label,
        geocode_base_url,
        geocode_timeout_secs,
        geocode_user_agent,
        log_level,
    })
}
