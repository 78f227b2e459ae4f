use std::path::PathBuf;

use anyhow::{ensure, Context, Result};

use crate::pricing::layout::DEFAULT_VINYL_COST_PER_SQM;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Vinyl cost per m² used when a request leaves the field empty.
    pub default_vinyl_cost: f64,
    /// VAT fraction used when a request leaves the field empty.
    pub default_vat_rate: f64,
    /// When set, the quote cache is kept in this JSON file instead of memory.
    pub quote_cache_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_vinyl_cost: DEFAULT_VINYL_COST_PER_SQM,
            default_vat_rate: 0.15,
            quote_cache_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let default_vinyl_cost = match optional_env("DEFAULT_VINYL_COST") {
            Some(raw) => raw
                .parse::<f64>()
                .context("DEFAULT_VINYL_COST must be a number")?,
            None => defaults.default_vinyl_cost,
        };
        ensure!(
            default_vinyl_cost.is_finite() && default_vinyl_cost > 0.0,
            "DEFAULT_VINYL_COST must be greater than zero"
        );

        let default_vat_rate = match optional_env("DEFAULT_VAT_RATE") {
            Some(raw) => raw
                .parse::<f64>()
                .context("DEFAULT_VAT_RATE must be a number")?,
            None => defaults.default_vat_rate,
        };
        ensure!(
            (0.0..=1.0).contains(&default_vat_rate),
            "DEFAULT_VAT_RATE must be a fraction between 0 and 1"
        );

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            default_vinyl_cost,
            default_vat_rate,
            quote_cache_path: optional_env("QUOTE_CACHE_PATH").map(PathBuf::from),
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
