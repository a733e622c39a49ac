use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::matching::MatchWeights;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_CAREERS_DATA_PATH: &str = "data/careers.json";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: Vec<String>,
    pub seed_data: bool,
    pub careers_data_path: PathBuf,
    pub match_weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchWeights::default();

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            seed_data: parse_flag(&std::env::var("SEED_DATA").unwrap_or_default()),
            careers_data_path: std::env::var("CAREERS_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_CAREERS_DATA_PATH.to_string())
                .into(),
            match_weights: MatchWeights {
                interest: parse_weight("MATCH_INTEREST_WEIGHT", defaults.interest)?,
                strength: parse_weight("MATCH_STRENGTH_WEIGHT", defaults.strength)?,
                performance_boost: parse_weight(
                    "MATCH_PERFORMANCE_BOOST",
                    defaults.performance_boost,
                )?,
                performance_penalty: parse_weight(
                    "MATCH_PERFORMANCE_PENALTY",
                    defaults.performance_penalty,
                )?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, std::env::var(key).ok().as_deref(), default)
}

fn parse_value<T>(key: &str, raw: Option<&str>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_weight(key: &str, default: f64) -> Result<f64> {
    check_weight(key, parse_env_or(key, default)?)
}

/// `f64` parsing accepts `inf` and `NaN`; neither may reach the matcher.
fn check_weight(key: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        bail!("Environment variable '{key}' must be a finite, non-negative number, got '{value}'");
    }
    Ok(value)
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// "1", "true" and "yes" (any case) enable a flag; everything else disables it.
fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
