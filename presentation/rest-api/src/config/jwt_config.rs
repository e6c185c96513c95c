use std::env;

use anyhow::{Context, bail};
use chrono::Duration;
use security::jwt::JwtSettings;

pub const MIN_SECRET_BYTES: usize = 32;

/// Token signing settings
///
/// Environment variables:
/// - JWT_SECRET: HMAC secret, at least 32 bytes (required)
/// - JWT_ISSUER: `iss` claim (default: "ecommerce-api")
/// - JWT_AUDIENCE: `aud` claim (default: "ecommerce-client")
/// - JWT_EXPIRATION_HOURS: token lifetime (default: 24)
pub fn jwt_settings_from_env() -> anyhow::Result<JwtSettings> {
    jwt_settings_from(|key| env::var(key).ok())
}

fn jwt_settings_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<JwtSettings> {
    let secret = lookup("JWT_SECRET").context("JWT_SECRET must be set")?;
    if secret.len() < MIN_SECRET_BYTES {
        bail!("JWT_SECRET must be at least {} bytes", MIN_SECRET_BYTES);
    }

    let hours = match lookup("JWT_EXPIRATION_HOURS") {
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|hours| *hours > 0)
            .context("JWT_EXPIRATION_HOURS must be a positive number of hours")?,
        None => 24,
    };

    Ok(JwtSettings {
        secret,
        issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "ecommerce-api".to_string()),
        audience: lookup("JWT_AUDIENCE").unwrap_or_else(|| "ecommerce-client".to_string()),
        lifetime: Duration::hours(hours),
    })
}
