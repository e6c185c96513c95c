use super::{cors_config, jwt_config, payment_config, server_config::ServerConfig};
use payment::PaymentSimulation;
use poem::middleware::Cors;
use security::jwt::JwtSettings;
use std::env;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub jwt: JwtSettings,
    pub payment: PaymentSimulation,
    /// Insert the starter catalog when the products table is empty (SEED_CATALOG, default: true)
    pub seed_catalog: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            jwt: jwt_config::jwt_settings_from_env()?,
            payment: payment_config::payment_simulation_from_env(),
            seed_catalog: parse_flag(env::var("SEED_CATALOG").ok(), true),
        })
    }
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("true") || value == "1" => true,
        Some(value) if value.eq_ignore_ascii_case("false") || value == "0" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_seed_flag() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("false".to_string()), true));
        assert!(parse_flag(Some("1".to_string()), false));
        assert!(parse_flag(Some("maybe".to_string()), true));
    }
}
