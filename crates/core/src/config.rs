use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Minimum length of the JWT signing secret, in bytes.
const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    pub db_url: String,
    #[serde(default)]
    pub db_user: Option<String>,
    #[serde(default)]
    pub db_password: Option<String>,
    pub jwt_secret: String,
    #[serde(default = "default_jwt_ttl")]
    pub jwt_ttl_seconds: i64,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_http_port() -> u16 {
    8080
}

fn default_jwt_ttl() -> i64 {
    3600 // 1 hour
}

fn default_bcrypt_cost() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from an optional `catalog.toml` in the current
    /// directory, with environment variables taking precedence.
    ///
    /// Recognized variables: `HTTP_PORT`, `DB_URL`, `DB_USER`, `DB_PASSWORD`,
    /// `JWT_SECRET`, `JWT_TTL_SECONDS`, `BCRYPT_COST`.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("catalog").required(false))
            .add_source(Environment::default())
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} bytes (got {})",
                self.jwt_secret.len()
            )));
        }
        if self.jwt_ttl_seconds <= 0 {
            return Err(ConfigError::Message(
                "JWT_TTL_SECONDS must be positive".to_string(),
            ));
        }
        if self.bcrypt_cost == 0 {
            return Err(ConfigError::Message(
                "BCRYPT_COST must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            http_port: default_http_port(),
            db_url: "postgres://localhost/catalog".to_string(),
            db_user: None,
            db_password: None,
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            jwt_ttl_seconds: default_jwt_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_http_port(), 8080);
        assert_eq!(default_jwt_ttl(), 3600);
        assert_eq!(default_bcrypt_cost(), 10);
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut cfg = base_config();
        cfg.jwt_secret = "too-short".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut cfg = base_config();
        cfg.jwt_ttl_seconds = 0;
        assert!(cfg.validate().is_err());
    }
}
