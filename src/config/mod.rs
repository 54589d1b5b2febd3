//! Process configuration.
//!
//! Read once at startup from `TABLEPOINT__<SECTION>__<KEY>` environment
//! variables (a `.env` file is honoured in development):
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TABLEPOINT__DATABASE__URL` | required |
//! | `TABLEPOINT__DATABASE__MAX_CONNECTIONS` | 10 |
//! | `TABLEPOINT__DATABASE__RUN_MIGRATIONS` | false |
//! | `TABLEPOINT__SERVER__PORT` | 8080 |
//! | `TABLEPOINT__SERVER__LOG_FORMAT` | `pretty` (`json` for production) |
//! | `TABLEPOINT__MEMBERSHIP__SPEND_POLICY` | `all_orders` |
//! | `TABLEPOINT__MEMBERSHIP__TIER_TABLE_PATH` | built-in five tiers |
//!
//! ```no_run
//! use tablepoint::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! ```

mod database;
mod error;
mod membership;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use membership::MembershipConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub membership: MembershipConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `TABLEPOINT__*` environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("TABLEPOINT").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.membership.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::SpendPolicy;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "TABLEPOINT__DATABASE__URL",
        "TABLEPOINT__SERVER__PORT",
        "TABLEPOINT__SERVER__LOG_FORMAT",
        "TABLEPOINT__MEMBERSHIP__SPEND_POLICY",
    ];

    /// Loads config with `vars` set, then clears them.
    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for key in VARS {
            env::remove_var(key);
        }
        result
    }

    const DB: (&str, &str) = ("TABLEPOINT__DATABASE__URL", "postgresql://test@localhost/test");

    #[test]
    fn minimal_environment_loads_and_validates() {
        let config = load_with(&[DB]).unwrap();

        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert_eq!(config.membership.spend_policy, SpendPolicy::AllOrders);
        assert!(config.membership.tier_table_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_are_read_from_environment() {
        let config = load_with(&[
            DB,
            ("TABLEPOINT__SERVER__PORT", "3000"),
            ("TABLEPOINT__SERVER__LOG_FORMAT", "json"),
            ("TABLEPOINT__MEMBERSHIP__SPEND_POLICY", "exclude_cancelled"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.membership.spend_policy, SpendPolicy::ExcludeCancelled);
    }

    #[test]
    fn missing_database_section_fails_to_load() {
        assert!(matches!(load_with(&[]), Err(ConfigError::LoadError(_))));
    }
}
