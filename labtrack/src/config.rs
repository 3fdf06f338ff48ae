//! Application configuration module.
//!
//! Configuration is loaded from the process environment. A local `.env` file
//! (loaded by the binary before parsing) can pre-populate the database
//! settings, matching how the service has historically been deployed.
//!
//! Database settings use the `DB_*` names the deployment already exports:
//!
//! ```bash
//! DB_SERVER=db.internal
//! DB_USER=timeclock
//! DB_PASSWORD=...
//! DB_DATABASE=labtrack
//! DB_PORT=5432
//! ```
//!
//! The HTTP listener is controlled by `LABTRACK_HOST` / `LABTRACK_PORT`
//! (defaults `0.0.0.0:2024`).

use clap::Parser;
use figment::{
    Figment,
    providers::Env,
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// Simple CLI args - the configuration itself comes from the environment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// All fields have defaults defined in the `Default` implementation, so a
/// bare environment still produces a usable development configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 2024,
            database: DatabaseConfig::default(),
        }
    }
}

/// Connection settings for the external database.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host name (`DB_SERVER`)
    pub server: String,
    /// Database login (`DB_USER`)
    pub user: String,
    /// Database password (`DB_PASSWORD`)
    pub password: String,
    /// Database name (`DB_DATABASE`)
    pub database: String,
    /// Database port (`DB_PORT`)
    pub port: u16,
    /// Statement timeout applied to every session, in seconds. Bounds
    /// per-request query time so a wedged query cannot hold a connection
    /// indefinitely.
    pub statement_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            server: "localhost".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            database: "labtrack".to_string(),
            port: 5432,
            statement_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options from the individual settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.server)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .options([("statement_timeout", format!("{}s", self.statement_timeout_secs))])
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load(_args: &Args) -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::new()
            // Listener and overrides under the service prefix
            .merge(Env::prefixed("LABTRACK_").split("__"))
            // The flat DB_* names the deployment already uses map onto the
            // nested database section
            .merge(Env::prefixed("DB_").map(|key| format!("database.{}", key.as_str().to_lowercase()).into()).split("."))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&Args { validate: false })?;

            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 2024);
            assert_eq!(config.database.port, 5432);
            assert_eq!(config.bind_address(), "0.0.0.0:2024");

            Ok(())
        });
    }

    #[test]
    fn test_db_env_vars() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_SERVER", "db.example.com");
            jail.set_env("DB_USER", "reader");
            jail.set_env("DB_PASSWORD", "hunter2");
            jail.set_env("DB_DATABASE", "timeclock");
            jail.set_env("DB_PORT", "5433");

            let config = Config::load(&Args { validate: false })?;

            assert_eq!(config.database.server, "db.example.com");
            assert_eq!(config.database.user, "reader");
            assert_eq!(config.database.password, "hunter2");
            assert_eq!(config.database.database, "timeclock");
            assert_eq!(config.database.port, 5433);

            Ok(())
        });
    }

    #[test]
    fn test_listener_env_override() {
        Jail::expect_with(|jail| {
            jail.set_env("LABTRACK_HOST", "127.0.0.1");
            jail.set_env("LABTRACK_PORT", "8080");

            let config = Config::load(&Args { validate: false })?;

            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 8080);
            assert_eq!(config.bind_address(), "127.0.0.1:8080");

            Ok(())
        });
    }

    #[test]
    fn test_nested_db_override_via_service_prefix() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_SERVER", "db.example.com");
            jail.set_env("LABTRACK_DATABASE__STATEMENT_TIMEOUT_SECS", "5");

            let config = Config::load(&Args { validate: false })?;

            assert_eq!(config.database.server, "db.example.com");
            assert_eq!(config.database.statement_timeout_secs, 5);

            Ok(())
        });
    }
}
