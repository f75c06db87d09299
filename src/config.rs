//! Application configuration management.
//!
//! Each service loads its own configuration from prefixed environment
//! variables (`ACCOUNTS_*` for the accounts server, `CLIENTS_*` for the
//! clients server), deserialized with the `envy` crate so the two servers
//! can run side by side from one environment.

use serde::Deserialize;

/// Configuration for the accounts server.
///
/// # Environment Variables
///
/// - `ACCOUNTS_DATABASE_URL` (required): PostgreSQL connection string
/// - `ACCOUNTS_SERVER_PORT` (optional): HTTP port, defaults to 8081
/// - `ACCOUNTS_EVENT_SECRET` (required): shared secret used to verify the
///   signature on incoming client events
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    pub database_url: String,

    #[serde(default = "default_accounts_port")]
    pub server_port: u16,

    pub event_secret: String,
}

/// Configuration for the clients server.
///
/// # Environment Variables
///
/// - `CLIENTS_DATABASE_URL` (required): PostgreSQL connection string
/// - `CLIENTS_SERVER_PORT` (optional): HTTP port, defaults to 8080
/// - `CLIENTS_EVENT_URL` (optional): endpoint that receives client events;
///   when unset, publishing is skipped
/// - `CLIENTS_EVENT_SECRET` (required): shared secret used to sign
///   outgoing client events
#[derive(Debug, Clone, Deserialize)]
pub struct ClientsConfig {
    pub database_url: String,

    #[serde(default = "default_clients_port")]
    pub server_port: u16,

    #[serde(default)]
    pub event_url: Option<String>,

    pub event_secret: String,
}

fn default_accounts_port() -> u16 {
    8081
}

fn default_clients_port() -> u16 {
    8080
}

impl AccountsConfig {
    /// Load configuration from `ACCOUNTS_*` environment variables.
    ///
    /// A `.env` file is loaded first if present (ignored if not found).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("ACCOUNTS_").from_env::<AccountsConfig>()
    }
}

impl ClientsConfig {
    /// Load configuration from `CLIENTS_*` environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("CLIENTS_").from_env::<ClientsConfig>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_config_applies_port_default() {
        let config: AccountsConfig = envy::prefixed("ACCOUNTS_")
            .from_iter(vec![
                (
                    "ACCOUNTS_DATABASE_URL".to_string(),
                    "postgres://localhost/accounts".to_string(),
                ),
                ("ACCOUNTS_EVENT_SECRET".to_string(), "s3cret".to_string()),
            ])
            .unwrap();

        assert_eq!(config.server_port, 8081);
        assert_eq!(config.database_url, "postgres://localhost/accounts");
    }

    #[test]
    fn clients_config_reads_optional_event_url() {
        let config: ClientsConfig = envy::prefixed("CLIENTS_")
            .from_iter(vec![
                (
                    "CLIENTS_DATABASE_URL".to_string(),
                    "postgres://localhost/clients".to_string(),
                ),
                ("CLIENTS_EVENT_SECRET".to_string(), "s3cret".to_string()),
                ("CLIENTS_SERVER_PORT".to_string(), "9000".to_string()),
                (
                    "CLIENTS_EVENT_URL".to_string(),
                    "http://localhost:8081/internal/client-events".to_string(),
                ),
            ])
            .unwrap();

        assert_eq!(config.server_port, 9000);
        assert_eq!(
            config.event_url.as_deref(),
            Some("http://localhost:8081/internal/client-events")
        );
    }

    #[test]
    fn clients_config_event_url_defaults_to_none() {
        let config: ClientsConfig = envy::prefixed("CLIENTS_")
            .from_iter(vec![
                (
                    "CLIENTS_DATABASE_URL".to_string(),
                    "postgres://localhost/clients".to_string(),
                ),
                ("CLIENTS_EVENT_SECRET".to_string(), "s3cret".to_string()),
            ])
            .unwrap();

        assert!(config.event_url.is_none());
        assert_eq!(config.server_port, 8080);
    }
}
