use std::env;

use anyhow::{Context, bail};
use dotenvy::dotenv;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub max_connections: u32,

    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,

    /// Daily rolling log files are written here when set, stdout otherwise
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let cors_origins = match lookup("BACKEND_CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => vec![DEFAULT_CORS_ORIGIN.to_string()],
        };

        Ok(Self {
            database_url,
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            max_connections,
            cors_origins,
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty()),
        })
    }
}

/// Accepts either a JSON array (`["http://a", "http://b"]`) or a comma separated list.
fn parse_origins(raw: &str) -> anyhow::Result<Vec<String>> {
    let raw = raw.trim();
    let origins: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw).context("BACKEND_CORS_ORIGINS is not a valid JSON list")?
    } else {
        raw.split(',').map(|s| s.trim().to_string()).collect()
    };

    Ok(origins.into_iter().filter(|o| !o.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.server_addr, DEFAULT_SERVER_ADDR);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.cors_origins, vec![DEFAULT_CORS_ORIGIN.to_string()]);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn cors_origins_accept_json_list() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            (
                "BACKEND_CORS_ORIGINS",
                r#"["http://localhost:5173", "https://hr.example.com"]"#,
            ),
        ]))
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://hr.example.com"]
        );
    }

    #[test]
    fn cors_origins_accept_comma_separated_list() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BACKEND_CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();

        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn bad_max_connections_is_rejected() {
        let not_a_number = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));
        assert!(not_a_number.is_err());

        let zero = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]));
        assert!(zero.is_err());
    }

    #[test]
    fn blank_log_dir_means_stdout() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("LOG_DIR", "  "),
        ]))
        .unwrap();
        assert!(config.log_dir.is_none());
    }
}
