use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/app.db";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `ES_*` variables, after loading a `.env` file when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let raw_addr =
            std::env::var("ES_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid ES_LISTEN_ADDR '{}'", raw_addr))?;
        let db_path = std::env::var("ES_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.into());
        let cors_allow = parse_origins(
            &std::env::var("ES_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let timeout_ms: u64 = std::env::var("ES_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Defaults with the database at `db_path`.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
            db_path: db_path.into(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_drops_blanks() {
        assert_eq!(
            parse_origins("http://a.test, ,http://b.test,"),
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn test_with_db_path_uses_defaults() {
        let config = Config::with_db_path("/tmp/x.db");
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.cors_allow, vec!["*"]);
    }
}
