//! Server configuration from environment variables

use anyhow::{Context, bail};
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_MAX_FIELD_CHARS: usize = 256;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// `None` selects the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub frontend_origins: Vec<HeaderValue>,
    pub max_field_chars: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be greater than zero");
        }

        let max_field_chars = match get("GAME_MAX_FIELD_CHARS") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("GAME_MAX_FIELD_CHARS must be a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_MAX_FIELD_CHARS,
        };
        if max_field_chars == 0 {
            bail!("GAME_MAX_FIELD_CHARS must be greater than zero");
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().with_context(|| {
                    format!("FRONTEND_ORIGINS contains an invalid origin: {origin:?}")
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            database_max_connections,
            frontend_origins,
            max_field_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_none());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.max_field_chars, 256);
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://games@localhost/games"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
            ("FRONTEND_ORIGINS", "https://games.example.com"),
            ("GAME_MAX_FIELD_CHARS", "64"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://games@localhost/games")
        );
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.frontend_origins, ["https://games.example.com"]);
        assert_eq!(config.max_field_chars, 64);
    }

    #[test]
    fn test_blank_database_url_is_unset() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(config_from(&[("PORT", "70000")]).is_err());
        assert!(config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config_from(&[("GAME_MAX_FIELD_CHARS", "0")]).is_err());
    }

    #[test]
    fn test_invalid_frontend_origin_is_rejected() {
        let err = config_from(&[(
            "FRONTEND_ORIGINS",
            "https://games.example.com,https://bad\norigin.example.com",
        )])
        .unwrap_err();
        assert!(err.to_string().contains("FRONTEND_ORIGINS"));
    }

    #[test]
    fn test_frontend_origins_skip_empty_entries() {
        let config = config_from(&[(
            "FRONTEND_ORIGINS",
            "https://games.example.com, ,http://localhost:5173,",
        )])
        .unwrap();
        assert_eq!(
            config.frontend_origins,
            ["https://games.example.com", "http://localhost:5173"]
        );
    }
}
