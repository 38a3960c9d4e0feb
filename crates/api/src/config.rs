use axum::http::HeaderValue;

/// Which [`TaskStore`](taskmanager_db::repositories::TaskStore) backs the
/// service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// PostgreSQL through a `sqlx` pool.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local store; contents are lost on restart.
    Memory,
}

/// Server configuration loaded from environment variables.
///
/// All fields except `DATABASE_URL` have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Task store selection and connection settings.
    pub store: StoreConfig,
}

/// A configuration value was missing or could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `8080`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `TASK_STORE`               | `postgres`              |
    /// | `DATABASE_URL`             | required for `postgres` |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 8080)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let store = match lookup("TASK_STORE").as_deref().unwrap_or("postgres") {
            "postgres" => StoreConfig::Postgres {
                database_url: lookup("DATABASE_URL")
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20)?,
            },
            "memory" => StoreConfig::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "TASK_STORE",
                    value: other.to_string(),
                    reason: "expected 'postgres' or 'memory'".into(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn origins(config: &ServerConfig) -> Vec<&str> {
        config
            .cors_origins
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect()
    }

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/tasks")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(origins(&config), vec!["http://localhost:5173"]);
        assert_eq!(
            config.store,
            StoreConfig::Postgres {
                database_url: "postgres://localhost/tasks".into(),
                max_connections: 20,
            }
        );
    }

    #[test]
    fn postgres_store_requires_database_url() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn memory_store_needs_no_database_url() {
        let config = load(&[("TASK_STORE", "memory")]).unwrap();
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn unknown_store_is_rejected() {
        assert_matches!(
            load(&[("TASK_STORE", "redis")]),
            Err(ConfigError::Invalid { var: "TASK_STORE", .. })
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert_matches!(
            load(&[("TASK_STORE", "memory"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        );
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("TASK_STORE", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();

        assert_eq!(origins(&config), vec!["http://a.test", "http://b.test"]);
    }
}
