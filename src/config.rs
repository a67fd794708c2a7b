use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on how long in-flight requests get after a shutdown signal.
    #[serde(default = "default_grace")]
    pub shutdown_grace_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    #[serde(default = "default_pg_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default = "default_ttl")]
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub postgres: Option<PostgresConfig>,
    /// Takes precedence over the `postgres` section when set.
    #[serde(default)]
    pub database_url: Option<String>,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_grace_secs: default_grace(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
fn default_grace() -> u64 {
    15
}
fn default_pg_port() -> u16 {
    5432
}
fn default_sslmode() -> String {
    "disable".into()
}
fn default_max_connections() -> u32 {
    10
}
fn default_issuer() -> String {
    "bloggy".into()
}
fn default_audience() -> String {
    "bloggy-users".into()
}
fn default_ttl() -> i64 {
    60
}

impl AppConfig {
    /// Reads `CONFIG_PATH` (default `./config.yaml`) and applies env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "./config.yaml".into());
        let mut config = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("read config file {}", path))?;
            Self::from_yaml(&raw).with_context(|| format!("parse config file {}", path))?
        } else {
            tracing::warn!(%path, "config file not found; using environment only");
            Self::from_env()?
        };
        config.apply_env_overrides();
        config.check()?;
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let secret = std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
        Ok(Self {
            server: ServerConfig::default(),
            postgres: None,
            database_url: Some(database_url),
            jwt: JwtConfig {
                secret,
                issuer: default_issuer(),
                audience: default_audience(),
                ttl_minutes: default_ttl(),
            },
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("APP_PORT").ok().and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.jwt.secret = secret;
        }
        if let Some(ttl) = std::env::var("JWT_TTL_MINUTES").ok().and_then(|v| v.parse().ok()) {
            self.jwt.ttl_minutes = ttl;
        }
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.database_url.is_none() && self.postgres.is_none() {
            anyhow::bail!("no database configured: set DATABASE_URL or a postgres section");
        }
        if self.jwt.secret.is_empty() {
            anyhow::bail!("jwt.secret must not be empty");
        }
        if self.jwt.ttl_minutes <= 0 {
            anyhow::bail!("jwt.ttl_minutes must be positive");
        }
        Ok(())
    }

    pub fn max_connections(&self) -> u32 {
        self.postgres
            .as_ref()
            .map(|pg| pg.max_connections)
            .unwrap_or_else(default_max_connections)
    }

    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        if let Some(url) = &self.database_url {
            return url.parse::<PgConnectOptions>().context("parse DATABASE_URL");
        }
        let pg = self
            .postgres
            .as_ref()
            .context("postgres section missing")?;
        let ssl_mode = pg
            .sslmode
            .parse::<PgSslMode>()
            .with_context(|| format!("unknown sslmode {}", pg.sslmode))?;
        Ok(PgConnectOptions::new()
            .host(&pg.host)
            .port(pg.port)
            .username(&pg.user)
            .password(&pg.password)
            .database(&pg.database)
            .ssl_mode(ssl_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
server:
  port: 3000
postgres:
  host: localhost
  user: bloggy
  password: secret
  database: bloggy
  sslmode: disable
jwt:
  secret: dev-secret
"#;

    #[test]
    fn parses_yaml_with_defaults() {
        let config = AppConfig::from_yaml(SAMPLE).expect("valid yaml");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.shutdown_grace_secs, 15);
        assert_eq!(config.jwt.ttl_minutes, 60);
        assert_eq!(config.jwt.issuer, "bloggy");
        assert_eq!(config.max_connections(), 10);
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert!(config.check().is_ok());
    }

    #[test]
    fn builds_connect_options_from_section() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();
        let opts = config.connect_options().expect("options");
        assert_eq!(opts.get_host(), "localhost");
        assert_eq!(opts.get_port(), 5432);
        assert_eq!(opts.get_database(), Some("bloggy"));
    }

    #[test]
    fn rejects_unknown_sslmode() {
        let raw = SAMPLE.replace("sslmode: disable", "sslmode: sometimes");
        let config = AppConfig::from_yaml(&raw).unwrap();
        assert!(config.connect_options().is_err());
    }

    #[test]
    fn check_requires_a_database() {
        let raw = "jwt:\n  secret: s\n";
        let config = AppConfig::from_yaml(raw).unwrap();
        assert!(config.check().is_err());
    }

    #[test]
    fn database_url_wins_over_section() {
        let mut config = AppConfig::from_yaml(SAMPLE).unwrap();
        config.database_url = Some("postgres://u:p@db.internal:6543/other".into());
        let opts = config.connect_options().unwrap();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
    }
}
