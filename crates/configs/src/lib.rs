use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_acquire_timeout() -> u64 { 30 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Shared company credential pair checked before any deletion.
/// Injected at startup; the defaults match the seed dataset and are meant
/// to be overridden in real deployments.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    pub company_username: String,
    pub company_password: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self { company_username: "admin".into(), company_password: "company123".into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub employees_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { employees_file: "data/employees.csv".into() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// Load `config.toml` when present, otherwise start from defaults, then let
/// environment variables fill the gaps.
pub fn load_or_default() -> AppConfig {
    let mut cfg = load_default().unwrap_or_default();
    cfg.normalize_from_env();
    cfg
}

impl AppConfig {
    pub fn normalize_from_env(&mut self) {
        self.server.normalize_from_env();
        self.database.normalize_from_env();
        self.credentials.normalize_from_env();
        self.storage.normalize_from_env();
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or via DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl CredentialsConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(user) = std::env::var("COMPANY_USERNAME") {
            if !user.trim().is_empty() {
                self.company_username = user;
            }
        }
        if let Ok(pass) = std::env::var("COMPANY_PASSWORD") {
            if !pass.trim().is_empty() {
                self.company_password = pass;
            }
        }
    }
}

impl StorageConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(path) = std::env::var("EMPLOYEES_FILE") {
            if !path.trim().is_empty() {
                self.employees_file = path;
            }
        }
    }
}
