use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{FinderError, FinderResult};

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub timeout: Duration,
    pub user_agent: String,
    /// PEM certificate chain; HTTPS is served when set together with `tls_key`
    pub tls_cert: Option<PathBuf>,
    pub tls_key: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            tls_cert: None,
            tls_key: None,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FinderResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> FinderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind = lookup("RSSFINDER_BIND").unwrap_or(defaults.bind);

        let port = match lookup("RSSFINDER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                FinderError::Config(format!("RSSFINDER_PORT is not a valid port: {}", raw))
            })?,
            None => defaults.port,
        };

        let timeout = match lookup("RSSFINDER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    FinderError::Config(format!(
                        "RSSFINDER_TIMEOUT_SECS is not a number of seconds: {}",
                        raw
                    ))
                })?,
            None => defaults.timeout,
        };

        let user_agent = lookup("RSSFINDER_USER_AGENT").unwrap_or(defaults.user_agent);

        let tls_cert = lookup("RSSFINDER_TLS_CERT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let tls_key = lookup("RSSFINDER_TLS_KEY")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        if tls_cert.is_some() != tls_key.is_some() {
            return Err(FinderError::Config(
                "RSSFINDER_TLS_CERT and RSSFINDER_TLS_KEY must be set together".to_string(),
            ));
        }

        Ok(Self {
            bind,
            port,
            timeout,
            user_agent,
            tls_cert,
            tls_key,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Certificate and key paths, when HTTPS is configured
    pub fn tls_files(&self) -> Option<(&Path, &Path)> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key)) => Some((cert.as_path(), key.as_path())),
            _ => None,
        }
    }
}

fn default_user_agent() -> String {
    format!("rssfinder/{}", env!("CARGO_PKG_VERSION"))
}
