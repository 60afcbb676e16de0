//! Service configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MIRROR_PATH: &str = "dados.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mirror_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            mirror_path: DEFAULT_MIRROR_PATH.into(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads `EVENTS_HOST`, `EVENTS_PORT` and `EVENTS_MIRROR_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("EVENTS_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "EVENTS_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("EVENTS_HOST").unwrap_or(defaults.host),
            port,
            mirror_path: lookup("EVENTS_MIRROR_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.mirror_path),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "EVENTS_HOST",
                value: self.host.clone(),
            })
    }
}
