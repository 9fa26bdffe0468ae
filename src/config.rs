//! Application-level configuration loading: service name and bind address.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "FOYER_BACK_CONFIG_PATH";
/// Name reported by the liveness endpoint when nothing else is configured.
pub const DEFAULT_SERVICE_NAME: &str = "TP Foyer";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    service_name: String,
    host: IpAddr,
    port: u16,
}

impl AppConfig {
    /// Load the configuration from disk and the process environment, falling back to
    /// built-in defaults whenever a source is missing or invalid.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let base = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded config file");
                    Self::default().merge(raw)
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        base.with_env_overrides(|key| env::var(key).ok())
    }

    /// Build a configuration that only differs from the defaults by its service name.
    pub fn with_service_name(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Self::default()
        }
    }

    /// Human-readable name embedded in the liveness message.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn merge(mut self, raw: RawConfig) -> Self {
        if let Some(name) = raw.service_name.filter(|name| !name.trim().is_empty()) {
            self.service_name = name;
        }
        if let Some(host) = raw.host {
            self.host = host;
        }
        if let Some(port) = raw.port {
            self.port = port;
        }
        self
    }

    /// Apply `SERVICE_NAME`, `HOST` and `PORT` (or `SERVER_PORT`) on top of `self`.
    fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(name) = non_blank("SERVICE_NAME") {
            self.service_name = name;
        }

        if let Some(value) = non_blank("HOST") {
            match value.trim().parse::<IpAddr>() {
                Ok(host) => self.host = host,
                Err(err) => warn!(%value, error = %err, "ignoring invalid HOST"),
            }
        }

        if let Some(value) = non_blank("PORT").or_else(|| non_blank("SERVER_PORT")) {
            match value.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(%value, error = %err, "ignoring invalid PORT"),
            }
        }

        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    service_name: Option<String>,
    host: Option<IpAddr>,
    port: Option<u16>,
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
