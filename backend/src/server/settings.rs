//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SIGNIN_*` environment variables, or a config
//! file, in OrthoConfig's usual precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Log output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable single-line events.
    Text,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid host '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// `log_format` names an unknown format.
    #[error("invalid log format '{value}'; expected json|text")]
    InvalidLogFormat { value: String },
}

/// Configuration values controlling the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNIN")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Log encoding: `json` or `text`.
    pub log_format: Option<String>,
    /// Append `charset=utf-8` to JSON and text responses.
    pub force_utf8: Option<bool>,
}

impl ServerSettings {
    /// Socket address assembled from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            value: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured log format, defaulting to JSON.
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        match self.log_format.as_deref().map(str::trim) {
            None => Ok(LogFormat::Json),
            Some(value) if value.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
            Some(value) if value.eq_ignore_ascii_case("text") => Ok(LogFormat::Text),
            Some(value) => Err(SettingsError::InvalidLogFormat {
                value: value.to_owned(),
            }),
        }
    }

    /// Whether the UTF-8 charset middleware is enabled. Defaults to `true`.
    pub fn force_utf8(&self) -> bool {
        self.force_utf8.unwrap_or(true)
    }
}
