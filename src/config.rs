//! Service configuration loaded from environment variables.

use std::ffi::OsString;
use std::time::Duration;

use serde::Deserialize;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: &str = "8080";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// TCP port to listen on (`PORT`).
    #[serde(default = "default_port")]
    pub port: String,
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        Self::from_os_vars(std::env::vars_os())
    }

    /// Load configuration from raw OS variables, skipping any that are not valid UTF-8.
    pub fn from_os_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self::from_vars(
            vars.into_iter()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter::<_, Self>(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
            .map(Self::normalize)
    }

    // Only an empty PORT counts as unset; anything else is passed through to bind.
    fn normalize(mut self) -> Self {
        if self.port.is_empty() {
            self.port = default_port();
        }
        self
    }

    /// Address the listener binds to: every IPv4 interface on the configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Fixed connection-level timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerTimeouts {
    /// Maximum time to read a request body.
    pub read: Duration,
    /// Maximum time to produce a response.
    pub write: Duration,
    /// Keep-alive idle time between requests.
    pub idle: Duration,
}

impl Default for ServerTimeouts {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(5),
            write: Duration::from_secs(10),
            idle: Duration::from_secs(120),
        }
    }
}
