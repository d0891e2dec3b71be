// src/config.rs
use anyhow::{anyhow, Context};
use secrecy::SecretString;
use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

pub const DEFAULT_PORT: u16 = 5001;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read once at startup.
#[derive(Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,

    /// Bearer token webhook callers must present.
    pub api_token: SecretString,

    /// Guard the device config trigger with the same bearer token as the
    /// template webhook.
    pub device_update_require_auth: bool,

    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset keys fall back
    /// to their defaults, except `API_TOKEN` which has none.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid HOST {raw:?}"))?,
            None => DEFAULT_HOST.parse()?,
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let api_token = lookup("API_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| anyhow!("API_TOKEN must be set to a non-empty value"))?;

        let device_update_require_auth = match lookup("DEVICE_UPDATE_REQUIRE_AUTH") {
            Some(raw) => parse_bool(&raw).context("invalid DEVICE_UPDATE_REQUIRE_AUTH")?,
            None => true,
        };

        let timeout_secs: u64 = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid REQUEST_TIMEOUT_SECS {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            api_token: SecretString::from(api_token),
            device_update_require_auth,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got {other:?}")),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
