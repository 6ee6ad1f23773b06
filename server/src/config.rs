//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Timeouts applied to every call to the external auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the auth service, without trailing slash.
    pub auth_url: String,
    /// Public API key sent as the `apikey` header.
    pub auth_anon_key: String,
    /// Public origin of this site, used to build password-recovery links.
    pub site_url: String,
    /// `Secure` attribute for session cookies.
    pub cookie_secure: bool,
    pub timeouts: AuthTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `AUTH_URL`
    /// - `AUTH_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_URL`: default `http://localhost:{PORT}`
    /// - `COOKIE_SECURE`: inferred from the `SITE_URL` scheme when unset
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let auth_url = required("AUTH_URL", lookup("AUTH_URL"))?
            .trim_end_matches('/')
            .to_owned();
        let auth_anon_key = required("AUTH_ANON_KEY", lookup("AUTH_ANON_KEY"))?;
        let site_url = lookup("SITE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_owned();
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => site_url.starts_with("https://"),
        };
        let timeouts = AuthTimeouts {
            request: Duration::from_secs(parse_or(
                "AUTH_REQUEST_TIMEOUT_SECS",
                lookup("AUTH_REQUEST_TIMEOUT_SECS"),
                DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            )?),
            connect: Duration::from_secs(parse_or(
                "AUTH_CONNECT_TIMEOUT_SECS",
                lookup("AUTH_CONNECT_TIMEOUT_SECS"),
                DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
            )?),
        };

        Ok(Self { port, auth_url, auth_anon_key, site_url, cookie_secure, timeouts })
    }
}

/// Parse a boolean flag: `1/true/yes/on` or `0/false/no/off`, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn required(var: &'static str, raw: Option<String>) -> Result<String, ConfigError> {
    raw.filter(|v| !v.trim().is_empty()).ok_or(ConfigError::Missing(var))
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
