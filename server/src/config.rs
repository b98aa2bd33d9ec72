//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable.
    #[error("invalid {var}: {value:?} ({reason})")]
    InvalidValue { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream prediction service `/predict/` forwards to. `None` disables
    /// the proxy (requests get a 503 with an `error` body).
    pub predict_upstream: Option<String>,
    pub timeouts: ProxyTimeouts,
    /// Mark the CSRF cookie `Secure`.
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PREDICT_UPSTREAM_URL`: `http(s)://` URL of the prediction service
    /// - `PREDICT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PREDICT_CONNECT_TIMEOUT_SECS`: default 5
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparsable port or a
    /// non-HTTP upstream URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                value: raw.clone(),
                reason: "expected a port number",
            })?,
            None => DEFAULT_PORT,
        };

        let predict_upstream = parse_upstream(lookup("PREDICT_UPSTREAM_URL"))?;

        let timeouts = ProxyTimeouts {
            request_secs: parse_u64_or(lookup("PREDICT_REQUEST_TIMEOUT_SECS"), DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64_or(lookup("PREDICT_CONNECT_TIMEOUT_SECS"), DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS),
        };

        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false);

        Ok(Self { port, predict_upstream, timeouts, cookie_secure })
    }
}

fn parse_upstream(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let url = raw.trim();
    if url.is_empty() {
        return Ok(None);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            var: "PREDICT_UPSTREAM_URL",
            value: raw.clone(),
            reason: "expected an http:// or https:// URL",
        });
    }
    Ok(Some(url.to_owned()))
}

fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
