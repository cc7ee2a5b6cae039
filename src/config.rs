//! API configuration parsed from environment variables.
//!
//! The CLI reads the process environment at startup. The browser bundle has
//! no environment, so it reads the same keys at compile time through
//! `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_PLANT_ID: i64 = 1;
pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PTAS_API_URL is set but empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend API root, without trailing slash.
    pub base_url: String,
    /// Plant shown by the resource pages.
    pub plant_id: i64,
    /// Row limit for measurement and alert lists.
    pub list_limit: u32,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            plant_id: DEFAULT_PLANT_ID,
            list_limit: DEFAULT_LIST_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `PTAS_API_URL`: default `http://localhost:8000/api/v1`
    /// - `PTAS_PLANT_ID`: default 1
    /// - `PTAS_LIST_LIMIT`: default 20
    /// - `PTAS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PTAS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PTAS_API_URL` is present but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from values baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if `PTAS_API_URL` was set to an empty string at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "PTAS_API_URL" => option_env!("PTAS_API_URL"),
                "PTAS_PLANT_ID" => option_env!("PTAS_PLANT_ID"),
                "PTAS_LIST_LIMIT" => option_env!("PTAS_LIST_LIMIT"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Shared parser over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PTAS_API_URL` resolves to an empty string.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("PTAS_API_URL") {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyBaseUrl);
                }
                trimmed.to_owned()
            }
            None => DEFAULT_API_URL.to_owned(),
        };

        Ok(Self {
            base_url,
            plant_id: parse_or(&lookup, "PTAS_PLANT_ID", DEFAULT_PLANT_ID),
            list_limit: parse_or(&lookup, "PTAS_LIST_LIMIT", DEFAULT_LIST_LIMIT),
            request_timeout_secs: parse_or(&lookup, "PTAS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: parse_or(&lookup, "PTAS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
