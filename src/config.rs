use std::env;
use chrono::Duration;

use crate::error::AppError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.kraken.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl AppEnv {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            AppEnv::Production => "ltp_proxy=info,tower_http=warn",
            AppEnv::Development => "ltp_proxy=debug,tower_http=info",
            AppEnv::Test => "ltp_proxy=debug,tower_http=debug",
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` passes the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server config
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let app_env_str = lookup("APP_ENV").unwrap_or_else(|| "development".into());
        let app_env = match app_env_str.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        };

        // Upstream config
        let upstream_url = lookup("UPSTREAM_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into());

        if upstream_url.is_empty() {
            return Err(AppError::ConfigError("UPSTREAM_URL must not be empty".into()));
        }

        let upstream_timeout_str = lookup("UPSTREAM_TIMEOUT").unwrap_or_else(|| "10s".into());
        let upstream_timeout = parse_duration(&upstream_timeout_str)
            .map_err(|_| AppError::ConfigError("Invalid UPSTREAM_TIMEOUT format".into()))?;

        Ok(Self {
            port,
            host,
            app_env,
            upstream_url,
            upstream_timeout,
        })
    }
}

fn parse_duration(duration_str: &str) -> Result<Duration, &'static str> {
    let duration_str = duration_str.trim();

    if duration_str.is_empty() {
        return Err("Duration string is empty");
    }

    // Extract the number and unit parts
    let len = duration_str.len();
    let (num_part, unit_part) = duration_str.split_at(
        duration_str
            .chars()
            .position(|c| !c.is_ascii_digit())
            .unwrap_or(len)
    );

    let num = num_part.parse::<i64>().map_err(|_| "Invalid number")?;
    if num == 0 {
        return Err("Duration must be positive");
    }

    let duration = match unit_part {
        "s" => Duration::try_seconds(num),
        "m" => Duration::try_minutes(num),
        "h" => Duration::try_hours(num),
        "d" => Duration::try_days(num),
        _ => return Err("Unknown time unit, use s, m, h, or d"),
    };

    duration.ok_or("Duration out of range")
}
