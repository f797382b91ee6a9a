use crate::application::services::{
    AggregationSettings, DEFAULT_ARTICLE_LIMIT, DEFAULT_EXCERPT_CHARS, DEFAULT_HORIZON_DAYS,
    DEFAULT_MAX_CONCURRENT_FETCHES,
};
use chrono_tz::Tz;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration. Third-party credentials are optional: a missing
/// key disables the matching endpoint, which then answers with a 500.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub metrics_port: u16,
    pub upstream_timeout_secs: u64,
    pub canvas_api_url: String,
    pub canvas_api_key: Option<String>,
    pub assignment_horizon_days: i64,
    pub exclude_past_due: bool,
    pub max_concurrent_fetches: usize,
    pub weather_api_url: String,
    pub weather_api_key: Option<String>,
    pub weather_location: String,
    pub news_feed_url: String,
    pub news_article_limit: usize,
    pub news_excerpt_chars: usize,
    pub google_ai_api_url: String,
    pub google_ai_api_key: Option<String>,
    pub google_ai_model: String,
    /// Zone used when showing dates to the user; server local time when unset
    pub display_timezone: Option<Tz>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let server_port = or("SERVER_PORT", "3000")
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let metrics_port = parse_number(get("METRICS_PORT"), "METRICS_PORT", 9000)?;

        let assignment_horizon_days = i64::from(parse_number::<u32>(
            get("ASSIGNMENT_HORIZON_DAYS"),
            "ASSIGNMENT_HORIZON_DAYS",
            DEFAULT_HORIZON_DAYS as u32,
        )?);

        let exclude_past_due = get("ASSIGNMENT_EXCLUDE_PAST_DUE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let max_concurrent_fetches = parse_number(
            get("LMS_MAX_CONCURRENT_FETCHES"),
            "LMS_MAX_CONCURRENT_FETCHES",
            DEFAULT_MAX_CONCURRENT_FETCHES,
        )?
        .max(1);

        let upstream_timeout_secs =
            parse_number(get("UPSTREAM_TIMEOUT_SECS"), "UPSTREAM_TIMEOUT_SECS", 30)?;

        let news_article_limit = parse_number(
            get("NEWS_ARTICLE_LIMIT"),
            "NEWS_ARTICLE_LIMIT",
            DEFAULT_ARTICLE_LIMIT,
        )?;

        let news_excerpt_chars = parse_number(
            get("NEWS_EXCERPT_CHARS"),
            "NEWS_EXCERPT_CHARS",
            DEFAULT_EXCERPT_CHARS,
        )?;

        let display_timezone = get("DISPLAY_TIMEZONE")
            .map(|v| {
                v.trim()
                    .parse::<Tz>()
                    .map_err(|_| ConfigError::InvalidTimezone(v.clone()))
            })
            .transpose()?;

        Ok(Config {
            database_url: or("DATABASE_URL", "sqlite://studydesk.db?mode=rwc"),
            server_host: or("SERVER_HOST", "127.0.0.1"),
            server_port,
            metrics_port,
            upstream_timeout_secs,
            canvas_api_url: or("CANVAS_API_URL", "https://psu.instructure.com/api/v1"),
            canvas_api_key: get("CANVAS_API_KEY"),
            assignment_horizon_days,
            exclude_past_due,
            max_concurrent_fetches,
            weather_api_url: or(
                "OPENWEATHER_API_URL",
                "https://api.openweathermap.org/data/2.5",
            ),
            weather_api_key: get("OPENWEATHER_API_KEY"),
            weather_location: or("WEATHER_LOCATION", "State College,PA,US"),
            news_feed_url: or("NEWS_FEED_URL", "https://onwardstate.com/feed/"),
            news_article_limit,
            news_excerpt_chars,
            google_ai_api_url: or(
                "GOOGLE_AI_API_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            google_ai_api_key: get("GOOGLE_AI_API_KEY"),
            google_ai_model: or("GOOGLE_AI_MODEL", "gemini-pro"),
            display_timezone,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn aggregation_settings(&self) -> AggregationSettings {
        AggregationSettings {
            horizon_days: self.assignment_horizon_days,
            exclude_past_due: self.exclude_past_due,
            max_concurrent_fetches: self.max_concurrent_fetches,
        }
    }
}

/// Parse an optional setting, keeping `default` only when it is unset
fn parse_number<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidNumber(key)),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("{0} must be a non-negative integer")]
    InvalidNumber(&'static str),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}
