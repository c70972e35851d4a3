//! Service configuration

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::models::credentials::CredentialBook;

/// Delays the pages use for their simulated work
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// Between accepting a pickup request and settling it
    pub submit_delay: Duration,
    /// Between settling a pickup request and opening the tracking page
    pub pickup_redirect_delay: Duration,
    /// Between a successful login and opening the dashboard
    pub login_redirect_delay: Duration,
    /// How long a notification stays up unless replaced
    pub notification_ttl: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(2000),
            pickup_redirect_delay: Duration::from_millis(3000),
            login_redirect_delay: Duration::from_millis(2000),
            notification_ttl: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub timings: Timings,
    /// Idle time after which a page session is dropped
    pub session_idle: Duration,
    pub credentials: CredentialBook,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
            timings: Timings::default(),
            session_idle: Duration::from_secs(1800),
            credentials: CredentialBook::default(),
        }
    }
}

impl Config {
    /// Reads overrides from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let timings = Timings {
            submit_delay: env_millis("SUBMIT_DELAY_MS")?.unwrap_or(defaults.timings.submit_delay),
            pickup_redirect_delay: env_millis("PICKUP_REDIRECT_DELAY_MS")?
                .unwrap_or(defaults.timings.pickup_redirect_delay),
            login_redirect_delay: env_millis("LOGIN_REDIRECT_DELAY_MS")?
                .unwrap_or(defaults.timings.login_redirect_delay),
            notification_ttl: env_millis("NOTIFICATION_TTL_MS")?
                .unwrap_or(defaults.timings.notification_ttl),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT")?.unwrap_or(defaults.port),
            timings,
            session_idle: env_parse("SESSION_IDLE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_idle),
            credentials: defaults.credentials,
        })
    }
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(None),
    }
}

fn env_millis(key: &str) -> Result<Option<Duration>> {
    Ok(env_parse::<u64>(key)?.map(Duration::from_millis))
}
