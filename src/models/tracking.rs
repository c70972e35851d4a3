use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::fmt;

const PREFIX: &str = "EW";

static TRACKING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^EW\d{6}\d{3}$").unwrap());

/// Identifier handed back after a simulated pickup submission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// `EW` + last six digits of `now_millis` + three random digits
    pub fn generate<R: Rng>(now_millis: i64, rng: &mut R) -> Self {
        Self::from_parts(now_millis, rng.gen_range(0..1000))
    }

    /// `suffix` is reduced to its last three digits
    pub fn from_parts(now_millis: i64, suffix: u16) -> Self {
        let stamp = now_millis.rem_euclid(1_000_000);
        let suffix = suffix % 1000;
        TrackingCode(format!("{PREFIX}{stamp:06}{suffix:03}"))
    }

    pub fn parse(code: &str) -> Option<Self> {
        TRACKING_PATTERN
            .is_match(code)
            .then(|| TrackingCode(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tracking page location carrying this code as a query parameter
    pub fn tracking_location(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("tracking", &self.0)
            .finish();
        format!("tracking.html?{query}")
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
