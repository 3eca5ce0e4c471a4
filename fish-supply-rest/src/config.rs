//! PostgREST endpoint settings, read from the environment (and `.env`).

use std::fmt;
use std::time::Duration;

use crate::error::{RestError, RestResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Project URL, without the `/rest/v1` suffix
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> RestResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> RestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required =
            |key: &str| value(key).ok_or_else(|| RestError::Config(format!("{key} must be set")));

        let timeout_secs = match value("REST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                RestError::Config(format!("REST_TIMEOUT_SECS has an invalid value '{raw}'"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: required("SUPABASE_URL")?,
            api_key: required("SUPABASE_KEY")?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_required_values() {
        let config = RestConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://fish.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://fish.supabase.co");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!format!("{config:?}").contains("anon-key"));
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = RestConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://fish.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, RestError::Config(msg) if msg.contains("SUPABASE_KEY")));
    }

    #[test]
    fn test_custom_timeout() {
        let config = RestConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://fish.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
            ("REST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
