//! Environment-driven configuration for the demo binary.

use chrono::{DateTime, Utc};

use storehub_core::{DomainError, DomainResult, parse_timestamp};
use storehub_observability::LogFormat;

pub const ENV_TOP_N: &str = "STOREHUB_TOP_N";
pub const ENV_REFERENCE_DATE: &str = "STOREHUB_REFERENCE_DATE";
pub const ENV_REPEAT_TIMES: &str = "STOREHUB_REPEAT_TIMES";
pub const ENV_SAMPLE_SIZE: &str = "STOREHUB_SAMPLE_SIZE";
pub const ENV_LOG_FORMAT: &str = "STOREHUB_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// How many items the "most valuable" query asks for.
    pub top_n: usize,
    /// What the scenario treats as "now". `None` means the wall clock.
    pub reference_date: Option<DateTime<Utc>>,
    /// Repetitions of the random-sum exercise.
    pub repeat_times: usize,
    /// Uniform samples summed per repetition.
    pub sample_size: usize,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            reference_date: None,
            repeat_times: 50,
            sample_size: 1_000_000,
            log_format: LogFormat::Json,
        }
    }
}

impl DemoConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TOP_N) {
            config.top_n = parse_count(ENV_TOP_N, &raw)?;
        }
        if let Some(raw) = lookup(ENV_REFERENCE_DATE) {
            config.reference_date = Some(
                parse_timestamp(&raw).map_err(|e| with_key(ENV_REFERENCE_DATE, e))?,
            );
        }
        if let Some(raw) = lookup(ENV_REPEAT_TIMES) {
            config.repeat_times = parse_count(ENV_REPEAT_TIMES, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SAMPLE_SIZE) {
            config.sample_size = parse_count(ENV_SAMPLE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw
                .parse()
                .map_err(|e| DomainError::validation(format!("{ENV_LOG_FORMAT}: {e}")))?;
        }

        Ok(config)
    }

    pub fn reference_date_or_now(&self) -> DateTime<Utc> {
        self.reference_date.unwrap_or_else(Utc::now)
    }
}

/// Prefix a validation message with the variable it came from.
fn with_key(key: &str, err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => DomainError::validation(format!("{key}: {msg}")),
        other => other,
    }
}

fn parse_count(key: &str, raw: &str) -> DomainResult<usize> {
    raw.trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{key}: invalid count {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.top_n, 10);
        assert_eq!(config.repeat_times, 50);
    }

    #[test]
    fn reads_every_variable() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (ENV_TOP_N, "3"),
            (ENV_REFERENCE_DATE, "2024-05-17T12:00:00Z"),
            (ENV_REPEAT_TIMES, " 5 "),
            (ENV_SAMPLE_SIZE, "1000"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.top_n, 3);
        assert_eq!(
            config.reference_date,
            Some(Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap())
        );
        assert_eq!(config.repeat_times, 5);
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_invalid_values() {
        for (key, value) in [
            (ENV_TOP_N, "-1"),
            (ENV_REFERENCE_DATE, "tomorrow"),
            (ENV_SAMPLE_SIZE, "lots"),
            (ENV_LOG_FORMAT, "xml"),
        ] {
            let err = DemoConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
            match err {
                DomainError::Validation(msg) => assert!(msg.starts_with(key), "{msg}"),
                other => panic!("expected Validation error for {key}, got {other:?}"),
            }
        }
    }
}
