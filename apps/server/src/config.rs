use std::{net::SocketAddr, time::Duration};

use anyhow::{bail, Context};
use blueprint_core::constants::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub seed_on_start: bool,
    pub default_questions: u32,
    pub max_questions: u32,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("BP_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid BP_LISTEN_ADDR")?;
        let db_path = lookup("BP_DB_PATH").unwrap_or_else(|| "./db/app.db".into());
        let cors_allow = lookup("BP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("BP_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let seed_on_start = lookup("BP_SEED_ON_START")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let max_questions: u32 = match lookup("BP_MAX_QUESTIONS") {
            Some(v) => v.trim().parse().context("Invalid BP_MAX_QUESTIONS")?,
            None => MAX_QUESTION_COUNT,
        };
        let default_questions: u32 = match lookup("BP_DEFAULT_QUESTIONS") {
            Some(v) => v.trim().parse().context("Invalid BP_DEFAULT_QUESTIONS")?,
            None => DEFAULT_QUESTION_COUNT,
        };
        if max_questions < MIN_QUESTION_COUNT {
            bail!("BP_MAX_QUESTIONS must be at least {}", MIN_QUESTION_COUNT);
        }
        if !(MIN_QUESTION_COUNT..=max_questions).contains(&default_questions) {
            bail!(
                "BP_DEFAULT_QUESTIONS must be between {} and {}",
                MIN_QUESTION_COUNT,
                max_questions
            );
        }
        let log_format = match lookup("BP_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            seed_on_start,
            default_questions,
            max_questions,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.db_path, "./db/app.db");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.seed_on_start);
        assert_eq!(config.default_questions, 40);
        assert_eq!(config.max_questions, 1000);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("BP_LISTEN_ADDR", "127.0.0.1:9000"),
            ("BP_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,"),
            ("BP_SEED_ON_START", "true"),
            ("BP_DEFAULT_QUESTIONS", "25"),
            ("BP_MAX_QUESTIONS", "200"),
            ("BP_LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert!(config.seed_on_start);
        assert_eq!(config.default_questions, 25);
        assert_eq!(config.max_questions, 200);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_listen_addr_is_an_error() {
        assert!(config_from(&[("BP_LISTEN_ADDR", "not-an-addr")]).is_err());
    }

    #[test]
    fn default_questions_must_fit_the_bound() {
        assert!(config_from(&[("BP_DEFAULT_QUESTIONS", "0")]).is_err());
        assert!(config_from(&[("BP_DEFAULT_QUESTIONS", "50"), ("BP_MAX_QUESTIONS", "10")]).is_err());
    }
}
