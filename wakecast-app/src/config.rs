//! Runtime configuration from environment variables

use anyhow::bail;
use std::env;
use std::path::PathBuf;

/// Everything the binary needs from the environment.
///
/// Required variables are collected in one pass so a misconfigured cron
/// job reports every missing name at once instead of one per run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub board_api_key: String,
    pub board_token: String,
    pub board_name: String,
    pub tts_api_key: String,
    pub tts_voice_id: String,
    pub intro_card_name: String,
    pub intro_greeting_name: String,
    pub work_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests inject a map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut missing = Vec::new();

        let board_api_key = required(&lookup, "BOARD_API_KEY", &mut missing);
        let board_token = required(&lookup, "BOARD_TOKEN", &mut missing);
        let board_name = required(&lookup, "BOARD_NAME", &mut missing);
        let tts_api_key = required(&lookup, "TTS_API_KEY", &mut missing);

        if !missing.is_empty() {
            bail!(
                "missing required environment variables: {}",
                missing.join(", ")
            );
        }

        Ok(Self {
            board_api_key,
            board_token,
            board_name,
            tts_api_key,
            tts_voice_id: lookup("TTS_VOICE_ID")
                .unwrap_or_else(|| wakecast_tts::DEFAULT_VOICE_ID.to_string()),
            intro_card_name: lookup("INTRO_CARD_NAME")
                .unwrap_or_else(|| "Daily Wakeup Intro".to_string()),
            intro_greeting_name: lookup("INTRO_GREETING_NAME")
                .unwrap_or_else(|| "Standard".to_string()),
            work_dir: lookup("WAKECAST_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_work_dir),
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match lookup(key) {
        Some(value) => value,
        None => {
            missing.push(key);
            String::new()
        }
    }
}

/// Log directory from `WAKECAST_LOG_DIR`, default `logs`.
///
/// Resolved separately from [`AppConfig`] because logging starts before
/// the required variables are checked.
pub fn log_dir() -> PathBuf {
    log_dir_from(|key| env::var(key).ok())
}

fn log_dir_from(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("WAKECAST_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn default_work_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("wakecast")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("BOARD_API_KEY", "key123"),
            ("BOARD_TOKEN", "tok456"),
            ("BOARD_NAME", "Morning Routine"),
            ("TTS_API_KEY", "tts789"),
        ])
    }

    fn lookup_in(
        map: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> {
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_all_missing_vars_reported_together() {
        let err = AppConfig::from_lookup(|_| None).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("BOARD_API_KEY"));
        assert!(msg.contains("BOARD_TOKEN"));
        assert!(msg.contains("BOARD_NAME"));
        assert!(msg.contains("TTS_API_KEY"));
    }

    #[test]
    fn test_only_missing_vars_reported() {
        let mut env = full_env();
        env.remove("BOARD_TOKEN");
        let err = AppConfig::from_lookup(lookup_in(env)).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("BOARD_TOKEN"));
        assert!(!msg.contains("BOARD_API_KEY"));
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_in(full_env())).unwrap();

        assert_eq!(config.board_name, "Morning Routine");
        assert_eq!(config.tts_voice_id, wakecast_tts::DEFAULT_VOICE_ID);
        assert_eq!(config.intro_card_name, "Daily Wakeup Intro");
        assert_eq!(config.intro_greeting_name, "Standard");
        assert!(config.work_dir.ends_with("wakecast"));
    }

    #[test]
    fn test_optional_overrides() {
        let mut env = full_env();
        env.insert("INTRO_GREETING_NAME", "Ada");
        env.insert("WAKECAST_WORK_DIR", "/tmp/wc");
        let config = AppConfig::from_lookup(lookup_in(env)).unwrap();

        assert_eq!(config.intro_greeting_name, "Ada");
        assert_eq!(config.work_dir, PathBuf::from("/tmp/wc"));
    }

    #[test]
    fn test_log_dir_default_and_override() {
        assert_eq!(log_dir_from(|_| None), PathBuf::from("logs"));

        let env = HashMap::from([("WAKECAST_LOG_DIR", "/var/log/wakecast")]);
        assert_eq!(
            log_dir_from(lookup_in(env)),
            PathBuf::from("/var/log/wakecast")
        );
    }
}
