//! CLI configuration from env: LOG_FILE, DBOT_PRETTY, DBOT_ENVELOPE.

use anyhow::Result;
use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Tee log output to this file as well as stderr.
    pub log_file: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Render send-message in envelope form by default.
    pub envelope: bool,
}

impl CliConfig {
    /// Loads from env. Call after `dotenvy::dotenv()` so `.env` values apply.
    pub fn from_env() -> Result<Self> {
        let log_file = env::var("LOG_FILE").ok().filter(|path| !path.is_empty());
        let pretty = env_flag("DBOT_PRETTY")?;
        let envelope = env_flag("DBOT_ENVELOPE")?;
        Ok(Self {
            log_file,
            pretty,
            envelope,
        })
    }

    /// Applies CLI flags on top; a set flag wins, an unset flag keeps the env value.
    pub fn with_flags(mut self, pretty: bool, envelope: bool) -> Self {
        self.pretty |= pretty;
        self.envelope |= envelope;
        self
    }
}

fn env_flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" | "off" => Ok(false),
            "1" | "true" | "yes" | "on" => Ok(true),
            other => anyhow::bail!("{} must be a boolean, got `{}`", name, other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var("LOG_FILE");
        env::remove_var("DBOT_PRETTY");
        env::remove_var("DBOT_ENVELOPE");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear();
        let config = CliConfig::from_env().unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear();
        env::set_var("LOG_FILE", "logs/dbot.log");
        env::set_var("DBOT_PRETTY", "true");
        env::set_var("DBOT_ENVELOPE", "1");

        let config = CliConfig::from_env().unwrap();
        assert_eq!(config.log_file.as_deref(), Some("logs/dbot.log"));
        assert!(config.pretty);
        assert!(config.envelope);
        clear();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_flag() {
        clear();
        env::set_var("DBOT_PRETTY", "maybe");
        let err = CliConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DBOT_PRETTY"));
        clear();
    }

    #[test]
    #[serial]
    fn test_empty_log_file_is_unset() {
        clear();
        env::set_var("LOG_FILE", "");
        assert!(CliConfig::from_env().unwrap().log_file.is_none());
        clear();
    }

    #[test]
    fn test_flags_override_env() {
        let config = CliConfig {
            envelope: true,
            ..CliConfig::default()
        }
        .with_flags(true, false);
        assert!(config.pretty);
        assert!(config.envelope);
    }
}
