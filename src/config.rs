use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "toolkit_debug.log";
pub const LOG_FILE_VAR: &str = "TOOLKIT_LOG_FILE";
pub const LOG_ENABLED_VAR: &str = "TOOLKIT_LOG";
pub const SEED_VAR: &str = "TOOLKIT_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let logging_enabled = lookup(LOG_ENABLED_VAR)
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "off" | "false"))
            .unwrap_or(true);

        let log_file = logging_enabled.then(|| {
            lookup(LOG_FILE_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
        });

        let seed = match lookup(SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| format!("Invalid {} '{}': {}", SEED_VAR, raw, e))?,
            ),
            _ => None,
        };

        Ok(Self { log_file, seed })
    }
}
