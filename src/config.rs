//! Runtime configuration from environment variables

use std::env;
use crate::types::{ScanError, ScanResult};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_RECORD_DIR: &str = "./records";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Server bind address
    pub addr: String,
    /// Where detection records are written; None disables recording
    pub record_dir: Option<String>,
    /// Fixed delay before each API analysis (milliseconds)
    pub analysis_delay_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            record_dir: Some(DEFAULT_RECORD_DIR.to_string()),
            analysis_delay_ms: 0,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `VOICEGUARD_*` variables, falling back to defaults.
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> ScanResult<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            addr: get_var_or("VOICEGUARD_ADDR", DEFAULT_ADDR),
            record_dir: match env::var("VOICEGUARD_RECORD_DIR") {
                Ok(dir) if dir.trim().is_empty() => None,
                Ok(dir) => Some(dir),
                Err(_) => Some(DEFAULT_RECORD_DIR.to_string()),
            },
            analysis_delay_ms: get_var_or("VOICEGUARD_ANALYSIS_DELAY_MS", "0")
                .parse()
                .map_err(|e| ScanError::Config(format!("invalid VOICEGUARD_ANALYSIS_DELAY_MS: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
