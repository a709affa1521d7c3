use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub typing: TypingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log lines go to a file because the TUI owns the terminal.
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: PathBuf::from("parley.log"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypingConfig {
    /// Quiet period after the last compose keystroke before `stop_typing` is
    /// emitted.
    pub quiet_period_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: 1_200,
        }
    }
}
