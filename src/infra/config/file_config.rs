use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, TypingConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub typing: Option<FileTypingConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(typing) = self.typing {
            typing.merge_into(&mut config.typing);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = file;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTypingConfig {
    pub quiet_period_ms: Option<u64>,
}

impl FileTypingConfig {
    fn merge_into(self, config: &mut TypingConfig) {
        if let Some(quiet_period_ms) = self.quiet_period_ms {
            config.quiet_period_ms = quiet_period_ms;
        }
    }
}
