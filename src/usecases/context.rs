use crate::{domain::chat::SessionIdentity, infra::config::AppConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub config: AppConfig,
    pub identity: SessionIdentity,
}

impl AppContext {
    pub fn new(config: AppConfig, identity: SessionIdentity) -> Self {
        Self { config, identity }
    }
}
