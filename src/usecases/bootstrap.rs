use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{self, error::AppError},
    usecases::{
        context::AppContext,
        resolve_session::{self, SessionContext},
    },
};

/// Loads config, initializes logging and resolves the session topology. The
/// returned guard keeps the log writer alive and must outlive the shell.
pub fn bootstrap(
    config_path: Option<&Path>,
    session: SessionContext,
) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(config_path, session)?;
    let log_guard = infra::logging::init(&context.config.logging)?;

    Ok((context, log_guard))
}

fn build_context(
    config_path: Option<&Path>,
    session: SessionContext,
) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    let identity = resolve_session::resolve(session)?;

    Ok(AppContext::new(config, identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::chat::ChatMode, infra::config::AppConfig};

    fn room_session() -> SessionContext {
        SessionContext {
            username: "bob".to_owned(),
            room: Some("lobby".to_owned()),
            ..SessionContext::default()
        }
    }

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")), room_session())
            .expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
        assert_eq!(
            context.identity.mode,
            ChatMode::Room {
                room_id: "lobby".to_owned(),
            }
        );
    }

    #[test]
    fn fails_without_a_chat_target() {
        let session = SessionContext {
            username: "bob".to_owned(),
            ..SessionContext::default()
        };

        let result = build_context(Some(Path::new("./missing-config.toml")), session);

        assert!(matches!(result, Err(AppError::MissingChatTarget)));
    }
}
