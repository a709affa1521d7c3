use std::{sync::mpsc, time::Duration};

use anyhow::Result;

use crate::{
    cli::Cli,
    domain::{self, shell_state::ShellState},
    infra,
    transport::{self, channel::ChannelTransport, wire::WireFrame},
    ui::{self, event_source::SessionEventSource},
    usecases::{
        self, bootstrap, resolve_session, shell::DefaultShellOrchestrator,
        typing::TypingCoordinator,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref(), cli.session_context())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        transport = transport::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );
    tracing::info!(
        username = context.identity.local_username.as_str(),
        mode = ?context.identity.mode,
        "session resolved"
    );

    // No connection layer is embedded in this binary: the transport runs
    // detached (frames logged and dropped) and the inbound channel stays
    // silent. An embedding host replaces both ends with a live socket.
    let mut transport = ChannelTransport::detached();
    resolve_session::start_session(&mut transport, &context.identity)?;

    let typing = TypingCoordinator::new(
        &context.identity,
        Duration::from_millis(context.config.typing.quiet_period_ms),
    );
    let mut orchestrator = DefaultShellOrchestrator::new(
        ShellState::new(context.identity.clone()),
        typing,
        transport,
    );

    let (_inbound_tx, inbound_frames) = mpsc::channel::<WireFrame>();
    let mut event_source = SessionEventSource::new(inbound_frames);

    ui::shell::start(&context, &mut event_source, &mut orchestrator)
}
