use std::path::PathBuf;

use clap::Parser;

use crate::usecases::resolve_session::SessionContext;

#[derive(Debug, Parser)]
#[command(
    name = "parley",
    about = "Terminal client for a Socket.IO-style chat server"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Username to chat as
    #[arg(short, long)]
    pub username: String,

    /// Broadcast room to join
    #[arg(long)]
    pub room: Option<String>,

    /// Peer id for a direct 1:1 conversation
    #[arg(long)]
    pub peer_id: Option<String>,

    /// Display name of the direct peer (defaults to the peer id)
    #[arg(long)]
    pub peer_label: Option<String>,

    /// Private group id to join
    #[arg(long)]
    pub group: Option<String>,
}

impl Cli {
    /// Session start parameters as the hosting environment injected them.
    pub fn session_context(&self) -> SessionContext {
        SessionContext {
            username: self.username.clone(),
            room: self.room.clone(),
            peer_id: self.peer_id.clone(),
            peer_label: self.peer_label.clone(),
            group_id: self.group.clone(),
        }
    }
}
