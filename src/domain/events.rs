/// Everything the shell loop reacts to: key input, the poll tick, and decoded
/// inbound server events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Server(ServerEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Ctrl(char),
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
}

/// Inbound events from the server, decoded off the wire by the transport
/// layer. Processed strictly in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// One message to append to the log. `message_id` tags the entry
    /// acknowledgeable when the server supplies it.
    Message {
        msg: String,
        message_id: Option<String>,
    },
    /// A peer started composing.
    Typing { username: String },
    /// The composing peer went quiet.
    StopTyping,
    /// Another participant read one of our messages.
    MessageReadReceipt { message_id: String, reader: String },
}
