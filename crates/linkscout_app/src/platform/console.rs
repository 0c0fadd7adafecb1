use linkscout_engine::InboundMessage;

const SHORTEN_COMMAND: &str = ".shorten";

/// One stdin line: `<channel> <user> <message...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Chat(InboundMessage),
    Shorten { channel: String, line: String },
}

pub fn parse_line(line: &str) -> Option<ConsoleLine> {
    let line = line.trim();
    let (channel, rest) = line.split_once(char::is_whitespace)?;
    let (user, text) = rest.trim_start().split_once(char::is_whitespace)?;
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }

    if is_shorten_command(text) {
        return Some(ConsoleLine::Shorten {
            channel: channel.to_string(),
            line: text.to_string(),
        });
    }

    Some(ConsoleLine::Chat(InboundMessage {
        channel: channel.to_string(),
        user: user.to_string(),
        text: text.to_string(),
    }))
}

fn is_shorten_command(text: &str) -> bool {
    text.split_whitespace().next() == Some(SHORTEN_COMMAND)
}

pub fn format_outbound(channel: &str, text: &str) -> String {
    format!("[{channel}] {text}")
}
