use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::watcher::{LinkWatcher, MessageSink};

/// One chat line as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub channel: String,
    pub user: String,
    pub text: String,
}

enum WatcherCommand {
    Message(InboundMessage),
    Shorten { channel: String, line: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatcherEvent {
    Outbound { channel: String, text: String },
}

struct ChannelSink {
    tx: mpsc::Sender<WatcherEvent>,
}

impl MessageSink for ChannelSink {
    fn send(&self, channel: &str, text: &str) {
        let _ = self.tx.send(WatcherEvent::Outbound {
            channel: channel.to_string(),
            text: text.to_string(),
        });
    }
}

/// Runs a [`LinkWatcher`] on a background tokio runtime so a synchronous
/// host never blocks on page fetches. Each submitted message becomes its own
/// task; replies arrive as [`WatcherEvent`]s.
pub struct WatcherHandle {
    cmd_tx: mpsc::Sender<WatcherCommand>,
    event_rx: mpsc::Receiver<WatcherEvent>,
}

impl WatcherHandle {
    pub fn new(watcher: LinkWatcher) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let watcher = Arc::new(watcher);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("linkscout-worker")
            .build()?;

        thread::Builder::new()
            .name("linkscout-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let watcher = watcher.clone();
                    let sink = ChannelSink {
                        tx: event_tx.clone(),
                    };
                    runtime.spawn(async move {
                        handle_command(&watcher, command, &sink).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, message: InboundMessage) {
        let _ = self.cmd_tx.send(WatcherCommand::Message(message));
    }

    pub fn submit_shorten(&self, channel: impl Into<String>, line: impl Into<String>) {
        let _ = self.cmd_tx.send(WatcherCommand::Shorten {
            channel: channel.into(),
            line: line.into(),
        });
    }

    pub fn try_recv(&self) -> Option<WatcherEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<WatcherEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(watcher: &LinkWatcher, command: WatcherCommand, sink: &ChannelSink) {
    match command {
        WatcherCommand::Message(message) => {
            watcher
                .handle_message(&message.channel, &message.user, &message.text, sink)
                .await;
        }
        WatcherCommand::Shorten { channel, line } => {
            watcher.shorten_command(&channel, &line, sink).await;
        }
    }
}
