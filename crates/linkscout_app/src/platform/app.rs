use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use linkscout_engine::{LinkWatcher, WatcherEvent, WatcherHandle};
use scout_logging::{scout_info, scout_warn};

use super::console::{format_outbound, parse_line, ConsoleLine};
use super::logging;
use super::settings::load_config;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize_from_env();

    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    // Lookups may still be running when stdin closes: one fetch plus one
    // shorten call per candidate.
    let drain_grace = config.fetch_timeout() * 2 + Duration::from_secs(1);

    let handle = WatcherHandle::new(LinkWatcher::new(config))?;
    let lines = spawn_stdin_reader();
    scout_info!("linkscout ready; reading `<channel> <user> <message>` lines");

    let mut input_open = true;
    let mut last_activity = Instant::now();
    loop {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                submit_line(&handle, &line);
                last_activity = Instant::now();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if input_open {
                    input_open = false;
                    last_activity = Instant::now();
                }
            }
        }

        while let Some(event) = handle.try_recv() {
            print_event(event);
            last_activity = Instant::now();
        }

        if !input_open {
            if last_activity.elapsed() >= drain_grace {
                break;
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    scout_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
    });
    rx
}

fn submit_line(handle: &WatcherHandle, line: &str) {
    match parse_line(line) {
        Some(ConsoleLine::Chat(message)) => handle.submit(message),
        Some(ConsoleLine::Shorten { channel, line }) => handle.submit_shorten(channel, line),
        None => {}
    }
}

fn print_event(event: WatcherEvent) {
    match event {
        WatcherEvent::Outbound { channel, text } => println!("{}", format_outbound(&channel, &text)),
    }
}
