//! Logger setup for the console host.
//!
//! `LINKSCOUT_LOG` picks the level (default `info`). `LINKSCOUT_LOG_TO`
//! picks `terminal`, `file` or `both` (default `terminal`); file output goes
//! to `LINKSCOUT_LOG_FILE`, or `./linkscout.log` when that is unset. Setting
//! only `LINKSCOUT_LOG_FILE` mirrors records into that file.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use scout_logging::{LogDestination, DEFAULT_LOG_FILE};

const LEVEL_VAR: &str = "LINKSCOUT_LOG";
const TARGET_VAR: &str = "LINKSCOUT_LOG_TO";
const FILE_VAR: &str = "LINKSCOUT_LOG_FILE";

pub fn initialize_from_env() {
    let level = env::var(LEVEL_VAR)
        .ok()
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Info);

    let target = env::var(TARGET_VAR).ok();
    let destination = destination_from(target.as_deref(), env::var_os(FILE_VAR));

    if !scout_logging::initialize(&destination, level) {
        eprintln!("Warning: logging is disabled");
    }
}

fn destination_from(target: Option<&str>, file: Option<OsString>) -> LogDestination {
    let file = file.filter(|path| !path.is_empty()).map(PathBuf::from);
    let target = target.map(|value| value.trim().to_ascii_lowercase());

    match target.as_deref() {
        Some("file") => LogDestination::File(file.unwrap_or_else(default_log_file)),
        Some("both") => LogDestination::Both(file.unwrap_or_else(default_log_file)),
        Some("terminal") => LogDestination::Terminal,
        _ => match file {
            Some(path) => LogDestination::Both(path),
            None => LogDestination::Terminal,
        },
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}
