//! Console host: stands in for a chat network so the watcher can be driven
//! from stdin.
mod app;
mod console;
mod logging;
mod settings;

pub use app::run_app;
