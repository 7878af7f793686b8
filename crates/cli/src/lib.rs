// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod prompt;
pub mod style;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
