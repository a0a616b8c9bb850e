//! # minilog - Leveled Console Logger
//!
//! Timestamps messages, tags them with a severity level, colors them by level
//! and drops debug lines unless verbose output was requested.
//!
//! ```text
//! [14:03:27.512] [!] [INFO] ready
//! ```
//!
//! ## Modules
//!
//! - [`level`] - The closed level set and its prefix/color table
//! - [`logger`] - The [`Logger`] itself and its builder
//! - [`format`] - Pure line composition shared with the tracing formatter
//! - [`sink`] - Writer abstraction and an in-memory sink
//! - [`config`] - Color choice and environment-driven settings
//! - [`error`] - Typed configuration errors with thiserror
//! - [`tracing_layer`] - Renders `tracing` events as minilog lines

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
mod macros;
pub mod sink;
pub mod tracing_layer;

pub use config::{ColorChoice, LoggerConfig};
pub use error::ConfigError;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{MemorySink, StdoutSink};
pub use tracing_layer::{setup_tracing, tracing_layer, MinilogFormatter, SUCCESS_TARGET};
