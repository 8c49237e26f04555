//! Static weather payload for waybar `custom` modules.
//!
//! Every invocation prints one JSON line with `text`, `tooltip` and `class`
//! keys. Nothing is fetched; the reading is built in, and can be replaced
//! wholesale from a YAML file passed on the command line.

pub mod config;
pub mod emit;
pub mod error;
mod fd;
pub mod json;
pub mod payload;

pub use config::{Config, ConfigError};
pub use emit::{emit, emit_stdout};
pub use error::EmitError;
pub use payload::StatusPayload;
