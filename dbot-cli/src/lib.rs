//! # dbot-cli
//!
//! Operator front end over the entity and request models: decode updates, render requests,
//! build webhook replies. Config from env, overridden by CLI flags.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;

pub use cli::{Cli, Commands, ParseModeArg};
pub use commands::{decode, read_input, reply, send_message};
pub use config::CliConfig;
pub use logger::init_tracing;
