//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dbot_types::ParseMode;

#[derive(Parser)]
#[command(name = "dbot")]
#[command(about = "Telegram Bot API payload tool: decode, send-message, reply", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pretty-print JSON output (overrides DBOT_PRETTY).
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode an update from a file (or stdin) and print its kind and canonical JSON.
    Decode {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Render a sendMessage request.
    SendMessage {
        #[arg(long, allow_hyphen_values = true)]
        chat_id: String,
        #[arg(short, long)]
        text: String,
        #[arg(long, value_enum)]
        parse_mode: Option<ParseModeArg>,
        /// Envelope form with a `method` key (overrides DBOT_ENVELOPE).
        #[arg(long)]
        envelope: bool,
    },
    /// Decode an update and render the sendMessage webhook reply to its chat.
    Reply {
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short, long)]
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseModeArg {
    #[value(name = "MarkdownV2")]
    MarkdownV2,
    #[value(name = "Markdown")]
    Markdown,
    #[value(name = "HTML")]
    Html,
}

impl From<ParseModeArg> for ParseMode {
    fn from(arg: ParseModeArg) -> Self {
        match arg {
            ParseModeArg::MarkdownV2 => ParseMode::MarkdownV2,
            ParseModeArg::Markdown => ParseMode::Markdown,
            ParseModeArg::Html => ParseMode::Html,
        }
    }
}
