//! dbot: decode updates, render requests and webhook replies. Config from env and CLI flags.

use anyhow::{Context, Result};
use clap::Parser;
use dbot_cli::{commands, init_tracing, Cli, CliConfig, Commands};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env()
        .context("Load config from env (LOG_FILE, DBOT_PRETTY, DBOT_ENVELOPE)")?;
    init_tracing(config.log_file.as_deref()).context("Initialize logging")?;

    let output = match cli.command {
        Commands::Decode { file } => {
            let config = config.with_flags(cli.pretty, false);
            let input = commands::read_input(file.as_deref())?;
            commands::decode(&input, config.pretty)?
        }
        Commands::SendMessage {
            chat_id,
            text,
            parse_mode,
            envelope,
        } => {
            let config = config.with_flags(cli.pretty, envelope);
            commands::send_message(
                &chat_id,
                &text,
                parse_mode.map(Into::into),
                config.envelope,
                config.pretty,
            )?
        }
        Commands::Reply { file, text } => {
            let config = config.with_flags(cli.pretty, false);
            let input = commands::read_input(file.as_deref())?;
            commands::reply(&input, &text, config.pretty)?
        }
    };

    println!("{}", output);
    Ok(())
}
