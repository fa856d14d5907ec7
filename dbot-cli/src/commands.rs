//! Command bodies. Each returns the text to print so it can be tested without a terminal.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use dbot_methods::{Request, SendMessage};
use dbot_types::{parse_update, ChatId, Entity, ParseMode};
use serde_json::Value;
use tracing::info;

/// Reads the whole of `file`, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Decodes an update and prints `kind: <name>` followed by its canonical JSON.
pub fn decode(json: &str, pretty: bool) -> Result<String> {
    let update = parse_update(json).context("Failed to decode update")?;
    let kind = update.kind().name();
    info!(update_id = update.update_id, kind, "decoded update");

    let value = update.to_value().context("Failed to re-encode update")?;
    Ok(format!("kind: {}\n{}", kind, render(&value, pretty)?))
}

/// Renders a sendMessage request in direct or envelope form.
pub fn send_message(
    chat_id: &str,
    text: &str,
    parse_mode: Option<ParseMode>,
    envelope: bool,
    pretty: bool,
) -> Result<String> {
    let request = SendMessage {
        parse_mode,
        ..SendMessage::new(chat_target(chat_id), text)
    };
    let value = if envelope {
        request.envelope_value()
    } else {
        request.payload_value()
    }
    .context("Failed to render sendMessage")?;
    render(&value, pretty)
}

/// Builds the envelope-form sendMessage reply to the chat an update came from.
///
/// Message-like updates are answered with `reply_to_message_id` set.
pub fn reply(json: &str, text: &str, pretty: bool) -> Result<String> {
    let update = parse_update(json).context("Failed to decode update")?;
    let request = match update.message_like() {
        Some(message) => SendMessage::reply_to(message, text),
        None => {
            let chat = update.chat().with_context(|| {
                format!(
                    "Update {} ({}) has no chat to reply to",
                    update.update_id,
                    update.kind().name()
                )
            })?;
            SendMessage::new(chat, text)
        }
    };
    info!(update_id = update.update_id, chat_id = %request.chat_id, "rendering webhook reply");

    let value = request
        .envelope_value()
        .context("Failed to render webhook reply")?;
    render(&value, pretty)
}

/// Numeric ids become integer chat ids; anything else (e.g. `@channel`) stays a username.
fn chat_target(chat_id: &str) -> ChatId {
    match chat_id.parse::<i64>() {
        Ok(id) => ChatId::from(id),
        Err(_) => ChatId::from(chat_id),
    }
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.context("Failed to format JSON")
}
