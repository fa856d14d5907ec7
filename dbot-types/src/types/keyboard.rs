//! Reply markup: custom keyboards, inline keyboards, and the callback queries they produce.
//!
//! [`KeyboardOption`] carries no tag; each shape is recognised by the one key only it has
//! (`inline_keyboard`, `keyboard`, `remove_keyboard`, `force_reply`).

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{entity, unrecognized, variant};

use super::{CallbackGame, Message, PollType, User};

/// Any reply markup accepted by send operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KeyboardOption {
    Inline(InlineKeyboardMarkup),
    Reply(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl KeyboardOption {
    /// Structural discriminator keys, in lookup order.
    pub const SHAPES: [&'static str; 4] =
        ["inline_keyboard", "keyboard", "remove_keyboard", "force_reply"];

    /// Discriminating key of this variant.
    pub fn shape(&self) -> &'static str {
        match self {
            KeyboardOption::Inline(_) => "inline_keyboard",
            KeyboardOption::Reply(_) => "keyboard",
            KeyboardOption::Remove(_) => "remove_keyboard",
            KeyboardOption::ForceReply(_) => "force_reply",
        }
    }
}

impl<'de> Deserialize<'de> for KeyboardOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let shape = Self::SHAPES.iter().find(|key| value.get(**key).is_some());
        match shape.copied() {
            Some("inline_keyboard") => variant(value).map(KeyboardOption::Inline),
            Some("keyboard") => variant(value).map(KeyboardOption::Reply),
            Some("remove_keyboard") => variant(value).map(KeyboardOption::Remove),
            Some("force_reply") => variant(value).map(KeyboardOption::ForceReply),
            _ => Err(unrecognized::<D::Error>("KeyboardOption", &describe_keys(&value))),
        }
    }
}

fn describe_keys(value: &Value) -> String {
    match value.as_object() {
        Some(map) if map.is_empty() => "{}".to_string(),
        Some(map) => map.keys().cloned().collect::<Vec<_>>().join(","),
        None => value.to_string(),
    }
}

impl From<InlineKeyboardMarkup> for KeyboardOption {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        KeyboardOption::Inline(markup)
    }
}

impl From<ReplyKeyboardMarkup> for KeyboardOption {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        KeyboardOption::Reply(markup)
    }
}

impl From<ReplyKeyboardRemove> for KeyboardOption {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        KeyboardOption::Remove(markup)
    }
}

impl From<ForceReply> for KeyboardOption {
    fn from(markup: ForceReply) -> Self {
        KeyboardOption::ForceReply(markup)
    }
}

/// Custom keyboard replacing the client's text keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
        Self {
            keyboard,
            resize_keyboard: None,
            one_time_keyboard: None,
            selective: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_poll: Option<KeyboardButtonPollType>,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
            request_poll: None,
        }
    }
}

/// Poll type a [`KeyboardButton`] asks the user to create; any type when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButtonPollType {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PollType>,
}

/// Asks the client to remove the custom keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true`.
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }

    /// Appends a row and returns the markup, for chained construction.
    pub fn append_row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row);
        self
    }

    pub fn buttons(&self) -> impl Iterator<Item = &InlineKeyboardButton> {
        self.inline_keyboard.iter().flatten()
    }
}

/// Button of an inline keyboard. Exactly one of the optional fields must be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<LoginUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            login_url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::plain(text)
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::plain(text)
        }
    }

    pub fn login(text: impl Into<String>, login_url: LoginUrl) -> Self {
        Self {
            login_url: Some(login_url),
            ..Self::plain(text)
        }
    }

    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            switch_inline_query: Some(query.into()),
            ..Self::plain(text)
        }
    }

    pub fn switch_inline_query_current_chat(
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            switch_inline_query_current_chat: Some(query.into()),
            ..Self::plain(text)
        }
    }

    /// Must be the first button in the first row.
    pub fn game(text: impl Into<String>) -> Self {
        Self {
            callback_game: Some(CallbackGame {}),
            ..Self::plain(text)
        }
    }

    /// Must be the first button in the first row.
    pub fn pay(text: impl Into<String>) -> Self {
        Self {
            pay: Some(true),
            ..Self::plain(text)
        }
    }
}

/// HTTP URL used to authorize the user through the login widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_write_access: Option<bool>,
}

/// Asks the client to show a reply interface to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true`.
    pub force_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ForceReply {
    pub fn new() -> Self {
        Self {
            force_reply: true,
            selective: None,
        }
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self::new()
    }
}

/// Press of an inline keyboard callback button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the message is too old or was sent via inline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

entity!(
    KeyboardOption,
    ReplyKeyboardMarkup,
    KeyboardButton,
    KeyboardButtonPollType,
    ReplyKeyboardRemove,
    InlineKeyboardMarkup,
    InlineKeyboardButton,
    LoginUrl,
    ForceReply,
    CallbackQuery
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;
    use crate::error::ModelError;

    #[test]
    fn test_shape_matches_encoded_key() {
        let options: Vec<KeyboardOption> = vec![
            InlineKeyboardMarkup::new(vec![]).into(),
            ReplyKeyboardMarkup::new(vec![]).into(),
            ReplyKeyboardRemove::new().into(),
            ForceReply::new().into(),
        ];
        for option in options {
            let value = option.to_value().unwrap();
            assert!(value.get(option.shape()).is_some(), "{}", option.shape());
        }
    }

    #[test]
    fn test_empty_object_is_unrecognized() {
        let err = KeyboardOption::from_json("{}").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnrecognizedVariant {
                union: "KeyboardOption",
                discriminator: "{}".to_string(),
            }
        );
    }

    #[test]
    fn test_button_constructors_set_one_field() {
        let button = InlineKeyboardButton::callback("Yes", "vote:yes");
        assert_eq!(
            button.to_json().unwrap(),
            r#"{"text":"Yes","callback_data":"vote:yes"}"#
        );
        let game = InlineKeyboardButton::game("Play");
        assert_eq!(game.to_json().unwrap(), r#"{"text":"Play","callback_game":{}}"#);
    }
}
