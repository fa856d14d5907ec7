//! Games and their high score tables.

use dbot_types::{GameHighScore, InlineKeyboardMarkup, Message, MessageOrTrue};
use serde::Serialize;

use crate::params::MessageTarget;
use crate::request::impl_request;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendGame {
    pub chat_id: i64,
    pub game_short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendGame {
    pub fn new(chat_id: i64, game_short_name: impl Into<String>) -> Self {
        Self {
            chat_id,
            game_short_name: game_short_name.into(),
            disable_notification: None,
            reply_to_message_id: None,
            allow_sending_without_reply: None,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetGameScore {
    pub user_id: i64,
    /// Non-negative.
    pub score: i32,
    /// Allow the score to decrease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_edit_message: Option<bool>,
    #[serde(flatten)]
    pub target: MessageTarget,
}

impl SetGameScore {
    pub fn new(user_id: i64, score: i32, target: MessageTarget) -> Self {
        Self {
            user_id,
            score,
            force: None,
            disable_edit_message: None,
            target,
        }
    }
}

/// Scores of the user and several neighbours on the high score table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetGameHighScores {
    pub user_id: i64,
    #[serde(flatten)]
    pub target: MessageTarget,
}

impl GetGameHighScores {
    pub fn new(user_id: i64, target: MessageTarget) -> Self {
        Self {
            user_id,
            target,
        }
    }
}

impl_request! {
    SendGame => "sendGame", Message;
    SetGameScore => "setGameScore", MessageOrTrue;
    GetGameHighScores => "getGameHighScores", Vec<GameHighScore>;
}
