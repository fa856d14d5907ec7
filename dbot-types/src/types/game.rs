use serde::{Deserialize, Serialize};

use crate::codec::entity;

use super::{Animation, MessageEntity, PhotoSize, User};

/// Game shown in a message. Create games via @BotFather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    /// Set when the bot edits the score via setGameScore, or manually by the game developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// Placeholder for a callback game button. Carries no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// One row of the high scores table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
    pub position: i32,
    pub user: User,
    pub score: i32,
}

entity!(Game, CallbackGame, GameHighScore);
