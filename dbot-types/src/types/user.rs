use serde::{Deserialize, Serialize};

use crate::codec::entity;

use super::PhotoSize;

/// A user or bot account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Only returned by getMe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    /// Only returned by getMe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    /// Only returned by getMe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
}

impl User {
    pub fn new(id: i64, is_bot: bool, first_name: impl Into<String>) -> Self {
        Self {
            id,
            is_bot,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
            can_join_groups: None,
            can_read_all_group_messages: None,
            supports_inline_queries: None,
        }
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// `@username` mention, when the user has a username.
    pub fn mention(&self) -> Option<String> {
        self.username.as_ref().map(|u| format!("@{}", u))
    }
}

/// Profile pictures of a user, largest size last in each inner list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    pub total_count: i32,
    pub photos: Vec<Vec<PhotoSize>>,
}

/// A bot command shown in the client's command menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

entity!(User, UserProfilePhotos, BotCommand);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;

    #[test]
    fn test_full_name_and_mention() {
        let mut user = User::new(1, false, "Ada");
        assert_eq!(user.full_name(), "Ada");
        assert!(user.mention().is_none());

        user.last_name = Some("Lovelace".to_string());
        user.username = Some("ada".to_string());
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.mention().as_deref(), Some("@ada"));
    }

    #[test]
    fn test_user_encodes_only_present_fields() {
        let user = User::new(5_000_000_000, true, "Bot");
        assert_eq!(
            user.to_json().unwrap(),
            r#"{"id":5000000000,"is_bot":true,"first_name":"Bot"}"#
        );
    }
}
