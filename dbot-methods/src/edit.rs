//! Editing and deleting messages already sent.

use dbot_types::{
    ChatId, InlineKeyboardMarkup, InputMedia, MessageEntity, MessageOrTrue, ParseMode, Poll,
};
use serde::Serialize;

use crate::params::MessageTarget;
use crate::request::impl_request;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditMessageText {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditMessageCaption {
    #[serde(flatten)]
    pub target: MessageTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageCaption {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            reply_markup: None,
        }
    }
}

/// Replaces the media of a message. Albums can only be edited to a photo or video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditMessageMedia {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub media: InputMedia,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageMedia {
    pub fn new(target: MessageTarget, media: InputMedia) -> Self {
        Self {
            target,
            media,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditMessageReplyMarkup {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// Absent removes the keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageReplyMarkup {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditMessageLiveLocation {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub latitude: f32,
    pub longitude: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageLiveLocation {
    pub fn new(target: MessageTarget, latitude: f32, longitude: f32) -> Self {
        Self {
            target,
            latitude,
            longitude,
            horizontal_accuracy: None,
            heading: None,
            proximity_alert_radius: None,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopMessageLiveLocation {
    #[serde(flatten)]
    pub target: MessageTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopMessageLiveLocation {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopPoll {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopPoll {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            reply_markup: None,
        }
    }
}

/// Deletes a message, subject to the platform's 48 hour and permission limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

impl_request! {
    EditMessageText => "editMessageText", MessageOrTrue;
    EditMessageCaption => "editMessageCaption", MessageOrTrue;
    EditMessageMedia => "editMessageMedia", MessageOrTrue;
    EditMessageReplyMarkup => "editMessageReplyMarkup", MessageOrTrue;
    EditMessageLiveLocation => "editMessageLiveLocation", MessageOrTrue;
    StopMessageLiveLocation => "stopMessageLiveLocation", MessageOrTrue;
    StopPoll => "stopPoll", Poll;
    DeleteMessage => "deleteMessage", bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Request;
    use serde_json::json;

    #[test]
    fn test_target_is_flattened() {
        let chat = EditMessageText::new(MessageTarget::chat(5i64, 10), "new");
        assert_eq!(
            chat.payload_value().unwrap(),
            json!({"chat_id": 5, "message_id": 10, "text": "new"})
        );

        let inline = EditMessageText::new(MessageTarget::inline("AgAA"), "new");
        assert_eq!(
            inline.envelope_value().unwrap(),
            json!({"inline_message_id": "AgAA", "text": "new", "method": "editMessageText"})
        );
    }

    #[test]
    fn test_edit_response_variants() {
        let edited =
            EditMessageReplyMarkup::parse_response(r#"{"ok":true,"result":true}"#).unwrap();
        assert_eq!(edited, MessageOrTrue::True(true));
    }
}
