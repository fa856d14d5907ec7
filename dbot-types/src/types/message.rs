//! Messages and the service payloads they carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::entity;

use super::{
    Animation, Audio, Chat, Contact, Document, Game, InlineKeyboardMarkup, Invoice, Location,
    PassportData, PhotoSize, Poll, Sticker, SuccessfulPayment, User, Venue, Video, VideoNote,
    Voice,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique inside the chat.
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Sender when the message is sent on behalf of a chat (channel posts, anonymous admins).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    pub date: i64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dice: Option<Dice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_members: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_chat_photo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supergroup_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_timer_changed: Option<MessageAutoDeleteTimerChanged>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_payment: Option<SuccessfulPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_data: Option<PassportData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_triggered: Option<ProximityAlertTriggered>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_chat_started: Option<VoiceChatStarted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_chat_ended: Option<VoiceChatEnded>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_chat_participants_invited: Option<VoiceChatParticipantsInvited>,
    /// Inline keyboard attached to the message; `login_url` buttons come back as plain `url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    /// Message with only the required fields set.
    pub fn new(message_id: i64, date: i64, chat: Chat) -> Self {
        Self {
            message_id,
            from: None,
            sender_chat: None,
            date,
            chat,
            forward_from: None,
            forward_from_chat: None,
            forward_from_message_id: None,
            forward_signature: None,
            forward_sender_name: None,
            forward_date: None,
            reply_to_message: None,
            via_bot: None,
            edit_date: None,
            media_group_id: None,
            author_signature: None,
            text: None,
            entities: None,
            animation: None,
            audio: None,
            document: None,
            photo: None,
            sticker: None,
            video: None,
            video_note: None,
            voice: None,
            caption: None,
            caption_entities: None,
            contact: None,
            dice: None,
            game: None,
            poll: None,
            venue: None,
            location: None,
            new_chat_members: None,
            left_chat_member: None,
            new_chat_title: None,
            new_chat_photo: None,
            delete_chat_photo: None,
            group_chat_created: None,
            supergroup_chat_created: None,
            channel_chat_created: None,
            message_auto_delete_timer_changed: None,
            migrate_to_chat_id: None,
            migrate_from_chat_id: None,
            pinned_message: None,
            invoice: None,
            successful_payment: None,
            connected_website: None,
            passport_data: None,
            proximity_alert_triggered: None,
            voice_chat_started: None,
            voice_chat_ended: None,
            voice_chat_participants_invited: None,
            reply_markup: None,
        }
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.edit_date.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn forwarded_at(&self) -> Option<DateTime<Utc>> {
        self.forward_date
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn is_forwarded(&self) -> bool {
        self.forward_date.is_some()
    }

    /// Text of a text message, or the caption of a media message.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }

    /// Entities belonging to [`Message::text_or_caption`].
    pub fn text_or_caption_entities(&self) -> &[MessageEntity] {
        let entities = if self.text.is_some() {
            &self.entities
        } else {
            &self.caption_entities
        };
        entities.as_deref().unwrap_or_default()
    }

    /// Largest available size of an attached photo.
    pub fn largest_photo(&self) -> Option<&PhotoSize> {
        self.photo
            .as_ref()
            .and_then(|sizes| sizes.iter().max_by_key(|p| p.area()))
    }

    /// Leading `/command` of the text, without the `@botname` suffix, and the remaining text.
    pub fn command(&self) -> Option<(String, &str)> {
        let text = self.text.as_deref()?;
        let entity = self
            .entities
            .as_deref()?
            .iter()
            .find(|e| e.kind == MessageEntityType::BotCommand && e.offset == 0)?;
        let raw = entity.extract(text)?;
        let name = raw
            .trim_start_matches('/')
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        let rest_start = text
            .char_indices()
            .map(|(i, c)| (i, c.len_utf16()))
            .scan(0usize, |units, (i, len)| {
                let start = *units;
                *units += len;
                Some((i, start))
            })
            .find(|(_, start)| *start >= entity.end())
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        Some((name, text[rest_start..].trim_start()))
    }
}

/// Identifier of a message, as returned by copyMessage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// Special span of a text message (hashtag, URL, formatting, ...).
///
/// `offset` and `length` count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,
    pub offset: i32,
    pub length: i32,
    /// For `text_link` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// For `text_mention` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// For `pre` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: MessageEntityType, offset: i32, length: i32) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
            language: None,
        }
    }

    fn end(&self) -> usize {
        (self.offset.max(0) + self.length.max(0)) as usize
    }

    /// Slice of `text` covered by this entity, or `None` when the span is out of range.
    pub fn extract(&self, text: &str) -> Option<String> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let start = usize::try_from(self.offset).ok()?;
        let end = start.checked_add(usize::try_from(self.length).ok()?)?;
        let span = units.get(start..end)?;
        String::from_utf16(span).ok()
    }
}

/// Type of a [`MessageEntity`]. Unknown literals are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    TextLink,
    TextMention,
    #[serde(untagged)]
    Unknown(String),
}

/// Formatting syntax of text and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    MarkdownV2,
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

/// Animated emoji with a random value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub emoji: String,
    pub value: i32,
}

/// A user in the chat triggered another user's proximity alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityAlertTriggered {
    pub traveler: User,
    pub watcher: User,
    pub distance: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAutoDeleteTimerChanged {
    pub message_auto_delete_time: i32,
}

/// Voice chat started in the chat. Carries no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceChatStarted {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceChatEnded {
    /// Seconds.
    pub duration: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceChatParticipantsInvited {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
}

entity!(
    Message,
    MessageId,
    MessageEntity,
    MessageEntityType,
    ParseMode,
    Dice,
    ProximityAlertTriggered,
    MessageAutoDeleteTimerChanged,
    VoiceChatStarted,
    VoiceChatEnded,
    VoiceChatParticipantsInvited
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;
    use crate::types::ChatType;

    fn text_message(text: &str, entities: Vec<MessageEntity>) -> Message {
        let mut message = Message::new(1, 1_600_000_000, Chat::new(7, ChatType::Private));
        message.text = Some(text.to_string());
        message.entities = Some(entities);
        message
    }

    #[test]
    fn test_voice_chat_started_is_empty_object() {
        assert_eq!(VoiceChatStarted {}.to_json().unwrap(), "{}");
        assert_eq!(
            VoiceChatStarted::from_json(r#"{"future":1}"#).unwrap(),
            VoiceChatStarted {}
        );
    }

    #[test]
    fn test_parse_mode_literals() {
        assert_eq!(ParseMode::Html.to_json().unwrap(), r#""HTML""#);
        assert_eq!(ParseMode::MarkdownV2.to_json().unwrap(), r#""MarkdownV2""#);
        assert!(ParseMode::from_json(r#""BBCode""#).is_err());
    }

    #[test]
    fn test_entity_type_passthrough() {
        let kind = MessageEntityType::from_json(r#""spoiler""#).unwrap();
        assert_eq!(kind, MessageEntityType::Unknown("spoiler".to_string()));
        assert_eq!(
            MessageEntityType::from_json(r#""text_link""#).unwrap(),
            MessageEntityType::TextLink
        );
    }

    #[test]
    fn test_extract_counts_utf16_units() {
        let text = "😀 #tag";
        let entity = MessageEntity::new(MessageEntityType::Hashtag, 3, 4);
        assert_eq!(entity.extract(text).as_deref(), Some("#tag"));
        let out_of_range = MessageEntity::new(MessageEntityType::Hashtag, 3, 40);
        assert!(out_of_range.extract(text).is_none());
    }

    #[test]
    fn test_command_parsing() {
        let message = text_message(
            "/start@my_bot  payload here",
            vec![MessageEntity::new(MessageEntityType::BotCommand, 0, 13)],
        );
        let (name, rest) = message.command().unwrap();
        assert_eq!(name, "start");
        assert_eq!(rest, "payload here");

        let plain = text_message("hello", vec![]);
        assert!(plain.command().is_none());
    }

    #[test]
    fn test_text_or_caption() {
        let mut message = Message::new(1, 0, Chat::new(1, ChatType::Group));
        assert!(message.text_or_caption().is_none());
        assert!(message.text_or_caption_entities().is_empty());
        message.caption = Some("a photo".to_string());
        assert_eq!(message.text_or_caption(), Some("a photo"));
        message.text = Some("text".to_string());
        assert_eq!(message.text_or_caption(), Some("text"));
    }

    #[test]
    fn test_timestamps() {
        let mut message = Message::new(1, 1_600_000_000, Chat::new(1, ChatType::Private));
        assert_eq!(message.sent_at().unwrap().timestamp(), 1_600_000_000);
        assert!(message.edited_at().is_none());
        assert!(!message.is_forwarded());
        message.forward_date = Some(1_500_000_000);
        assert!(message.is_forwarded());
        assert_eq!(message.forwarded_at().unwrap().timestamp(), 1_500_000_000);
    }
}
