//! Media payloads for sendMediaGroup and editMessageMedia, tagged by `type`.
//!
//! `media` and `thumb` reference a file by `file_id` or HTTP URL.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{discriminator, entity, unrecognized, variant};

use super::{MessageEntity, ParseMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub const TYPES: [&'static str; 5] = ["photo", "video", "animation", "audio", "document"];

    pub fn kind(&self) -> &'static str {
        match self {
            InputMedia::Photo(_) => "photo",
            InputMedia::Video(_) => "video",
            InputMedia::Animation(_) => "animation",
            InputMedia::Audio(_) => "audio",
            InputMedia::Document(_) => "document",
        }
    }

    /// File reference of the media.
    pub fn media(&self) -> &str {
        match self {
            InputMedia::Photo(m) => &m.media,
            InputMedia::Video(m) => &m.media,
            InputMedia::Animation(m) => &m.media,
            InputMedia::Audio(m) => &m.media,
            InputMedia::Document(m) => &m.media,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            InputMedia::Photo(m) => m.caption.as_deref(),
            InputMedia::Video(m) => m.caption.as_deref(),
            InputMedia::Animation(m) => m.caption.as_deref(),
            InputMedia::Audio(m) => m.caption.as_deref(),
            InputMedia::Document(m) => m.caption.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for InputMedia {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = discriminator::<D::Error>(&value, "type")?.to_string();
        match kind.as_str() {
            "photo" => variant(value).map(InputMedia::Photo),
            "video" => variant(value).map(InputMedia::Video),
            "animation" => variant(value).map(InputMedia::Animation),
            "audio" => variant(value).map(InputMedia::Audio),
            "document" => variant(value).map(InputMedia::Document),
            other => Err(unrecognized::<D::Error>("InputMedia", other)),
        }
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(media: InputMediaPhoto) -> Self {
        InputMedia::Photo(media)
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(media: InputMediaVideo) -> Self {
        InputMedia::Video(media)
    }
}

impl From<InputMediaAnimation> for InputMedia {
    fn from(media: InputMediaAnimation) -> Self {
        InputMedia::Animation(media)
    }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(media: InputMediaAudio) -> Self {
        InputMedia::Audio(media)
    }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(media: InputMediaDocument) -> Self {
        InputMedia::Document(media)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

impl InputMediaPhoto {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            caption_entities: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

impl InputMediaVideo {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

impl InputMediaAnimation {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    /// Uploads only; documents sent by file_id are always treated as documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

impl InputMediaDocument {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
        }
    }
}

entity!(
    InputMedia,
    InputMediaPhoto,
    InputMediaVideo,
    InputMediaAnimation,
    InputMediaAudio,
    InputMediaDocument
);
