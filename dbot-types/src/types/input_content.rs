//! Content of a message sent as the result of an inline query.
//!
//! No tag is sent; the shape is recognised by its distinguishing key: `message_text` (text),
//! `phone_number` (contact), `address` (venue) or `latitude` (location). Venue is checked before
//! location since both carry coordinates.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{entity, unrecognized, variant};

use super::{MessageEntity, ParseMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Location(InputLocationMessageContent),
    Venue(InputVenueMessageContent),
    Contact(InputContactMessageContent),
}

impl InputMessageContent {
    /// Distinguishing key per shape, in lookup order.
    pub const SHAPES: [(&'static str, &'static str); 4] = [
        ("message_text", "text"),
        ("phone_number", "contact"),
        ("address", "venue"),
        ("latitude", "location"),
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            InputMessageContent::Text(_) => "text",
            InputMessageContent::Location(_) => "location",
            InputMessageContent::Venue(_) => "venue",
            InputMessageContent::Contact(_) => "contact",
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        InputMessageContent::Text(InputTextMessageContent::new(text))
    }
}

impl<'de> Deserialize<'de> for InputMessageContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let shape = Self::SHAPES
            .iter()
            .find(|(key, _)| value.get(*key).is_some())
            .map(|(_, kind)| *kind);
        match shape {
            Some("text") => variant(value).map(InputMessageContent::Text),
            Some("contact") => variant(value).map(InputMessageContent::Contact),
            Some("venue") => variant(value).map(InputMessageContent::Venue),
            Some("location") => variant(value).map(InputMessageContent::Location),
            _ => {
                let keys = value
                    .as_object()
                    .map(|map| map.keys().cloned().collect::<Vec<_>>().join(","))
                    .unwrap_or_default();
                Err(unrecognized::<D::Error>("InputMessageContent", &keys))
            }
        }
    }
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(content: InputTextMessageContent) -> Self {
        InputMessageContent::Text(content)
    }
}

impl From<InputLocationMessageContent> for InputMessageContent {
    fn from(content: InputLocationMessageContent) -> Self {
        InputMessageContent::Location(content)
    }
}

impl From<InputVenueMessageContent> for InputMessageContent {
    fn from(content: InputVenueMessageContent) -> Self {
        InputMessageContent::Venue(content)
    }
}

impl From<InputContactMessageContent> for InputMessageContent {
    fn from(content: InputContactMessageContent) -> Self {
        InputMessageContent::Contact(content)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self {
            message_text: message_text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f32,
    pub longitude: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<i32>,
}

impl InputLocationMessageContent {
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
            horizontal_accuracy: None,
            live_period: None,
            heading: None,
            proximity_alert_radius: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f32,
    pub longitude: f32,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
}

impl InputVenueMessageContent {
    pub fn new(
        latitude: f32,
        longitude: f32,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
            foursquare_type: None,
            google_place_id: None,
            google_place_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
}

impl InputContactMessageContent {
    pub fn new(phone_number: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            vcard: None,
        }
    }
}

entity!(
    InputMessageContent,
    InputTextMessageContent,
    InputLocationMessageContent,
    InputVenueMessageContent,
    InputContactMessageContent
);
