use serde::{Deserialize, Serialize};

use crate::codec::entity;

use super::PhotoSize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub is_animated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Mask stickers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub is_animated: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
}

impl StickerSet {
    pub fn find_by_emoji(&self, emoji: &str) -> Option<&Sticker> {
        self.stickers
            .iter()
            .find(|sticker| sticker.emoji.as_deref() == Some(emoji))
    }
}

/// Face part a mask is placed on. Unknown literals are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
    #[serde(untagged)]
    Unknown(String),
}

/// Position of a mask on faces.
///
/// Shifts are measured in widths/heights of the mask scaled to the face size, `scale` is a
/// multiplier of the default mask size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    pub x_shift: f32,
    pub y_shift: f32,
    pub scale: f32,
}

entity!(Sticker, StickerSet, MaskPoint, MaskPosition);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;

    #[test]
    fn test_mask_position_round_trip() {
        let position = MaskPosition {
            point: MaskPoint::Eyes,
            x_shift: -0.5,
            y_shift: 0.25,
            scale: 1.5,
        };
        let json = position.to_json().unwrap();
        assert_eq!(json, r#"{"point":"eyes","x_shift":-0.5,"y_shift":0.25,"scale":1.5}"#);
        assert_eq!(MaskPosition::from_json(&json).unwrap(), position);
    }

    #[test]
    fn test_find_by_emoji() {
        let set = StickerSet::from_json(
            r#"{"name":"cats","title":"Cats","is_animated":false,"contains_masks":false,
                "stickers":[{"file_id":"f1","file_unique_id":"u1","width":512,"height":512,
                             "is_animated":false,"emoji":"😺"}]}"#,
        )
        .unwrap();
        assert_eq!(set.find_by_emoji("😺").unwrap().file_id, "f1");
        assert!(set.find_by_emoji("🐶").is_none());
    }
}
