//! Stickers and sticker sets.

use dbot_types::{ChatId, File, KeyboardOption, MaskPosition, Message, StickerSet};
use serde::Serialize;

use crate::request::impl_request;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendSticker {
    pub chat_id: ChatId,
    pub sticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<KeyboardOption>,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<ChatId>, sticker: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker: sticker.into(),
            disable_notification: None,
            reply_to_message_id: None,
            allow_sending_without_reply: None,
            reply_markup: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetStickerSet {
    pub name: String,
}

impl GetStickerSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadStickerFile {
    pub user_id: i64,
    pub png_sticker: String,
}

impl UploadStickerFile {
    pub fn new(user_id: i64, png_sticker: impl Into<String>) -> Self {
        Self {
            user_id,
            png_sticker: png_sticker.into(),
        }
    }
}

/// Creates a sticker set owned by a user. Exactly one of `png_sticker` or `tgs_sticker` is used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateNewStickerSet {
    pub user_id: i64,
    /// Must end in `_by_<bot username>`.
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_sticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgs_sticker: Option<String>,
    pub emojis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_masks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

impl CreateNewStickerSet {
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        emojis: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            title: title.into(),
            png_sticker: None,
            tgs_sticker: None,
            emojis: emojis.into(),
            contains_masks: None,
            mask_position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddStickerToSet {
    pub user_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_sticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgs_sticker: Option<String>,
    pub emojis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

impl AddStickerToSet {
    pub fn new(user_id: i64, name: impl Into<String>, emojis: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            png_sticker: None,
            tgs_sticker: None,
            emojis: emojis.into(),
            mask_position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetStickerPositionInSet {
    pub sticker: String,
    /// Zero-based.
    pub position: i32,
}

impl SetStickerPositionInSet {
    pub fn new(sticker: impl Into<String>, position: i32) -> Self {
        Self {
            sticker: sticker.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStickerFromSet {
    pub sticker: String,
}

impl DeleteStickerFromSet {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self {
            sticker: sticker.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetStickerSetThumb {
    pub name: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

impl SetStickerSetThumb {
    pub fn new(name: impl Into<String>, user_id: i64) -> Self {
        Self {
            name: name.into(),
            user_id,
            thumb: None,
        }
    }
}

impl_request! {
    SendSticker => "sendSticker", Message;
    GetStickerSet => "getStickerSet", StickerSet;
    UploadStickerFile => "uploadStickerFile", File;
    CreateNewStickerSet => "createNewStickerSet", bool;
    AddStickerToSet => "addStickerToSet", bool;
    SetStickerPositionInSet => "setStickerPositionInSet", bool;
    DeleteStickerFromSet => "deleteStickerFromSet", bool;
    SetStickerSetThumb => "setStickerSetThumb", bool;
}
