//! Chat administration: members, invite links, chat settings and pins.

use dbot_types::{Chat, ChatId, ChatInviteLink, ChatMember, ChatPermissions};
use serde::Serialize;

use crate::request::impl_request;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KickChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time the ban ends; forever when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

impl KickChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
            revoke_messages: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Do nothing if the user is not banned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

impl UnbanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            only_if_banned: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

impl RestrictChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            permissions,
            until_date: None,
        }
    }
}

/// Promotes or demotes a user. Pass no rights to demote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_voice_chats: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_restrict_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_promote_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
}

impl PromoteChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            is_anonymous: None,
            can_manage_chat: None,
            can_post_messages: None,
            can_edit_messages: None,
            can_delete_messages: None,
            can_manage_voice_chats: None,
            can_restrict_members: None,
            can_promote_members: None,
            can_change_info: None,
            can_invite_users: None,
            can_pin_messages: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// 0-16 characters, emoji not allowed.
    pub custom_title: String,
}

impl SetChatAdministratorCustomTitle {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, custom_title: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            custom_title: custom_title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetChatPermissions {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
}

impl SetChatPermissions {
    pub fn new(chat_id: impl Into<ChatId>, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            permissions,
        }
    }
}

/// Generates a new primary invite link, revoking the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl ExportChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateChatInviteLink {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    /// 1-99999 simultaneous members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i32>,
}

impl CreateChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            expire_date: None,
            member_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i32>,
}

impl EditChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>, invite_link: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            invite_link: invite_link.into(),
            expire_date: None,
            member_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevokeChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
}

impl RevokeChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>, invite_link: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            invite_link: invite_link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    pub photo: String,
}

impl SetChatPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: photo.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteChatPhoto {
    pub chat_id: ChatId,
}

impl DeleteChatPhoto {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    /// 1-255 characters.
    pub title: String,
}

impl SetChatTitle {
    pub fn new(chat_id: impl Into<ChatId>, title: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// 0-255 characters; absent clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SetChatDescription {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl PinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    /// The most recent pinned message when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

impl UnpinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnpinAllChatMessages {
    pub chat_id: ChatId,
}

impl UnpinAllChatMessages {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl LeaveChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

/// Administrators of a chat, excluding other bots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl GetChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: ChatId,
}

impl GetChatMembersCount {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetChatStickerSet {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl SetChatStickerSet {
    pub fn new(chat_id: impl Into<ChatId>, sticker_set_name: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker_set_name: sticker_set_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteChatStickerSet {
    pub chat_id: ChatId,
}

impl DeleteChatStickerSet {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl_request! {
    KickChatMember => "kickChatMember", bool;
    UnbanChatMember => "unbanChatMember", bool;
    RestrictChatMember => "restrictChatMember", bool;
    PromoteChatMember => "promoteChatMember", bool;
    SetChatAdministratorCustomTitle => "setChatAdministratorCustomTitle", bool;
    SetChatPermissions => "setChatPermissions", bool;
    ExportChatInviteLink => "exportChatInviteLink", String;
    CreateChatInviteLink => "createChatInviteLink", ChatInviteLink;
    EditChatInviteLink => "editChatInviteLink", ChatInviteLink;
    RevokeChatInviteLink => "revokeChatInviteLink", ChatInviteLink;
    SetChatPhoto => "setChatPhoto", bool;
    DeleteChatPhoto => "deleteChatPhoto", bool;
    SetChatTitle => "setChatTitle", bool;
    SetChatDescription => "setChatDescription", bool;
    PinChatMessage => "pinChatMessage", bool;
    UnpinChatMessage => "unpinChatMessage", bool;
    UnpinAllChatMessages => "unpinAllChatMessages", bool;
    LeaveChat => "leaveChat", bool;
    GetChat => "getChat", Chat;
    GetChatAdministrators => "getChatAdministrators", Vec<ChatMember>;
    GetChatMembersCount => "getChatMembersCount", i32;
    GetChatMember => "getChatMember", ChatMember;
    SetChatStickerSet => "setChatStickerSet", bool;
    DeleteChatStickerSet => "deleteChatStickerSet", bool;
}
