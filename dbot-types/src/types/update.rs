//! Inbound updates and webhook status.

use serde::{Deserialize, Serialize};

use crate::codec::entity;

use super::{
    CallbackQuery, Chat, ChatMemberUpdated, ChosenInlineResult, InlineQuery, Message, Poll,
    PollAnswer, PreCheckoutQuery, ShippingQuery, User,
};

/// One unit of inbound activity. At most one of the optional fields is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Monotonic cursor; poll with `offset = update_id + 1` to acknowledge.
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<ShippingQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    /// Only polls stopped or sent by the bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,
    /// The bot's own membership changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,
    /// Must be requested explicitly through `allowed_updates`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,
}

/// Borrowed view of the populated alternative of an [`Update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    ChannelPost(&'a Message),
    EditedChannelPost(&'a Message),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    CallbackQuery(&'a CallbackQuery),
    ShippingQuery(&'a ShippingQuery),
    PreCheckoutQuery(&'a PreCheckoutQuery),
    Poll(&'a Poll),
    PollAnswer(&'a PollAnswer),
    MyChatMember(&'a ChatMemberUpdated),
    ChatMember(&'a ChatMemberUpdated),
    /// No alternative the model knows about; the update carried something newer.
    Unknown,
}

impl UpdateKind<'_> {
    /// Wire name of the alternative, as used in `allowed_updates`.
    pub fn name(&self) -> &'static str {
        match self {
            UpdateKind::Message(_) => "message",
            UpdateKind::EditedMessage(_) => "edited_message",
            UpdateKind::ChannelPost(_) => "channel_post",
            UpdateKind::EditedChannelPost(_) => "edited_channel_post",
            UpdateKind::InlineQuery(_) => "inline_query",
            UpdateKind::ChosenInlineResult(_) => "chosen_inline_result",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::ShippingQuery(_) => "shipping_query",
            UpdateKind::PreCheckoutQuery(_) => "pre_checkout_query",
            UpdateKind::Poll(_) => "poll",
            UpdateKind::PollAnswer(_) => "poll_answer",
            UpdateKind::MyChatMember(_) => "my_chat_member",
            UpdateKind::ChatMember(_) => "chat_member",
            UpdateKind::Unknown => "unknown",
        }
    }
}

impl Update {
    /// Every alternative name, in wire order.
    pub const KINDS: [&'static str; 13] = [
        "message",
        "edited_message",
        "channel_post",
        "edited_channel_post",
        "inline_query",
        "chosen_inline_result",
        "callback_query",
        "shipping_query",
        "pre_checkout_query",
        "poll",
        "poll_answer",
        "my_chat_member",
        "chat_member",
    ];

    pub fn new(update_id: i64) -> Self {
        Self {
            update_id,
            message: None,
            edited_message: None,
            channel_post: None,
            edited_channel_post: None,
            inline_query: None,
            chosen_inline_result: None,
            callback_query: None,
            shipping_query: None,
            pre_checkout_query: None,
            poll: None,
            poll_answer: None,
            my_chat_member: None,
            chat_member: None,
        }
    }

    fn alternatives(&self) -> [Option<UpdateKind<'_>>; 13] {
        [
            self.message.as_ref().map(UpdateKind::Message),
            self.edited_message.as_ref().map(UpdateKind::EditedMessage),
            self.channel_post.as_ref().map(UpdateKind::ChannelPost),
            self.edited_channel_post.as_ref().map(UpdateKind::EditedChannelPost),
            self.inline_query.as_ref().map(UpdateKind::InlineQuery),
            self.chosen_inline_result.as_ref().map(UpdateKind::ChosenInlineResult),
            self.callback_query.as_ref().map(UpdateKind::CallbackQuery),
            self.shipping_query.as_ref().map(UpdateKind::ShippingQuery),
            self.pre_checkout_query.as_ref().map(UpdateKind::PreCheckoutQuery),
            self.poll.as_ref().map(UpdateKind::Poll),
            self.poll_answer.as_ref().map(UpdateKind::PollAnswer),
            self.my_chat_member.as_ref().map(UpdateKind::MyChatMember),
            self.chat_member.as_ref().map(UpdateKind::ChatMember),
        ]
    }

    /// First populated alternative, or [`UpdateKind::Unknown`].
    pub fn kind(&self) -> UpdateKind<'_> {
        self.alternatives()
            .into_iter()
            .flatten()
            .next()
            .unwrap_or(UpdateKind::Unknown)
    }

    /// Names of every populated alternative. A well-formed update yields at most one.
    pub fn populated_kinds(&self) -> Vec<&'static str> {
        self.alternatives()
            .into_iter()
            .flatten()
            .map(|kind| kind.name())
            .collect()
    }

    /// Message carried by the update, for the four message-like alternatives.
    pub fn message_like(&self) -> Option<&Message> {
        match self.kind() {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => Some(m),
            _ => None,
        }
    }

    /// Chat the update happened in, when it has one.
    pub fn chat(&self) -> Option<&Chat> {
        match self.kind() {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => Some(&m.chat),
            UpdateKind::CallbackQuery(q) => q.message.as_ref().map(|m| &m.chat),
            UpdateKind::MyChatMember(u) | UpdateKind::ChatMember(u) => Some(&u.chat),
            _ => None,
        }
    }

    /// User that caused the update, when known.
    pub fn from(&self) -> Option<&User> {
        match self.kind() {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => m.from.as_ref(),
            UpdateKind::InlineQuery(q) => Some(&q.from),
            UpdateKind::ChosenInlineResult(r) => Some(&r.from),
            UpdateKind::CallbackQuery(q) => Some(&q.from),
            UpdateKind::ShippingQuery(q) => Some(&q.from),
            UpdateKind::PreCheckoutQuery(q) => Some(&q.from),
            UpdateKind::PollAnswer(a) => Some(&a.user),
            UpdateKind::MyChatMember(u) | UpdateKind::ChatMember(u) => Some(&u.from),
            UpdateKind::Poll(_) | UpdateKind::Unknown => None,
        }
    }
}

/// Current webhook status, as returned by getWebhookInfo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty when no webhook is set.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl WebhookInfo {
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}

entity!(Update, WebhookInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;
    use crate::types::ChatType;

    #[test]
    fn test_empty_update_is_unknown() {
        let update = Update::new(9);
        assert_eq!(update.kind(), UpdateKind::Unknown);
        assert!(update.populated_kinds().is_empty());
        assert!(update.chat().is_none());
        assert_eq!(update.to_json().unwrap(), r#"{"update_id":9}"#);
    }

    #[test]
    fn test_kind_names_follow_wire_order() {
        let chat = Chat::new(7, ChatType::Channel);
        let update = Update {
            channel_post: Some(Message::new(1, 0, chat)),
            ..Update::new(1)
        };
        assert_eq!(update.kind().name(), "channel_post");
        assert!(Update::KINDS.contains(&update.kind().name()));
        assert_eq!(update.chat().map(|c| c.id), Some(7));
        assert!(update.from().is_none());
    }

    #[test]
    fn test_populated_kinds_reports_every_alternative() {
        let chat = Chat::new(7, ChatType::Private);
        let update = Update {
            message: Some(Message::new(1, 0, chat.clone())),
            edited_message: Some(Message::new(1, 0, chat)),
            ..Update::new(1)
        };
        assert_eq!(update.populated_kinds(), vec!["message", "edited_message"]);
        assert_eq!(update.kind().name(), "message");
    }
}
