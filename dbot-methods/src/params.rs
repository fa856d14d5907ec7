//! Parameter types shared by several operations.

use dbot_types::ChatId;
use serde::Serialize;

/// The message an edit applies to: a chat message, or a message sent via inline mode.
///
/// Flattened into the request, so it renders as either `chat_id` + `message_id` or
/// `inline_message_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageTarget {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline { inline_message_id: String },
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        MessageTarget::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        MessageTarget::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, MessageTarget::Inline { .. })
    }
}

/// Status shown in the chat header while the bot prepares a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_shapes() {
        assert_eq!(
            serde_json::to_value(MessageTarget::chat(-5i64, 9)).unwrap(),
            json!({"chat_id": -5, "message_id": 9})
        );
        let inline = MessageTarget::inline("AAE");
        assert!(inline.is_inline());
        assert_eq!(
            serde_json::to_value(inline).unwrap(),
            json!({"inline_message_id": "AAE"})
        );
    }

    #[test]
    fn test_chat_action_literals() {
        assert_eq!(
            serde_json::to_value(ChatAction::RecordVideoNote).unwrap(),
            json!("record_video_note")
        );
        assert_eq!(serde_json::to_value(ChatAction::Typing).unwrap(), json!("typing"));
    }
}
