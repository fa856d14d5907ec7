//! The [`Request`] trait and its two renderings.
//!
//! Direct form is the request's own fields, posted to `/bot<token>/<METHOD>`. Envelope form is
//! the direct form plus a `method` key, returned as the body of a webhook reply.

use dbot_types::codec::decode_value;
use dbot_types::{ApiResponse, ModelError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// One remote operation.
///
/// Implemented for every request struct of this crate and nothing else.
pub trait Request: Serialize + sealed::Sealed {
    /// Canonical remote name, e.g. `sendMessage`.
    const METHOD: &'static str;

    /// What the `result` of a successful reply decodes to.
    type Response: DeserializeOwned;

    /// Direct form as a JSON string.
    fn to_payload(&self) -> Result<String> {
        debug!(method = Self::METHOD, "rendering payload");
        serde_json::to_string(self).map_err(encode_error::<Self>)
    }

    fn payload_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(encode_error::<Self>)
    }

    /// Envelope form as a JSON string.
    fn to_envelope(&self) -> Result<String> {
        debug!(method = Self::METHOD, "rendering envelope");
        serde_json::to_string(&Envelope::new(self)).map_err(encode_error::<Self>)
    }

    fn envelope_value(&self) -> Result<Value> {
        serde_json::to_value(Envelope::new(self)).map_err(encode_error::<Self>)
    }

    /// Decodes the platform's reply to this operation.
    fn parse_response(json: &str) -> Result<Self::Response> {
        debug!(method = Self::METHOD, bytes = json.len(), "decoding response");
        ApiResponse::<Self::Response>::parse(json).map_err(|e| match e {
            ModelError::Decode {
                entity: "ApiResponse",
                path,
                field,
                message,
            } => ModelError::Decode {
                entity: Self::METHOD,
                path,
                field,
                message,
            },
            other => other,
        })
    }
}

fn encode_error<R: Request + ?Sized>(err: serde_json::Error) -> ModelError {
    ModelError::Encode {
        entity: R::METHOD,
        message: err.to_string(),
    }
}

/// A request with its method name appended.
///
/// The request's fields are flattened in unchanged, so the envelope differs from the direct
/// form by the `method` key alone.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, R: ?Sized> {
    #[serde(flatten)]
    request: &'a R,
    method: &'static str,
}

impl<'a, R: Request + ?Sized> Envelope<'a, R> {
    pub fn new(request: &'a R) -> Self {
        Self {
            request,
            method: R::METHOD,
        }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }
}

/// Decodes a reply `result` that was already extracted from its envelope.
pub fn decode_result<R: Request>(value: Value) -> Result<R::Response> {
    decode_value(R::METHOD, value)
}

/// Implements [`Request`] for a struct: `Type => "remoteName", ResponseType`.
macro_rules! impl_request {
    ($($ty:ident => $method:literal, $response:ty;)+) => {
        $(
            impl $crate::request::sealed::Sealed for $ty {}

            impl $crate::request::Request for $ty {
                const METHOD: &'static str = $method;
                type Response = $response;
            }
        )+
    };
}
pub(crate) use impl_request;

/// Every operation name, grouped as in the platform's documentation.
pub const ALL_METHODS: [&str; 77] = [
    "getUpdates",
    "setWebhook",
    "deleteWebhook",
    "getWebhookInfo",
    "getMe",
    "logOut",
    "close",
    "sendMessage",
    "forwardMessage",
    "copyMessage",
    "sendPhoto",
    "sendAudio",
    "sendDocument",
    "sendVideo",
    "sendAnimation",
    "sendVoice",
    "sendVideoNote",
    "sendMediaGroup",
    "sendLocation",
    "editMessageLiveLocation",
    "stopMessageLiveLocation",
    "sendVenue",
    "sendContact",
    "sendPoll",
    "sendDice",
    "sendChatAction",
    "getUserProfilePhotos",
    "getFile",
    "kickChatMember",
    "unbanChatMember",
    "restrictChatMember",
    "promoteChatMember",
    "setChatAdministratorCustomTitle",
    "setChatPermissions",
    "exportChatInviteLink",
    "createChatInviteLink",
    "editChatInviteLink",
    "revokeChatInviteLink",
    "setChatPhoto",
    "deleteChatPhoto",
    "setChatTitle",
    "setChatDescription",
    "pinChatMessage",
    "unpinChatMessage",
    "unpinAllChatMessages",
    "leaveChat",
    "getChat",
    "getChatAdministrators",
    "getChatMembersCount",
    "getChatMember",
    "setChatStickerSet",
    "deleteChatStickerSet",
    "answerCallbackQuery",
    "setMyCommands",
    "getMyCommands",
    "editMessageText",
    "editMessageCaption",
    "editMessageMedia",
    "editMessageReplyMarkup",
    "stopPoll",
    "deleteMessage",
    "sendSticker",
    "getStickerSet",
    "uploadStickerFile",
    "createNewStickerSet",
    "addStickerToSet",
    "setStickerPositionInSet",
    "deleteStickerFromSet",
    "setStickerSetThumb",
    "answerInlineQuery",
    "sendInvoice",
    "answerShippingQuery",
    "answerPreCheckoutQuery",
    "setPassportDataErrors",
    "sendGame",
    "setGameScore",
    "getGameHighScores",
];

/// Whether `name` is one of the operations in [`ALL_METHODS`].
pub fn is_known_method(name: &str) -> bool {
    ALL_METHODS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GetMe, SendMessage};

    #[test]
    fn test_method_table_has_no_duplicates() {
        let mut names = ALL_METHODS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_METHODS.len());
        assert!(is_known_method("sendMessage"));
        assert!(!is_known_method("sendmessage"));
    }

    #[test]
    fn test_envelope_of_empty_request() {
        let request = GetMe::new();
        assert_eq!(request.to_payload().unwrap(), "{}");
        assert_eq!(request.to_envelope().unwrap(), r#"{"method":"getMe"}"#);
        assert_eq!(Envelope::new(&request).method(), "getMe");
    }

    #[test]
    fn test_parse_response_names_the_method() {
        let err = SendMessage::parse_response(r#"{"ok":true,"result":{"message_id":1}}"#)
            .unwrap_err();
        assert_eq!(err.entity(), Some("sendMessage"));
        assert!(matches!(err, ModelError::Decode { .. }));
    }

    #[test]
    fn test_decode_result() {
        let me = decode_result::<GetMe>(serde_json::json!({
            "id": 1, "is_bot": true, "first_name": "Bot"
        }))
        .unwrap();
        assert!(me.is_bot);
    }
}
