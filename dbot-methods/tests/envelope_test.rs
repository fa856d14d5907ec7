//! Integration tests for the two renderings of every request.
//! The envelope must be the direct form plus exactly one `method` key holding the canonical name.

use std::collections::BTreeSet;

use dbot_methods::*;
use dbot_types::{
    BotCommand, ChatPermissions, InlineQueryResultArticle, InputMediaPhoto, InputMessageContent,
    LabeledPrice, PassportElementError, PassportElementErrorUnspecified, PassportElementType,
};
use serde_json::Value;

fn keys(value: &Value) -> BTreeSet<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

/// Checks the envelope invariant for one request and returns its method name.
fn check<R: Request>(request: R) -> &'static str {
    let direct = request.payload_value().unwrap();
    let envelope = request.envelope_value().unwrap();

    let direct_keys = keys(&direct);
    let envelope_keys = keys(&envelope);
    assert!(direct_keys.is_subset(&envelope_keys), "{}", R::METHOD);
    let extra: Vec<&String> = envelope_keys.difference(&direct_keys).collect();
    assert_eq!(extra, vec!["method"], "{}", R::METHOD);
    assert_eq!(envelope["method"], R::METHOD);

    for key in &direct_keys {
        assert_eq!(direct[key], envelope[key], "{} changed {}", R::METHOD, key);
    }

    let text: Value = serde_json::from_str(&request.to_envelope().unwrap()).unwrap();
    assert_eq!(text, envelope);
    R::METHOD
}

// --- Scenario ---

/// **Test: sendMessage renders the exact direct and envelope strings.**
#[test]
fn send_message_direct_and_envelope() {
    let request = SendMessage::new("123", "hello");
    assert_eq!(request.to_payload().unwrap(), r#"{"chat_id":"123","text":"hello"}"#);
    assert_eq!(
        request.to_envelope().unwrap(),
        r#"{"chat_id":"123","text":"hello","method":"sendMessage"}"#
    );
    assert_eq!(SendMessage::METHOD, "sendMessage");
}

/// **Test: absent optionals are never rendered, set optionals always are.**
#[test]
fn optional_parameters() {
    let request = SendMessage {
        disable_notification: Some(false),
        ..SendMessage::new(5i64, "quiet")
    };
    assert_eq!(
        request.to_payload().unwrap(),
        r#"{"chat_id":5,"text":"quiet","disable_notification":false}"#
    );
}

// --- Every operation ---

/// **Test: every one of the 77 operations keeps the envelope invariant, and their names are exactly the method table.**
#[test]
fn envelope_invariant_for_every_operation() {
    let chat = "@chat";
    let target = || MessageTarget::chat(-1i64, 2);
    let names = vec![
        check(GetUpdates::new()),
        check(SetWebhook::new("https://example.com/hook")),
        check(DeleteWebhook::new()),
        check(GetWebhookInfo::new()),
        check(GetMe::new()),
        check(LogOut::new()),
        check(Close::new()),
        check(SendMessage::new(chat, "hi")),
        check(ForwardMessage::new(chat, "@other", 3)),
        check(CopyMessage::new(chat, "@other", 3)),
        check(SendPhoto::new(chat, "photo-id")),
        check(SendAudio::new(chat, "audio-id")),
        check(SendDocument::new(chat, "doc-id")),
        check(SendVideo::new(chat, "video-id")),
        check(SendAnimation::new(chat, "anim-id")),
        check(SendVoice::new(chat, "voice-id")),
        check(SendVideoNote::new(chat, "note-id")),
        check(SendMediaGroup::new(chat, vec![InputMediaPhoto::new("p").into()])),
        check(SendLocation::new(chat, 51.5, -0.25)),
        check(EditMessageLiveLocation::new(target(), 51.5, -0.25)),
        check(StopMessageLiveLocation::new(MessageTarget::inline("inline-1"))),
        check(SendVenue::new(chat, 51.5, -0.25, "Cafe", "Main st")),
        check(SendContact::new(chat, "+100", "Ada")),
        check(SendPoll::new(chat, "?", vec!["a".to_string(), "b".to_string()])),
        check(SendDice::new(chat)),
        check(SendChatAction::new(chat, ChatAction::Typing)),
        check(GetUserProfilePhotos::new(9)),
        check(GetFile::new("file-id")),
        check(KickChatMember::new(chat, 9)),
        check(UnbanChatMember::new(chat, 9)),
        check(RestrictChatMember::new(chat, 9, ChatPermissions::default())),
        check(PromoteChatMember::new(chat, 9)),
        check(SetChatAdministratorCustomTitle::new(chat, 9, "boss")),
        check(SetChatPermissions::new(chat, ChatPermissions::default())),
        check(ExportChatInviteLink::new(chat)),
        check(CreateChatInviteLink::new(chat)),
        check(EditChatInviteLink::new(chat, "https://t.me/joinchat/a")),
        check(RevokeChatInviteLink::new(chat, "https://t.me/joinchat/a")),
        check(SetChatPhoto::new(chat, "photo-id")),
        check(DeleteChatPhoto::new(chat)),
        check(SetChatTitle::new(chat, "Title")),
        check(SetChatDescription::new(chat)),
        check(PinChatMessage::new(chat, 4)),
        check(UnpinChatMessage::new(chat)),
        check(UnpinAllChatMessages::new(chat)),
        check(LeaveChat::new(chat)),
        check(GetChat::new(chat)),
        check(GetChatAdministrators::new(chat)),
        check(GetChatMembersCount::new(chat)),
        check(GetChatMember::new(chat, 9)),
        check(SetChatStickerSet::new(chat, "cats")),
        check(DeleteChatStickerSet::new(chat)),
        check(AnswerCallbackQuery::new("cb-1")),
        check(SetMyCommands::new(vec![BotCommand::new("start", "Start the bot")])),
        check(GetMyCommands::new()),
        check(EditMessageText::new(target(), "edited")),
        check(EditMessageCaption::new(target())),
        check(EditMessageMedia::new(target(), InputMediaPhoto::new("p").into())),
        check(EditMessageReplyMarkup::new(MessageTarget::inline("inline-1"))),
        check(StopPoll::new(chat, 4)),
        check(DeleteMessage::new(chat, 4)),
        check(SendSticker::new(chat, "sticker-id")),
        check(GetStickerSet::new("cats")),
        check(UploadStickerFile::new(9, "https://example.com/s.png")),
        check(CreateNewStickerSet::new(9, "cats_by_bot", "Cats", "😺")),
        check(AddStickerToSet::new(9, "cats_by_bot", "😺")),
        check(SetStickerPositionInSet::new("sticker-id", 0)),
        check(DeleteStickerFromSet::new("sticker-id")),
        check(SetStickerSetThumb::new("cats_by_bot", 9)),
        check(AnswerInlineQuery::new(
            "q-1",
            vec![InlineQueryResultArticle::new("1", "T", InputMessageContent::text("body")).into()],
        )),
        check(SendInvoice::new(
            1,
            "Coffee",
            "Flat white",
            "order-1",
            "token",
            "coffee",
            "EUR",
            vec![LabeledPrice::new("Coffee", 350)],
        )),
        check(AnswerShippingQuery::error("s-1", "No delivery")),
        check(AnswerPreCheckoutQuery::ok("pc-1")),
        check(SetPassportDataErrors::new(
            9,
            vec![PassportElementError::Unspecified(PassportElementErrorUnspecified {
                kind: PassportElementType::Passport,
                element_hash: "h".to_string(),
                message: "Resubmit".to_string(),
            })],
        )),
        check(SendGame::new(1, "tetris")),
        check(SetGameScore::new(9, 100, MessageTarget::inline("inline-1"))),
        check(GetGameHighScores::new(9, target())),
    ];

    assert_eq!(names.len(), 77);
    assert_eq!(names, ALL_METHODS.to_vec());
}

// --- Responses ---

/// **Test: a failed reply surfaces the platform's error code and description.**
#[test]
fn failed_reply_is_api_error() {
    let err = SendMessage::parse_response(
        r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("chat not found"));
    assert!(matches!(
        err,
        dbot_types::ModelError::Api {
            error_code: Some(400),
            ..
        }
    ));
}

/// **Test: a successful reply decodes to the operation's response type.**
#[test]
fn successful_replies() {
    let message = SendMessage::parse_response(
        r#"{"ok":true,"result":{"message_id":11,"date":1,"chat":{"id":5,"type":"private"},"text":"hi"}}"#,
    )
    .unwrap();
    assert_eq!(message.message_id, 11);

    let link = ExportChatInviteLink::parse_response(r#"{"ok":true,"result":"https://t.me/joinchat/x"}"#)
        .unwrap();
    assert_eq!(link, "https://t.me/joinchat/x");

    let copied = CopyMessage::parse_response(r#"{"ok":true,"result":{"message_id":12}}"#).unwrap();
    assert_eq!(copied.message_id, 12);
}
