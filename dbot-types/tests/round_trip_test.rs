//! Round-trip tests: `decode(encode(x)) == x` for entities with every optional absent and with
//! optionals present, and encoding never emits an absent optional.

use dbot_types::*;
use serde_json::{json, Value};

fn round_trip<T: Entity + PartialEq + std::fmt::Debug>(value: &T) {
    let json = value.to_json().unwrap();
    let decoded = T::from_json(&json).unwrap();
    assert_eq!(&decoded, value, "{} did not survive {}", T::NAME, json);
}

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

/// **Test: a message with only required fields encodes exactly those fields.**
#[test]
fn minimal_message() {
    let message = Message::new(1, 1_600_000_000, Chat::new(42, ChatType::Group));
    round_trip(&message);
    assert_eq!(keys(&message.to_value().unwrap()), vec!["chat", "date", "message_id"]);
}

/// **Test: a message carrying a reply, entities, media, markup and a service payload survives a round trip.**
#[test]
fn rich_message() {
    let chat = Chat {
        title: Some("Team".to_string()),
        ..Chat::new(-100_200_300_400, ChatType::Supergroup)
    };
    let author = User {
        username: Some("ada".to_string()),
        ..User::new(7_000_000_001, false, "Ada")
    };
    let reply = Message {
        text: Some("earlier".to_string()),
        ..Message::new(9, 1_600_000_000, chat.clone())
    };
    let message = Message {
        from: Some(author.clone()),
        reply_to_message: Some(Box::new(reply)),
        caption: Some("/start now".to_string()),
        caption_entities: Some(vec![MessageEntity::new(MessageEntityType::BotCommand, 0, 6)]),
        photo: Some(vec![
            PhotoSize {
                file_id: "small".to_string(),
                file_unique_id: "s".to_string(),
                width: 90,
                height: 90,
                file_size: None,
            },
            PhotoSize {
                file_id: "big".to_string(),
                file_unique_id: "b".to_string(),
                width: 800,
                height: 600,
                file_size: Some(50_000),
            },
        ]),
        location: Some(Location::new(51.5, -0.125)),
        voice_chat_started: Some(VoiceChatStarted {}),
        reply_markup: Some(InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("Yes", "y"),
            InlineKeyboardButton::url("Docs", "https://example.com"),
        ]])),
        ..Message::new(10, 1_600_000_100, chat)
    };

    round_trip(&message);
    assert_eq!(message.largest_photo().map(|p| p.file_id.as_str()), Some("big"));
    assert_eq!(message.text_or_caption(), Some("/start now"));
    let value = message.to_value().unwrap();
    assert_eq!(value["voice_chat_started"], json!({}));
    assert!(value.get("text").is_none());
}

/// **Test: the update from a webhook body round trips and keeps its single alternative.**
#[test]
fn update_round_trip() {
    let update = parse_update(
        r#"{"update_id":77,"edited_message":{"message_id":3,"date":5,"edit_date":6,
            "chat":{"id":1,"type":"private","first_name":"Ada"},"text":"fixed"}}"#,
    )
    .unwrap();
    round_trip(&update);
    assert_eq!(update.populated_kinds(), vec!["edited_message"]);
    let message = update.message_like().unwrap();
    assert_eq!(message.edited_at().map(|t| t.timestamp()), Some(6));
}

/// **Test: poll, sticker set, payment and passport entities survive a round trip.**
#[test]
fn assorted_entities() {
    let poll = Poll::from_json(
        r#"{"id":"p","question":"Best?","options":[{"text":"a","voter_count":3},{"text":"b","voter_count":1}],
            "total_voter_count":4,"is_closed":true,"is_anonymous":false,"type":"quiz",
            "allows_multiple_answers":false,"correct_option_id":0,"close_date":1700000000}"#,
    )
    .unwrap();
    round_trip(&poll);
    assert_eq!(poll.kind, PollType::Quiz);
    assert_eq!(poll.leading_option().map(|o| o.text.as_str()), Some("a"));

    let set = StickerSet::from_json(
        r#"{"name":"cats","title":"Cats","is_animated":false,"contains_masks":true,
            "stickers":[{"file_id":"f","file_unique_id":"u","width":512,"height":512,
            "is_animated":false,"emoji":"😺","mask_position":{"point":"eyes","x_shift":-0.5,
            "y_shift":0.25,"scale":2.0}}]}"#,
    )
    .unwrap();
    round_trip(&set);
    assert!(set.find_by_emoji("😺").is_some());

    let payment = SuccessfulPayment::from_json(
        r#"{"currency":"USD","total_amount":12345678901,"invoice_payload":"order-1",
            "order_info":{"email":"a@b.c"},"telegram_payment_charge_id":"t",
            "provider_payment_charge_id":"p"}"#,
    )
    .unwrap();
    round_trip(&payment);
    assert_eq!(payment.total_amount, 12_345_678_901);

    let passport = PassportData::from_json(
        r#"{"data":[{"type":"passport","data":"enc","front_side":{"file_id":"f",
            "file_unique_id":"u","file_size":10,"file_date":1},"hash":"h"}],
            "credentials":{"data":"d","hash":"h","secret":"s"}}"#,
    )
    .unwrap();
    round_trip(&passport);

    let info = WebhookInfo::from_json(
        r#"{"url":"","has_custom_certificate":false,"pending_update_count":0}"#,
    )
    .unwrap();
    round_trip(&info);
    assert!(!info.is_set());
}

/// **Test: the chat member update carries an invite link and the member statuses verbatim.**
#[test]
fn chat_member_update() {
    let updated = ChatMemberUpdated::from_json(
        r#"{"chat":{"id":-1,"type":"group","title":"g"},"from":{"id":1,"is_bot":false,"first_name":"A"},
            "date":10,"old_chat_member":{"user":{"id":2,"is_bot":true,"first_name":"B"},"status":"left"},
            "new_chat_member":{"user":{"id":2,"is_bot":true,"first_name":"B"},"status":"administrator",
            "can_manage_chat":true,"can_manage_voice_chats":true},
            "invite_link":{"invite_link":"https://t.me/joinchat/x","creator":{"id":1,"is_bot":false,
            "first_name":"A"},"is_primary":true,"is_revoked":false}}"#,
    )
    .unwrap();
    round_trip(&updated);
    assert!(!updated.old_chat_member.is_present());
    assert!(updated.new_chat_member.is_administrator());
}
