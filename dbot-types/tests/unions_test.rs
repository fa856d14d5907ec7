//! Integration tests for the closed unions: discriminator literals on encode, variant selection
//! on decode, and rejection of unknown discriminators.

use dbot_types::*;
use serde_json::json;

// --- KeyboardOption ---

/// **Test: an inline keyboard with one URL button survives a round trip with absent fields still absent.**
#[test]
fn inline_keyboard_url_button_round_trip() {
    let markup = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url("Go", "https://x")]]);
    let json = markup.to_json().unwrap();
    assert_eq!(json, r#"{"inline_keyboard":[[{"text":"Go","url":"https://x"}]]}"#);

    let decoded = InlineKeyboardMarkup::from_json(&json).unwrap();
    let button = &decoded.inline_keyboard[0][0];
    assert_eq!(button.text, "Go");
    assert_eq!(button.url.as_deref(), Some("https://x"));
    assert!(button.callback_data.is_none());
    assert!(button.login_url.is_none());
    assert!(button.pay.is_none());
    assert_eq!(decoded, markup);

    let option = KeyboardOption::from_json(&json).unwrap();
    assert_eq!(option, KeyboardOption::Inline(markup));
}

/// **Test: each keyboard shape is selected by its distinguishing key.**
#[test]
fn keyboard_option_shapes() {
    let cases = [
        (r#"{"keyboard":[[{"text":"a"}]],"resize_keyboard":true}"#, "keyboard"),
        (r#"{"remove_keyboard":true}"#, "remove_keyboard"),
        (r#"{"force_reply":true,"selective":false}"#, "force_reply"),
        (r#"{"inline_keyboard":[]}"#, "inline_keyboard"),
    ];
    for (json, shape) in cases {
        let option = KeyboardOption::from_json(json).unwrap();
        assert_eq!(option.shape(), shape);
        assert_eq!(option.to_json().unwrap(), json);
    }
}

/// **Test: a keyboard with none of the known keys is rejected with its keys as the discriminator.**
#[test]
fn keyboard_option_unknown_shape() {
    let err = KeyboardOption::from_json(r#"{"grid":[]}"#).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedVariant {
            union: "KeyboardOption",
            discriminator: "grid".to_string(),
        }
    );
}

// --- PassportElementError ---

/// **Test: source="front_side" resolves to the front-side variant and no other.**
#[test]
fn passport_front_side() {
    let error = PassportElementError::from_json(
        r#"{"source":"front_side","type":"passport","file_hash":"abc","message":"Blurry"}"#,
    )
    .unwrap();
    match &error {
        PassportElementError::FrontSide(e) => {
            assert_eq!(e.kind, PassportElementType::Passport);
            assert_eq!(e.file_hash, "abc");
        }
        other => panic!("resolved to {}", other.source()),
    }
    assert!(!matches!(error, PassportElementError::ReverseSide(_)));
    assert!(!matches!(error, PassportElementError::Selfie(_)));
}

/// **Test: all nine sources encode their literal and decode back to the same variant.**
#[test]
fn passport_all_sources() {
    let kind = PassportElementType::DriverLicense;
    let errors = vec![
        PassportElementError::DataField(PassportElementErrorDataField {
            kind: kind.clone(),
            field_name: "document_no".to_string(),
            data_hash: "d".to_string(),
            message: "m".to_string(),
        }),
        PassportElementError::FrontSide(PassportElementErrorFrontSide {
            kind: kind.clone(),
            file_hash: "f".to_string(),
            message: "m".to_string(),
        }),
        PassportElementError::ReverseSide(PassportElementErrorReverseSide {
            kind: kind.clone(),
            file_hash: "f".to_string(),
            message: "m".to_string(),
        }),
        PassportElementError::Selfie(PassportElementErrorSelfie {
            kind: kind.clone(),
            file_hash: "f".to_string(),
            message: "m".to_string(),
        }),
        PassportElementError::File(PassportElementErrorFile {
            kind: PassportElementType::UtilityBill,
            file_hash: "f".to_string(),
            message: "m".to_string(),
        }),
        PassportElementError::Files(PassportElementErrorFiles {
            kind: PassportElementType::UtilityBill,
            file_hashes: vec!["a".to_string(), "b".to_string()],
            message: "m".to_string(),
        }),
        PassportElementError::TranslationFile(PassportElementErrorTranslationFile {
            kind: kind.clone(),
            file_hash: "f".to_string(),
            message: "m".to_string(),
        }),
        PassportElementError::TranslationFiles(PassportElementErrorTranslationFiles {
            kind: kind.clone(),
            file_hashes: vec!["a".to_string()],
            message: "m".to_string(),
        }),
        PassportElementError::Unspecified(PassportElementErrorUnspecified {
            kind,
            element_hash: "e".to_string(),
            message: "m".to_string(),
        }),
    ];

    let sources: Vec<&str> = errors.iter().map(|e| e.source()).collect();
    assert_eq!(sources, PassportElementError::SOURCES.to_vec());

    for error in errors {
        let value = error.to_value().unwrap();
        assert_eq!(value["source"], error.source());
        let decoded = PassportElementError::from_value(value).unwrap();
        assert_eq!(decoded, error);
    }
}

/// **Test: an unknown source is rejected with the raw literal.**
#[test]
fn passport_unknown_source() {
    let err = PassportElementError::from_json(
        r#"{"source":"hologram","type":"passport","message":"m"}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedVariant {
            union: "PassportElementError",
            discriminator: "hologram".to_string(),
        }
    );
}

// --- InputMedia ---

/// **Test: each media kind writes its type literal and decodes to the same variant.**
#[test]
fn input_media_type_literals() {
    let media: Vec<InputMedia> = vec![
        InputMediaPhoto::new("photo-id").into(),
        InputMediaVideo {
            supports_streaming: Some(true),
            ..InputMediaVideo::new("https://example.com/v.mp4")
        }
        .into(),
        InputMediaAnimation::new("anim-id").into(),
        InputMediaAudio {
            performer: Some("Band".to_string()),
            ..InputMediaAudio::new("audio-id")
        }
        .into(),
        InputMediaDocument::new("doc-id").into(),
    ];
    let kinds: Vec<&str> = media.iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, InputMedia::TYPES.to_vec());

    for item in media {
        let value = item.to_value().unwrap();
        assert_eq!(value["type"], item.kind());
        assert_eq!(value["media"], item.media());
        assert_eq!(InputMedia::from_value(value).unwrap(), item);
    }
}

/// **Test: a captioned photo omits every unset field.**
#[test]
fn input_media_photo_omission() {
    let photo = InputMedia::from(InputMediaPhoto {
        caption: Some("*bold*".to_string()),
        parse_mode: Some(ParseMode::MarkdownV2),
        ..InputMediaPhoto::new("abc")
    });
    assert_eq!(
        photo.to_value().unwrap(),
        json!({"type":"photo","media":"abc","caption":"*bold*","parse_mode":"MarkdownV2"})
    );
    assert_eq!(photo.caption(), Some("*bold*"));
}

// --- InputMessageContent ---

/// **Test: content shapes are recognized by their distinguishing key, venue before location.**
#[test]
fn input_message_content_shapes() {
    let cases = [
        (json!({"message_text":"hi","parse_mode":"HTML"}), "text"),
        (json!({"latitude":1.5,"longitude":2.5}), "location"),
        (
            json!({"latitude":1.5,"longitude":2.5,"title":"Cafe","address":"Main st"}),
            "venue",
        ),
        (json!({"phone_number":"+100","first_name":"Ada"}), "contact"),
    ];
    for (value, kind) in cases {
        let content = InputMessageContent::from_value(value.clone()).unwrap();
        assert_eq!(content.kind(), kind);
        assert_eq!(content.to_value().unwrap(), value);
    }
}

/// **Test: content with no known key is rejected.**
#[test]
fn input_message_content_unknown_shape() {
    let err = InputMessageContent::from_json(r#"{"sticker":"x"}"#).unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnrecognizedVariant { union: "InputMessageContent", .. }
    ));
}

// --- InlineQueryResult ---

fn all_inline_results() -> Vec<InlineQueryResult> {
    vec![
        InlineQueryResultArticle::new("1", "Title", InputMessageContent::text("body")).into(),
        InlineQueryResultPhoto::new("2", "https://x/p.jpg", "https://x/t.jpg").into(),
        InlineQueryResultGif::new("3", "https://x/a.gif", "https://x/t.jpg").into(),
        InlineQueryResultMpeg4Gif::new("4", "https://x/a.mp4", "https://x/t.jpg").into(),
        InlineQueryResultVideo::new("5", "https://x/v.mp4", "video/mp4", "https://x/t.jpg", "V")
            .into(),
        InlineQueryResultAudio::new("6", "https://x/a.mp3", "A").into(),
        InlineQueryResultVoice::new("7", "https://x/v.ogg", "Voice").into(),
        InlineQueryResultDocument::new("8", "Doc", "https://x/d.pdf", "application/pdf").into(),
        InlineQueryResultLocation::new("9", 51.5, -0.25, "Here").into(),
        InlineQueryResultVenue::new("10", 51.5, -0.25, "Cafe", "Main st").into(),
        InlineQueryResultContact::new("11", "+100", "Ada").into(),
        InlineQueryResultGame::new("12", "tetris").into(),
        InlineQueryResultCachedPhoto::new("13", "photo-file").into(),
        InlineQueryResultCachedGif::new("14", "gif-file").into(),
        InlineQueryResultCachedMpeg4Gif::new("15", "mpeg4-file").into(),
        InlineQueryResultCachedSticker::new("16", "sticker-file").into(),
        InlineQueryResultCachedDocument::new("17", "Doc", "doc-file").into(),
        InlineQueryResultCachedVideo::new("18", "video-file", "V").into(),
        InlineQueryResultCachedVoice::new("19", "voice-file", "Voice").into(),
        InlineQueryResultCachedAudio::new("20", "audio-file").into(),
    ]
}

/// **Test: all 20 inline results write their type literal and decode to the same variant.**
#[test]
fn inline_results_round_trip() {
    let results = all_inline_results();
    assert_eq!(results.len(), 20);
    for result in results {
        let value = result.to_value().unwrap();
        assert_eq!(value["type"], result.kind(), "result {}", result.id());
        assert_eq!(value["id"], result.id());
        let decoded = InlineQueryResult::from_value(value).unwrap();
        assert_eq!(decoded, result);
        assert_eq!(decoded.is_cached(), result.is_cached());
    }
}

/// **Test: a shared type literal picks the cached variant only when the file id key is present.**
#[test]
fn inline_result_cached_selection() {
    let url = InlineQueryResult::from_json(
        r#"{"type":"photo","id":"a","photo_url":"https://x/p.jpg","thumb_url":"https://x/t.jpg"}"#,
    )
    .unwrap();
    assert!(matches!(url, InlineQueryResult::Photo(_)));
    assert!(!url.is_cached());

    let cached =
        InlineQueryResult::from_json(r#"{"type":"photo","id":"b","photo_file_id":"AgAD"}"#).unwrap();
    assert!(matches!(cached, InlineQueryResult::CachedPhoto(_)));
    assert!(cached.is_cached());

    let sticker =
        InlineQueryResult::from_json(r#"{"type":"sticker","id":"c","sticker_file_id":"CAAD"}"#)
            .unwrap();
    assert!(matches!(sticker, InlineQueryResult::CachedSticker(_)));
}

/// **Test: the type literal is written first and absent optionals are never emitted.**
#[test]
fn inline_result_encoding() {
    let result = InlineQueryResult::from(InlineQueryResultGame::new("g", "tetris"));
    assert_eq!(
        result.to_json().unwrap(),
        r#"{"type":"game","id":"g","game_short_name":"tetris"}"#
    );
}

/// **Test: unknown inline result types and unknown nested content are both reported as UnrecognizedVariant.**
#[test]
fn inline_result_unknown_discriminators() {
    let err = InlineQueryResult::from_json(r#"{"type":"hologram","id":"x"}"#).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedVariant {
            union: "InlineQueryResult",
            discriminator: "hologram".to_string(),
        }
    );

    let err = InlineQueryResultArticle::from_json(
        r#"{"id":"1","title":"t","input_message_content":{"poll":"x"}}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedVariant {
            union: "InputMessageContent",
            discriminator: "poll".to_string(),
        }
    );
}

// --- Discriminator edge cases ---

/// **Test: a tagged union payload without its discriminator fails as a missing field.**
#[test]
fn missing_discriminator_is_decode_error() {
    let cases = [
        (InputMedia::from_json(r#"{"media":"x"}"#).unwrap_err(), "InputMedia", "type"),
        (InlineQueryResult::from_json("5").unwrap_err(), "InlineQueryResult", "type"),
        (
            InlineQueryResult::from_json(r#"{"type":7,"id":"x"}"#).unwrap_err(),
            "InlineQueryResult",
            "type",
        ),
        (
            PassportElementError::from_json(r#"{"type":"passport","file_hash":"h","message":"m"}"#)
                .unwrap_err(),
            "PassportElementError",
            "source",
        ),
    ];
    for (err, union, key) in cases {
        match err {
            ModelError::Decode { entity, field, .. } => {
                assert_eq!(entity, union);
                assert_eq!(field.as_deref(), Some(key));
            }
            other => panic!("{union}: unexpected error: {other:?}"),
        }
    }
}

/// **Test: an unknown discriminator is reported verbatim, backticks and spaces included.**
#[test]
fn unknown_discriminator_kept_verbatim() {
    let err = PassportElementError::from_json(
        r#"{"source":"a`b","type":"passport","file_hash":"h","message":"m"}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedVariant {
            union: "PassportElementError",
            discriminator: "a`b".to_string(),
        }
    );

    let err = InputMedia::from_json(r#"{"type":"x` variant `y","media":"m"}"#).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedVariant {
            union: "InputMedia",
            discriminator: "x` variant `y".to_string(),
        }
    );
}

// --- Fully populated values ---

fn key_count(value: &serde_json::Value) -> usize {
    value.as_object().map(|map| map.len()).unwrap_or_default()
}

fn full_inline_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Yes", "vote:yes"),
        InlineKeyboardButton::login(
            "Login",
            LoginUrl {
                url: "https://example.com/auth".to_string(),
                forward_text: Some("Log in".to_string()),
                bot_username: Some("dbot".to_string()),
                request_write_access: Some(true),
            },
        ),
    ]])
}

fn full_caption_entities() -> Vec<MessageEntity> {
    vec![
        MessageEntity {
            url: Some("https://example.com".to_string()),
            ..MessageEntity::new(MessageEntityType::TextLink, 0, 4)
        },
        MessageEntity {
            user: Some(User::new(5_000_000_001, false, "Ada")),
            ..MessageEntity::new(MessageEntityType::TextMention, 5, 3)
        },
    ]
}

/// **Test: an inline photo with every optional set, including nested venue content, round-trips.**
#[test]
fn inline_photo_all_optionals_round_trip() {
    let content = InputVenueMessageContent {
        foursquare_id: Some("4sq".to_string()),
        foursquare_type: Some("food/cafe".to_string()),
        google_place_id: Some("gp".to_string()),
        google_place_type: Some("cafe".to_string()),
        ..InputVenueMessageContent::new(51.5, -0.25, "Cafe", "1 Road")
    };
    let photo = InlineQueryResultPhoto {
        photo_width: Some(640),
        photo_height: Some(480),
        title: Some("Title".to_string()),
        description: Some("Description".to_string()),
        caption: Some("Look here".to_string()),
        parse_mode: Some(ParseMode::MarkdownV2),
        caption_entities: Some(full_caption_entities()),
        reply_markup: Some(full_inline_keyboard()),
        input_message_content: Some(content.into()),
        ..InlineQueryResultPhoto::new("p1", "https://x/p.jpg", "https://x/t.jpg")
    };
    let result = InlineQueryResult::from(photo);

    let value = result.to_value().unwrap();
    assert_eq!(value["type"], "photo");
    assert_eq!(key_count(&value), 13);
    assert_eq!(value["input_message_content"]["google_place_type"], "cafe");
    assert_eq!(value["caption_entities"][1]["user"]["id"], 5_000_000_001i64);

    let decoded = InlineQueryResult::from_json(&result.to_json().unwrap()).unwrap();
    assert_eq!(decoded, result);
}

/// **Test: an inline venue with every optional set round-trips through the flattened encoding.**
#[test]
fn inline_venue_all_optionals_round_trip() {
    let venue = InlineQueryResultVenue {
        foursquare_id: Some("4sq".to_string()),
        foursquare_type: Some("arts_entertainment/default".to_string()),
        google_place_id: Some("gp".to_string()),
        google_place_type: Some("museum".to_string()),
        reply_markup: Some(full_inline_keyboard()),
        input_message_content: Some(InputMessageContent::text("See you there")),
        thumb_url: Some("https://x/t.jpg".to_string()),
        thumb_width: Some(90),
        thumb_height: Some(90),
        ..InlineQueryResultVenue::new("v1", 48.5, 2.25, "Museum", "Rue 1")
    };
    let result = InlineQueryResult::from(venue);
    assert_eq!(key_count(&result.to_value().unwrap()), 15);
    let decoded = InlineQueryResult::from_json(&result.to_json().unwrap()).unwrap();
    assert_eq!(decoded, result);
}

/// **Test: media with every optional set round-trips for video, audio and document.**
#[test]
fn input_media_all_optionals_round_trip() {
    let video = InputMedia::from(InputMediaVideo {
        thumb: Some("attach://thumb".to_string()),
        caption: Some("clip".to_string()),
        parse_mode: Some(ParseMode::Html),
        caption_entities: Some(full_caption_entities()),
        width: Some(1920),
        height: Some(1080),
        duration: Some(12),
        supports_streaming: Some(false),
        ..InputMediaVideo::new("file-video")
    });
    let audio = InputMedia::from(InputMediaAudio {
        thumb: Some("file-thumb".to_string()),
        caption: Some("song".to_string()),
        parse_mode: Some(ParseMode::Markdown),
        caption_entities: Some(vec![]),
        duration: Some(215),
        performer: Some("Band".to_string()),
        title: Some("Track".to_string()),
        ..InputMediaAudio::new("https://x/a.mp3")
    });
    let document = InputMedia::from(InputMediaDocument {
        thumb: Some("file-thumb".to_string()),
        caption: Some("report".to_string()),
        parse_mode: Some(ParseMode::Html),
        caption_entities: Some(full_caption_entities()),
        disable_content_type_detection: Some(true),
        ..InputMediaDocument::new("file-doc")
    });

    for (media, keys) in [(video, 10), (audio, 9), (document, 7)] {
        let value = media.to_value().unwrap();
        assert_eq!(key_count(&value), keys, "{}", media.kind());
        assert_eq!(value["type"], media.kind());
        let decoded = InputMedia::from_json(&media.to_json().unwrap()).unwrap();
        assert_eq!(decoded, media);
    }
}

/// **Test: location and contact content with every optional set keep their shape.**
#[test]
fn input_message_content_all_optionals_round_trip() {
    let location = InputMessageContent::from(InputLocationMessageContent {
        horizontal_accuracy: Some(12.5),
        live_period: Some(3600),
        heading: Some(90),
        proximity_alert_radius: Some(100),
        ..InputLocationMessageContent::new(51.5, -0.125)
    });
    let contact = InputMessageContent::from(InputContactMessageContent {
        last_name: Some("Lovelace".to_string()),
        vcard: Some("BEGIN:VCARD\nEND:VCARD".to_string()),
        ..InputContactMessageContent::new("+440000", "Ada")
    });

    for (content, keys) in [(location, 6), (contact, 4)] {
        let value = content.to_value().unwrap();
        assert_eq!(key_count(&value), keys, "{}", content.kind());
        let decoded = InputMessageContent::from_json(&content.to_json().unwrap()).unwrap();
        assert_eq!(decoded.kind(), content.kind());
        assert_eq!(decoded, content);
    }
}

/// **Test: a reply keyboard with every button option set round-trips as the reply shape.**
#[test]
fn reply_keyboard_all_optionals_round_trip() {
    let markup = ReplyKeyboardMarkup {
        resize_keyboard: Some(true),
        one_time_keyboard: Some(false),
        selective: Some(true),
        ..ReplyKeyboardMarkup::new(vec![
            vec![
                KeyboardButton {
                    request_poll: Some(KeyboardButtonPollType {
                        kind: Some(PollType::Quiz),
                    }),
                    ..KeyboardButton::new("New quiz")
                },
                KeyboardButton {
                    request_poll: Some(KeyboardButtonPollType::default()),
                    ..KeyboardButton::new("New poll")
                },
            ],
            vec![
                KeyboardButton {
                    request_contact: Some(true),
                    ..KeyboardButton::new("Share phone")
                },
                KeyboardButton {
                    request_location: Some(true),
                    ..KeyboardButton::new("Share location")
                },
            ],
        ])
    };
    let option = KeyboardOption::from(markup);

    let value = option.to_value().unwrap();
    assert_eq!(key_count(&value), 4);
    assert_eq!(value["keyboard"][0][0]["request_poll"], json!({"type": "quiz"}));
    assert_eq!(value["keyboard"][0][1]["request_poll"], json!({}));

    let decoded = KeyboardOption::from_json(&option.to_json().unwrap()).unwrap();
    assert_eq!(decoded, option);
}
