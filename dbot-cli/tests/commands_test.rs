//! Commands driven from update files on disk.

use std::io::Write;

use dbot_cli::{decode, read_input, reply};
use serde_json::Value;
use tempfile::NamedTempFile;

fn update_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// **Test: decode reads an update file and prints canonical JSON without unknown fields**
#[test]
fn test_decode_from_file_drops_unknown_fields() {
    let file = update_file(
        r#"{"update_id":100,"message":{"message_id":1,"date":1600000000,
            "chat":{"id":42,"type":"private","first_name":"Ada"},
            "text":"hello","future_field":{"x":1}}}"#,
    );
    let input = read_input(Some(file.path())).unwrap();
    let out = decode(&input, false).unwrap();

    let (kind, json) = out.split_once('\n').unwrap();
    assert_eq!(kind, "kind: message");
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["update_id"], 100);
    assert!(value["message"].get("future_field").is_none());
}

/// **Test: reply to a callback query answers in the chat of the query's message**
#[test]
fn test_reply_to_callback_query_from_file() {
    let file = update_file(
        r#"{"update_id":5,"callback_query":{"id":"cb","chat_instance":"ci",
            "from":{"id":9,"is_bot":false,"first_name":"B"},"data":"vote:yes",
            "message":{"message_id":77,"date":1,"chat":{"id":-200,"type":"supergroup","title":"S"}}}}"#,
    );
    let input = read_input(Some(file.path())).unwrap();
    let out = reply(&input, "thanks", true).unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["method"], "sendMessage");
    assert_eq!(value["chat_id"], -200);
    assert!(value.get("reply_to_message_id").is_none());
    assert!(out.contains('\n'));
}

/// **Test: malformed update file surfaces a decode error with context**
#[test]
fn test_decode_malformed_file() {
    let file = update_file(r#"{"update_id":"#);
    let input = read_input(Some(file.path())).unwrap();
    let err = decode(&input, false).unwrap_err();
    assert_eq!(err.to_string(), "Failed to decode update");
    assert!(err.chain().count() >= 2);
}

/// **Test: missing input file names the path**
#[test]
fn test_read_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = read_input(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
