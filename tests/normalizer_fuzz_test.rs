use volc_asr::{parse_error, parse_result};

#[test]
fn test_garbage_payload_flood() {
    let garbage: [&[u8]; 14] = [
        b"",
        b" ",
        b"null",
        b"42",
        b"\"result\"",
        b"[]",
        b"{\"result\":",
        b"{\"result\":[[{\"text\":\"nested\"}]]}",
        b"{\"result\":[null]}",
        b"{\"result\":{\"text\":null}}",
        b"{\"result\":true}",
        b"{\"result\":[\"hello\"]}",
        b"{\"result\":[[\"hello\"]]}",
        &[0xc3, 0x28, 0xa0, 0xa1],
    ];

    for payload in garbage {
        assert_eq!(parse_result(payload, false), None, "payload {:?}", payload);
        assert_eq!(parse_result(payload, true), None, "payload {:?}", payload);
        assert_eq!(parse_error(payload), None, "payload {:?}", payload);
    }
}

#[test]
fn test_truncated_prefixes_never_panic() {
    let full = br#"{"result":[{"text":"streaming transcript","utterances":[{"definite":false}]}]}"#;
    for end in 0..full.len() {
        let _ = parse_result(&full[..end], false);
    }
    assert_eq!(
        parse_result(full, false).map(|e| e.text),
        Some("streaming transcript".to_string())
    );
}

#[test]
fn test_unicode_text_preserved() {
    let payload = r#"{"result":{"text":"今天天气不错，24 度。"}}"#;
    let event = parse_result(payload.as_bytes(), true).expect("event");
    assert_eq!(event.text, "今天天气不错，24 度。");
    assert!(event.is_final);
}

#[test]
fn test_large_payload() {
    let text = "a".repeat(64 * 1024);
    let payload = serde_json::json!({ "result": [{ "text": text }] }).to_string();
    let event = parse_result(payload.as_bytes(), false).expect("event");
    assert_eq!(event.text.len(), 64 * 1024);
}
