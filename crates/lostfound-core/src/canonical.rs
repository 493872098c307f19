//! Canonical JSON encoding for block digests.
//!
//! The digest input is a single JSON object with the keys `data`, `index`,
//! `previous_hash` and `timestamp`. Encoding rules:
//! - Object keys sorted by code point
//! - Separators `", "` between members and `": "` after keys
//! - Integers in decimal, no floats
//! - ASCII-only output: anything outside `0x20..=0x7E` is `\uXXXX`
//!   (lowercase hex, surrogate pairs above the BMP), with the short
//!   escapes `\" \\ \b \f \n \r \t`
//!
//! These are the bytes produced by a sorted-key `json.dumps` with default
//! settings, so digests can be recomputed outside Rust.

use std::fmt::Write;

use crate::payload::{Payload, PayloadValue};
use crate::types::PreviousHash;

/// Top-level keys of the digest object, in sorted order.
mod keys {
    pub const DATA: &str = "data";
    pub const INDEX: &str = "index";
    pub const PREVIOUS_HASH: &str = "previous_hash";
    pub const TIMESTAMP: &str = "timestamp";
}

const ITEM_SEPARATOR: &str = ", ";
const KEY_SEPARATOR: &str = ": ";

/// Encode the four hashed block fields to canonical JSON.
pub fn canonical_block_json(
    index: u64,
    timestamp: &str,
    payload: &Payload,
    previous_hash: &PreviousHash,
) -> String {
    let mut buf = String::with_capacity(128 + payload.len() * 32);
    buf.push('{');

    write_key(&mut buf, keys::DATA);
    write_payload(&mut buf, payload);
    buf.push_str(ITEM_SEPARATOR);

    write_key(&mut buf, keys::INDEX);
    let _ = write!(buf, "{index}");
    buf.push_str(ITEM_SEPARATOR);

    write_key(&mut buf, keys::PREVIOUS_HASH);
    write_string(&mut buf, &previous_hash.as_string());
    buf.push_str(ITEM_SEPARATOR);

    write_key(&mut buf, keys::TIMESTAMP);
    write_string(&mut buf, timestamp);

    buf.push('}');
    buf
}

/// Encode a payload on its own (the `data` member of the digest object).
pub fn canonical_payload_json(payload: &Payload) -> String {
    let mut buf = String::new();
    write_payload(&mut buf, payload);
    buf
}

fn write_key(buf: &mut String, key: &str) {
    write_string(buf, key);
    buf.push_str(KEY_SEPARATOR);
}

/// Payload keys come out of a `BTreeMap`, already in code point order.
fn write_payload(buf: &mut String, payload: &Payload) {
    buf.push('{');
    for (i, (key, value)) in payload.iter().enumerate() {
        if i > 0 {
            buf.push_str(ITEM_SEPARATOR);
        }
        write_key(buf, key);
        write_value(buf, value);
    }
    buf.push('}');
}

fn write_value(buf: &mut String, value: &PayloadValue) {
    match value {
        PayloadValue::Null => buf.push_str("null"),
        PayloadValue::Bool(true) => buf.push_str("true"),
        PayloadValue::Bool(false) => buf.push_str("false"),
        PayloadValue::Int(n) => {
            let _ = write!(buf, "{n}");
        }
        PayloadValue::Text(s) => write_string(buf, s),
    }
}

/// Write a quoted, ASCII-only JSON string.
fn write_string(buf: &mut String, s: &str) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{08}' => buf.push_str("\\b"),
            '\u{0c}' => buf.push_str("\\f"),
            ' '..='~' => buf.push(c),
            _ => write_unicode_escape(buf, c),
        }
    }
    buf.push('"');
}

fn write_unicode_escape(buf: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        let _ = write!(buf, "\\u{:04x}", unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::BlockHash;
    use proptest::prelude::any;

    fn escaped(s: &str) -> String {
        let mut buf = String::new();
        write_string(&mut buf, s);
        buf
    }

    #[test]
    fn test_block_object_key_order_and_separators() {
        let payload = Payload::new().with("message", "Genesis Block for Lost & Found System");
        let json = canonical_block_json(
            0,
            "2025-01-15 10:00:00.000000",
            &payload,
            &PreviousHash::Genesis,
        );
        assert_eq!(
            json,
            r#"{"data": {"message": "Genesis Block for Lost & Found System"}, "index": 0, "previous_hash": "0", "timestamp": "2025-01-15 10:00:00.000000"}"#
        );
    }

    #[test]
    fn test_payload_keys_sorted() {
        let payload = Payload::new()
            .with("vehicle_id", Option::<String>::None)
            .with("report_id", 2i64)
            .with("flag", true);
        assert_eq!(
            canonical_payload_json(&payload),
            r#"{"flag": true, "report_id": 2, "vehicle_id": null}"#
        );
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(canonical_payload_json(&Payload::new()), "{}");
    }

    #[test]
    fn test_short_escapes() {
        assert_eq!(escaped("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(escaped("\n\r\t\u{08}\u{0c}"), r#""\n\r\t\b\f""#);
    }

    #[test]
    fn test_control_and_del_escaped() {
        assert_eq!(escaped("\u{01}"), r#""\u0001""#);
        assert_eq!(escaped("\u{7f}"), r#""\u007f""#);
    }

    #[test]
    fn test_non_ascii_escaped() {
        assert_eq!(escaped("Caf\u{e9}"), r#""Caf\u00e9""#);
        // U+1F511 KEY is outside the BMP
        assert_eq!(escaped("\u{1F511}"), r#""\ud83d\udd11""#);
    }

    #[test]
    fn test_negative_integer() {
        let payload = Payload::new().with("count", -42i64);
        assert_eq!(canonical_payload_json(&payload), r#"{"count": -42}"#);
    }

    #[test]
    fn test_previous_hash_rendered_as_hex() {
        let prev = PreviousHash::Block(BlockHash::from_bytes([0x0f; 32]));
        let json = canonical_block_json(1, "t", &Payload::new(), &prev);
        assert!(json.contains(&format!(r#""previous_hash": "{}""#, "0f".repeat(32))));
    }

    #[test]
    fn test_encoding_deterministic() {
        let payload = Payload::new().with("item_name", "Wallet").with("report_id", 1i64);
        let a = canonical_block_json(3, "ts", &payload, &PreviousHash::Genesis);
        let b = canonical_block_json(3, "ts", &payload.clone(), &PreviousHash::Genesis);
        assert_eq!(a, b);
    }

    proptest::proptest! {
        #[test]
        fn test_insertion_order_never_changes_encoding(
            entries in proptest::collection::btree_map("[a-z_]{1,8}", any::<i64>(), 0..12),
        ) {
            let forward: Payload = entries.iter().map(|(k, v)| (k.clone(), *v)).collect();
            let reversed: Payload = entries.iter().rev().map(|(k, v)| (k.clone(), *v)).collect();
            proptest::prop_assert_eq!(
                canonical_payload_json(&forward),
                canonical_payload_json(&reversed)
            );
        }
    }
}
