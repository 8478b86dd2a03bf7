//! Flat-scan extraction of a record from JSON text.
//!
//! This is deliberately NOT a general JSON parser. It walks the input
//! byte-by-byte looking for flat `"key":"value"` pairs and the bare
//! boolean literal of `action_allowed`, and ignores everything else:
//! numbers, nested objects, arrays, stray punctuation. Nesting depth is
//! not tracked, so quoted strings inside a nested payload will be picked
//! up as top-level keys and can derail scanning of subsequent fields.
//! Downstream consumers depend on exactly this tolerance behavior, so any
//! change here is a wire-contract change.

use crate::record::EventRecord;

/// Parses JSON text into a fresh record.
///
/// Never fails: malformed, truncated, or structurally nested input yields
/// a partially populated (possibly fully cleared) record. The cleared
/// state carries empty strings, unset confidences, and `action_allowed`
/// false — callers must validate required fields after parsing, since an
/// all-default record is a legitimate outcome.
pub fn parse_event(json: &str) -> EventRecord {
    let mut record = EventRecord::new();
    parse_event_into(json, &mut record);
    record
}

/// Parses JSON text into an existing record, resetting it first.
///
/// Every field of `record` is overwritten: strings cleared, confidences
/// set to the unset sentinel, `action_allowed` false. See [`parse_event`]
/// for the grammar and the never-fail contract.
pub fn parse_event_into(json: &str, record: &mut EventRecord) {
    record.reset();

    let bytes = json.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'"' {
            i += 1;
            continue;
        }
        i += 1;
        let key = read_quoted(bytes, &mut i);

        // Separator: spaces and a colon, nothing fancier.
        while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b':') {
            i += 1;
        }

        if i < bytes.len() && bytes[i] == b'"' {
            i += 1;
            let value = read_quoted(bytes, &mut i);
            assign_field(record, &key, &value);
        } else if i < bytes.len() && (bytes[i] == b't' || bytes[i] == b'f') {
            // Bare literal; only meaningful for action_allowed.
            if key == "action_allowed" {
                if bytes[i..].starts_with(b"true") {
                    record.set_action_allowed(true);
                } else if bytes[i..].starts_with(b"false") {
                    record.set_action_allowed(false);
                }
            }
            while i < bytes.len() && bytes[i] != b',' && bytes[i] != b'}' {
                i += 1;
            }
        }

        // Skip to the next delimiter or quote; unrecognized structure
        // (numbers, braces, arrays) is passed over byte-by-byte.
        while i < bytes.len() && bytes[i] != b'"' && bytes[i] != b',' && bytes[i] != b'}' {
            i += 1;
        }
    }
}

/// Reads a quoted token starting just past its opening quote, consuming
/// through the closing quote (or end of input when unterminated).
///
/// Unescaping is generic: `\X` yields `X` for any `X`, with no special
/// case for `\n` or `\uXXXX`. A trailing lone backslash is kept verbatim.
fn read_quoted(bytes: &[u8], i: &mut usize) -> String {
    let mut buf = Vec::new();
    while *i < bytes.len() && bytes[*i] != b'"' {
        if bytes[*i] == b'\\' && *i + 1 < bytes.len() {
            *i += 1;
        }
        buf.push(bytes[*i]);
        *i += 1;
    }
    if *i < bytes.len() {
        *i += 1;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Assigns a quoted value to the record field matching `key`.
///
/// Unknown keys are silently ignored — unknown fields must never cause a
/// parse to fail (forward compatibility across schema revisions).
fn assign_field(record: &mut EventRecord, key: &str, value: &str) {
    match key {
        "type" => record.set_event_type(value),
        "timestamp" => record.set_timestamp(value),
        "system_id" => record.set_system_id(value),
        "status" => record.set_status(value),
        "action_type" => record.set_action_type(value),
        "action_id" => record.set_action_id(value),
        "action_allowed" => record.set_action_allowed(value == "true"),
        _ => tracing::trace!(key = %key, "ignoring unrecognized key"),
    }
}
