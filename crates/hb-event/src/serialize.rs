//! Rendering a record as a single-line JSON wire document.

use crate::clock::EPOCH_TIMESTAMP;
use crate::error::CodecError;
use crate::escape::escape_json;
use crate::record::EventRecord;

/// Smallest capacity any event can serialize into.
///
/// The three always-present fields plus `action_allowed` never fit below
/// this, so smaller capacities are rejected up front.
pub const MIN_CAPACITY: usize = 64;

/// Literal substituted for an empty `type` field.
const DEFAULT_TYPE: &str = "DRIFT_EVENT";

/// Literal substituted for an empty `system_id` field.
const DEFAULT_SYSTEM_ID: &str = "unknown";

/// Renders the record as a minified single-line JSON object.
///
/// `capacity` declares the caller's buffer budget in bytes. The emission
/// order is fixed and must not change — consumers on other runtimes match
/// it byte-for-byte:
///
/// `type, timestamp, system_id, severity?, status?, confidence?,
/// baseline_confidence?, action_allowed, recommended_action?, run_id?,
/// action_type?, action_id?`
///
/// Optional fields are omitted when empty (strings) or negative (numbers).
/// `type`, `timestamp`, and `system_id` always appear, falling back to
/// `DRIFT_EVENT`, `1970-01-01T00:00:00Z`, and `unknown` when empty.
/// Numbers carry exactly four decimal digits; the boolean is bare.
/// `decision_id` and `payload_json` are never emitted.
///
/// On success the returned string is the complete document, no trailing
/// newline; its length is the exact wire byte count.
///
/// # Errors
///
/// Returns [`CodecError::CapacityTooSmall`] when `capacity` is below
/// [`MIN_CAPACITY`], and [`CodecError::CapacityExceeded`] when the fully
/// rendered document would not fit. Partial output is never produced.
pub fn serialize_event(record: &EventRecord, capacity: usize) -> Result<String, CodecError> {
    if capacity < MIN_CAPACITY {
        return Err(CodecError::CapacityTooSmall { capacity });
    }

    let event_type = non_empty_or(record.event_type(), DEFAULT_TYPE);
    let timestamp = non_empty_or(record.timestamp(), EPOCH_TIMESTAMP);
    let system_id = non_empty_or(record.system_id(), DEFAULT_SYSTEM_ID);

    let mut out = String::with_capacity(MIN_CAPACITY);
    out.push_str("{\"type\":\"");
    out.push_str(&escape_json(event_type));
    out.push_str("\",\"timestamp\":\"");
    out.push_str(&escape_json(timestamp));
    out.push_str("\",\"system_id\":\"");
    out.push_str(&escape_json(system_id));
    out.push('"');

    if !record.severity().is_empty() {
        push_string_field(&mut out, "severity", record.severity());
    }
    if !record.status().is_empty() {
        push_string_field(&mut out, "status", record.status());
    }
    if record.confidence() >= 0.0 {
        push_number_field(&mut out, "confidence", record.confidence());
    }
    if record.baseline_confidence() >= 0.0 {
        push_number_field(&mut out, "baseline_confidence", record.baseline_confidence());
    }

    out.push_str(",\"action_allowed\":");
    out.push_str(if record.action_allowed() { "true" } else { "false" });

    if !record.recommended_action().is_empty() {
        push_string_field(&mut out, "recommended_action", record.recommended_action());
    }
    if !record.run_id().is_empty() {
        push_string_field(&mut out, "run_id", record.run_id());
    }
    if !record.action_type().is_empty() {
        push_string_field(&mut out, "action_type", record.action_type());
    }
    if !record.action_id().is_empty() {
        push_string_field(&mut out, "action_id", record.action_id());
    }
    out.push('}');

    if out.len() > capacity {
        tracing::debug!(
            required = out.len(),
            capacity,
            "serialized event exceeds declared capacity"
        );
        return Err(CodecError::CapacityExceeded {
            required: out.len(),
            capacity,
        });
    }
    Ok(out)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn push_string_field(out: &mut String, key: &str, value: &str) {
    out.push_str(",\"");
    out.push_str(key);
    out.push_str("\":\"");
    out.push_str(&escape_json(value));
    out.push('"');
}

fn push_number_field(out: &mut String, key: &str, value: f64) {
    out.push_str(",\"");
    out.push_str(key);
    out.push_str("\":");
    out.push_str(&format!("{value:.4}"));
}
