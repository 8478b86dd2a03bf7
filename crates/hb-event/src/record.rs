//! The in-memory event record: bounded fields, defaults, and accessors.

use hb_types::EventType;

use crate::clock::{Clock, SystemClock};

/// Byte cap for every string field except the payload fragment.
pub const MAX_FIELD_LEN: usize = 255;

/// Byte cap for the opaque `payload_json` fragment.
pub const MAX_PAYLOAD_LEN: usize = 4095;

/// Sentinel meaning "confidence not provided".
///
/// Distinct from a legitimate `0.0`. Fields holding the sentinel (or any
/// negative value) are omitted from serialized output.
pub const UNSET_CONFIDENCE: f64 = -1.0;

/// Truncates at the cap without splitting a UTF-8 character.
fn capped(value: &str, cap: usize) -> &str {
    if value.len() <= cap {
        return value;
    }
    let mut end = cap;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// A single Harmony Bridge event.
///
/// All string fields are length-capped owned strings: setters silently
/// truncate over-long values at a character boundary and never fail.
/// Numeric confidence fields use [`UNSET_CONFIDENCE`] as their "not
/// provided" state; `action_allowed` has no unset state.
///
/// A record has exactly one owner. It is constructed, mutated through its
/// setters, serialized (or populated by a parse), and discarded — nothing
/// in the codec shares or retains it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    event_type: String,
    timestamp: String,
    system_id: String,
    severity: String,
    recommended_action: String,
    run_id: String,
    decision_id: String,
    status: String,
    confidence: f64,
    baseline_confidence: f64,
    action_allowed: bool,
    action_type: String,
    action_id: String,
    payload_json: String,
}

impl EventRecord {
    /// Creates a record with creation defaults, stamped by the system clock.
    ///
    /// Defaults: `type` is `DRIFT_EVENT`, `timestamp` is the current UTC
    /// instant, confidences are unset, `action_allowed` is `false`, every
    /// other field is empty.
    pub fn new() -> Self {
        Self::with_clock(&SystemClock)
    }

    /// Creates a record with creation defaults, stamped by the given clock.
    pub fn with_clock(clock: &dyn Clock) -> Self {
        let mut record = Self::blank();
        record.event_type = EventType::DriftEvent.as_str().to_string();
        record.set_timestamp(&clock.now_iso8601());
        record
    }

    /// A fully cleared record: empty strings, unset confidences,
    /// `action_allowed` false. This is the parser's starting state — note
    /// it carries *no* type or timestamp default, unlike [`Self::new`].
    fn blank() -> Self {
        Self {
            event_type: String::new(),
            timestamp: String::new(),
            system_id: String::new(),
            severity: String::new(),
            recommended_action: String::new(),
            run_id: String::new(),
            decision_id: String::new(),
            status: String::new(),
            confidence: UNSET_CONFIDENCE,
            baseline_confidence: UNSET_CONFIDENCE,
            action_allowed: false,
            action_type: String::new(),
            action_id: String::new(),
            payload_json: String::new(),
        }
    }

    /// Resets every field to the cleared state used before a parse.
    pub fn reset(&mut self) {
        *self = Self::blank();
    }

    /// The event type tag (wire key `type`).
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Sets the event type tag, truncating at [`MAX_FIELD_LEN`].
    pub fn set_event_type(&mut self, value: &str) {
        self.event_type = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The ISO-8601 UTC timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Sets the timestamp, truncating at [`MAX_FIELD_LEN`].
    pub fn set_timestamp(&mut self, value: &str) {
        self.timestamp = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The reporting system identifier.
    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    /// Sets the system identifier, truncating at [`MAX_FIELD_LEN`].
    pub fn set_system_id(&mut self, value: &str) {
        self.system_id = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The advisory severity label.
    pub fn severity(&self) -> &str {
        &self.severity
    }

    /// Sets the severity label, truncating at [`MAX_FIELD_LEN`].
    ///
    /// Not validated against the severity vocabulary; that is advisory.
    pub fn set_severity(&mut self, value: &str) {
        self.severity = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The recommended action text.
    pub fn recommended_action(&self) -> &str {
        &self.recommended_action
    }

    /// Sets the recommended action, truncating at [`MAX_FIELD_LEN`].
    pub fn set_recommended_action(&mut self, value: &str) {
        self.recommended_action = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The run correlation identifier.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Sets the run identifier, truncating at [`MAX_FIELD_LEN`].
    pub fn set_run_id(&mut self, value: &str) {
        self.run_id = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The decision correlation identifier. Stored only; never serialized.
    pub fn decision_id(&self) -> &str {
        &self.decision_id
    }

    /// Sets the decision identifier, truncating at [`MAX_FIELD_LEN`].
    pub fn set_decision_id(&mut self, value: &str) {
        self.decision_id = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The drift check status (drift events only).
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Sets the status label, truncating at [`MAX_FIELD_LEN`].
    pub fn set_status(&mut self, value: &str) {
        self.status = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The confidence score, or [`UNSET_CONFIDENCE`].
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Sets the confidence score verbatim.
    ///
    /// Out-of-range values are accepted; range policy belongs to callers.
    pub fn set_confidence(&mut self, value: f64) {
        self.confidence = value;
    }

    /// The baseline confidence score, or [`UNSET_CONFIDENCE`].
    pub fn baseline_confidence(&self) -> f64 {
        self.baseline_confidence
    }

    /// Sets the baseline confidence score verbatim.
    pub fn set_baseline_confidence(&mut self, value: f64) {
        self.baseline_confidence = value;
    }

    /// Whether the proposed action is allowed to execute.
    pub fn action_allowed(&self) -> bool {
        self.action_allowed
    }

    /// Sets the action-allowed flag.
    pub fn set_action_allowed(&mut self, value: bool) {
        self.action_allowed = value;
    }

    /// The action type (action-request events).
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Sets the action type, truncating at [`MAX_FIELD_LEN`].
    pub fn set_action_type(&mut self, value: &str) {
        self.action_type = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The action identifier (action-request and ack events).
    pub fn action_id(&self) -> &str {
        &self.action_id
    }

    /// Sets the action identifier, truncating at [`MAX_FIELD_LEN`].
    pub fn set_action_id(&mut self, value: &str) {
        self.action_id = capped(value, MAX_FIELD_LEN).to_string();
    }

    /// The opaque pre-formed JSON payload fragment.
    ///
    /// Never interpreted by the codec and never emitted by the serializer;
    /// it exists so callers can carry a fragment alongside the record.
    pub fn payload_json(&self) -> &str {
        &self.payload_json
    }

    /// Sets the payload fragment, truncating at [`MAX_PAYLOAD_LEN`].
    pub fn set_payload_json(&mut self, value: &str) {
        self.payload_json = capped(value, MAX_PAYLOAD_LEN).to_string();
    }
}

impl Default for EventRecord {
    fn default() -> Self {
        Self::new()
    }
}
