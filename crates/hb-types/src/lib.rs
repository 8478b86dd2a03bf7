//! Shared wire vocabulary for the Harmony Bridge event codec.
//!
//! This crate defines the canonical string labels exchanged on the wire:
//! event type tags, severity levels, and drift check statuses. The labels
//! must match the companion event schema exactly (casing included) — the
//! codec crate renders and compares them verbatim.
//!
//! No crate in the workspace depends on anything *except* `hb-types` for
//! cross-cutting vocabulary, keeping the dependency graph flat.

use serde::{Deserialize, Serialize};

/// Event type tags carried in the `type` field of every event.
///
/// Tags are upper snake case on the wire. `ActionAck` is consumed by the
/// codec (parsed from a bridge or executor reply) but never produced by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A deviation from an expected baseline, with confidence scores.
    #[serde(rename = "DRIFT_EVENT")]
    DriftEvent,
    /// A periodic health report from a monitored system.
    #[serde(rename = "HEALTH_EVENT")]
    HealthEvent,
    /// A command proposed by the monitoring side for execution elsewhere.
    #[serde(rename = "ACTION_REQUEST")]
    ActionRequest,
    /// A snapshot of a decision and its supporting evidence.
    #[serde(rename = "DECISION_SNAPSHOT")]
    DecisionSnapshot,
    /// An acknowledgement of a previously requested action.
    #[serde(rename = "ACTION_ACK")]
    ActionAck,
}

impl EventType {
    /// Returns the canonical wire label for this event type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DriftEvent => "DRIFT_EVENT",
            Self::HealthEvent => "HEALTH_EVENT",
            Self::ActionRequest => "ACTION_REQUEST",
            Self::DecisionSnapshot => "DECISION_SNAPSHOT",
            Self::ActionAck => "ACTION_ACK",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRIFT_EVENT" => Ok(Self::DriftEvent),
            "HEALTH_EVENT" => Ok(Self::HealthEvent),
            "ACTION_REQUEST" => Ok(Self::ActionRequest),
            "DECISION_SNAPSHOT" => Ok(Self::DecisionSnapshot),
            "ACTION_ACK" => Ok(Self::ActionAck),
            _ => Err(ParseEventTypeError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown event type tag.
#[derive(Debug, Clone)]
pub struct ParseEventTypeError(pub String);

impl std::fmt::Display for ParseEventTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown event type: {}", self.0)
    }
}

impl std::error::Error for ParseEventTypeError {}

/// Advisory severity levels.
///
/// Lower case on the wire. The codec stores and forwards severity without
/// enforcing this vocabulary; enforcement belongs to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational, no operator attention needed.
    #[serde(rename = "info")]
    Info,
    /// Minor deviation, monitor only.
    #[serde(rename = "low")]
    Low,
    /// Deviation worth investigating.
    #[serde(rename = "medium")]
    Medium,
    /// Significant deviation, action likely required.
    #[serde(rename = "high")]
    High,
    /// Severe deviation, immediate action required.
    #[serde(rename = "critical")]
    Critical,
}

impl Severity {
    /// Returns the canonical wire label for this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown severity string.
#[derive(Debug, Clone)]
pub struct ParseSeverityError(pub String);

impl std::fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown severity: {}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

/// Outcome of a drift check, carried in the `status` field of drift events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriftStatus {
    /// No drift detected.
    #[serde(rename = "PASS")]
    Pass,
    /// Drift detected but within tolerated bounds.
    #[serde(rename = "PASS_WITH_DRIFT")]
    PassWithDrift,
    /// Drift outside tolerated bounds.
    #[serde(rename = "FAIL")]
    Fail,
}

impl DriftStatus {
    /// Returns the canonical wire label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::PassWithDrift => "PASS_WITH_DRIFT",
            Self::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for DriftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DriftStatus {
    type Err = ParseDriftStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "PASS_WITH_DRIFT" => Ok(Self::PassWithDrift),
            "FAIL" => Ok(Self::Fail),
            _ => Err(ParseDriftStatusError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown drift status string.
#[derive(Debug, Clone)]
pub struct ParseDriftStatusError(pub String);

impl std::fmt::Display for ParseDriftStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown drift status: {}", self.0)
    }
}

impl std::error::Error for ParseDriftStatusError {}
