//! Injectable UTC clock for default event timestamps.

/// Fallback timestamp used when no clock reading is available.
///
/// Also the literal the serializer substitutes for an empty `timestamp`
/// field, so output is always well-formed.
pub const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// Source of the current UTC instant in wire format.
///
/// Implementations must never fail: if the underlying clock cannot be
/// read, return [`EPOCH_TIMESTAMP`] rather than propagating an error.
/// Records created via [`EventRecord::with_clock`](crate::EventRecord::with_clock)
/// stamp their default timestamp from this trait, which keeps the
/// default-timestamp behavior deterministic under test.
pub trait Clock {
    /// Returns the current instant as `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// Second precision, no fractional seconds, no offset other than `Z`.
    fn now_iso8601(&self) -> String;
}

/// Clock backed by the operating system, via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// Clock that always returns the same instant. Test double.
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: String,
}

impl FixedClock {
    /// Creates a clock pinned to the given wire-format timestamp.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl Clock for FixedClock {
    fn now_iso8601(&self) -> String {
        self.timestamp.clone()
    }
}
