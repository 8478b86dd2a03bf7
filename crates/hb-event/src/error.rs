//! Error types for the event codec.

use crate::serialize::MIN_CAPACITY;

/// Errors that can occur during event serialization.
///
/// Parsing has no error path: malformed input degrades to a partially
/// populated record instead of failing. Every serialization failure is
/// local and recoverable — retry with a larger capacity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The caller-declared capacity is below the minimum any event needs.
    #[error("serialize capacity {capacity} is below the {min} byte minimum", min = MIN_CAPACITY)]
    CapacityTooSmall {
        /// The capacity the caller declared.
        capacity: usize,
    },

    /// The fully rendered document would not fit in the declared capacity.
    /// Nothing is emitted; partial output is never acceptable on the wire.
    #[error("serialized event needs {required} bytes but capacity is {capacity}")]
    CapacityExceeded {
        /// Exact byte length the rendered document requires.
        required: usize,
        /// The capacity the caller declared.
        capacity: usize,
    },
}
