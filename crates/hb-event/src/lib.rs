//! Event record and JSON wire codec for the Harmony Bridge protocol.
//!
//! Implements the cross-language event contract: a flat record of bounded
//! string and numeric fields, a serializer that renders it as a single-line
//! minified JSON object in a fixed field order, and a deliberately
//! restricted flat-scan parser that recovers a record from JSON text while
//! ignoring any structure it does not understand.
//!
//! The codec performs no I/O. Producers fill an [`EventRecord`] and call
//! [`serialize_event`]; the resulting line travels over whatever transport
//! the caller owns (file, socket, queue). Consumers hand received text to
//! [`parse_event`] and validate required fields themselves.
//!
//! # Wire format
//!
//! One JSON object per event, newline-delimited when streamed. Emission
//! order is fixed for interop:
//!
//! `type, timestamp, system_id, severity?, status?, confidence?,
//! baseline_confidence?, action_allowed, recommended_action?, run_id?,
//! action_type?, action_id?`
//!
//! Optional fields (`?`) are omitted when unset. Numbers carry exactly four
//! decimal digits. Type tags and status/severity vocabulary are defined in
//! `hb-types`.
//!
//! # Parsing model
//!
//! The parser is NOT a general JSON parser. It scans for flat
//! `"key":"value"` pairs and the bare `true`/`false` literal of
//! `action_allowed`, skipping everything else byte-by-byte. Nested objects
//! and arrays are not depth-tracked, so a payload containing quoted strings
//! will derail scanning of whatever follows it. This tolerance behavior is
//! part of the wire contract; downstream consumers depend on it.
//!
//! # Usage
//!
//! ```rust
//! use hb_event::{parse_event, serialize_event, EventRecord};
//! use hb_types::DriftStatus;
//!
//! let mut ev = EventRecord::new();
//! ev.set_system_id("mast-cam-2");
//! ev.set_status(DriftStatus::Fail.as_str());
//! ev.set_confidence(0.2);
//! ev.set_action_allowed(true);
//!
//! let line = serialize_event(&ev, 4096).expect("event should fit");
//! let restored = parse_event(&line);
//! assert_eq!(restored.status(), "FAIL");
//! ```

mod clock;
mod error;
mod escape;
mod parse;
mod record;
mod serialize;

pub use clock::{Clock, FixedClock, SystemClock, EPOCH_TIMESTAMP};
pub use error::CodecError;
pub use escape::{escape_json, MAX_ESCAPED_LEN};
pub use parse::{parse_event, parse_event_into};
pub use record::{EventRecord, MAX_FIELD_LEN, MAX_PAYLOAD_LEN, UNSET_CONFIDENCE};
pub use serialize::{serialize_event, MIN_CAPACITY};
