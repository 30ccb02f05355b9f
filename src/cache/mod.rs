//! Cache Module
//!
//! Instrumented storage of scalar values: generated keys, per-operation call
//! counters, input/output history and replay.

mod decode;
mod instrumented;
mod recorder;
mod replay;
mod scalar;


// Re-export public types
pub use decode::{decode_int, decode_utf8, Decoded, Decoder};
pub use instrumented::{Cache, STORE_OPERATION};
pub use recorder::{inputs_key, outputs_key, CallRecorder};
pub use replay::{print_replay, replay, CallHistory, CallRecord};
pub use scalar::Scalar;
