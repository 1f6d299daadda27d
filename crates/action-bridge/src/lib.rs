//! Per-invocation bridge between the action host and user handlers.
//!
//! The host hands this crate the raw input bytes of one invocation; the
//! bridge decodes them, runs the user handler, encodes the outcome, and
//! reports a single-line JSON envelope on both output surfaces.
//!
//! # Architecture
//!
//! ```text
//! host input bytes → codec → handler → codec → ResultChannel (log + fd 3)
//! ```
//!
//! # Design Principles
//!
//! - **Crash-proof**: a failing handler produces an error envelope, never a
//!   process-level fault; the host stays alive for the next invocation
//! - **Two conventions**: raw JSON values in/out, or schema-typed values
//!   via serde, converging on the same flow and error taxonomy
//! - **Dual surface**: every envelope is written to the human log stream
//!   and to the structured stream, byte-identical

mod channel;
mod codec;
mod envelope;
mod error;
mod runner;

pub use channel::{ResultChannel, STRUCTURED_OUTPUT_FD};
pub use codec::{decode, decode_typed, encode, encode_typed};
pub use envelope::Envelope;
pub use error::{BridgeError, BridgeResult, ChannelError, CodecError};
pub use runner::{run_generic, run_typed, run_typed_no_input};
