//! The per-invocation run loop: decode → invoke → encode → report.
//!
//! Each run function drives exactly one invocation through the flow and
//! emits exactly one envelope on its terminal transition. Failures stop at
//! the stage that produced them; nothing escapes to the caller, so the host
//! process survives to serve the next invocation.

use crate::channel::ResultChannel;
use crate::codec;
use crate::envelope::Envelope;
use crate::error::BridgeError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::io::Write;
use tracing::{debug, error};

/// Run a generic-convention handler: raw JSON value in, raw JSON value out.
///
/// `input` is the invocation's raw input document, or `None` when the host
/// received no input at all.
pub async fn run_generic<H, Fut, L, S>(
    handler: H,
    input: Option<&[u8]>,
    channel: &mut ResultChannel<L, S>,
) where
    H: FnOnce(serde_json::Value) -> Fut,
    Fut: Future<Output = anyhow::Result<serde_json::Value>>,
    L: Write,
    S: Write,
{
    let Some(bytes) = input else {
        report_failure(channel, BridgeError::InputMissing);
        return;
    };

    let input = match codec::decode(bytes) {
        Ok(value) => value,
        Err(err) => {
            report_failure(channel, err.into());
            return;
        }
    };

    let result = match handler(input).await {
        Ok(value) => value,
        Err(err) => {
            report_failure(channel, BridgeError::Handler(err));
            return;
        }
    };

    match codec::encode(&result) {
        Ok(encoded) => report_result(channel, encoded),
        Err(err) => report_failure(channel, err.into()),
    }
}

/// Run a typed-convention handler: schema-decoded value in, serialized
/// value out.
///
/// A handler returning `Ok(None)` has produced neither a response nor an
/// error, which is itself a failure.
pub async fn run_typed<In, Out, H, Fut, L, S>(
    handler: H,
    input: Option<&[u8]>,
    channel: &mut ResultChannel<L, S>,
) where
    In: DeserializeOwned,
    Out: Serialize,
    H: FnOnce(In) -> Fut,
    Fut: Future<Output = anyhow::Result<Option<Out>>>,
    L: Write,
    S: Write,
{
    let Some(bytes) = input else {
        report_failure(channel, BridgeError::InputMissing);
        return;
    };

    let input: In = match codec::decode_typed(bytes) {
        Ok(value) => value,
        Err(err) => {
            report_failure(channel, err.into());
            return;
        }
    };

    run_typed_stage(handler(input), channel).await;
}

/// Run a typed-convention handler that takes no input; decoding is skipped
/// entirely, so absent input bytes are not an error.
pub async fn run_typed_no_input<Out, H, Fut, L, S>(handler: H, channel: &mut ResultChannel<L, S>)
where
    Out: Serialize,
    H: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<Out>>>,
    L: Write,
    S: Write,
{
    run_typed_stage(handler(), channel).await;
}

/// Invoking and Encoding stages shared by both typed entry points.
async fn run_typed_stage<Out, Fut, L, S>(invocation: Fut, channel: &mut ResultChannel<L, S>)
where
    Out: Serialize,
    Fut: Future<Output = anyhow::Result<Option<Out>>>,
    L: Write,
    S: Write,
{
    let output = match invocation.await {
        Ok(Some(output)) => output,
        Ok(None) => {
            report_failure(channel, BridgeError::MissingResult);
            return;
        }
        Err(err) => {
            report_failure(channel, BridgeError::Handler(err));
            return;
        }
    };

    match codec::encode_typed(&output) {
        Ok(encoded) => report_result(channel, encoded),
        Err(err) => report_failure(channel, err.into()),
    }
}

fn report_result<L: Write, S: Write>(channel: &mut ResultChannel<L, S>, encoded: String) {
    debug!(bytes = encoded.len(), "invocation succeeded");
    if let Err(err) = channel.emit(&Envelope::Result(encoded)) {
        error!(error = %err, "failed to report invocation result");
    }
}

fn report_failure<L: Write, S: Write>(channel: &mut ResultChannel<L, S>, failure: BridgeError) {
    error!(error = %failure, "invocation failed");
    if let Err(err) = channel.emit(&Envelope::Error(failure.to_string())) {
        error!(error = %err, "failed to report invocation failure");
    }
}
