//! Dual-surface output channel for invocation envelopes.
//!
//! Every envelope goes to two places: the human-readable log stream that
//! operators tail, and a structured stream the supervising process parses.
//! Both must observe every line, byte-identical, or log-scraping and
//! structured consumers diverge.

use crate::envelope::Envelope;
use crate::error::ChannelError;
use std::io::Write;
use tracing::trace;

/// File descriptor the host opens for structured output before starting the
/// runtime.
pub const STRUCTURED_OUTPUT_FD: i32 = 3;

/// Writes each envelope to the log stream and the structured stream.
///
/// Generic over any pair of [`Write`] sinks so tests can capture both
/// surfaces in memory; the real surfaces are bound by [`ResultChannel::host`].
/// No buffering beyond one line: both sinks are flushed before `emit`
/// returns.
#[derive(Debug)]
pub struct ResultChannel<L: Write, S: Write> {
    log: L,
    structured: S,
}

impl<L: Write, S: Write> ResultChannel<L, S> {
    /// Create a channel over an arbitrary pair of sinks.
    pub fn new(log: L, structured: S) -> Self {
        Self { log, structured }
    }

    /// Write the envelope's line, newline-terminated, to both surfaces.
    ///
    /// The log stream is written and flushed first, then the structured
    /// stream; a failure on either surface is reported but the line has
    /// already reached any surface written before the failure.
    pub fn emit(&mut self, envelope: &Envelope) -> Result<(), ChannelError> {
        let line = envelope.to_line();
        trace!(bytes = line.len(), "emitting envelope");

        self.log.write_all(line.as_bytes()).map_err(ChannelError::Log)?;
        self.log.write_all(b"\n").map_err(ChannelError::Log)?;
        self.log.flush().map_err(ChannelError::Log)?;

        self.structured
            .write_all(line.as_bytes())
            .map_err(ChannelError::Structured)?;
        self.structured
            .write_all(b"\n")
            .map_err(ChannelError::Structured)?;
        self.structured.flush().map_err(ChannelError::Structured)?;

        Ok(())
    }
}

#[cfg(unix)]
impl ResultChannel<std::io::Stdout, std::fs::File> {
    /// Bind the channel to the surfaces the host supplies: stdout for the
    /// log stream and file descriptor 3 for structured output.
    ///
    /// The host must have opened fd 3 for writing before starting the
    /// runtime, and must not hand it to anything else; the returned channel
    /// owns the descriptor for the life of the process.
    pub fn host() -> Self {
        use std::os::unix::io::FromRawFd;

        let structured = unsafe { std::fs::File::from_raw_fd(STRUCTURED_OUTPUT_FD) };
        Self::new(std::io::stdout(), structured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_writes_identical_lines_to_both_surfaces() {
        let mut log = Vec::new();
        let mut structured = Vec::new();

        let mut channel = ResultChannel::new(&mut log, &mut structured);
        channel
            .emit(&Envelope::Error("boom".to_string()))
            .unwrap();
        drop(channel);

        assert_eq!(log, b"{\"error\":\"boom\"}\n");
        assert_eq!(structured, log);
    }

    #[test]
    fn emit_terminates_every_line_with_newline() {
        let mut log = Vec::new();
        let mut structured = Vec::new();

        let mut channel = ResultChannel::new(&mut log, &mut structured);
        channel
            .emit(&Envelope::Result(r#"{"n":1}"#.to_string()))
            .unwrap();
        channel
            .emit(&Envelope::Info {
                title: "status".to_string(),
                message: "done".to_string(),
            })
            .unwrap();
        drop(channel);

        let text = String::from_utf8(structured).unwrap();
        assert_eq!(text, "{\"n\":1}\n{\"status\":\"done\"}\n");
    }

    #[test]
    fn log_failure_is_reported_as_log_side() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut structured = Vec::new();
        let mut channel = ResultChannel::new(Broken, &mut structured);
        let err = channel.emit(&Envelope::Error("x".to_string())).unwrap_err();
        assert!(matches!(err, ChannelError::Log(_)));
    }
}
