//! Writes one payload line to an output stream.

use std::io::{self, Write};

use crate::error::EmitError;
use crate::fd;
use crate::payload::StatusPayload;

/// Serialize `payload` and write it as one newline-terminated line.
///
/// The writer is flushed before returning so a closed or full stream is
/// reported here rather than when the handle is dropped.
pub fn emit<W: Write>(payload: &StatusPayload, mut writer: W) -> Result<(), EmitError> {
    let line = payload.to_line()?;
    log::debug!("Emitting {} bytes: {}", line.len() + 1, line);

    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// [`emit`] against standard output.
///
/// A stdout that was closed before startup is reported as `EBADF` instead of
/// silently writing into the `/dev/null` the runtime put in its place.
pub fn emit_stdout(payload: &StatusPayload) -> Result<(), EmitError> {
    fd::ensure_stdout_open()?;
    let stdout = io::stdout();
    emit(payload, stdout.lock())
}
