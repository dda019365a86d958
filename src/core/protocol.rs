//! Credential-helper line protocol.
//!
//! Git writes `key=value` lines terminated by a blank line (or end of stream)
//! and reads the same format back from `get`.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::core::domain::Credential;
use crate::error::{ProtocolError, Result};

/// Read a credential from the protocol stream.
///
/// Stops at the first blank line or end of stream. Lines are split on the
/// first `=`; keys this helper does not know are skipped. Values are kept
/// byte-for-byte apart from the line terminator (`\n` or `\r\n`).
///
/// # Errors
///
/// Returns `ProtocolError::MalformedLine` for a non-blank line without `=`,
/// or an I/O error if the stream cannot be read.
pub fn decode<R: BufRead>(mut reader: R) -> Result<Credential> {
    let mut credential = Credential::default();
    let mut buf = String::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            break;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(ProtocolError::MalformedLine { line: line_no })?;

        if !credential.set(key, value.to_string()) {
            trace!(key = %key, "ignoring unknown attribute");
        }
    }

    Ok(credential)
}

/// Write a credential in protocol form.
///
/// One line per populated field in stable order, then a blank line.
///
/// # Errors
///
/// Returns `ProtocolError::NewlineInValue` if a value would break the line
/// framing, or an I/O error if the stream cannot be written.
pub fn encode<W: Write>(credential: &Credential, mut writer: W) -> Result<()> {
    for (key, value) in credential.fields() {
        if value.contains(['\n', '\r']) {
            return Err(ProtocolError::NewlineInValue { key }.into());
        }
    }

    for (key, value) in credential.fields() {
        writeln!(writer, "{}={}", key, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
