use std::io::Read;

use anyhow::{Context, Result};

/// Reads `reader` to end-of-stream. The text is returned exactly as read,
/// trailing newline included.
pub fn read_message<R: Read>(mut reader: R) -> Result<String> {
    let mut message = String::new();
    reader
        .read_to_string(&mut message)
        .context("failed to read message from stdin")?;

    Ok(message)
}
