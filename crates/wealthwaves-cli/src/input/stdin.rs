use serde_json::Value;
use std::io::{self, Read};

/// Piped JSON on stdin, if any. An interactive terminal or an empty pipe
/// yields `None` so flags can be used instead.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| format!("stdin is not valid JSON: {e}").into())
}
