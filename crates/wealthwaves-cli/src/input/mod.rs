pub mod file;
pub mod policy;
pub mod stdin;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Typed input from `--input <file>` or piped stdin, whichever is present.
/// `None` means the caller should build the request from flags.
pub fn load<T: DeserializeOwned>(path: Option<&str>) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        debug!(path, "reading input file");
        return Ok(Some(file::read_json(path)?));
    }
    if let Some(data) = stdin::read_stdin()? {
        debug!("reading input from stdin");
        return Ok(Some(serde_json::from_value(data)?));
    }
    debug!("building input from flags");
    Ok(None)
}
