//! Corpus file loading.

use corpdesk_core::Result;
use std::path::Path;

/// Read a UTF-8 corpus file into memory as a single string.
///
/// File-not-found surfaces to the caller; an empty file is a valid
/// (empty) corpus, not an error.
pub fn load_corpus(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    tracing::debug!("Loaded corpus from {} ({} bytes)", path.display(), raw.len());
    Ok(raw)
}
