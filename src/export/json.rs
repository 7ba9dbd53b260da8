//! JSON output: pretty-printed document, written all-or-nothing.

use crate::document::SceneDocument;
use crate::error::Result;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Serialize the document and write it to `path`.
///
/// The text is written to a sibling temp file and renamed into place, so a
/// serialization or I/O failure never leaves a truncated file at the
/// destination looking like a valid export.
pub fn write_document<P: AsRef<Path>>(document: &SceneDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    // 2-space indentation, matching what the renderer's scene files use.
    let text = serde_json::to_string_pretty(document)?;

    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, text)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> std::path::PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    std::path::PathBuf::from(name)
}
