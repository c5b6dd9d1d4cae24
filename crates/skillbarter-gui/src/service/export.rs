//! Static HTML export.
//!
//! Writes one fixed document to [`EXPORT_FILE_NAME`] inside a directory,
//! replacing any previous export.

use std::path::{Path, PathBuf};

use crate::constants::EXPORT_FILE_NAME;
use crate::error::GuiError;

/// The exported document. Identical on every export.
pub const EXPORT_HTML: &str = concat!(
    "<!doctype html><html><head><meta charset=\"utf-8\">",
    "<title>SkillBarter — Export</title></head><body>",
    "<h1>SkillBarter — Exported Page</h1>",
    "<p>This is a simple HTML export generated by the desktop app.</p>",
    "<ul><li>AI Matchmaking</li><li>Points Engine</li><li>Scheduler</li></ul>",
    "</body></html>",
);

/// Write the export into `dir`, truncating an existing file.
///
/// Returns the path of the written file.
pub fn write_export(dir: &Path) -> Result<PathBuf, GuiError> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, EXPORT_HTML).map_err(|e| GuiError::export(&path, &e))?;
    tracing::info!("Exported page to {}", path.display());
    Ok(path)
}
