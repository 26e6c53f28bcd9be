//! Output staging for the rewritten manifest.
//!
//! Preview mode streams lines straight to the caller's writer. Apply mode
//! writes to a temp file in the manifest's own directory and renames it
//! over the original, so a partially written manifest is never observable.

use crate::error::Result;
use std::io::{BufWriter, IntoInnerError, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `lines` to `w`, one per line.
pub fn preview<W: Write>(mut w: W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(w, "{line}")?;
    }
    w.flush()?;
    Ok(())
}

/// Replaces the file at `path` with `lines`, all-or-nothing.
///
/// The staged copy lives next to the destination so the final rename stays
/// on one filesystem volume. Any failure before the rename leaves the
/// original untouched; the temp file is cleaned up on drop.
pub fn replace(path: &Path, lines: &[String]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    log::debug!("staging output to {}", tmp.path().display());

    let mut w = BufWriter::new(tmp);
    for line in lines {
        writeln!(w, "{line}")?;
    }
    let tmp = w.into_inner().map_err(IntoInnerError::into_error)?;
    tmp.persist(path)?;
    Ok(())
}
