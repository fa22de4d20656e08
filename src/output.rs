//! Writing results to disk.

use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::preset::ProjectType;

/// Default name for a combined document:
/// `<prefix>_<project>_<YYYY-MM-DD>.txt`, prefix omitted when the project
/// type has none.
pub fn default_output_name(project_type: ProjectType, project_name: &str, date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d");
    match project_type.filename_prefix() {
        Some(prefix) => format!("{prefix}_{project_name}_{date}.txt"),
        None => format!("{project_name}_{date}.txt"),
    }
}

/// Today's date in local time, for [`default_output_name`].
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Write `contents` to `path` all-or-nothing.
///
/// Data goes to a temporary file in the destination directory which is then
/// renamed over `path`; on failure `path` is left as it was.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
