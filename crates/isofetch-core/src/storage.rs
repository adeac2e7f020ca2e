//! Category directories and sprite file writes.
//!
//! Files are written to a `.part` sibling and renamed into place, so an
//! interrupted write never replaces a previously saved sprite with a stub.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Creates `<root>/<category>` if missing and returns it. Idempotent.
pub fn ensure_category_dir(root: &Path, category: &str) -> Result<PathBuf> {
    let dir = root.join(category);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Writes `bytes` to `<dir>/<filename>`, replacing any existing file.
/// On failure the `.part` file is removed before the error is returned.
pub fn write_asset(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let final_path = dir.join(filename);
    let tmp = temp_path(&final_path);
    if let Err(e) = write_and_rename(&tmp, &final_path, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(final_path)
}

fn write_and_rename(tmp: &Path, final_path: &Path, bytes: &[u8]) -> Result<()> {
    {
        let mut f = fs::File::create(tmp).with_context(|| format!("create {}", tmp.display()))?;
        f.write_all(bytes)
            .with_context(|| format!("write {}", tmp.display()))?;
        f.sync_all().with_context(|| format!("sync {}", tmp.display()))?;
    }
    fs::rename(tmp, final_path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), final_path.display()))
}
