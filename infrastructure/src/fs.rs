//! Small filesystem helpers shared by the stores.

use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `path` all-or-nothing.
///
/// The bytes land in a sibling temp file first and are renamed over the
/// target, so a crash mid-write leaves the previous file intact. Parent
/// directories are created as needed.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_atomic(&path, "one").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");

        write_atomic(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");

        // No temp file left behind
        assert!(!path.with_extension("tmp").exists());
    }
}
