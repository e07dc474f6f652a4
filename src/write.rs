use std::{fs, io::Write, path::Path};
use tracing::debug;

use crate::{
    document::KeyedDocument,
    error::{ConvertError, Result},
};

/// Replace the contents of `path` with the rendered document.
///
/// The JSON is rendered in memory first, then written into `path` in place:
/// an existing file is truncated and keeps its permissions, and a symlink is
/// followed to its target.
pub fn write_document<P: AsRef<Path>>(path: P, document: &KeyedDocument) -> Result<u64> {
    let path = path.as_ref();
    let bytes = document.to_json_bytes()?;

    let mut f = fs::File::create(path).map_err(|e| ConvertError::file_access(path, e))?;
    f.write_all(&bytes)
        .and_then(|_| f.flush())
        .map_err(|e| ConvertError::file_access(path, e))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Row;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample() -> KeyedDocument {
        let mut doc = KeyedDocument::new();
        let row: Row = [("id", "1"), ("name", "Alice")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        doc.insert("1".into(), row);
        doc
    }

    #[test]
    fn test_creates_and_overwrites() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.json");
        fs::write(&out, "stale content that is much longer than the new document").unwrap();

        let n = write_document(&out, &sample()).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.len() as u64, n);
        assert!(text.starts_with("{\n    \"1\": {"));
        assert!(!text.contains("stale"));

        // nothing left behind next to the output
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_parent_is_file_access_error() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.json");

        match write_document(&out, &sample()) {
            Err(ConvertError::FileAccess { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_destination_updates_target() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("real.json");
        let link = dir.path().join("link.json");
        fs::write(&target, "old").unwrap();
        symlink(&target, &link).unwrap();

        write_document(&link, &sample()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let text = fs::read_to_string(&target).unwrap();
        assert!(text.starts_with("{\n    \"1\": {"));
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_permissions_are_kept() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let out = dir.path().join("out.json");
        fs::write(&out, "old").unwrap();
        fs::set_permissions(&out, fs::Permissions::from_mode(0o640)).unwrap();

        write_document(&out, &sample()).unwrap();

        let mode = fs::metadata(&out).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }
}
