//! Zip archive extraction and cleanup.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use super::{StarterError, StarterResult};

/// Extract a zip archive into `dest`, returning the number of entries
/// written.
///
/// Entries whose paths would escape `dest` are rejected. On any failure the
/// archive file is left on disk for inspection.
pub fn extract(archive_path: &Path, dest: &Path) -> StarterResult<usize> {
    let file = File::open(archive_path).map_err(|e| StarterError::Extraction(e.to_string()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| StarterError::Extraction(e.to_string()))?;

    let mut written = 0;
    for index in 0..archive.len() {
        let mut entry =
            archive.by_index(index).map_err(|e| StarterError::Extraction(e.to_string()))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(StarterError::Extraction(format!(
                "entry '{}' escapes the target directory",
                entry.name()
            )));
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| StarterError::Extraction(e.to_string()))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StarterError::Extraction(e.to_string()))?;
        }

        let mut out_file =
            File::create(&out_path).map_err(|e| StarterError::Extraction(e.to_string()))?;
        io::copy(&mut entry, &mut out_file).map_err(|e| StarterError::Extraction(e.to_string()))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                .map_err(|e| StarterError::Extraction(e.to_string()))?;
        }

        written += 1;
    }

    tracing::debug!(entries = written, dest = %dest.display(), "archive extracted");
    Ok(written)
}

/// Delete the archive after a successful extraction.
pub fn remove(archive_path: &Path) -> StarterResult<()> {
    fs::remove_file(archive_path).map_err(|source| StarterError::Cleanup {
        file: archive_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(name.trim_end_matches('/'), options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_writes_entries() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("demo.zip");
        write_zip(
            &archive,
            &[
                ("demo/pom.xml", "<project/>"),
                ("demo/src/", ""),
                ("demo/src/Main.java", "class Main {}"),
            ],
        );

        let written = extract(&archive, dir.path()).unwrap();
        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(dir.path().join("demo/pom.xml")).unwrap(), "<project/>");
        assert!(dir.path().join("demo/src/Main.java").exists());
    }

    #[test]
    fn test_extract_missing_archive_fails() {
        let dir = TempDir::new().unwrap();
        let err = extract(&dir.path().join("nope.zip"), dir.path()).unwrap_err();
        assert!(matches!(err, StarterError::Extraction(_)));
    }

    #[test]
    fn test_extract_garbage_keeps_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("demo.zip");
        fs::write(&archive, b"not a zip at all").unwrap();

        let err = extract(&archive, dir.path()).unwrap_err();
        assert!(matches!(err, StarterError::Extraction(_)));
        assert!(archive.exists());
    }

    #[test]
    fn test_remove_deletes_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("demo.zip");
        write_zip(&archive, &[("a.txt", "a")]);

        remove(&archive).unwrap();
        assert!(!archive.exists());
    }

    #[test]
    fn test_remove_missing_is_cleanup_error() {
        let dir = TempDir::new().unwrap();
        let err = remove(&dir.path().join("gone.zip")).unwrap_err();
        assert!(matches!(err, StarterError::Cleanup { .. }));
    }
}
