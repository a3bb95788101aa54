//! Cursor file discovery
//!
//! Lists candidate cursor files directly inside a folder. Subfolders and
//! files with other extensions are ignored. Results are sorted by file name
//! so a folder always matches the same way regardless of how the OS happens
//! to enumerate directory entries.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Recognized cursor file extensions, compared case-insensitively.
pub const CURSOR_EXTENSIONS: [&str; 2] = ["ani", "cur"];

/// The source folder could not be enumerated (missing or unreadable).
#[derive(Debug, Error)]
#[error("failed to read cursor folder {}", path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A cursor file found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name including extension.
    pub file_name: String,
    /// File name without extension, lower-cased for comparison.
    pub basename: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// List cursor files directly inside `folder`, sorted by file name.
pub fn scan(folder: &Path) -> Result<Vec<CandidateFile>, ScanError> {
    let entries = fs::read_dir(folder).map_err(|source| ScanError {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !CURSOR_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        files.push(CandidateFile {
            file_name,
            basename,
            path,
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_scan_keeps_only_cursor_extensions() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Normal.cur");
        touch(dir.path(), "Busy.ani");
        touch(dir.path(), "unrelated.txt");
        touch(dir.path(), "readme");

        let files = scan(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["Busy.ani", "Normal.cur"]);
    }

    #[test]
    fn test_scan_extension_is_case_insensitive() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Normal.CUR");
        touch(dir.path(), "Busy.Ani");

        let files = scan(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_scan_ignores_subfolders() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.cur")).unwrap();
        touch(dir.path(), "Normal.cur");

        let files = scan(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "Normal.cur");
    }

    #[test]
    fn test_scan_order_is_lexicographic() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "c.cur");
        touch(dir.path(), "a.cur");
        touch(dir.path(), "b.ani");

        let files = scan(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.cur", "b.ani", "c.cur"]);
    }

    #[test]
    fn test_basename_strips_extension_and_lowercases() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "My_Cursor.CUR");

        let files = scan(dir.path()).unwrap();
        assert_eq!(files[0].basename, "my_cursor");
    }

    #[test]
    fn test_scan_missing_folder_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = scan(&missing).unwrap_err();
        assert_eq!(err.path, missing);
    }
}
