//! Shared utilities for commands

use std::path::{Path, PathBuf};

/// Strip Windows extended-length path prefix (\\?\)
///
/// On Windows, `canonicalize()` returns paths like `\\?\C:\path`. Cursor
/// paths written to the registry in that form display poorly and are not
/// what the cursor scheme expects, so the prefix is stripped before use.
pub fn strip_windows_prefix(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix(r"\\?\") {
        PathBuf::from(stripped)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_windows_prefix() {
        let result = strip_windows_prefix(Path::new(r"\\?\C:\cursors\MySet"));
        assert_eq!(result, PathBuf::from(r"C:\cursors\MySet"));
    }

    #[test]
    fn test_strip_windows_prefix_no_prefix() {
        let result = strip_windows_prefix(Path::new(r"C:\cursors\MySet"));
        assert_eq!(result, PathBuf::from(r"C:\cursors\MySet"));
    }

    #[test]
    fn test_strip_windows_prefix_unix() {
        let result = strip_windows_prefix(Path::new("/home/user/cursors"));
        assert_eq!(result, PathBuf::from("/home/user/cursors"));
    }
}
