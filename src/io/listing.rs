use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Make sure `path` exists as a directory, creating missing ancestors.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        debug!("Creating output directory: {:?}", path);
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Entries of `directory` whose file name ends with one of `extensions`.
///
/// The suffix match is exact and case-sensitive: `.PNG` does not match `.png`.
/// Entries are not checked for being regular files, so a matching
/// subdirectory is returned and later fails to decode. Results are sorted
/// by file name.
pub fn list_candidate_files(directory: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            files.push(entry.path());
        } else {
            debug!("Skipping non-matching entry: {}", name);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    fn default_exts() -> Vec<String> {
        vec![".png".to_string(), ".jpg".to_string()]
    }

    #[test]
    fn filters_by_case_sensitive_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "c.PNG", "d.Jpg", "e.gif", "notes.txt", "f.jpeg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let files = list_candidate_files(dir.path(), &default_exts()).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn matching_subdirectory_is_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();
        fs::create_dir(dir.path().join("plain")).unwrap();

        let files = list_candidate_files(dir.path(), &default_exts()).unwrap();
        assert_eq!(names(&files), vec!["folder.png"]);
    }

    #[test]
    fn custom_extensions_replace_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::write(dir.path().join("b.webp"), b"x").unwrap();

        let files = list_candidate_files(dir.path(), &[".webp".to_string()]).unwrap();
        assert_eq!(names(&files), vec!["b.webp"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_candidate_files(&dir.path().join("absent"), &default_exts()).is_err());
    }

    #[test]
    fn creates_nested_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        ensure_output_directory(&nested).unwrap();
        assert!(nested.is_dir());
        // existing directory is fine too
        ensure_output_directory(&nested).unwrap();
    }

    #[test]
    fn output_directory_over_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();

        assert!(ensure_output_directory(&file).is_err());
    }
}
