//! Instructional text shown on the Home chapter
//!
//! The text is an opaque blob: it is read from disk and displayed verbatim.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{CompoundingError, Result};

/// Location of the bundled instructions relative to the crate root
const INSTRUCTIONS_FILE: &str = "content/instructions.md";

pub fn default_instructions_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(INSTRUCTIONS_FILE)
}

/// Read the instructions file as-is
pub fn load_instructions(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|source| CompoundingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded instructions from {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

pub fn load_default_instructions() -> Result<String> {
    load_instructions(&default_instructions_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_bundled_instructions() {
        let text = load_default_instructions().expect("Failed to load instructions");
        assert!(text.contains("compounding machine"));
    }

    #[test]
    fn test_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("instructions.md");
        let body = "# Title\n\n  indented *text*  \n\ttab\n";
        std::fs::write(&path, body).unwrap();

        assert_eq!(load_instructions(&path).unwrap(), body);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.md");
        match load_instructions(&path) {
            Err(CompoundingError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
