//! Writing and checking the generated header.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{EncodeError, Result};

/// Replace `path` with `contents`.
///
/// Writes a sibling temp file and renames it into place, so the destination
/// holds either the previous header or the complete new one.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| EncodeError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = temp_path(path);
    let written = (|| -> std::io::Result<()> {
        let mut f = fs::File::create(&tmp_path)?;
        f.write_all(contents.as_bytes())?;
        f.sync_all()
    })();
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }

    #[cfg(windows)]
    {
        if path.exists() {
            // Windows rename fails if destination exists.
            fs::remove_file(path).map_err(write_err)?;
        }
    }

    fs::rename(&tmp_path, path).map_err(write_err)?;
    tracing::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// True if `path` already holds exactly `contents`. A missing file is out of sync.
pub fn check_output(path: &Path, contents: &str) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(EncodeError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atis").join("audio.h");

        write_output(&path, "#define X\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#define X\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio.h");

        write_output(&path, "first version, much longer than the second").unwrap();
        write_output(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_check_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio.h");

        assert!(!check_output(&path, "abc").unwrap());
        fs::write(&path, "abc").unwrap();
        assert!(check_output(&path, "abc").unwrap());
        assert!(!check_output(&path, "abd").unwrap());
    }
}
