use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{map_read_err, map_write_err, ChangeResult};

/// Mode given to files created by a write (owner rw, group/other r)
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Read the whole file into memory as raw bytes
pub fn read_file(path: impl AsRef<Path>) -> ChangeResult<Vec<u8>> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let content = fs::read(path).map_err(|e| {
        warn!("Failed to read file {}: {}", path.display(), e);
        map_read_err(path)(e)
    })?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Overwrite the file with `content`, creating it with `mode` if it is missing.
///
/// The file is truncated before writing. A failure part-way leaves whatever
/// was written so far.
pub fn write_file(path: impl AsRef<Path>, content: &[u8], mode: u32) -> ChangeResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    set_create_mode(&mut options, mode);

    let result = options
        .open(path)
        .and_then(|mut file| file.write_all(content).and_then(|_| file.flush()));

    if let Err(e) = result {
        warn!("Failed to write file {}: {}", path.display(), e);
        return Err(map_write_err(path)(e));
    }

    debug!("File written successfully: {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn set_create_mode(options: &mut OpenOptions, mode: u32) {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(mode);
}

#[cfg(not(unix))]
fn set_create_mode(_options: &mut OpenOptions, _mode: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChangeError;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_read_file_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'h', b'i', 0xff, b'\n']).unwrap();
        file.flush().unwrap();

        let content = read_file(file.path()).unwrap();
        assert_eq!(content, vec![b'h', b'i', 0xff, b'\n']);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, ChangeError::Read { .. }));
        assert!(err.to_string().starts_with("Error reading file: "));
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = tempdir().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert!(matches!(err, ChangeError::Read { .. }));
    }

    #[test]
    fn test_write_truncates_existing_content() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a much longer original body").unwrap();
        file.flush().unwrap();

        write_file(file.path(), b"short", DEFAULT_FILE_MODE).unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), b"short");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("file.txt");

        let err = write_file(&path, b"data", DEFAULT_FILE_MODE).unwrap_err();
        assert!(matches!(err, ChangeError::Write { .. }));
        assert!(err.to_string().starts_with("Error writing file: "));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_creates_with_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("created.txt");

        write_file(&path, b"data", 0o600).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_default_mode_on_created_file() {
        use crate::config::ChangeConfig;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("created.txt");

        write_file(&path, b"data", ChangeConfig::default().file_mode).unwrap();

        // The umask may clear bits but never adds any beyond 0644
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !0o644, 0);
        assert_eq!(mode & 0o600, 0o600);
    }
}
