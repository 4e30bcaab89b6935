// src/hasher.rs
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const BUF_SIZE: usize = 65536;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("Error: File not found.")]
    NotFound,
    #[error("Error: Permission denied.")]
    PermissionDenied,
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl From<std::io::Error> for HashError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => HashError::NotFound,
            std::io::ErrorKind::PermissionDenied => HashError::PermissionDenied,
            _ => HashError::Other(err.to_string()),
        }
    }
}

/// Computes the SHA-256 digest of the file at `path`, reading in fixed
/// 64 KiB chunks so large files are never held in memory. Returns the
/// digest as 64 lowercase hex characters.
pub fn hash_file(path: &Path) -> Result<String, HashError> {
    match std::fs::metadata(path) {
        Ok(meta) if !meta.is_file() => return Err(HashError::NotFound),
        Ok(_) => {}
        Err(err) => return Err(err.into()),
    }

    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC_SHA256: &str =
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_empty_file_known_answer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        File::create(&path).unwrap();

        assert_eq!(hash_file(&path).unwrap(), EMPTY_SHA256);
    }

    #[test]
    fn test_known_answer_abc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        File::create(&path).unwrap().write_all(b"abc").unwrap();

        assert_eq!(hash_file(&path).unwrap(), ABC_SHA256);
    }

    #[test]
    fn test_deterministic_and_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        File::create(&path).unwrap().write_all(b"some content").unwrap();

        let first = hash_file(&path).unwrap();
        let second = hash_file(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_large_file_spans_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let data = vec![0xabu8; BUF_SIZE * 2 + 17];
        File::create(&path).unwrap().write_all(&data).unwrap();

        let mut hasher = Sha256::new();
        hasher.update(&data);
        let expected = hex::encode(hasher.finalize());

        assert_eq!(hash_file(&path).unwrap(), expected);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        assert_eq!(hash_file(&path), Err(HashError::NotFound));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(hash_file(dir.path()), Err(HashError::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret");
        File::create(&path).unwrap().write_all(b"hidden").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root bypasses permission checks, so only assert when the open fails.
        if let Err(err) = hash_file(&path) {
            assert_eq!(err, HashError::PermissionDenied);
        }
    }
}
