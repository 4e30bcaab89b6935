// src/workflow.rs
use crate::hasher::{hash_file, HashError};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Match,
    Mismatch,
    InvalidInput(String),
}

/// Verifies a user-supplied hash against the file at `path`. Input is
/// validated before the hasher runs: a blank expected hash or a path that is
/// not an existing regular file never reaches the filesystem read. The
/// comparison is case-insensitive.
pub fn verify(expected: &str, path: &str) -> Result<VerificationOutcome, HashError> {
    let expected = expected.trim();
    let path = path.trim();

    if expected.is_empty() {
        return Ok(VerificationOutcome::InvalidInput(
            "empty expected hash".to_string(),
        ));
    }
    if path.is_empty() || !Path::new(path).is_file() {
        return Ok(VerificationOutcome::InvalidInput(
            "invalid file path".to_string(),
        ));
    }

    let digest = hash_file(Path::new(path))?;
    if expected.eq_ignore_ascii_case(&digest) {
        Ok(VerificationOutcome::Match)
    } else {
        Ok(VerificationOutcome::Mismatch)
    }
}

/// Computes the digest for the generate mode. Path validation mirrors
/// verify: a blank or non-file path is rejected before hashing.
pub fn generate(path: &str) -> Result<String, HashError> {
    let path = path.trim();
    if path.is_empty() || !Path::new(path).is_file() {
        return Err(HashError::NotFound);
    }
    hash_file(Path::new(path))
}

/// Input fields and displayed result for one verify/generate screen.
#[derive(Debug, Default, Clone)]
pub struct HashForm {
    pub expected: String,
    pub path: String,
    pub output: String,
    pub status: String,
}

impl HashForm {
    pub fn run_verify(&mut self) {
        tracing::debug!(path = %self.path, "verifying checksum");
        self.status = match verify(&self.expected, &self.path) {
            Ok(VerificationOutcome::Match) => "Hashes match, file is legit.".to_string(),
            Ok(VerificationOutcome::Mismatch) => "Hashes are different, beware!".to_string(),
            Ok(VerificationOutcome::InvalidInput(reason)) => match reason.as_str() {
                "empty expected hash" => "Error: Expected hash cannot be empty.".to_string(),
                _ => "Error: Please enter a valid file path.".to_string(),
            },
            Err(err) => err.to_string(),
        };
    }

    pub fn run_generate(&mut self) {
        tracing::debug!(path = %self.path, "generating hash");
        match generate(&self.path) {
            Ok(digest) => {
                self.output = digest;
                self.status = "Hash generated successfully.".to_string();
            }
            Err(HashError::NotFound) if !Path::new(self.path.trim()).is_file() => {
                self.output.clear();
                self.status = "Error: Please enter a valid file path.".to_string();
            }
            Err(err) => {
                self.output.clear();
                self.status = err.to_string();
            }
        }
    }

    /// Resets every input field and the displayed result.
    pub fn clear(&mut self) {
        self.expected.clear();
        self.path.clear();
        self.output.clear();
        self.status.clear();
    }
}
