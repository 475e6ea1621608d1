//! Input validation helpers.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Supplied fasta file cannot be found: {}", .0.display())]
    InputNotFound(PathBuf),
}

/// Check that `path` resolves to a regular file.
///
/// # Examples
///
/// ```
/// use ref_annotator::utils::validation::validate_input_path;
/// use std::path::Path;
///
/// assert!(validate_input_path(Path::new("/nonexistent/genome.fa")).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InputNotFound` if the path does not exist or is
/// not a regular file (directories are rejected).
pub fn validate_input_path(path: &Path) -> Result<(), ValidationError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ValidationError::InputNotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_existing_file() {
        let temp = NamedTempFile::with_suffix(".fa").unwrap();
        assert_eq!(validate_input_path(temp.path()), Ok(()));
    }

    #[test]
    fn test_missing_file() {
        let err = validate_input_path(Path::new("/nonexistent/genome.fa")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Supplied fasta file cannot be found: /nonexistent/genome.fa"
        );
    }

    #[test]
    fn test_directory_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(validate_input_path(dir.path()).is_err());
    }
}
