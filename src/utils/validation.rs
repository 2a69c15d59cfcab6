// file: src/utils/validation.rs
// description: input validation helpers
// reference: input validation patterns

use crate::error::{ComposeError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ComposeError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(ComposeError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_markdown_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") => Ok(()),
            _ => Err(ComposeError::Validation(format!(
                "File is not a markdown file: {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_directory_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("meta.yml");
        std::fs::write(&file, "Name: x").unwrap();
        assert!(Validator::validate_directory(&file).is_err());
    }

    #[test]
    fn test_validate_markdown_extension() {
        assert!(Validator::validate_markdown_extension(Path::new("prob-1.md")).is_ok());
        assert!(Validator::validate_markdown_extension(Path::new("prob-1.txt")).is_err());
        assert!(Validator::validate_markdown_extension(Path::new("prob-1")).is_err());
    }
}
