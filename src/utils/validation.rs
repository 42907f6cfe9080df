use crate::utils::error::{Result, VizError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(VizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.to_string_lossy().contains('\0') {
        return Err(VizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &Path, expected: &str) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(expected) => Ok(()),
        Some(ext) => Err(VizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Expected: {}",
                ext, expected
            ),
        }),
        None => Err(VizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_path", &PathBuf::from("Data/ert.csv")).is_ok());
        assert!(validate_path("data_path", &PathBuf::from("")).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("data_path", &PathBuf::from("Data/ert.csv"), "csv").is_ok());
        assert!(validate_file_extension("data_path", &PathBuf::from("Data/ERT.CSV"), "csv").is_ok());
        assert!(validate_file_extension("data_path", &PathBuf::from("Data/ert.txt"), "csv").is_err());
        assert!(validate_file_extension("output_path", &PathBuf::from("chart"), "png").is_err());
    }
}
