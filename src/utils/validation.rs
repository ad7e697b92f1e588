use crate::utils::error::{FileTransformError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FileTransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FileTransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FileTransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_no_line_breaks(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(FileTransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "out.txt").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "   ").is_err());
        assert!(validate_path("output", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("prompt.max_attempts", 3, 1).is_ok());
        assert!(validate_positive_number("prompt.max_attempts", 0, 1).is_err());
    }

    #[test]
    fn test_validate_no_line_breaks() {
        assert!(validate_no_line_breaks("transform.prefix", "MODIFIED: ").is_ok());
        assert!(validate_no_line_breaks("transform.prefix", "A\nB").is_err());
    }
}
