use crate::utils::error::{SetupError, SetupResult};
use url::Url;

pub trait Validate {
    fn validate(&self) -> SetupResult<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> SetupResult<()> {
    if url_str.is_empty() {
        return Err(SetupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SetupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SetupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> SetupResult<()> {
    if path.is_empty() {
        return Err(SetupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SetupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A bare file or directory name: no separators, no parent references.
pub fn validate_plain_name(field_name: &str, name: &str) -> SetupResult<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(SetupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a single path component".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> SetupResult<()> {
    if value.trim().is_empty() {
        return Err(SetupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("template.source", "https://example.com").is_ok());
        assert!(validate_url("template.source", "http://localhost:8100/").is_ok());
        assert!(validate_url("template.source", "").is_err());
        assert!(validate_url("template.source", "invalid-url").is_err());
        assert!(validate_url("template.source", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.internal_root", "./data").is_ok());
        assert!(validate_path("storage.internal_root", "").is_err());
        assert!(validate_path("storage.internal_root", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_plain_name() {
        assert!(validate_plain_name("storage.file_name", "CONFIG.xml").is_ok());
        assert!(validate_plain_name("storage.file_name", "  ").is_err());
        assert!(validate_plain_name("storage.directory", "a/b").is_err());
        assert!(validate_plain_name("storage.directory", "..").is_err());
    }
}
