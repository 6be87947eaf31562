use crate::utils::error::{Result, SentimentError};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> SentimentError {
    SentimentError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The classifier endpoint must be an absolute http(s) URL.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_at_least<T: PartialOrd + Display>(field_name: &str, value: T, min: T) -> Result<()> {
    if value < min {
        return Err(invalid(field_name, &value, format!("Value must be at least {}", min)));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display>(field_name: &str, value: T, min: T, max: T) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("API.url", "https://api-inference.huggingface.co/models/x").is_ok());
        assert!(validate_url("API.url", "http://localhost:8080").is_ok());
        assert!(validate_url("API.url", "").is_err());
        assert!(validate_url("API.url", "invalid-url").is_err());
        assert!(validate_url("API.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("Output.directory", "results").is_ok());
        assert!(validate_path("Output.directory", "  ").is_err());
        assert!(validate_path("Output.directory", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_at_least() {
        assert!(validate_at_least("InputValidation.min_words", 3, 1).is_ok());
        assert!(validate_at_least("API.timeout_seconds", 0u64, 1).is_err());

        let err = validate_at_least("InputValidation.max_words", 2usize, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '2' for InputValidation.max_words: Value must be at least 3"
        );
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("InputValidation.meaningful_ratio", 0.6, 0.0, 1.0).is_ok());
        assert!(validate_range("InputValidation.meaningful_ratio", 1.5, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("API.key_env_variable", "HF_API_KEY").is_ok());
        assert!(validate_non_empty_string("API.key_env_variable", "").is_err());
    }
}
