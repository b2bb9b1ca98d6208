use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PortfolioError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Form input check: blank or whitespace-only values are rejected.
pub fn validate_required_input(field_name: &str, label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::validation(
            field_name,
            &format!("{} is required", label),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err(PortfolioError::validation(
            field_name,
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("remote.backend_url", "https://example.com").is_ok());
        assert!(validate_url("remote.backend_url", "http://localhost:8001").is_ok());
        assert!(validate_url("remote.backend_url", "").is_err());
        assert!(validate_url("remote.backend_url", "invalid-url").is_err());
        assert!(validate_url("remote.backend_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("remote.timeout_seconds", 10, 1, 120).is_ok());
        assert!(validate_range("remote.timeout_seconds", 0, 1, 120).is_err());
    }

    #[test]
    fn test_validate_required_input() {
        assert!(validate_required_input("name", "Name", "Ada").is_ok());
        let err = validate_required_input("name", "Name", "   ").unwrap_err();
        assert!(matches!(err, PortfolioError::ValidationError { ref field, .. } if field == "name"));
        assert_eq!(err.user_friendly_message(), "Name is required");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "ada@example.com").is_ok());
        assert!(validate_email("email", " ada@example.com ").is_ok());
        assert!(validate_email("email", "ada@example").is_err());
        assert!(validate_email("email", "not an email").is_err());
    }
}
