//! Configuration validation utilities

use anyhow::{Result, bail};

/// Validate that the endpoint is an absolute http(s) URL
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        bail!("GraphQL endpoint cannot be empty");
    }

    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        bail!(
            "Invalid GraphQL endpoint '{}': must start with http:// or https://",
            endpoint
        );
    }

    Ok(())
}

/// Validate that a token is usable in an `Authorization` header
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        bail!("GitHub token cannot be empty");
    }

    if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        bail!("GitHub token cannot contain whitespace or control characters");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("https://api.github.com/graphql").is_ok());
        assert!(validate_endpoint("http://localhost:8080/graphql").is_ok());
        assert!(validate_endpoint("").is_err());
        assert!(validate_endpoint("   ").is_err());
        assert!(validate_endpoint("api.github.com/graphql").is_err());
        assert!(validate_endpoint("ftp://api.github.com").is_err());
    }

    #[test]
    fn test_validate_token() {
        assert!(validate_token("ghp_abc123").is_ok());
        assert!(validate_token("").is_err());
        assert!(validate_token("  ").is_err());
        assert!(validate_token("abc def").is_err());
        assert!(validate_token("abc\n").is_err());
    }
}
