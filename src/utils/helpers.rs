use crate::errors::AppError;

/// Rejects blank values. The value itself is passed through untouched.
pub fn require_field<'a>(name: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("Missing required field '{}'", name)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require_field("username", "  ").is_err());
        assert_eq!(require_field("username", " ada").unwrap(), " ada");
    }
}
