use crate::utils::error::{Result, ValidationError};

pub fn validate_non_empty_text(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyText {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_text() {
        assert!(validate_non_empty_text("name", "Jane Doe").is_ok());
        assert!(validate_non_empty_text("name", "").is_err());
        assert!(validate_non_empty_text("name", "   ").is_err());
    }

    #[test]
    fn test_error_reports_field_name() {
        let err = validate_non_empty_text("title", "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyText {
                field: "title".to_string()
            }
        );
    }
}
