//! Pure input validation for the post endpoints.
//!
//! Each mutating operation gets its own input struct, produced by a
//! validation function that either returns the sanitized payload or the
//! full list of field-level errors.

use serde::Serialize;

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validated payload for creating a post.
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
}

/// Validated payload for updating a post.
#[derive(Debug, Clone)]
pub struct UpdatePostInput {
    pub title: String,
    pub body: String,
}

/// Validate raw create-form fields.
pub fn validate_create(
    title: Option<&str>,
    body: Option<&str>,
) -> Result<CreatePostInput, Vec<FieldError>> {
    let (title, body) = validate_fields(title, body)?;
    Ok(CreatePostInput { title, body })
}

/// Validate raw update-form fields. Same rules as create; kept as a
/// separate entry point so the two requests can diverge independently.
pub fn validate_update(
    title: Option<&str>,
    body: Option<&str>,
) -> Result<UpdatePostInput, Vec<FieldError>> {
    let (title, body) = validate_fields(title, body)?;
    Ok(UpdatePostInput { title, body })
}

fn validate_fields(
    title: Option<&str>,
    body: Option<&str>,
) -> Result<(String, String), Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = title.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        errors.push(FieldError::new("title", "title is required"));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("title must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }

    let body = body.map(str::trim).unwrap_or_default();
    if body.is_empty() {
        errors.push(FieldError::new("body", "body is required"));
    }

    if errors.is_empty() {
        Ok((title.to_string(), body.to_string()))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_fields() {
        let input = validate_create(Some("Hello"), Some("World")).unwrap();
        assert_eq!(input.title, "Hello");
        assert_eq!(input.body, "World");
    }

    #[test]
    fn trims_whitespace() {
        let input = validate_create(Some("  Hello "), Some(" World\n")).unwrap();
        assert_eq!(input.title, "Hello");
        assert_eq!(input.body, "World");
    }

    #[test]
    fn rejects_missing_fields() {
        let errors = validate_create(None, None).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "body"]);
    }

    #[test]
    fn rejects_blank_title() {
        let errors = validate_create(Some("   "), Some("World")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn rejects_overlong_title() {
        let long = "x".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate_create(Some(&long), Some("World")).unwrap_err();
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn update_follows_same_rules() {
        assert!(validate_update(Some("Hello"), Some("World")).is_ok());
        assert!(validate_update(Some("Hello"), None).is_err());
    }
}
