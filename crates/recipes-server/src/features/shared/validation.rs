//! Shared validation utilities
//!
//! Commands collect every failing field before returning, so a client sees
//! all problems with a request at once.
//!
//! # Examples
//!
//! ```rust,ignore
//! use recipes_server::features::shared::validation::ValidationErrors;
//!
//! let mut errors = ValidationErrors::new();
//! errors.require_not_blank("name", &recipe.name, "Recipe Name can not be null or empty");
//! errors.into_result()?;
//! ```

use serde::Serialize;
use std::fmt;

/// A single rejected field and the message shown to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field errors gathered while validating one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Record `message` for `field` when `value` is empty or only whitespace
    pub fn require_not_blank(&mut self, field: &str, value: &str, message: &str) {
        if is_blank(value) {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_collects_all_failures_in_order() {
        let mut errors = ValidationErrors::new();
        errors.require_not_blank("name", "", "name missing");
        errors.require_not_blank("type", "veg", "type missing");
        errors.require_not_blank("instruction", " ", "instruction missing");

        assert_eq!(
            errors.errors(),
            &[
                FieldError::new("name", "name missing"),
                FieldError::new("instruction", "instruction missing"),
            ]
        );
        assert_eq!(errors.to_string(), "name missing; instruction missing");
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("name", "bad");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.into_errors().len(), 1);
    }
}
