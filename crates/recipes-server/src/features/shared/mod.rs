//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **validation**: Field-level validation collected into one error
//! - **test_helpers**: Test fixtures and utilities (test-only)

pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{FieldError, ValidationErrors};
