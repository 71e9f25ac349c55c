//! Core error types for the Landon hotel API
//!
//! Three kinds of failure leave the engine: domain rule violations
//! (`Rejected`), unknown resources (`NotFound`) and programming-contract
//! violations (`InvalidOperator`, `InvalidLiteral`, `InvalidRange`).
//! Malformed user query input never becomes an error; it is dropped before
//! it gets this far.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Core error type for all Landon operations
#[derive(Error, Debug)]
pub enum LandonError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Rejected: {0}")]
    Rejected(#[from] BookingRejection),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid operator '{operator}' for field {field}")]
    InvalidOperator { field: String, operator: String },

    #[error("Invalid value '{value}' for field {field}")]
    InvalidLiteral { field: String, value: String },

    #[error("Invalid booking range: {start} to {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a booking request was turned down
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("The minimum booking duration is {minimum_hours} hours.")]
    TooShort { minimum_hours: i64 },

    #[error("Bookings must be a whole multiple of {minimum_hours} hours.")]
    Misaligned { minimum_hours: i64 },

    #[error("This time conflicts with an existing booking.")]
    Conflict,
}

/// Validation errors collection, keyed by field
#[derive(Error, Debug, Default, Clone)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }
}

/// Collapse `validator` output into our field -> messages form
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, field_errors) in source.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                if field == "__all__" {
                    errors.add_base(message);
                } else {
                    errors.add(field, message);
                }
            }
        }
        errors
    }
}

impl LandonError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        LandonError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// True for errors that indicate a bug in the caller rather than bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            LandonError::InvalidOperator { .. }
                | LandonError::InvalidLiteral { .. }
                | LandonError::InvalidRange { .. }
        )
    }

    pub fn status_code(&self) -> u16 {
        match self {
            LandonError::NotFound { .. } => 404,
            LandonError::Rejected(BookingRejection::Conflict) => 409,
            LandonError::Rejected(_) | LandonError::Validation(_) => 422,
            LandonError::InvalidOperator { .. }
            | LandonError::InvalidLiteral { .. }
            | LandonError::InvalidRange { .. } => 500,
            LandonError::Storage(_) | LandonError::Config(_) | LandonError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            LandonError::NotFound { .. } => "not_found",
            LandonError::Rejected(BookingRejection::TooShort { .. }) => "booking_too_short",
            LandonError::Rejected(BookingRejection::Misaligned { .. }) => "booking_misaligned",
            LandonError::Rejected(BookingRejection::Conflict) => "booking_conflict",
            LandonError::Validation(_) => "validation_failed",
            LandonError::InvalidOperator { .. } => "invalid_operator",
            LandonError::InvalidLiteral { .. } => "invalid_literal",
            LandonError::InvalidRange { .. } => "invalid_range",
            LandonError::Storage(_) => "storage_error",
            LandonError::Config(_) => "configuration_error",
            LandonError::Internal(_) => "internal_error",
        }
    }
}
