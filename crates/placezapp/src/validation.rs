//! Caller-side input checks.
//!
//! The store trusts its input. UIs run these checks first and show the
//! returned messages next to the offending fields.

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::model::PlaceInput;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

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

    fn required(field: &'static str, label: &str) -> Self {
        Self::new(field, format!("Please provide {}", label))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

pub fn validate_place(input: &PlaceInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required = [
        ("name", "name", &input.name),
        ("description", "description", &input.description),
        ("location", "location", &input.location),
        ("image", "image", &input.image),
        ("bestTime", "best time", &input.best_time),
    ];
    for (field, label, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldError::required(field, label));
        }
    }

    if !input.rating.is_finite() || input.rating < MIN_RATING || input.rating > MAX_RATING {
        errors.push(FieldError::new("rating", "Rating must be between 1 and 5"));
    }

    let image = input.image.trim();
    if !image.is_empty() && !is_valid_url(image) {
        errors.push(FieldError::new("image", "Please enter a valid URL"));
    }

    errors
}

pub fn validate_login(username: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if username.trim().is_empty() {
        errors.push(FieldError::new("username", "Please enter username"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Please enter password"));
    }
    errors
}
